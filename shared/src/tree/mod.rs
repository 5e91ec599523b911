//! Category tree operations
//!
//! Pure, synchronous functions over a forest of [`Category`](crate::models::Category)
//! nodes. Inputs are never mutated; derived views share untouched subtrees
//! with the snapshot they were built from.

mod delete_check;
mod filter;
mod flatten;
mod slug_path;
mod view_state;

pub use delete_check::DeleteCheck;
pub use filter::{DirectMatchChildren, FilterOptions, filter_tree, filter_tree_with};
pub use flatten::flatten;
pub use slug_path::{build_full_slug_path, find_by_id, find_first_by_name, path_to_id};
pub use view_state::TreeViewState;
