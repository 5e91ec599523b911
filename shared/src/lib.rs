//! Shared types for the back-office
//!
//! Category models, the category tree operations (flatten, search filter,
//! slug-path resolution, view state) and the unified error types used by the
//! client and by the remote catalog API.

pub mod error;
pub mod models;
pub mod tree;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Breadcrumbs, Category, CategoryCreate, CategoryUpdate};
