//! Per-node expansion and selection state of a category tree view
//!
//! Plain value owned by whoever renders the tree. Nothing here is global, so
//! each view (and each test) builds its own.

use std::collections::HashSet;
use std::sync::Arc;

use super::slug_path::path_to_id;
use crate::models::Category;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeViewState {
    expanded: HashSet<i64>,
    selected: Option<i64>,
}

impl TreeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected == Some(id)
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn expand(&mut self, id: i64) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: i64) {
        self.expanded.remove(&id);
    }

    /// Flip a node; returns the new expanded state
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Expand every node that has children
    pub fn expand_all(&mut self, roots: &[Arc<Category>]) {
        for node in roots {
            if node.has_children() {
                self.expanded.insert(node.id);
                self.expand_all(&node.children);
            }
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Expand all ancestors of `id` so it becomes visible.
    ///
    /// Returns false if `id` is not in the forest.
    pub fn reveal(&mut self, roots: &[Arc<Category>], id: i64) -> bool {
        let Some(path) = path_to_id(roots, id) else {
            return false;
        };
        for ancestor in &path[..path.len() - 1] {
            self.expanded.insert(ancestor.id);
        }
        true
    }

    /// Forget ids that disappeared after a refetch
    pub fn retain_existing(&mut self, roots: &[Arc<Category>]) {
        let mut present = HashSet::new();
        collect_ids(roots, &mut present);
        self.expanded.retain(|id| present.contains(id));
        if self.selected.is_some_and(|id| !present.contains(&id)) {
            self.selected = None;
        }
    }
}

fn collect_ids(nodes: &[Arc<Category>], ids: &mut HashSet<i64>) {
    for node in nodes {
        ids.insert(node.id);
        collect_ids(&node.children, ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<Arc<Category>> {
        vec![
            Arc::new(Category::new(1, "A").with_children(vec![
                Category::new(2, "B").with_children(vec![Category::new(3, "C")]),
            ])),
            Arc::new(Category::new(4, "D")),
        ]
    }

    #[test]
    fn test_toggle_and_select() {
        let mut state = TreeViewState::new();
        assert!(state.toggle(1));
        assert!(state.is_expanded(1));
        assert!(!state.toggle(1));
        assert!(!state.is_expanded(1));

        state.select(2);
        assert!(state.is_selected(2));
        assert_eq!(state.selected(), Some(2));
        state.clear_selection();
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_expand_all_skips_leaves() {
        let mut state = TreeViewState::new();
        state.expand_all(&forest());
        assert!(state.is_expanded(1));
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(3));
        assert!(!state.is_expanded(4));

        state.collapse_all();
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn test_reveal_expands_ancestors_only() {
        let roots = forest();
        let mut state = TreeViewState::new();
        assert!(state.reveal(&roots, 3));
        assert!(state.is_expanded(1));
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(3));

        assert!(!state.reveal(&roots, 42));
    }

    #[test]
    fn test_retain_existing() {
        let roots = forest();
        let mut state = TreeViewState::new();
        state.expand(1);
        state.expand(99);
        state.select(99);

        state.retain_existing(&roots);
        assert!(state.is_expanded(1));
        assert!(!state.is_expanded(99));
        assert!(state.selected().is_none());

        state.select(3);
        state.retain_existing(&roots);
        assert_eq!(state.selected(), Some(3));
    }

    #[test]
    fn test_states_are_independent() {
        let mut a = TreeViewState::new();
        let b = TreeViewState::new();
        a.expand(1);
        assert_ne!(a, b);
        assert!(!b.is_expanded(1));
    }
}
