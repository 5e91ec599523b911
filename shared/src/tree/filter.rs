//! Search filter that keeps the ancestor chain of every hit

use std::sync::Arc;

use crate::models::Category;

/// What a directly matching node shows when none of its children match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectMatchChildren {
    /// Keep the node's original, unfiltered children
    #[default]
    Keep,
    /// Show the node with no children
    Prune,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    pub direct_match_children: DirectMatchChildren,
}

/// Filter a forest with the default [`FilterOptions`].
pub fn filter_tree(roots: &[Arc<Category>], term: &str) -> Vec<Arc<Category>> {
    filter_tree_with(roots, term, FilterOptions::default())
}

/// Prune a forest to the nodes matching `term`.
///
/// Matching is a case-insensitive substring test on `name`, `breadcrumbs`
/// and `description`. A node survives if it or any descendant matches, so a
/// deep hit keeps its whole ancestor chain. An empty term returns the input;
/// whitespace is part of the term and is not trimmed.
///
/// Untouched subtrees are shared with the input; only nodes whose children
/// changed are rebuilt.
pub fn filter_tree_with(
    roots: &[Arc<Category>],
    term: &str,
    options: FilterOptions,
) -> Vec<Arc<Category>> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return roots.to_vec();
    }
    filter_level(roots, &needle, options)
}

fn filter_level(nodes: &[Arc<Category>], needle: &str, options: FilterOptions) -> Vec<Arc<Category>> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, needle, options))
        .collect()
}

fn filter_node(node: &Arc<Category>, needle: &str, options: FilterOptions) -> Option<Arc<Category>> {
    let children = filter_level(&node.children, needle, options);
    let direct = matches(node, needle);

    if children.is_empty() {
        if !direct {
            return None;
        }
        if options.direct_match_children == DirectMatchChildren::Keep || !node.has_children() {
            return Some(Arc::clone(node));
        }
    }

    if same_nodes(&children, &node.children) {
        return Some(Arc::clone(node));
    }

    Some(Arc::new(Category {
        children,
        ..Category::clone(node)
    }))
}

fn matches(node: &Category, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle)
        || node
            .breadcrumbs
            .as_ref()
            .is_some_and(|crumbs| crumbs.to_string().to_lowercase().contains(needle))
        || node
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

fn same_nodes(a: &[Arc<Category>], b: &[Arc<Category>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}
