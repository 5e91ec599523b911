//! Lookups over the forest and slug-path resolution for sub-category creation
//!
//! The remote API creates a sub-category under the parent's full slug path
//! (`"electronics/laptops"`), not under its id. A parent picked from the
//! flattened selector only carries a display-name chain, so the path has to
//! be rebuilt from the forest.

use std::sync::Arc;

use crate::models::breadcrumbs::SLUG_SEPARATOR;
use crate::models::{Breadcrumbs, Category};

/// Depth-first search by id
pub fn find_by_id(roots: &[Arc<Category>], id: i64) -> Option<&Category> {
    roots.iter().find_map(|node| {
        if node.id == id {
            Some(node.as_ref())
        } else {
            find_by_id(&node.children, id)
        }
    })
}

/// First node in pre-order whose name is exactly `name`
pub fn find_first_by_name<'a>(roots: &'a [Arc<Category>], name: &str) -> Option<&'a Category> {
    roots.iter().find_map(|node| {
        if node.name == name {
            Some(node.as_ref())
        } else {
            find_first_by_name(&node.children, name)
        }
    })
}

/// Chain of nodes from the root down to the node with `id`, inclusive
pub fn path_to_id(roots: &[Arc<Category>], id: i64) -> Option<Vec<&Category>> {
    let mut path = Vec::new();
    collect_path(roots, id, &mut path).then_some(path)
}

fn collect_path<'a>(nodes: &'a [Arc<Category>], id: i64, path: &mut Vec<&'a Category>) -> bool {
    for node in nodes {
        path.push(node.as_ref());
        if node.id == id || collect_path(&node.children, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Full slash-joined slug path of `parent`.
///
/// - Slug breadcrumbs are already canonical and returned joined.
/// - A name chain of two or more is rebuilt from the forest. When `parent.id`
///   is in the forest and its ancestor names agree with the breadcrumbs, the
///   id chain is used; otherwise each name resolves to the first node
///   carrying it and names with no match are skipped.
/// - Anything else, a lone name included, falls back to the parent's own
///   slug, which may be empty.
///
/// Never fails. An empty result means the parent could not be placed and the
/// caller must not create anything.
pub fn build_full_slug_path(parent: &Category, roots: &[Arc<Category>]) -> String {
    match &parent.breadcrumbs {
        Some(Breadcrumbs::Slugs(segments)) if !segments.is_empty() => {
            return segments.join(SLUG_SEPARATOR);
        }
        Some(Breadcrumbs::Names(names)) if names.len() > 1 => {
            if let Some(path) = slugs_by_id_chain(parent.id, names, roots) {
                return path;
            }
            let slugs: Vec<&str> = names
                .iter()
                .filter_map(|name| find_first_by_name(roots, name))
                .map(|node| node.slug.as_str())
                .filter(|slug| !slug.is_empty())
                .collect();
            if !slugs.is_empty() {
                return slugs.join(SLUG_SEPARATOR);
            }
        }
        _ => {}
    }

    parent.slug.clone()
}

fn slugs_by_id_chain(id: i64, names: &[String], roots: &[Arc<Category>]) -> Option<String> {
    let chain = path_to_id(roots, id)?;
    let agrees = chain.len() == names.len()
        && chain.iter().zip(names).all(|(node, name)| &node.name == name);
    if !agrees || chain.iter().any(|node| node.slug.is_empty()) {
        return None;
    }
    let slugs: Vec<&str> = chain.iter().map(|node| node.slug.as_str()).collect();
    Some(slugs.join(SLUG_SEPARATOR))
}
