//! Forest -> flat list, used by the parent selector and search dropdown

use std::sync::Arc;

use crate::models::{Breadcrumbs, Category};

/// Flatten a forest in depth-first pre-order.
///
/// Every node appears exactly once. Each entry is a shallow copy of the
/// node whose `breadcrumbs` is replaced by the chain of display names from
/// its root down to itself (`"A > B > C"`, or just `"A"` for a root). The
/// copy's `children` still point at the original child nodes.
pub fn flatten(roots: &[Arc<Category>]) -> Vec<Category> {
    let mut out = Vec::new();
    let mut names = Vec::new();
    for root in roots {
        visit(root, &mut names, &mut out);
    }
    out
}

fn visit(node: &Arc<Category>, names: &mut Vec<String>, out: &mut Vec<Category>) {
    names.push(node.name.clone());

    let mut entry = Category::clone(node);
    entry.breadcrumbs = Some(Breadcrumbs::Names(names.clone()));
    out.push(entry);

    for child in &node.children {
        visit(child, names, out);
    }

    names.pop();
}
