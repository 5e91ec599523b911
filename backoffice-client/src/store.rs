//! Category store
//!
//! Holds the last fetched category forest and runs the create/update/delete
//! flows against a [`CategoryBackend`]. The snapshot is read-only: every
//! successful mutation is followed by a full refetch instead of a local edit.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use shared::error::AppError;
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::tree::{self, DeleteCheck, FilterOptions};

use crate::ClientResult;
use crate::category_api::CategoryBackend;

#[derive(Debug, Default)]
struct Snapshot {
    /// Fetch that produced `roots`
    generation: u64,
    roots: Vec<Arc<Category>>,
}

/// Snapshot holder and mutation flows for the category tree
pub struct CategoryStore<B> {
    backend: Arc<B>,
    snapshot: Arc<RwLock<Snapshot>>,
    /// Last fetch started
    fetches: Arc<AtomicU64>,
}

impl<B> Clone for CategoryStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            snapshot: Arc::clone(&self.snapshot),
            fetches: Arc::clone(&self.fetches),
        }
    }
}

impl<B> std::fmt::Debug for CategoryStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot.read();
        f.debug_struct("CategoryStore")
            .field("generation", &snapshot.generation)
            .field("roots", &snapshot.roots.len())
            .finish()
    }
}

impl<B: CategoryBackend> CategoryStore<B> {
    /// Create an empty store; call [`refresh`](Self::refresh) to load it
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            snapshot: Arc::new(RwLock::new(Snapshot::default())),
            fetches: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Refetch the whole forest and replace the snapshot.
    ///
    /// A fetch that finishes after a newer one already landed is discarded.
    /// Returns the number of nodes in the stored snapshot.
    pub async fn refresh(&self) -> ClientResult<usize> {
        let generation = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        let roots: Vec<Arc<Category>> = self
            .backend
            .list_tree()
            .await?
            .into_iter()
            .map(Arc::new)
            .collect();

        let mut snapshot = self.snapshot.write();
        if generation < snapshot.generation {
            tracing::debug!(
                generation,
                current = snapshot.generation,
                "Discarding superseded category fetch"
            );
            return Ok(count_nodes(&snapshot.roots));
        }
        snapshot.generation = generation;
        snapshot.roots = roots;
        let count = count_nodes(&snapshot.roots);
        tracing::info!("📦 CategoryStore: Loaded {} categories", count);
        Ok(count)
    }

    /// Refetch after a mutation the server already applied.
    ///
    /// A failed refetch leaves the snapshot stale but does not fail the
    /// mutation; the caller still gets its result.
    async fn refresh_after(&self, operation: &str) {
        if let Err(err) = self.refresh().await {
            tracing::warn!(
                operation,
                error = %err,
                "Category refetch failed after mutation; snapshot is stale"
            );
        }
    }

    /// Top-level categories of the current snapshot
    pub fn roots(&self) -> Vec<Arc<Category>> {
        self.snapshot.read().roots.clone()
    }

    /// Every category in pre-order with display-name breadcrumbs
    pub fn flattened(&self) -> Vec<Category> {
        tree::flatten(&self.snapshot.read().roots)
    }

    pub fn search(&self, term: &str) -> Vec<Arc<Category>> {
        tree::filter_tree(&self.snapshot.read().roots, term)
    }

    pub fn search_with(&self, term: &str, options: FilterOptions) -> Vec<Arc<Category>> {
        tree::filter_tree_with(&self.snapshot.read().roots, term, options)
    }

    pub fn find(&self, id: i64) -> Option<Category> {
        tree::find_by_id(&self.snapshot.read().roots, id).cloned()
    }

    /// Slug path the API expects for a sub-category of `parent`
    pub fn slug_path_of(&self, parent: &Category) -> String {
        tree::build_full_slug_path(parent, &self.snapshot.read().roots)
    }

    /// What deleting `id` would remove; `None` if it is not in the snapshot
    pub fn delete_check(&self, id: i64) -> Option<DeleteCheck> {
        tree::find_by_id(&self.snapshot.read().roots, id).map(DeleteCheck::for_category)
    }

    // =========================================================================
    // Mutations (remote first, then refetch)
    //
    // A mutation the server accepted returns Ok even when the refetch fails.
    // =========================================================================

    /// Create a top-level category
    pub async fn create_root(&self, payload: CategoryCreate) -> ClientResult<Category> {
        payload.validate()?;
        let created = self.backend.create_root(&payload).await?;
        tracing::info!(id = created.id, slug = %created.slug, "Created root category");
        self.refresh_after("create_root").await;
        Ok(created)
    }

    /// Create a category under `parent`.
    ///
    /// The parent's full slug path is resolved against the snapshot first. An
    /// empty path aborts the flow before any request is made, so a selected
    /// parent never silently turns into a root-level creation.
    pub async fn create_subcategory(
        &self,
        parent: &Category,
        payload: CategoryCreate,
    ) -> ClientResult<Category> {
        payload.validate()?;

        let parent_path = self.slug_path_of(parent);
        if parent_path.is_empty() {
            tracing::warn!(
                parent_id = parent.id,
                parent = %parent.name,
                "Refusing to create sub-category: parent path unresolved"
            );
            return Err(AppError::parent_path_unresolved(&parent.name).into());
        }

        let created = self.backend.create_child(&parent_path, &payload).await?;
        tracing::info!(
            id = created.id,
            parent = %parent_path,
            slug = %created.slug,
            "Created sub-category"
        );
        self.refresh_after("create_subcategory").await;
        Ok(created)
    }

    pub async fn update(&self, id: i64, payload: CategoryUpdate) -> ClientResult<Category> {
        payload.validate()?;
        if self.find(id).is_none() {
            return Err(AppError::category_not_found(id).into());
        }
        let updated = self.backend.update(id, &payload).await?;
        tracing::info!(id, "Updated category");
        self.refresh_after("update").await;
        Ok(updated)
    }

    /// Delete a category.
    ///
    /// A category with sub-categories is only deleted when `acknowledged` is
    /// set, since the server removes the whole subtree.
    pub async fn delete(&self, id: i64, acknowledged: bool) -> ClientResult<()> {
        let check = self
            .delete_check(id)
            .ok_or_else(|| AppError::category_not_found(id))?;
        if let Err(err) = check.ensure(acknowledged) {
            tracing::warn!(
                id,
                descendants = check.descendants,
                "Delete needs cascade acknowledgement"
            );
            return Err(err.into());
        }

        self.backend.delete(id).await?;
        tracing::info!(id, removed = check.descendants + 1, "Deleted category");
        self.refresh_after("delete").await;
        Ok(())
    }
}

fn count_nodes(nodes: &[Arc<Category>]) -> usize {
    nodes.iter().map(|n| 1 + n.descendant_count()).sum()
}
