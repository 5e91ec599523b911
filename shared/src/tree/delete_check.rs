//! Cascading delete warning

use crate::error::{AppError, AppResult};
use crate::models::Category;

/// What deleting a category would take with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCheck {
    pub id: i64,
    pub name: String,
    /// Nodes below the category (removed with it on the server)
    pub descendants: usize,
}

impl DeleteCheck {
    pub fn for_category(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            descendants: category.descendant_count(),
        }
    }

    pub fn requires_acknowledgement(&self) -> bool {
        self.descendants > 0
    }

    /// Err unless the node is a leaf or the operator acknowledged the cascade
    pub fn ensure(&self, acknowledged: bool) -> AppResult<()> {
        if self.requires_acknowledgement() && !acknowledged {
            return Err(AppError::category_has_children(self.id, self.descendants));
        }
        Ok(())
    }
}
