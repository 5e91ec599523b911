//! Category Model

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::breadcrumbs::{self, Breadcrumbs};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::util::{category_code, slugify};

/// Category node of the catalog hierarchy
///
/// Nodes are immutable values. Children are shared by `Arc` so derived views
/// (flattened lists, filtered trees) can reuse untouched subtrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    /// Denormalized by the server, not checked here
    #[serde(default = "default_true")]
    pub ancestors_are_public: bool,
    #[serde(default, with = "breadcrumbs::wire")]
    pub breadcrumbs: Option<Breadcrumbs>,
    #[serde(default)]
    pub children: Vec<Arc<Category>>,
}

fn default_true() -> bool {
    true
}

impl Category {
    /// Minimal node, used by tests and by callers that only know a name
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            code: category_code(&name),
            slug: slugify(&name),
            name,
            description: None,
            meta_title: None,
            meta_description: None,
            image: None,
            is_public: true,
            ancestors_are_public: true,
            breadcrumbs: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Visible in the storefront: the node and every ancestor are public
    pub fn is_visible(&self) -> bool {
        self.is_public && self.ancestors_are_public
    }
}

/// Create category payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub code: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_public: bool,
}

impl CategoryCreate {
    /// Build a payload with `code` and `slug` derived from the name
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self {
            code: category_code(&name),
            slug: slugify(&name),
            name,
            description: None,
            meta_title: None,
            meta_description: None,
            image: None,
            is_public: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn meta(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.meta_title = Some(title.into());
        self.meta_description = Some(description.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Reject payloads the remote API would refuse anyway
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::CategoryNameInvalid,
                "Category name is required",
            )
            .with_detail("field", "name"));
        }
        if self.slug.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::CategoryNameInvalid,
                format!("Category name '{}' produces an empty slug", self.name),
            )
            .with_detail("field", "slug"));
        }
        Ok(())
    }
}

/// Create sub-category payload: the parent is addressed by its full slug path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryCreate {
    pub parent_path: String,
    #[serde(flatten)]
    pub category: CategoryCreate,
}

/// Update category payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl CategoryUpdate {
    pub fn validate(&self) -> AppResult<()> {
        match &self.name {
            Some(name) if slugify(name).is_empty() => Err(AppError::with_message(
                ErrorCode::CategoryNameInvalid,
                format!("Category name '{}' is invalid", name),
            )
            .with_detail("field", "name")),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_tree() {
        let json = r#"[{
            "id": 1,
            "name": "Electronics",
            "code": "ELECTRONICS",
            "slug": "electronics",
            "is_public": true,
            "ancestors_are_public": true,
            "breadcrumbs": "electronics",
            "children": [{
                "id": 2,
                "name": "Laptops",
                "slug": "laptops",
                "breadcrumbs": "electronics/laptops",
                "is_public": false
            }]
        }]"#;

        let roots: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(roots.len(), 1);
        let laptops = &roots[0].children[0];
        assert_eq!(laptops.name, "Laptops");
        assert!(!laptops.is_public);
        assert!(!laptops.is_visible());
        assert_eq!(
            laptops.breadcrumbs,
            Some(Breadcrumbs::Slugs(vec![
                "electronics".into(),
                "laptops".into()
            ]))
        );
        assert!(laptops.children.is_empty());
        assert_eq!(roots[0].descendant_count(), 1);
    }

    #[test]
    fn test_new_derives_code_and_slug() {
        let c = Category::new(9, "Home & Garden");
        assert_eq!(c.code, "HOME_GARDEN");
        assert_eq!(c.slug, "home-garden");
        assert!(!c.has_children());
    }

    #[test]
    fn test_descendant_count() {
        let tree = Category::new(1, "A").with_children(vec![
            Category::new(2, "B").with_children(vec![Category::new(3, "C")]),
            Category::new(4, "D"),
        ]);
        assert_eq!(tree.descendant_count(), 3);
    }

    #[test]
    fn test_create_payload() {
        let payload = CategoryCreate::from_name("  Gaming Laptops ")
            .description("Portable rigs")
            .public(false);
        assert_eq!(payload.name, "Gaming Laptops");
        assert_eq!(payload.slug, "gaming-laptops");
        assert_eq!(payload.code, "GAMING_LAPTOPS");
        assert!(payload.validate().is_ok());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["is_public"], false);
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_create_payload_validation() {
        let err = CategoryCreate::from_name("   ").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNameInvalid);

        let err = CategoryCreate::from_name("***").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNameInvalid);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "slug");
    }

    #[test]
    fn test_subcategory_payload_is_flat() {
        let payload = SubcategoryCreate {
            parent_path: "electronics/laptops".into(),
            category: CategoryCreate::from_name("Gaming"),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["parent_path"], "electronics/laptops");
        assert_eq!(json["slug"], "gaming");

        let back: SubcategoryCreate = serde_json::from_value(json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_update_payload() {
        let update = CategoryUpdate {
            is_public: Some(false),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"is_public":false}"#
        );

        let bad = CategoryUpdate {
            name: Some("%%".into()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
