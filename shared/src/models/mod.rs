//! Data models
//!
//! Shared between the category core and the back-office client.
//! All IDs are `i64`, assigned by the remote catalog API.

pub mod breadcrumbs;
pub mod category;

// Re-exports
pub use breadcrumbs::Breadcrumbs;
pub use category::*;
