//! Back-office client - category management against the remote catalog API
//!
//! [`CategoryApi`] speaks the HTTP envelope protocol; [`CategoryStore`] keeps
//! the fetched tree and runs the create/update/delete flows on top of any
//! [`CategoryBackend`].

pub mod category_api;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use category_api::{CategoryApi, CategoryBackend};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use store::CategoryStore;

// Re-export shared types for convenience
pub use shared::error::{ApiResponse, AppError, ErrorCode};
pub use shared::models::{Category, CategoryCreate, CategoryUpdate};
