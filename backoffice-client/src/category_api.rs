//! Remote category API
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list tree | `GET api/categories` |
//! | create root | `POST api/categories` |
//! | create sub-category | `POST api/categories/children` (body carries `parent_path`) |
//! | update | `PUT api/categories/{id}` |
//! | delete | `DELETE api/categories/{id}` |

use async_trait::async_trait;
use shared::error::ApiResponse;
use shared::models::{Category, CategoryCreate, CategoryUpdate, SubcategoryCreate};

use crate::error::api_error;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientError, ClientResult};

const CATEGORIES: &str = "api/categories";

/// The remote collaborator the category store talks to
#[async_trait]
pub trait CategoryBackend: Send + Sync {
    /// Full forest snapshot
    async fn list_tree(&self) -> ClientResult<Vec<Category>>;

    async fn create_root(&self, payload: &CategoryCreate) -> ClientResult<Category>;

    /// Create under the parent addressed by its full slug path
    async fn create_child(
        &self,
        parent_slug_path: &str,
        payload: &CategoryCreate,
    ) -> ClientResult<Category>;

    async fn update(&self, id: i64, payload: &CategoryUpdate) -> ClientResult<Category>;

    /// Server removes the whole subtree
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// [`CategoryBackend`] over HTTP
#[derive(Debug, Clone)]
pub struct CategoryApi<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> CategoryApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}

/// Unwrap the success envelope, turning an error envelope into [`ClientError::Api`]
fn into_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
    if let Some(err) = response.to_error() {
        return Err(api_error(err));
    }
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
}

fn into_unit<T>(response: ApiResponse<T>) -> ClientResult<()> {
    match response.to_error() {
        Some(err) => Err(api_error(err)),
        None => Ok(()),
    }
}

#[async_trait]
impl<H: HttpClient> CategoryBackend for CategoryApi<H> {
    async fn list_tree(&self) -> ClientResult<Vec<Category>> {
        let response: ApiResponse<Vec<Category>> = self.http.get(CATEGORIES).await?;
        into_data(response, "category tree")
    }

    async fn create_root(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        let response: ApiResponse<Category> = self.http.post(CATEGORIES, payload).await?;
        into_data(response, "category")
    }

    async fn create_child(
        &self,
        parent_slug_path: &str,
        payload: &CategoryCreate,
    ) -> ClientResult<Category> {
        let body = SubcategoryCreate {
            parent_path: parent_slug_path.to_string(),
            category: payload.clone(),
        };
        let path = format!("{}/children", CATEGORIES);
        let response: ApiResponse<Category> = self.http.post(&path, &body).await?;
        into_data(response, "category")
    }

    async fn update(&self, id: i64, payload: &CategoryUpdate) -> ClientResult<Category> {
        let path = format!("{}/{}", CATEGORIES, id);
        let response: ApiResponse<Category> = self.http.put(&path, payload).await?;
        into_data(response, "category")
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let path = format!("{}/{}", CATEGORIES, id);
        let response: ApiResponse<serde_json::Value> = self.http.delete(&path).await?;
        into_unit(response)
    }
}
