//! Product category resource service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopdesk_client::{ApiClient, ApiError};

use crate::shops::id_string;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CategoryWire {
    id: serde_json::Value,
    name: String,
}

#[derive(Clone)]
pub struct CategoriesService {
    client: Arc<ApiClient>,
}

impl CategoriesService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let wire: Vec<CategoryWire> = self.client.get("/categories", &[]).await?;
        Ok(wire
            .into_iter()
            .map(|c| Category {
                id: id_string(&c.id),
                name: c.name,
            })
            .collect())
    }
}
