//! Customer resource service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopdesk_client::{ApiClient, ApiError};

use crate::shops::id_string;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Loyalty balance; display-only on the client.
    pub loyalty_points: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct CustomerWire {
    id: serde_json::Value,
    first_name: String,
    last_name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    loyalty_points: Option<i64>,
}

impl From<CustomerWire> for Customer {
    fn from(wire: CustomerWire) -> Self {
        Self {
            id: id_string(&wire.id),
            first_name: wire.first_name,
            last_name: wire.last_name,
            email: wire.email,
            phone: wire.phone,
            loyalty_points: wire.loyalty_points,
        }
    }
}

#[derive(Clone)]
pub struct CustomersService {
    client: Arc<ApiClient>,
}

impl CustomersService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /customers`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        let wire: Vec<CustomerWire> = self.client.get("/customers", &[]).await?;
        Ok(wire.into_iter().map(Customer::from).collect())
    }

    /// `GET /customers/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn get(&self, id: &str) -> Result<Customer, ApiError> {
        let path = format!("/customers/{}", urlencoding::encode(id));
        let wire: CustomerWire = self.client.get(&path, &[]).await?;
        Ok(wire.into())
    }
}
