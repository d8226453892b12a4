//! Order resource service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopdesk_client::{ApiClient, ApiError};

use crate::shops::id_string;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Domain status string (`"pending"`, `"completed"`, …) — passed
    /// through, not an enum, because the backend adds statuses freely.
    pub status: String,
    pub total: f64,
    pub customer_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct OrderWire {
    id: serde_json::Value,
    status: String,
    #[serde(default)]
    total: f64,
    #[serde(default)]
    customer_id: Option<serde_json::Value>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<OrderWire> for Order {
    fn from(wire: OrderWire) -> Self {
        Self {
            id: id_string(&wire.id),
            status: wire.status,
            total: wire.total,
            customer_id: wire.customer_id.as_ref().map(id_string),
            created_at: wire.created_at,
        }
    }
}

#[derive(Clone)]
pub struct OrdersService {
    client: Arc<ApiClient>,
}

impl OrdersService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /orders`, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Order>, ApiError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(status) = status {
            query.push(("status", status));
        }
        let wire: Vec<OrderWire> = self.client.get("/orders", &query).await?;
        Ok(wire.into_iter().map(Order::from).collect())
    }

    /// `GET /orders/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn get(&self, id: &str) -> Result<Order, ApiError> {
        let path = format!("/orders/{}", urlencoding::encode(id));
        let wire: OrderWire = self.client.get(&path, &[]).await?;
        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wire_maps_timestamps_and_ids() {
        let wire: OrderWire = serde_json::from_str(
            r#"{
                "id": 55,
                "status": "pending",
                "total": 99.9,
                "customer_id": 12,
                "created_at": "2026-08-01T10:30:00Z"
            }"#,
        )
        .expect("wire parses");

        let order = Order::from(wire);
        assert_eq!(order.id, "55");
        assert_eq!(order.status, "pending");
        assert_eq!(order.customer_id.as_deref(), Some("12"));
        assert_eq!(
            order.created_at.expect("timestamp").to_rfc3339(),
            "2026-08-01T10:30:00+00:00"
        );
    }

    #[test]
    fn wire_tolerates_missing_timestamp() {
        let wire: OrderWire =
            serde_json::from_str(r#"{"id": "o-1", "status": "draft"}"#).expect("wire parses");
        let order = Order::from(wire);
        assert!(order.created_at.is_none());
        assert!(order.customer_id.is_none());
    }
}
