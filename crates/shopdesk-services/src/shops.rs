//! Shop resource service.
//!
//! Listing here is the one endpoint that spans all of a user's shops — the
//! shop-switch flow reads it to offer choices. The pipeline still stamps a
//! `shop_id`; the backend ignores it for this resource.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopdesk_client::{ApiClient, ApiError};

/// Full shop resource (distinct from the denormalized
/// [`shopdesk_core::ShopInfo`] kept in the credential store).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ShopWire {
    id: serde_json::Value,
    name: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    is_active: Option<bool>,
}

impl From<ShopWire> for Shop {
    fn from(wire: ShopWire) -> Self {
        Self {
            id: id_string(&wire.id),
            name: wire.name,
            address: wire.address,
            phone: wire.phone,
            is_active: wire.is_active,
        }
    }
}

pub(crate) fn id_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct ShopsService {
    client: Arc<ApiClient>,
}

impl ShopsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /shops` — every shop the authenticated user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn list(&self) -> Result<Vec<Shop>, ApiError> {
        let wire: Vec<ShopWire> = self.client.get("/shops", &[]).await?;
        Ok(wire.into_iter().map(Shop::from).collect())
    }

    /// `GET /shops/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn get(&self, id: &str) -> Result<Shop, ApiError> {
        let path = format!("/shops/{}", urlencoding::encode(id));
        let wire: ShopWire = self.client.get(&path, &[]).await?;
        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wire_maps_numeric_ids_and_optionals() {
        let wire: Vec<ShopWire> = serde_json::from_str(
            r#"[
                {"id": 9, "name": "Shop9", "address": "1 Main St"},
                {"id": "10", "name": "Shop10", "is_active": false}
            ]"#,
        )
        .expect("wire parses");

        let shops: Vec<Shop> = wire.into_iter().map(Shop::from).collect();
        assert_eq!(shops[0].id, "9");
        assert_eq!(shops[0].address.as_deref(), Some("1 Main St"));
        assert!(shops[0].is_active.is_none());
        assert_eq!(shops[1].id, "10");
        assert_eq!(shops[1].is_active, Some(false));
    }
}
