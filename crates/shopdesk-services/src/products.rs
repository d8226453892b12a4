//! Product resource service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopdesk_client::{ApiClient, ApiError, MultipartField, RequestBody};

use crate::shops::id_string;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category_id: Option<String>,
    pub unit_id: Option<String>,
}

/// Payload for creating a product. The pipeline adds the `shop_id`.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductWire {
    id: serde_json::Value,
    name: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    quantity: i64,
    #[serde(default)]
    category_id: Option<serde_json::Value>,
    #[serde(default)]
    unit_id: Option<serde_json::Value>,
}

impl From<ProductWire> for Product {
    fn from(wire: ProductWire) -> Self {
        Self {
            id: id_string(&wire.id),
            name: wire.name,
            price: wire.price,
            quantity: wire.quantity,
            category_id: wire.category_id.as_ref().map(id_string),
            unit_id: wire.unit_id.as_ref().map(id_string),
        }
    }
}

#[derive(Clone)]
pub struct ProductsService {
    client: Arc<ApiClient>,
}

impl ProductsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /products`, optionally filtered by a search term.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(term) = search {
            query.push(("search", term));
        }
        let wire: Vec<ProductWire> = self.client.get("/products", &query).await?;
        Ok(wire.into_iter().map(Product::from).collect())
    }

    /// `GET /products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn get(&self, id: &str) -> Result<Product, ApiError> {
        let path = format!("/products/{}", urlencoding::encode(id));
        let wire: ProductWire = self.client.get(&path, &[]).await?;
        Ok(wire.into())
    }

    /// `POST /products` with a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let wire: ProductWire = self
            .client
            .post("/products", RequestBody::try_json(product)?)
            .await?;
        Ok(wire.into())
    }

    /// `POST /products` as a multipart form carrying a product image.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn create_with_image(
        &self,
        product: &NewProduct,
        image_name: &str,
        image: Vec<u8>,
    ) -> Result<Product, ApiError> {
        let mut fields = vec![
            MultipartField::text("name", product.name.clone()),
            MultipartField::text("price", product.price.to_string()),
            MultipartField::text("quantity", product.quantity.to_string()),
            MultipartField::bytes("image", image_name, "image/jpeg", image),
        ];
        if let Some(category_id) = &product.category_id {
            fields.push(MultipartField::text("category_id", category_id.clone()));
        }
        if let Some(unit_id) = &product.unit_id {
            fields.push(MultipartField::text("unit_id", unit_id.clone()));
        }

        let wire: ProductWire = self
            .client
            .post("/products", RequestBody::Multipart(fields))
            .await?;
        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wire_maps_ids_of_either_scalar_kind() {
        let wire: ProductWire = serde_json::from_str(
            r#"{"id": 3, "name": "Mug", "price": 12.5, "quantity": 40, "category_id": "7"}"#,
        )
        .expect("wire parses");

        let product = Product::from(wire);
        assert_eq!(product.id, "3");
        assert_eq!(product.category_id.as_deref(), Some("7"));
        assert!(product.unit_id.is_none());
        assert!((product.price - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_product_omits_unset_optionals() {
        let product = NewProduct {
            name: "Mug".into(),
            price: 12.5,
            quantity: 40,
            category_id: None,
            unit_id: None,
        };
        let json = serde_json::to_value(&product).expect("serialize");
        assert!(json.get("category_id").is_none());
        assert!(json.get("unit_id").is_none());
    }
}
