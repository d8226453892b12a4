//! Measurement unit resource service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopdesk_client::{ApiClient, ApiError};

use crate::shops::id_string;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnitWire {
    id: serde_json::Value,
    name: String,
    #[serde(default)]
    abbreviation: Option<String>,
}

#[derive(Clone)]
pub struct UnitsService {
    client: Arc<ApiClient>,
}

impl UnitsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /units`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failures.
    pub async fn list(&self) -> Result<Vec<Unit>, ApiError> {
        let wire: Vec<UnitWire> = self.client.get("/units", &[]).await?;
        Ok(wire
            .into_iter()
            .map(|u| Unit {
                id: id_string(&u.id),
                name: u.name,
                abbreviation: u.abbreviation,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wire_tolerates_missing_abbreviation() {
        let wire: UnitWire =
            serde_json::from_str(r#"{"id": 4, "name": "Kilogram"}"#).expect("wire parses");
        assert_eq!(id_string(&wire.id), "4");
        assert!(wire.abbreviation.is_none());
    }
}
