use serde::{Deserialize, Serialize};

/// Normalized account holder for the active session.
///
/// Produced by `shopdesk-services` at the wire boundary, persisted by the
/// credential store, consumed by the CLI. Contains only data fields — no
/// auth logic, no HTTP calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Backend role string (e.g. `"owner"`, `"cashier"`).
    pub role: String,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

/// Backend wire shape for a user record.
///
/// The backend always speaks snake_case; this is the single place where that
/// shape is named. Everything above the service boundary sees [`User`].
#[derive(Debug, Clone, Deserialize)]
pub struct UserWire {
    pub id: serde_json::Value,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<UserWire> for User {
    fn from(wire: UserWire) -> Self {
        Self {
            id: scalar_to_string(&wire.id),
            email: wire.email,
            first_name: wire.first_name,
            last_name: wire.last_name,
            role: wire.role,
            phone: wire.phone,
            is_active: wire.is_active,
        }
    }
}

/// Minimal denormalized tenant descriptor.
///
/// Deliberately independent of the full shop resource and of the tenant
/// context's active-shop-id scalar: a user may belong to several shops
/// without switching request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopInfo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Opaque bearer tokens issued by the backend. No shape validation anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Some backend resources serialize ids as numbers, others as strings.
/// Normalize both to `String` at the boundary.
fn scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(_) | serde_json::Value::Number(_) => Ok(scalar_to_string(&value)),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn user_wire_maps_all_fields() {
        let wire: UserWire = serde_json::from_str(
            r#"{
                "id": "1",
                "email": "a@b.com",
                "first_name": "A",
                "last_name": "B",
                "role": "owner",
                "phone": "555-0100",
                "is_active": true
            }"#,
        )
        .expect("wire should parse");

        let user = User::from(wire);
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.first_name, "A");
        assert_eq!(user.last_name, "B");
        assert_eq!(user.role, "owner");
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
        assert_eq!(user.is_active, Some(true));
    }

    #[test]
    fn user_wire_tolerates_missing_optionals_and_numeric_id() {
        let wire: UserWire = serde_json::from_str(
            r#"{"id": 7, "email": "c@d.com", "first_name": "C", "last_name": "D", "role": "cashier"}"#,
        )
        .expect("wire should parse");

        let user = User::from(wire);
        assert_eq!(user.id, "7");
        assert!(user.phone.is_none());
        assert!(user.is_active.is_none());
    }

    #[test]
    fn shop_info_accepts_numeric_and_string_ids() {
        let numeric: ShopInfo = serde_json::from_str(r#"{"id": 9, "name": "Shop9"}"#).expect("parse");
        assert_eq!(numeric.id, "9");

        let string: ShopInfo =
            serde_json::from_str(r#"{"id": "9", "name": "Shop9"}"#).expect("parse");
        assert_eq!(string, numeric);
    }

    #[test]
    fn user_persisted_shape_roundtrips() {
        let user = User {
            id: "1".into(),
            email: "a@b.com".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            role: "owner".into(),
            phone: None,
            is_active: Some(true),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        let back: User = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, user);
    }
}
