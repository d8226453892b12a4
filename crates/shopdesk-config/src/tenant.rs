//! Tenant (shop) configuration.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TenantConfig {
    /// Shop id to stamp onto requests when no active shop has been selected.
    ///
    /// Absent by default: with no active shop and no configured fallback,
    /// requests go out unstamped. Set this only for development or demo
    /// environments that expect a fixed tenant.
    #[serde(default, deserialize_with = "shop_id_string")]
    pub default_shop_id: Option<String>,
}

/// Shop ids are numeric strings, and figment parses a bare numeric env var
/// or TOML value as an integer. Accept both shapes and normalize to string.
fn shop_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(id)) => Ok(Some(id)),
        Some(serde_json::Value::Number(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number shop id, got {other}"
        ))),
    }
}
