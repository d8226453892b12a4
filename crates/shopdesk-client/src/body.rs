//! Outgoing request body model.
//!
//! Every mutating request carries exactly one of these variants, so tenant
//! injection is a total function over the body rather than a branch on
//! "is this a form, an object, or nothing".

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Field name the backend uses as its tenant discriminator.
pub const SHOP_ID_FIELD: &str = "shop_id";

/// Body of an outgoing request.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body at all.
    #[default]
    Empty,
    /// A JSON object payload.
    Json(Map<String, Value>),
    /// A multipart form (file uploads, e.g. product images).
    Multipart(Vec<MultipartField>),
}

/// One field of a multipart form.
#[derive(Debug, Clone)]
pub struct MultipartField {
    pub name: String,
    pub value: MultipartValue,
}

#[derive(Debug, Clone)]
pub enum MultipartValue {
    Text(String),
    Bytes {
        file_name: String,
        mime: String,
        data: Vec<u8>,
    },
}

impl MultipartField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: MultipartValue::Text(value.into()),
        }
    }

    pub fn bytes(
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            value: MultipartValue::Bytes {
                file_name: file_name.into(),
                mime: mime.into(),
                data,
            },
        }
    }
}

impl RequestBody {
    /// Build a JSON body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBody`] if the value does not serialize to
    /// a JSON object — the backend only accepts object payloads.
    pub fn try_json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(Self::Json(map)),
            Ok(other) => Err(ApiError::InvalidBody {
                reason: format!("expected a JSON object, got {other}"),
            }),
            Err(error) => Err(ApiError::InvalidBody {
                reason: error.to_string(),
            }),
        }
    }

    /// Inject the tenant discriminator, variant by variant.
    ///
    /// A caller-supplied `shop_id` always wins: existing JSON keys and
    /// multipart fields are never overwritten. An empty body becomes a JSON
    /// body consisting solely of the discriminator.
    #[must_use]
    pub fn with_shop_id(self, shop_id: &str) -> Self {
        match self {
            Self::Empty => {
                let mut map = Map::new();
                map.insert(SHOP_ID_FIELD.to_string(), Value::String(shop_id.to_string()));
                Self::Json(map)
            }
            Self::Json(mut map) => {
                map.entry(SHOP_ID_FIELD.to_string())
                    .or_insert_with(|| Value::String(shop_id.to_string()));
                Self::Json(map)
            }
            Self::Multipart(mut fields) => {
                if !fields.iter().any(|field| field.name == SHOP_ID_FIELD) {
                    fields.push(MultipartField::text(SHOP_ID_FIELD, shop_id));
                }
                Self::Multipart(fields)
            }
        }
    }

    /// Convert multipart fields into a reqwest form.
    pub(crate) fn into_form(fields: Vec<MultipartField>) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for field in fields {
            form = match field.value {
                MultipartValue::Text(text) => form.text(field.name, text),
                MultipartValue::Bytes {
                    file_name,
                    mime,
                    data,
                } => {
                    let part = reqwest::multipart::Part::bytes(data).file_name(file_name);
                    let part = match part.mime_str(&mime) {
                        Ok(part) => part,
                        Err(error) => {
                            tracing::warn!(%error, mime, "invalid mime type on multipart field");
                            reqwest::multipart::Part::bytes(Vec::new())
                        }
                    };
                    form.part(field.name, part)
                }
            };
        }
        form
    }
}
