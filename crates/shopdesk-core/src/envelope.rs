//! Response envelope normalization.
//!
//! The backend is inconsistent about response framing: some resources answer
//! `{"success": true, "data": …}`, others `{"status": "ok", "data": …}`, and
//! a few return the payload bare. [`into_data`] collapses all three shapes
//! at one boundary so services never branch on framing.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The backend reported failure inside a well-formed envelope. The
    /// message is passed through verbatim — no client-side re-interpretation.
    #[error("{message}")]
    Backend { message: String },

    /// A success envelope arrived without a `data` field.
    #[error("response envelope has no data field")]
    MissingData,

    /// The payload did not match the expected shape.
    #[error("failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Extract the payload from any of the backend's envelope conventions.
///
/// # Errors
///
/// Returns [`EnvelopeError::Backend`] when the envelope flags failure,
/// [`EnvelopeError::MissingData`] when a success envelope carries no data,
/// and [`EnvelopeError::Decode`] when the payload does not match `T`.
pub fn into_data<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, EnvelopeError> {
    if let Some(map) = value.as_object() {
        // A `status` key only counts as framing when it carries a framing
        // word — resource payloads use `status` for domain state too
        // (e.g. an order's "pending").
        let flagged_ok = match map.get("success") {
            Some(flag) => Some(flag.as_bool() == Some(true)),
            None => map
                .get("status")
                .and_then(serde_json::Value::as_str)
                .and_then(|status| match status {
                    "ok" | "success" => Some(true),
                    "error" | "fail" | "failure" => Some(false),
                    _ => None,
                }),
        };

        match flagged_ok {
            Some(true) => {
                let data = map.get("data").cloned().ok_or(EnvelopeError::MissingData)?;
                return Ok(serde_json::from_value(data)?);
            }
            Some(false) => {
                return Err(EnvelopeError::Backend {
                    message: extract_message(map),
                });
            }
            // No framing marker — treat the whole object as a bare payload.
            None => {}
        }
    }

    Ok(serde_json::from_value(value)?)
}

/// Pull a human-readable failure message out of an error envelope.
fn extract_message(map: &serde_json::Map<String, serde_json::Value>) -> String {
    map.get("message")
        .or_else(|| map.get("error"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| "request failed".to_string(), str::to_string)
}
