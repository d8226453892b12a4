//! Shared HTTP response triage.
//!
//! Centralizes status-code checks (401 → [`ApiError::Unauthorized`],
//! other non-success → [`ApiError::Api`] with backend-message extraction)
//! so the client pipeline stays focused on request shaping.

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ApiError::Unauthorized`]. Credential clearing
///   and the unauthorized signal happen in the pipeline, not here.
/// - **Other non-success status** → [`ApiError::Api`] with the backend's
///   structured message when one exists.
pub(crate) async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        let message = error_message(&resp.text().await.unwrap_or_default());
        return Err(ApiError::Unauthorized { message });
    }
    if !status.is_success() {
        let message = error_message(&resp.text().await.unwrap_or_default());
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Pull the backend's `message`/`error` field out of an error body, falling
/// back to the raw body. Validation messages pass through verbatim.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(serde_json::Value::as_str)
        {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        "request failed".to_string()
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .expect("response builds"),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, r#"{"success": true, "data": []}"#);
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn unauthorized_maps_to_dedicated_variant() {
        let resp = mock_response(401, r#"{"message": "token expired"}"#);
        let err = check_response(resp).await.expect_err("should fail");
        assert!(matches!(
            err,
            ApiError::Unauthorized { message } if message == "token expired"
        ));
    }

    #[tokio::test]
    async fn validation_error_message_passes_through_verbatim() {
        let resp = mock_response(422, r#"{"message": "name is required"}"#);
        let err = check_response(resp).await.expect_err("should fail");
        assert!(matches!(
            err,
            ApiError::Api { status: 422, message } if message == "name is required"
        ));
    }

    #[tokio::test]
    async fn error_key_is_accepted_as_message() {
        let resp = mock_response(404, r#"{"error": "no such product"}"#);
        let err = check_response(resp).await.expect_err("should fail");
        assert!(matches!(
            err,
            ApiError::Api { status: 404, message } if message == "no such product"
        ));
    }

    #[tokio::test]
    async fn unstructured_error_body_is_kept_raw() {
        let resp = mock_response(500, "Internal Server Error");
        let err = check_response(resp).await.expect_err("should fail");
        assert!(matches!(
            err,
            ApiError::Api { status: 500, message } if message == "Internal Server Error"
        ));
    }

    #[tokio::test]
    async fn empty_error_body_gets_generic_message() {
        let resp = mock_response(502, "");
        let err = check_response(resp).await.expect_err("should fail");
        assert!(matches!(
            err,
            ApiError::Api { status: 502, message } if message == "request failed"
        ));
    }
}
