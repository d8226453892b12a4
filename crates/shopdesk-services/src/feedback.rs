//! Customer feedback service.

use std::sync::Arc;

use serde::Serialize;
use shopdesk_client::{ApiClient, ApiError, RequestBody};

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    /// 1–5 star rating.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

#[derive(Clone)]
pub struct FeedbackService {
    client: Arc<ApiClient>,
}

impl FeedbackService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /feedback`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBody`] for an out-of-range rating, or any
    /// [`ApiError`] the pipeline surfaces.
    pub async fn submit(&self, feedback: &FeedbackRequest) -> Result<(), ApiError> {
        if !(1..=5).contains(&feedback.rating) {
            return Err(ApiError::InvalidBody {
                reason: format!("rating must be 1-5, got {}", feedback.rating),
            });
        }
        let _: serde_json::Value = self
            .client
            .post("/feedback", RequestBody::try_json(feedback)?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_optionals() {
        let feedback = FeedbackRequest {
            rating: 5,
            comment: None,
            customer_id: None,
        };
        let json = serde_json::to_value(&feedback).expect("serialize");
        assert_eq!(json, serde_json::json!({"rating": 5}));
    }
}
