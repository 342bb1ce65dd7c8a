use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// The single error code surfaced to clients. Every failure of the
/// recommendation endpoint maps to it, matching the hosted contract the
/// browser client was written against.
pub const AI_RECOMMENDATION_FAILED: &str = "AI_RECOMMENDATION_FAILED";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed to decode. Carries the extractor's rejection text
    /// so the envelope still explains what was wrong with the payload.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("User profile data is required")]
    MissingUserProfile,

    #[error("Anthropic API key not configured")]
    MissingApiKey,

    /// Upstream call failed. For non-2xx responses the wrapped string is the
    /// upstream error body, carried verbatim.
    #[error("Anthropic API error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Api { message, .. } => AppError::Upstream(message),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("AI recommendations error: {self}");

        let body = Json(json!({
            "error": {
                "code": AI_RECOMMENDATION_FAILED,
                "message": self.to_string()
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn envelope_of(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_profile_envelope() {
        let (status, body) = envelope_of(AppError::MissingUserProfile).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "AI_RECOMMENDATION_FAILED");
        assert_eq!(body["error"]["message"], "User profile data is required");
    }

    #[tokio::test]
    async fn test_invalid_body_envelope() {
        let (status, body) =
            envelope_of(AppError::InvalidBody("expected a string".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "AI_RECOMMENDATION_FAILED");
        assert_eq!(
            body["error"]["message"],
            "Invalid request body: expected a string"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_envelope() {
        let (status, body) = envelope_of(AppError::MissingApiKey).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Anthropic API key not configured");
    }

    #[tokio::test]
    async fn test_upstream_error_body_kept_verbatim() {
        let err: AppError = LlmError::Api {
            status: 400,
            message: r#"{"type":"error","error":{"message":"invalid x-api-key"}}"#.to_string(),
        }
        .into();
        let (_, body) = envelope_of(err).await;
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Anthropic API error: "));
        assert!(message.contains("invalid x-api-key"));
    }
}
