use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::fetcher::FetchError;
use crate::resume::ResumeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The three pipeline failure kinds (resume, page, composition) carry a
/// message meant for the end user; the caller may simply retry the form.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Failed to extract resume text: {0}")]
    Resume(#[from] ResumeError),

    #[error("Failed to scrape job URL: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to extract job postings: {0}")]
    PostingExtraction(String),

    #[error("Failed to generate email: {0}")]
    Composition(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(e.body_text());
        }
        AppError::Validation(format!("Malformed form upload: {}", e.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            AppError::Resume(e) => {
                tracing::warn!("Resume extraction failed: {e}");
                (StatusCode::UNPROCESSABLE_ENTITY, "RESUME_EXTRACTION_ERROR")
            }
            AppError::Fetch(e) => {
                tracing::warn!("Job page fetch failed: {e}");
                (StatusCode::BAD_GATEWAY, "FETCH_ERROR")
            }
            AppError::PostingExtraction(msg) => {
                tracing::warn!("Posting extraction failed: {msg}");
                (StatusCode::UNPROCESSABLE_ENTITY, "POSTING_EXTRACTION_ERROR")
            }
            AppError::Composition(msg) => {
                tracing::error!("Email composition failed: {msg}");
                (StatusCode::BAD_GATEWAY, "COMPOSITION_ERROR")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let message = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_resume_error_maps_to_422_with_user_message() {
        let response =
            AppError::from(ResumeError::UnsupportedFormat("text/plain".into())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "RESUME_EXTRACTION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Please upload PDF or DOCX"));
    }

    #[tokio::test]
    async fn test_fetch_error_maps_to_502() {
        let response = AppError::from(FetchError::Status(404)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "FETCH_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Failed to scrape job URL: page returned HTTP 404"
        );
    }

    #[tokio::test]
    async fn test_composition_error_code() {
        let response = AppError::Composition("LLM returned empty content".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["code"], "COMPOSITION_ERROR");
    }

    #[tokio::test]
    async fn test_validation_message_is_passed_through() {
        let response = AppError::Validation("Please enter your full name".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "Please enter your full name"
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::Internal(anyhow::anyhow!("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "An internal server error occurred"
        );
    }
}
