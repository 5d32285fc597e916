//! REST API errors.
//!
//! Every error renders as the JSON envelope
//! `{"success": false, "error": ..., "supportedServices"?: [...]}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Services advertised when a prevention lookup finds nothing.
pub const SUPPORTED_SERVICES: &[&str] = &["S3", "IAM", "EC2", "RDS", "VPC", "SES", "SageMaker", "Bedrock"];

/// Errors returned by the REST handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No playbooks found for service: {0}")]
    NoPlaybooksForService(String),

    #[error("No playbooks found for scenario: {0}")]
    NoPlaybooksForScenario(String),

    #[error("Playbook not found: {0}")]
    PlaybookNotFound(String),

    /// A required path segment was empty.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoPlaybooksForService(_) | Self::NoPlaybooksForScenario(_) | Self::PlaybookNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::NoPlaybooksForService(_) => json!({
                "success": false,
                "error": self.to_string(),
                "supportedServices": SUPPORTED_SERVICES,
            }),
            _ => json!({ "success": false, "error": self.to_string() }),
        };

        (self.status(), Json(body)).into_response()
    }
}
