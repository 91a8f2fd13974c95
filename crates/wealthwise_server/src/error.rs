use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use wealthwise_core::ProjectionError;

/// Custom error types for the WealthWise API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid parameter: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ProjectionError> for ApiError {
    fn from(err: ProjectionError) -> Self {
        match err {
            ProjectionError::InvalidArgument { field, reason } => ApiError::Validation {
                field: field.to_string(),
                message: reason.to_string(),
            },
            ProjectionError::InvalidDistribution { .. } => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),

            ApiError::Internal => {
                tracing::error!("internal error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;
