//! HTTP error response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use labhub_domain::error::{LabHubError, ValidationError};

/// Maps [`LabHubError`] to a plain-text HTTP response with the matching status.
#[derive(Debug)]
pub struct ApiError(LabHubError);

impl From<LabHubError> for ApiError {
    fn from(err: LabHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::InvalidPayload(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LabHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LabHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            LabHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
