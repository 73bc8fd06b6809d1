//! Mapping of item errors onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ItemError, ValidationError};
use crate::metrics;

/// Error body returned for 4xx responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

impl ItemError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ItemError::Validation(_) => StatusCode::BAD_REQUEST,
            ItemError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for ItemError {
    fn from(rejection: JsonRejection) -> Self {
        metrics::inc_validation_failures();
        ItemError::Validation(ValidationError::MalformedBody(rejection.body_text()))
    }
}

impl From<PathRejection> for ItemError {
    fn from(rejection: PathRejection) -> Self {
        ItemError::Validation(ValidationError::MalformedPath(rejection.body_text()))
    }
}

impl From<QueryRejection> for ItemError {
    fn from(rejection: QueryRejection) -> Self {
        ItemError::Validation(ValidationError::MalformedQuery(rejection.body_text()))
    }
}
