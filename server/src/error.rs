//! Error types for the blog post service.
//!
//! # Design
//! `ServiceError` is what the data service returns; it knows nothing about
//! HTTP. `ApiError` is the handler-facing type and owns the mapping to status
//! codes: validation failures become 400 and missing records become 404.
//! Anything not listed here is not caught by the handlers.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A request body that fails a required-field or length check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` is required")]
    Missing(&'static str),

    #[error("field `{0}` must not be blank")]
    Blank(&'static str),

    #[error("field `{field}` is {actual} characters long, maximum is {max}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Errors returned by [`BlogPostsDataService`](crate::BlogPostsDataService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("can't find a blog post with id '{0}'")]
    EntityNotFound(u64),
}

/// Errors a handler can turn into a response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body could not be read as JSON of the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The `{id}` segment is not a valid id.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) | ApiError::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Service(ServiceError::EntityNotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::warn!(error = %self, "rejecting request");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
