//! Error types for the store and the HTTP boundary.
//!
//! # Design
//! `StoreError` is what the store hands back: a missing id or a batch of
//! validation failures. `ApiError` adds the one failure the store never sees,
//! an unparseable request body, and owns the mapping to status codes and JSON
//! bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::TodoId;
use crate::validation::{ErrorCode, ErrorResponse, ValidationErrorResponse};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Todo with ID {0} not found")]
    NotFound(TodoId),

    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Vec<ErrorResponse>),
}

impl StoreError {
    /// Body sent with a 404.
    pub fn not_found_body(id: TodoId) -> ErrorResponse {
        ErrorResponse::new(StoreError::NotFound(id).to_string(), ErrorCode::TodoNotFound, "id")
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(StoreError::NotFound(id)) => {
                tracing::debug!(id, "todo not found");
                (StatusCode::NOT_FOUND, Json(StoreError::not_found_body(id))).into_response()
            }
            ApiError::Store(StoreError::Validation(errors)) => {
                let codes: Vec<u16> = errors.iter().map(|e| e.code.as_u16()).collect();
                tracing::debug!(?codes, "request failed validation");
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse::new(errors))).into_response()
            }
            ApiError::MalformedBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                let body = ValidationErrorResponse {
                    message: "Malformed request body".to_string(),
                    errors: Vec::new(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
