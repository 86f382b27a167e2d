//! Error types for the todo API client.
//!
//! # Design
//! The server answers failures with structured JSON, so the two failures a
//! caller acts on (missing todo, rejected input) carry the decoded body.
//! Anything else lands in `Http` with the raw status and body.

use thiserror::Error;

use crate::types::{ErrorBody, ValidationErrorBody};

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: the requested todo does not exist.
    #[error("not found: {}", .0.message)]
    NotFound(ErrorBody),

    /// 400 with a validation body.
    #[error("{}: {} error(s)", .0.message, .0.errors.len())]
    Validation(ValidationErrorBody),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Error codes carried by the response, if any.
    pub fn codes(&self) -> Vec<u16> {
        match self {
            ApiError::NotFound(body) => vec![body.code],
            ApiError::Validation(body) => body.errors.iter().map(|e| e.code).collect(),
            _ => Vec::new(),
        }
    }
}
