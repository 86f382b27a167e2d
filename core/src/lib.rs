//! Synchronous API client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each route is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Structured 400/404 bodies are decoded into `ApiError` variants.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{Created, TodoClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{codes, CreateTodo, ErrorBody, Priority, Todo, UpdateTodo, ValidationErrorBody};
