//! Wire types for the todo API.
//!
//! # Design
//! These mirror the server's schema but are defined independently, so the
//! client does not depend on axum or the store. Error codes stay raw `u16`
//! values; the `codes` module names the ones the server currently sends. The
//! end-to-end test catches any drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_complete: bool,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Mid,
    High,
}

/// Payload for creating a todo, or replacing one wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub priority: Priority,
}

/// Payload for a partial update. Only the fields present in the JSON are
/// applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub message: String,
    pub errors: Vec<ErrorBody>,
}

pub mod codes {
    pub const TITLE_REQUIRED: u16 = 1001;
    pub const TITLE_TOO_SHORT: u16 = 1002;
    pub const TITLE_TOO_LONG: u16 = 1003;
    pub const INVALID_PRIORITY: u16 = 1004;
    pub const TITLE_EMPTY: u16 = 1005;
    pub const TODO_NOT_FOUND: u16 = 2001;
}
