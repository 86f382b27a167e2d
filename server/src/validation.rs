//! Field validation for todo payloads.
//!
//! Every rule runs; failures are collected rather than short-circuited so a
//! client sees all problems with a request at once. Title lengths are counted
//! in characters after trimming.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{Priority, PriorityInput, TodoCreateRequest, TodoUpdateRequest};

pub const TITLE_MIN_CHARS: usize = 6;
pub const TITLE_MAX_CHARS: usize = 200;

/// Numeric error codes. Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    TitleRequired,
    TitleTooShort,
    TitleTooLong,
    InvalidPriority,
    TitleEmpty,
    TodoNotFound,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        match self {
            ErrorCode::TitleRequired => 1001,
            ErrorCode::TitleTooShort => 1002,
            ErrorCode::TitleTooLong => 1003,
            ErrorCode::InvalidPriority => 1004,
            ErrorCode::TitleEmpty => 1005,
            ErrorCode::TodoNotFound => 2001,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1001 => Some(ErrorCode::TitleRequired),
            1002 => Some(ErrorCode::TitleTooShort),
            1003 => Some(ErrorCode::TitleTooLong),
            1004 => Some(ErrorCode::InvalidPriority),
            1005 => Some(ErrorCode::TitleEmpty),
            2001 => Some(ErrorCode::TodoNotFound),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        ErrorCode::from_u16(code).ok_or_else(|| de::Error::custom(format!("unknown error code {code}")))
    }
}

/// One field-level (or lookup) error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: ErrorCode,
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: ErrorCode, field: &str) -> Self {
        Self {
            message: message.into(),
            code,
            field: Some(field.to_string()),
        }
    }

    fn title_required() -> Self {
        Self::new("Title is required", ErrorCode::TitleRequired, "title")
    }

    fn title_empty() -> Self {
        Self::new("Title cannot be empty", ErrorCode::TitleEmpty, "title")
    }

    fn title_too_short() -> Self {
        Self::new(
            format!("Title must be at least {TITLE_MIN_CHARS} characters long"),
            ErrorCode::TitleTooShort,
            "title",
        )
    }

    fn title_too_long() -> Self {
        Self::new(
            format!("Title cannot exceed {TITLE_MAX_CHARS} characters"),
            ErrorCode::TitleTooLong,
            "title",
        )
    }

    fn invalid_priority() -> Self {
        Self::new("Invalid priority value", ErrorCode::InvalidPriority, "priority")
    }
}

/// Aggregate body returned with 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: Vec<ErrorResponse>,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<ErrorResponse>) -> Self {
        Self {
            message: "Validation failed".to_string(),
            errors,
        }
    }
}

/// A fully validated create/replace payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTodo {
    pub title: String,
    pub is_complete: bool,
    pub priority: Priority,
}

/// A validated patch. `None` fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidPatch {
    pub title: Option<String>,
    pub is_complete: Option<bool>,
    pub priority: Option<Priority>,
}

fn check_title_length(trimmed: &str, errors: &mut Vec<ErrorResponse>) {
    let chars = trimmed.chars().count();
    if chars < TITLE_MIN_CHARS {
        errors.push(ErrorResponse::title_too_short());
    }
    if chars > TITLE_MAX_CHARS {
        errors.push(ErrorResponse::title_too_long());
    }
}

fn check_priority(input: &PriorityInput, errors: &mut Vec<ErrorResponse>) -> Option<Priority> {
    let priority = Priority::resolve(input);
    if priority.is_none() {
        errors.push(ErrorResponse::invalid_priority());
    }
    priority
}

/// Validate a full payload (POST and PUT).
pub fn validate_create(request: &TodoCreateRequest) -> Result<ValidTodo, Vec<ErrorResponse>> {
    let mut errors = Vec::new();

    let title = request.title.as_deref();
    if title.is_none_or(|t| t.trim().is_empty()) {
        errors.push(ErrorResponse::title_required());
    }
    let trimmed = title.map(str::trim);
    if let Some(t) = trimmed {
        check_title_length(t, &mut errors);
    }

    let priority = match &request.priority {
        Some(input) => check_priority(input, &mut errors),
        None => Some(Priority::default()),
    };

    match (trimmed, priority) {
        (Some(title), Some(priority)) if errors.is_empty() => Ok(ValidTodo {
            title: title.to_string(),
            is_complete: request.is_complete,
            priority,
        }),
        _ => Err(errors),
    }
}

/// Validate a partial payload (PATCH). Only present fields are checked.
pub fn validate_patch(request: &TodoUpdateRequest) -> Result<ValidPatch, Vec<ErrorResponse>> {
    let mut errors = Vec::new();

    let title = request.title.as_deref().map(str::trim);
    if let Some(t) = title {
        if t.is_empty() {
            errors.push(ErrorResponse::title_empty());
        }
        check_title_length(t, &mut errors);
    }

    let priority = request
        .priority
        .as_ref()
        .and_then(|input| check_priority(input, &mut errors));

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidPatch {
        title: title.map(str::to_string),
        is_complete: request.is_complete,
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: Option<&str>, priority: Option<PriorityInput>) -> TodoCreateRequest {
        TodoCreateRequest {
            title: title.map(str::to_string),
            is_complete: false,
            priority,
        }
    }

    fn codes(errors: &[ErrorResponse]) -> Vec<u16> {
        errors.iter().map(|e| e.code.as_u16()).collect()
    }

    #[test]
    fn error_code_serializes_as_integer() {
        let err = ErrorResponse::title_required();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 1001);
        assert_eq!(json["field"], "title");
        assert_eq!(json["message"], "Title is required");
    }

    #[test]
    fn error_code_table_is_consistent() {
        for code in [1001, 1002, 1003, 1004, 1005, 2001] {
            assert_eq!(ErrorCode::from_u16(code).map(ErrorCode::as_u16), Some(code));
        }
        assert_eq!(ErrorCode::from_u16(1006), None);
    }

    #[test]
    fn valid_create_is_trimmed_and_defaults_to_low() {
        let valid = validate_create(&create(Some("  Buy milk  "), None)).unwrap();
        assert_eq!(valid.title, "Buy milk");
        assert_eq!(valid.priority, Priority::Low);
    }

    #[test]
    fn missing_title_is_required_only() {
        let errors = validate_create(&create(None, None)).unwrap_err();
        assert_eq!(codes(&errors), vec![1001]);
    }

    #[test]
    fn empty_title_is_required_and_too_short() {
        let errors = validate_create(&create(Some(""), None)).unwrap_err();
        assert_eq!(codes(&errors), vec![1001, 1002]);

        let errors = validate_create(&create(Some("    "), None)).unwrap_err();
        assert_eq!(codes(&errors), vec![1001, 1002]);
    }

    #[test]
    fn short_title_after_trim() {
        let errors = validate_create(&create(Some("  abcde   "), None)).unwrap_err();
        assert_eq!(codes(&errors), vec![1002]);
    }

    #[test]
    fn title_length_bounds() {
        assert!(validate_create(&create(Some("abcdef"), None)).is_ok());
        assert!(validate_create(&create(Some(&"x".repeat(200)), None)).is_ok());

        let errors = validate_create(&create(Some("abcde"), None)).unwrap_err();
        assert_eq!(codes(&errors), vec![1002]);
        let errors = validate_create(&create(Some(&"x".repeat(201)), None)).unwrap_err();
        assert_eq!(codes(&errors), vec![1003]);
    }

    #[test]
    fn title_length_counts_characters() {
        assert!(validate_create(&create(Some(&"é".repeat(200)), None)).is_ok());
    }

    #[test]
    fn all_failures_are_collected() {
        let errors =
            validate_create(&create(Some(""), Some(PriorityInput::Name("Urgent".into())))).unwrap_err();
        assert_eq!(codes(&errors), vec![1001, 1002, 1004]);
        assert_eq!(errors[2].field.as_deref(), Some("priority"));
    }

    #[test]
    fn priority_accepts_ordinals() {
        let valid = validate_create(&create(Some("Buy milk"), Some(PriorityInput::Ordinal(2)))).unwrap();
        assert_eq!(valid.priority, Priority::High);

        let errors =
            validate_create(&create(Some("Buy milk"), Some(PriorityInput::Ordinal(5)))).unwrap_err();
        assert_eq!(codes(&errors), vec![1004]);
    }

    #[test]
    fn empty_patch_is_valid() {
        let patch = validate_patch(&TodoUpdateRequest::default()).unwrap();
        assert_eq!(patch, ValidPatch::default());
    }

    #[test]
    fn patch_blank_title_is_empty_and_too_short() {
        let request = TodoUpdateRequest {
            title: Some("  ".to_string()),
            ..Default::default()
        };
        let errors = validate_patch(&request).unwrap_err();
        assert_eq!(codes(&errors), vec![1005, 1002]);
    }

    #[test]
    fn patch_checks_only_present_fields() {
        let request = TodoUpdateRequest {
            title: None,
            is_complete: Some(true),
            priority: Some(PriorityInput::Name("Galaxy".to_string())),
        };
        let errors = validate_patch(&request).unwrap_err();
        assert_eq!(codes(&errors), vec![1004]);
    }

    #[test]
    fn patch_trims_title() {
        let request = TodoUpdateRequest {
            title: Some("  Walk the dog ".to_string()),
            ..Default::default()
        };
        let patch = validate_patch(&request).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Walk the dog"));
    }
}
