//! Todo entity and request payloads.
//!
//! # Design
//! `Priority` travels over the wire as its string name. The mapping lives in a
//! single table (`PRIORITY_NAMES`) used in both directions. Request payloads do
//! not deserialize straight into `Priority`: they carry a `PriorityInput` so an
//! undefined value reaches validation and comes back as `INVALID_PRIORITY`
//! instead of a body parse failure.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub type TodoId = i64;

/// A single todo item as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    Low,
    Mid,
    High,
}

/// Canonical names, indexed by ordinal.
const PRIORITY_NAMES: [(Priority, &str); 3] = [
    (Priority::Low, "Low"),
    (Priority::Mid, "Mid"),
    (Priority::High, "High"),
];

impl Priority {
    pub fn name(self) -> &'static str {
        PRIORITY_NAMES
            .iter()
            .find(|(p, _)| *p == self)
            .map(|(_, name)| *name)
            .unwrap_or("Low")
    }

    /// Look up a priority by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        PRIORITY_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(p, _)| *p)
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| PRIORITY_NAMES.get(i))
            .map(|(p, _)| *p)
    }

    /// Resolve a raw request value. `None` means the value is not a defined priority.
    pub fn resolve(input: &PriorityInput) -> Option<Self> {
        match input {
            PriorityInput::Name(name) => Self::from_name(name),
            PriorityInput::Ordinal(n) => Self::from_ordinal(*n),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority `{0}`")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPriority(s.to_string()))
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// A priority exactly as the client sent it: a name or an ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PriorityInput {
    Name(String),
    Ordinal(i64),
}

impl From<Priority> for PriorityInput {
    fn from(priority: Priority) -> Self {
        PriorityInput::Name(priority.name().to_string())
    }
}

/// Body of `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoCreateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
    /// Absent means `Low`.
    #[serde(default)]
    pub priority: Option<PriorityInput>,
}

/// Body of `PATCH /todos/{id}`. Absent and `null` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_complete: Option<bool>,
    #[serde(default)]
    pub priority: Option<PriorityInput>,
}
