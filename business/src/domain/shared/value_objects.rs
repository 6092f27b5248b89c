use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sentinel stored in place of an optional field the caller left empty.
pub const PLACEHOLDER: &str = "- - -";

/// Represents a user identifier assigned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque product identity, generated client-side at creation and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identity from the millisecond clock plus a random
    /// hex suffix, so two creations in the same millisecond cannot collide.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: u16 = rand::rng().random();
        Self(format!("{millis}{suffix:04x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An optional catalog field as the caller supplied it.
///
/// Emptiness is decided once, at construction; persistence always receives
/// the normalized string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalField {
    Present(String),
    Absent,
}

impl OptionalField {
    /// Builds the field from raw input, treating blank input as absent.
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        if value.trim().is_empty() {
            OptionalField::Absent
        } else {
            OptionalField::Present(value)
        }
    }

    /// Returns the value to persist: the supplied string, or the
    /// placeholder sentinel when absent.
    pub fn normalized(&self) -> String {
        match self {
            OptionalField::Present(value) => value.clone(),
            OptionalField::Absent => PLACEHOLDER.to_string(),
        }
    }
}

impl From<&str> for OptionalField {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for OptionalField {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Option<String>> for OptionalField {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => Self::new(s),
            None => OptionalField::Absent,
        }
    }
}
