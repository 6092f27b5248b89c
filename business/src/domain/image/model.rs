use serde::{Deserialize, Serialize};

/// Durable, publicly fetchable locator of a stored image.
///
/// Only the upload pipeline produces these; records carry them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ImageUrl {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ImageUrl {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
