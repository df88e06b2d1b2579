//! Category key value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A project type or service sub-type declared by the buyer.
///
/// Keys are trimmed and lowercased so `" Portfolio "` and `"portfolio"`
/// resolve to the same preset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Creates a CategoryKey, returning error if blank.
    pub fn try_new(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl TryFrom<&str> for CategoryKey {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CategoryKey> for String {
    fn from(value: CategoryKey) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
