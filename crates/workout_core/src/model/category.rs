//! Category schema.

use super::{check_required_text, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum category name length in characters.
pub const CATEGORY_NAME_MAX_CHARS: usize = 10;

/// Validated input for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryIn {
    pub name: String,
}

impl CategoryIn {
    /// Builds a category input with a trimmed name.
    ///
    /// # Errors
    /// - Returns `ValidationError` when the name is empty or too long.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let input = Self {
            name: name.into().trim().to_string(),
        };
        input.validate()?;
        Ok(input)
    }

    /// Re-checks field rules; write paths call this before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required_text("category.name", &self.name, CATEGORY_NAME_MAX_CHARS)
    }
}

/// Persisted category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOut {
    pub id: RecordId,
    pub name: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// By-name category reference used when associating athletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

impl CategoryRef {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let reference = Self {
            name: name.into().trim().to_string(),
        };
        reference.validate()?;
        Ok(reference)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required_text("category.name", &self.name, CATEGORY_NAME_MAX_CHARS)
    }
}
