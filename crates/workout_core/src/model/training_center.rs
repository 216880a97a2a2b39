//! Training center schema.

use super::{check_required_text, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

pub const TRAINING_CENTER_NAME_MAX_CHARS: usize = 20;
pub const TRAINING_CENTER_ADDRESS_MAX_CHARS: usize = 60;
pub const TRAINING_CENTER_OWNER_MAX_CHARS: usize = 30;

/// Validated input for creating a training center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCenterIn {
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl TrainingCenterIn {
    /// Builds a training center input with trimmed fields.
    ///
    /// # Errors
    /// - Returns `ValidationError` when any field is empty or too long.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = Self {
            name: name.into().trim().to_string(),
            address: address.into().trim().to_string(),
            owner: owner.into().trim().to_string(),
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required_text(
            "training_center.name",
            &self.name,
            TRAINING_CENTER_NAME_MAX_CHARS,
        )?;
        check_required_text(
            "training_center.address",
            &self.address,
            TRAINING_CENTER_ADDRESS_MAX_CHARS,
        )?;
        check_required_text(
            "training_center.owner",
            &self.owner,
            TRAINING_CENTER_OWNER_MAX_CHARS,
        )?;
        Ok(())
    }
}

/// Persisted training center record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCenterOut {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub owner: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// By-name training center reference used when associating athletes.
///
/// Carries the name only; address and owner of an existing center are never
/// compared or overwritten through a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCenterRef {
    pub name: String,
}

impl TrainingCenterRef {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let reference = Self {
            name: name.into().trim().to_string(),
        };
        reference.validate()?;
        Ok(reference)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required_text(
            "training_center.name",
            &self.name,
            TRAINING_CENTER_NAME_MAX_CHARS,
        )
    }
}
