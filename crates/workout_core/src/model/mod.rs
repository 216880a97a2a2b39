//! Entity schemas for seeded workout records.
//!
//! # Responsibility
//! - Define input (`*In`) and output (`*Out`) shapes for categories,
//!   training centers and athletes.
//! - Own field-level validation rules shared by all write paths.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `RecordId`.
//! - Names are the natural keys used for by-name association.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod athlete;
pub mod category;
pub mod training_center;

/// Stable identifier assigned by the store on creation.
pub type RecordId = Uuid;

/// Field-level validation failure for entity inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty after trimming.
    EmptyField(&'static str),
    /// Text field exceeds its maximum character count.
    TooLong {
        field: &'static str,
        max_chars: usize,
        actual_chars: usize,
    },
    /// Numeric field must be finite and strictly positive.
    NotPositive(&'static str),
    /// Taxpayer id is not exactly 11 ASCII digits.
    InvalidTaxpayerId(String),
    /// Sex code is not one of `M|F`.
    InvalidSex(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} cannot be empty"),
            Self::TooLong {
                field,
                max_chars,
                actual_chars,
            } => write!(
                f,
                "{field} must be at most {max_chars} characters, got {actual_chars}"
            ),
            Self::NotPositive(field) => write!(f, "{field} must be a positive number"),
            Self::InvalidTaxpayerId(value) => {
                write!(f, "taxpayer_id must be 11 digits, got `{value}`")
            }
            Self::InvalidSex(value) => write!(f, "sex must be `M` or `F`, got `{value}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn check_required_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    check_max_chars(field, value, max_chars)
}

pub(crate) fn check_max_chars(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    let actual_chars = value.chars().count();
    if actual_chars > max_chars {
        return Err(ValidationError::TooLong {
            field,
            max_chars,
            actual_chars,
        });
    }
    Ok(())
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive(field))
    }
}

#[cfg(test)]
mod tests {
    use super::{check_max_chars, check_positive, check_required_text, ValidationError};

    #[test]
    fn required_text_rejects_blank_values() {
        let err = check_required_text("name", "   ", 10).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("name"));
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        assert!(check_max_chars("name", "Atletição", 9).is_ok());
        let err = check_max_chars("name", "Atletição!", 9).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooLong {
                actual_chars: 10,
                ..
            }
        ));
    }

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(check_positive("weight", 0.0).is_err());
        assert!(check_positive("weight", f64::NAN).is_err());
        assert!(check_positive("weight", 0.1).is_ok());
    }
}
