//! Athlete schema.
//!
//! # Invariants
//! - An athlete references exactly one category and one training center,
//!   both by name.
//! - `taxpayer_id` is exactly 11 ASCII digits.

use super::category::CategoryRef;
use super::training_center::TrainingCenterRef;
use super::{check_positive, check_required_text, RecordId, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const ATHLETE_NAME_MAX_CHARS: usize = 50;

static TAXPAYER_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("valid taxpayer id regex"));

/// Biological sex code stored as a single letter.
///
/// Parsing and deserializing both accept either letter case; output is
/// always upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M", alias = "m")]
    Male,
    #[serde(rename = "F", alias = "f")]
    Female,
}

impl Sex {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(ValidationError::InvalidSex(other.to_string())),
        }
    }
}

/// Validated input for creating an athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteIn {
    pub name: String,
    pub taxpayer_id: String,
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    /// Meters.
    pub height: f64,
    pub sex: Sex,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

impl AthleteIn {
    /// Checks every field rule, including both by-name references.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required_text("athlete.name", &self.name, ATHLETE_NAME_MAX_CHARS)?;
        if !TAXPAYER_ID_RE.is_match(&self.taxpayer_id) {
            return Err(ValidationError::InvalidTaxpayerId(self.taxpayer_id.clone()));
        }
        check_positive("athlete.weight", self.weight)?;
        check_positive("athlete.height", self.height)?;
        self.category.validate()?;
        self.training_center.validate()?;
        Ok(())
    }
}

/// Persisted athlete record with resolved associations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteOut {
    pub id: RecordId,
    pub name: String,
    pub taxpayer_id: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub sex: Sex,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Query filter for listing athletes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteFilter {
    /// Exact athlete name match when set.
    pub name: Option<String>,
}

impl AthleteFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AthleteIn, Sex};
    use crate::model::category::CategoryRef;
    use crate::model::training_center::TrainingCenterRef;
    use crate::model::ValidationError;

    fn sample() -> AthleteIn {
        AthleteIn {
            name: "João Silva".to_string(),
            taxpayer_id: "12345678222".to_string(),
            age: 25,
            weight: 75.5,
            height: 1.75,
            sex: Sex::Male,
            category: CategoryRef::new("RX").unwrap(),
            training_center: TrainingCenterRef::new("CT King").unwrap(),
        }
    }

    #[test]
    fn sample_athlete_is_valid() {
        sample().validate().unwrap();
    }

    #[test]
    fn taxpayer_id_must_be_eleven_digits() {
        let mut athlete = sample();
        athlete.taxpayer_id = "123.456.789-00".to_string();
        assert!(matches!(
            athlete.validate(),
            Err(ValidationError::InvalidTaxpayerId(_))
        ));
    }

    #[test]
    fn sex_parses_single_letter_codes() {
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" m ".parse::<Sex>().unwrap(), Sex::Male);
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn sex_serializes_as_code() {
        let json = serde_json::to_value(Sex::Female).unwrap();
        assert_eq!(json, "F");
    }

    #[test]
    fn sex_deserializes_either_letter_case_like_from_str() {
        for (raw, expected) in [("M", Sex::Male), ("m", Sex::Male), ("f", Sex::Female)] {
            let decoded: Sex = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(decoded, expected);
            assert_eq!(raw.parse::<Sex>().unwrap(), expected);
        }
        assert!(serde_json::from_str::<Sex>("\"x\"").is_err());
    }
}
