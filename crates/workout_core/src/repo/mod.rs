//! Repository layer over SQLite storage.
//!
//! # Responsibility
//! - Keep SQL details for categories, training centers and athletes inside
//!   one persistence boundary.
//! - Map driver errors to semantic store errors (`NotFound`, `Duplicate`).
//!
//! # Invariants
//! - Write paths validate inputs before SQL mutations.
//! - Each create is a single statement; a failed create leaves no row behind.

use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod athlete_repo;
pub mod category_repo;
pub mod training_center_repo;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation.
///
/// Callers above the controller treat every variant as one opaque
/// "store operation failed" kind.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { entity: &'static str, name: String },
    Duplicate { entity: &'static str, key: String },
    InvalidData(String),
    /// Session connection lock was poisoned by a panicking holder.
    SessionPoisoned,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, name } => write!(f, "{entity} not found: `{name}`"),
            Self::Duplicate { entity, key } => write!(f, "{entity} already exists: `{key}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::SessionPoisoned => write!(f, "session connection lock is poisoned"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Maps unique-constraint violations to `Duplicate`, anything else to `Db`.
pub(crate) fn map_insert_error(
    err: rusqlite::Error,
    entity: &'static str,
    key: &str,
) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            StoreError::Duplicate {
                entity,
                key: key.to_string(),
            }
        }
        _ => err.into(),
    }
}

pub(crate) fn parse_record_id(value: &str, column: &str) -> StoreResult<uuid::Uuid> {
    uuid::Uuid::parse_str(value)
        .map_err(|_| StoreError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
