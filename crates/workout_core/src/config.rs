//! Seed run configuration resolved from environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `WORKOUT_DB_PATH` | `<temp_dir>/workout_api.sqlite3` |
//! | `WORKOUT_LOG_LEVEL` | [`default_log_level`] |
//! | `WORKOUT_LOG_DIR` | `<temp_dir>/workout_api_logs` |
//! | `WORKOUT_SEED_FILE` | unset: built-in dataset |
//!
//! Blank values are treated as unset.

use crate::logging::{default_log_level, normalize_level};
use crate::seed::dataset::{Dataset, DatasetError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "WORKOUT_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "WORKOUT_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "WORKOUT_LOG_DIR";
pub const SEED_FILE_ENV: &str = "WORKOUT_SEED_FILE";

const DEFAULT_DB_FILE_NAME: &str = "workout_api.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "workout_api_logs";

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { variable: &'static str, message: String },
    Dataset(DatasetError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { variable, message } => write!(f, "{variable}: {message}"),
            Self::Dataset(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue { .. } => None,
            Self::Dataset(err) => Some(err),
        }
    }
}

impl From<DatasetError> for ConfigError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

/// Resolved settings for one seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
    /// JSON dataset to seed instead of the built-in one.
    pub seed_file: Option<PathBuf>,
}

impl SeedConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps variable names to
    /// raw values.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidValue` for an unsupported log level or
    ///   a relative log directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = read(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

        let log_level = match read(LOG_LEVEL_ENV) {
            Some(raw) => normalize_level(&raw).map_err(|message| ConfigError::InvalidValue {
                variable: LOG_LEVEL_ENV,
                message,
            })?,
            None => default_log_level(),
        };

        let log_dir = read(LOG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
        if !log_dir.is_absolute() {
            return Err(ConfigError::InvalidValue {
                variable: LOG_DIR_ENV,
                message: format!("must be an absolute path, got `{}`", log_dir.display()),
            });
        }

        Ok(Self {
            db_path,
            log_level,
            log_dir,
            seed_file: read(SEED_FILE_ENV).map(PathBuf::from),
        })
    }

    /// Loads the configured dataset, or the built-in one when none is set.
    pub fn load_dataset(&self) -> Result<Dataset, ConfigError> {
        match &self.seed_file {
            Some(path) => Ok(Dataset::load(path)?),
            None => Ok(Dataset::builtin()),
        }
    }
}
