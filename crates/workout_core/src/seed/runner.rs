//! Configured seed run against the SQLite store.
//!
//! # Invariants
//! - Record failures never change the exit status; only setup does.
//! - The dataset is loaded before the database is touched.

use super::driver::Seeder;
use super::report::{SeedReporter, SeedSummary};
use crate::config::{ConfigError, SeedConfig};
use crate::controller::SqliteController;
use crate::db::DbError;
use crate::session::SqliteSessionFactory;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const EXIT_COMPLETED: u8 = 0;
pub const EXIT_SETUP_FAILED: u8 = 1;

#[derive(Debug)]
pub enum SetupError {
    Config(ConfigError),
    Database { path: PathBuf, source: DbError },
}

impl Display for SetupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Database { path, source } => {
                write!(f, "cannot open database `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Database { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// How a configured run ended.
#[derive(Debug)]
pub enum SeedRun {
    Completed(SeedSummary),
    SetupFailed(SetupError),
}

impl SeedRun {
    /// Process exit status: `EXIT_COMPLETED` whenever seeding ran, even with
    /// failed records.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Completed(_) => EXIT_COMPLETED,
            Self::SetupFailed(_) => EXIT_SETUP_FAILED,
        }
    }
}

/// Loads the configured dataset, bootstraps the database and seeds it.
pub async fn run_seed<R>(config: &SeedConfig, reporter: &mut R) -> SeedRun
where
    R: SeedReporter + ?Sized,
{
    match seed_configured(config, reporter).await {
        Ok(summary) => {
            info!(
                "event=seed_exit module=seed status=ok complete={} db_path={}",
                summary.is_complete(),
                config.db_path.display()
            );
            SeedRun::Completed(summary)
        }
        Err(err) => {
            error!(
                "event=seed_setup module=seed status=error db_path={} error={}",
                config.db_path.display(),
                err
            );
            SeedRun::SetupFailed(err)
        }
    }
}

async fn seed_configured<R>(
    config: &SeedConfig,
    reporter: &mut R,
) -> Result<SeedSummary, SetupError>
where
    R: SeedReporter + ?Sized,
{
    let dataset = config.load_dataset()?;
    let factory = SqliteSessionFactory::bootstrap(&config.db_path).map_err(|source| {
        SetupError::Database {
            path: config.db_path.clone(),
            source,
        }
    })?;
    let controller = SqliteController;

    Ok(Seeder::new(&factory, &controller)
        .run(&dataset, reporter)
        .await)
}
