//! Core library for seeding the workout API database.
//! Owns the session-scoped service layer and the seeding driver.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;

pub use config::{ConfigError, SeedConfig};
pub use controller::{
    AthleteController, CategoryController, SqliteController, TrainingCenterController,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::athlete::{AthleteFilter, AthleteIn, AthleteOut, Sex};
pub use model::category::{CategoryIn, CategoryOut, CategoryRef};
pub use model::training_center::{TrainingCenterIn, TrainingCenterOut, TrainingCenterRef};
pub use model::{RecordId, ValidationError};
pub use repo::{StoreError, StoreResult};
pub use seed::{
    run_seed, Batch, BatchReport, ConsoleReporter, Dataset, SeedReporter, SeedRun, SeedSummary,
    Seeder, SetupError, SilentReporter, EXIT_COMPLETED, EXIT_SETUP_FAILED,
};
pub use service::athlete_service::{AthleteService, NewAthlete};
pub use service::category_service::CategoryService;
pub use service::compat::{
    create_athlete, create_category, create_training_center, get_all_athletes,
    get_all_categories, get_all_training_centers,
};
pub use service::lease::{SessionLease, SessionScope};
pub use service::training_center_service::TrainingCenterService;
pub use session::{Session, SessionFactory, SqliteSession, SqliteSessionFactory};

