//! Database seeding driver.
//!
//! # Responsibility
//! - Apply category, training center and athlete batches through the
//!   service layer, in that order.
//! - Count successes per batch and report every record outcome.
//!
//! # Invariants
//! - Athletes are seeded last because they reference the other two by name.
//! - A failed record never aborts its batch or the run.
//! - `succeeded <= attempted` and `attempted == batch input length`.

pub mod dataset;
pub mod driver;
pub mod report;
pub mod runner;

pub use dataset::{CategorySeed, Dataset, DatasetError, TrainingCenterSeed};
pub use driver::Seeder;
pub use report::{
    Batch, BatchReport, ConsoleReporter, RecordFailure, SeedReporter, SeedSummary, SilentReporter,
};
pub use runner::{run_seed, SeedRun, SetupError, EXIT_COMPLETED, EXIT_SETUP_FAILED};
