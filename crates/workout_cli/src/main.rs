//! `workout-seed`: populate the workout API database with the seed dataset.
//!
//! Takes no arguments; configuration comes from `WORKOUT_*` environment
//! variables. Exits 0 once the run completes, whatever the per-record
//! outcomes; exits 1 only when setup fails.

use std::fmt::Display;
use std::process::ExitCode;
use workout_core::{
    init_logging, run_seed, ConsoleReporter, SeedConfig, SeedRun, EXIT_SETUP_FAILED,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(err) => return setup_failure(format_args!("invalid configuration: {err}")),
    };
    if let Err(message) = init_logging(config.log_level, &config.log_dir) {
        return setup_failure(message);
    }

    let run = run_seed(&config, &mut ConsoleReporter::stdout()).await;
    if let SeedRun::SetupFailed(err) = &run {
        eprintln!("workout-seed: {err}");
    }
    ExitCode::from(run.exit_status())
}

fn setup_failure(message: impl Display) -> ExitCode {
    eprintln!("workout-seed: {message}");
    ExitCode::from(EXIT_SETUP_FAILED)
}
