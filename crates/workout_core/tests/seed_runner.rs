use std::path::Path;
use workout_core::{
    run_seed, SeedConfig, SeedRun, SetupError, SilentReporter, EXIT_COMPLETED, EXIT_SETUP_FAILED,
};

fn config_for(db_path: &Path, log_dir: &Path) -> SeedConfig {
    SeedConfig {
        db_path: db_path.to_path_buf(),
        log_level: "info",
        log_dir: log_dir.to_path_buf(),
        seed_file: None,
    }
}

#[tokio::test]
async fn reseeding_with_duplicate_records_still_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("seed.db"), dir.path());

    let first = run_seed(&config, &mut SilentReporter).await;
    assert_eq!(first.exit_status(), EXIT_COMPLETED);

    let second = run_seed(&config, &mut SilentReporter).await;
    assert_eq!(second.exit_status(), EXIT_COMPLETED);
    match second {
        SeedRun::Completed(summary) => {
            assert_eq!(summary.total_succeeded(), 0);
            assert_eq!(summary.total_failed(), 35);
            assert!(!summary.is_complete());
        }
        SeedRun::SetupFailed(err) => panic!("unexpected setup failure: {err}"),
    }
}

#[tokio::test]
async fn unopenable_database_is_a_setup_failure() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("missing").join("seed.db");
    let config = config_for(&db_path, dir.path());

    let run = run_seed(&config, &mut SilentReporter).await;

    assert_eq!(run.exit_status(), EXIT_SETUP_FAILED);
    match run {
        SeedRun::SetupFailed(SetupError::Database { path, .. }) => assert_eq!(path, db_path),
        other => panic!("expected database setup failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unreadable_seed_file_fails_before_the_database_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("seed.db");
    let mut config = config_for(&db_path, dir.path());
    config.seed_file = Some(dir.path().join("absent.json"));

    let run = run_seed(&config, &mut SilentReporter).await;

    assert_eq!(run.exit_status(), EXIT_SETUP_FAILED);
    assert!(matches!(run, SeedRun::SetupFailed(SetupError::Config(_))));
    assert!(!db_path.exists());
}
