//! Integration tests for the PostgreSQL readiness probe

use bball_pipeline::db::{wait_until_ready, PostgresProbe, WaitOptions};
use bball_pipeline::{DbConfig, PipelineError};
use std::num::NonZeroU32;
use std::time::Duration;

#[test]
fn default_wait_options_match_the_entrypoint_cadence() {
    let options = WaitOptions::default();
    assert_eq!(options.interval, Duration::from_secs(1));
    assert!(options.max_attempts.is_none());
}

#[tokio::test]
async fn unreachable_database_exhausts_the_attempt_budget() {
    // Nothing listens on port 1; every probe fails with a connect error.
    let config = DbConfig::from_parts(
        "127.0.0.1",
        1,
        "bball_user",
        "bball_password",
        "basketball_stats",
    );
    let probe = PostgresProbe::new(&config);
    let options = WaitOptions {
        interval: Duration::from_millis(10),
        max_attempts: NonZeroU32::new(2),
    };

    let err = wait_until_ready(&probe, &options).await.unwrap_err();

    match err {
        PipelineError::NotReady { attempts, .. } => assert_eq!(attempts, 2),
        other => panic!("expected NotReady, got {other:?}"),
    }
}
