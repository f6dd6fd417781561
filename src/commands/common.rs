//! Shared context for commands that gate on database readiness.

use crate::cli::{ConnectionArgs, WaitArgs};
use crate::db::config::DbConfig;
use crate::db::probe::{wait_until_ready, PostgresProbe, ProbeReport};
use anyhow::Context;

/// Resolved config plus proof the database answered.
///
/// Every command builds one of these first; nothing downstream runs until
/// `establish` has returned.
pub struct RunContext {
    pub config: DbConfig,
    pub probe_report: ProbeReport,
}

impl RunContext {
    pub async fn establish(connection: &ConnectionArgs, wait: &WaitArgs) -> anyhow::Result<Self> {
        let config = connection
            .resolve()
            .context("resolving database connection settings")?;
        let options = wait.to_options();

        tracing::info!(
            database = %config,
            interval_secs = options.interval.as_secs_f64(),
            "waiting for database"
        );
        let probe = PostgresProbe::new(&config);
        let probe_report = wait_until_ready(&probe, &options)
            .await
            .context("waiting for the stats database")?;
        tracing::info!(attempts = probe_report.attempts, "database ready");

        Ok(Self {
            config,
            probe_report,
        })
    }
}
