//! Database readiness probe and wait loop.
//!
//! The probe issues a trivial `SELECT 1` over a fresh connection. The wait
//! loop retries it on a fixed interval with no backoff, forever by default,
//! which is the liveness gate the pipeline containers rely on: nothing runs
//! until the stats database answers.

use crate::db::config::DbConfig;
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::num::NonZeroU32;
use std::time::Duration;

/// The no-op query used to decide readiness.
const PROBE_QUERY: &str = "SELECT 1";

/// One connectivity attempt against the database.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn check(&self) -> Result<()>;
}

/// Probe that connects to PostgreSQL and runs [`PROBE_QUERY`].
pub struct PostgresProbe {
    options: PgConnectOptions,
}

impl PostgresProbe {
    pub fn new(config: &DbConfig) -> Self {
        Self {
            options: config.connect_options(),
        }
    }
}

#[async_trait]
impl ReadinessProbe for PostgresProbe {
    async fn check(&self) -> Result<()> {
        let mut conn = self.options.connect().await?;
        sqlx::query(PROBE_QUERY).execute(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }
}

/// Wait loop tuning.
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Fixed delay between failed attempts.
    pub interval: Duration,
    /// Give up after this many attempts; `None` retries forever.
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for WaitOptions {
    /// One-second cadence, unbounded attempts.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

/// Evidence of how long the gate held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Total probe attempts, including the successful one.
    pub attempts: u32,
    /// Sleeps taken between attempts (always `attempts - 1` on success).
    pub sleeps: u32,
}

/// Probe repeatedly until the database answers.
///
/// Sleeps only between attempts, never after the successful one, so callers
/// proceed the moment the database is reachable.
pub async fn wait_until_ready<P>(probe: &P, options: &WaitOptions) -> Result<ProbeReport>
where
    P: ReadinessProbe + ?Sized,
{
    let mut attempts: u32 = 0;
    let mut sleeps: u32 = 0;

    loop {
        attempts += 1;
        match probe.check().await {
            Ok(()) => {
                tracing::debug!(attempts, sleeps, "database probe succeeded");
                return Ok(ProbeReport { attempts, sleeps });
            }
            Err(err) => {
                if let Some(max) = options.max_attempts {
                    if attempts >= max.get() {
                        return Err(PipelineError::NotReady {
                            attempts,
                            last_error: err.to_string(),
                        });
                    }
                }
                tracing::debug!(attempt = attempts, error = %err, "database not ready, retrying");
                tokio::time::sleep(options.interval).await;
                sleeps += 1;
            }
        }
    }
}
