//! Basketball Stats Pipeline Entrypoint
//!
//! The first process in the stats pipeline container. It gates everything on
//! database readiness, runs schema initialization, and then launches exactly
//! one of the mutually-exclusive processing utilities (scraper, fantasy-value
//! model, simulators, CSV exporters).
//!
//! ## Behavior
//!
//! - **Readiness gate**: probe PostgreSQL with a no-op query on a fixed
//!   interval (one second by default, forever by default) until it answers
//! - **Fail-fast sequencing**: schema init runs first; any step's non-zero
//!   exit aborts the sequence and becomes this process's own exit code
//! - **Explicit task selection**: the task is a required CLI subcommand, so
//!   running zero or two tasks is unrepresentable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bball_pipeline::db::{wait_until_ready, PostgresProbe, WaitOptions};
//! use bball_pipeline::DbConfig;
//!
//! # async fn example() -> bball_pipeline::Result<()> {
//! let config = DbConfig::from_url(
//!     "postgresql://bball_user:bball_password@db:5432/basketball_stats",
//! )?;
//! let probe = PostgresProbe::new(&config);
//! let report = wait_until_ready(&probe, &WaitOptions::default()).await?;
//! println!("ready after {} attempt(s)", report.attempts);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the entrypoint (and every child task it launches) at the database:
//! ```bash
//! export DATABASE_URL=postgresql://bball_user:bball_password@db:5432/basketball_stats
//! ```

pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use cli::types::{PollInterval, TeamName};
pub use db::{DbConfig, PostgresProbe, ProbeReport, ReadinessProbe, WaitOptions};
pub use error::{PipelineError, Result};
pub use pipeline::{Launcher, Plan, Step, StepReport, Task, TradeSpec};

/// Environment variable the connection URL is read from, and the one every
/// child task receives.
pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,bball_pipeline=debug,sqlx=warn";
