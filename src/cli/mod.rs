//! CLI argument definitions and parsing.

pub mod types;


use crate::db::config::{
    DbConfig, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT,
    DEFAULT_DB_USER,
};
use crate::db::probe::WaitOptions;
use crate::error::Result;
use crate::pipeline::tasks::{Launcher, Task, TradeSpec};
use crate::DATABASE_URL_ENV_VAR;
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;
use types::{PollInterval, TeamName};

/// Database connection flags shared by every command.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Full connection URL (or set `DATABASE_URL`); overrides the part flags.
    #[clap(long)]
    pub database_url: Option<String>,

    /// Database host.
    #[clap(long, default_value = DEFAULT_DB_HOST)]
    pub db_host: String,

    /// Database port.
    #[clap(long, default_value_t = DEFAULT_DB_PORT)]
    pub db_port: u16,

    /// Database user.
    #[clap(long, default_value = DEFAULT_DB_USER)]
    pub db_user: String,

    /// Database password.
    #[clap(long, default_value = DEFAULT_DB_PASSWORD)]
    pub db_password: String,

    /// Database name.
    #[clap(long, default_value = DEFAULT_DB_NAME)]
    pub db_name: String,
}

impl ConnectionArgs {
    /// Resolve the connection config: `--database-url` flag, then the
    /// `DATABASE_URL` environment variable, then the part flags.
    pub fn resolve(&self) -> Result<DbConfig> {
        if let Some(url) = &self.database_url {
            return DbConfig::from_url(url.clone());
        }
        if let Ok(url) = std::env::var(DATABASE_URL_ENV_VAR) {
            if !url.is_empty() {
                return DbConfig::from_url(url);
            }
        }
        Ok(DbConfig::from_parts(
            &self.db_host,
            self.db_port,
            &self.db_user,
            &self.db_password,
            &self.db_name,
        ))
    }
}

/// Wait-loop flags shared by every command.
#[derive(Debug, Args)]
pub struct WaitArgs {
    /// Seconds between connectivity probes.
    #[clap(long, default_value_t = PollInterval::default())]
    pub interval: PollInterval,

    /// Give up after this many failed probes (default: retry forever).
    #[clap(long)]
    pub max_attempts: Option<NonZeroU32>,
}

impl WaitArgs {
    pub fn to_options(&self) -> WaitOptions {
        WaitOptions {
            interval: self.interval.as_duration(),
            max_attempts: self.max_attempts,
        }
    }
}

/// How the pipeline scripts are launched.
#[derive(Debug, Args)]
pub struct LauncherArgs {
    /// Python interpreter used for pipeline scripts.
    #[clap(long, default_value = "python3")]
    pub python: PathBuf,

    /// Directory containing the pipeline scripts.
    #[clap(long, default_value = ".")]
    pub script_dir: PathBuf,
}

impl LauncherArgs {
    pub fn to_launcher(&self) -> Launcher {
        Launcher::new(&self.python, &self.script_dir)
    }
}

#[derive(Debug, Parser)]
#[clap(name = "bball-pipeline", about = "Basketball stats pipeline entrypoint", version)]
pub struct BballPipeline {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Block until the stats database accepts connections, then exit.
    Wait {
        #[clap(flatten)]
        connection: ConnectionArgs,

        #[clap(flatten)]
        wait: WaitArgs,

        /// Print the probe report as JSON instead of a text line.
        #[clap(long)]
        json: bool,
    },

    /// Wait for the database, run schema initialization, then exit.
    Init {
        #[clap(flatten)]
        connection: ConnectionArgs,

        #[clap(flatten)]
        wait: WaitArgs,

        #[clap(flatten)]
        launcher: LauncherArgs,
    },

    /// Wait for the database, run schema initialization, then run exactly
    /// one processing task.
    ///
    /// The task is a required subcommand: omitting it or naming two is a
    /// parse error, not a latent misconfiguration.
    Run {
        #[clap(flatten)]
        connection: ConnectionArgs,

        #[clap(flatten)]
        wait: WaitArgs,

        #[clap(flatten)]
        launcher: LauncherArgs,

        /// Print the run report as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        #[clap(subcommand)]
        task: TaskCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum TaskCmd {
    /// Scrape game logs into the stats database.
    Scrape,

    /// Recompute per-season fantasy values.
    FantasyValue,

    /// Calculate and store player availability probabilities.
    Availability,

    /// Run the full-league head-to-head simulation.
    H2h,

    /// Search for mutually beneficial trades between two teams.
    Trade {
        /// Name of the first team (the improver).
        #[clap(long)]
        team1: TeamName,

        /// Name of the second team (the partner).
        #[clap(long)]
        team2: TeamName,

        /// Players to trade per side.
        #[clap(long, short = 'n', default_value_t = NonZeroU32::new(2).unwrap())]
        num: NonZeroU32,

        /// Loss tolerance for the second team.
        #[clap(long, short = 't', default_value_t = 0.05)]
        tolerance: f64,

        /// Allow trading injured players.
        #[clap(long)]
        injured: bool,
    },

    /// Run the Elo-rated draft-agent simulation.
    DraftSim,

    /// Dump per-game stats to CSV.
    ExportCsv,

    /// Dump modeled player values to CSV.
    ExportPlayerValues,
}

impl TaskCmd {
    /// Convert parsed arguments into a validated task.
    pub fn into_task(self) -> Result<Task> {
        Ok(match self {
            TaskCmd::Scrape => Task::Scrape,
            TaskCmd::FantasyValue => Task::FantasyValue,
            TaskCmd::Availability => Task::Availability,
            TaskCmd::H2h => Task::H2h,
            TaskCmd::Trade {
                team1,
                team2,
                num,
                tolerance,
                injured,
            } => Task::Trade(TradeSpec::new(team1, team2, num, tolerance, injured)?),
            TaskCmd::DraftSim => Task::DraftSim,
            TaskCmd::ExportCsv => Task::ExportCsv,
            TaskCmd::ExportPlayerValues => Task::ExportPlayerValues,
        })
    }
}
