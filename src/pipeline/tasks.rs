//! Catalog of the mutually-exclusive pipeline tasks.
//!
//! Each task maps to one of the Python utilities the entrypoint launches.
//! Selection is a CLI subcommand, so exactly one task reaches the plan.

use crate::cli::types::TeamName;
use crate::error::{PipelineError, Result};
use crate::pipeline::step::Step;
use crate::DATABASE_URL_ENV_VAR;
use std::num::NonZeroU32;
use std::path::PathBuf;

const INIT_SCRIPT: &str = "database.py";
const SCRAPE_SCRIPT: &str = "scraper.py";
const FANTASY_VALUE_SCRIPT: &str = "calculate_fantasy_value.py";
const SIMULATOR_SCRIPT: &str = "main.py";
const DRAFT_SIM_SCRIPT: &str = "agent_sim.py";
const EXPORT_CSV_SCRIPT: &str = "dump_to_csv.py";
const EXPORT_PLAYER_VALUES_SCRIPT: &str = "dump_player_values_to_csv.py";

/// How pipeline scripts are invoked: interpreter plus script directory.
#[derive(Debug, Clone)]
pub struct Launcher {
    python: PathBuf,
    script_dir: PathBuf,
}

impl Launcher {
    pub fn new(python: impl Into<PathBuf>, script_dir: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
            script_dir: script_dir.into(),
        }
    }

    fn script_step(&self, name: &str, script: &str) -> Step {
        Step::new(name, &self.python).arg(self.script_dir.join(script).to_string_lossy())
    }

    /// The schema-initialization step that precedes every task.
    pub fn init_step(&self, database_url: &str) -> Step {
        self.script_step("init", INIT_SCRIPT)
            .env(DATABASE_URL_ENV_VAR, database_url)
    }
}

/// Validated arguments for the trade simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeSpec {
    pub team1: TeamName,
    pub team2: TeamName,
    pub players_per_side: NonZeroU32,
    pub loss_tolerance: f64,
    pub allow_injured: bool,
}

impl TradeSpec {
    pub fn new(
        team1: TeamName,
        team2: TeamName,
        players_per_side: NonZeroU32,
        loss_tolerance: f64,
        allow_injured: bool,
    ) -> Result<Self> {
        if team1 == team2 {
            return Err(PipelineError::SameTeam {
                name: team1.to_string(),
            });
        }
        if !loss_tolerance.is_finite() || loss_tolerance < 0.0 {
            return Err(PipelineError::InvalidTolerance {
                value: loss_tolerance,
            });
        }
        Ok(Self {
            team1,
            team2,
            players_per_side,
            loss_tolerance,
            allow_injured,
        })
    }
}

/// The downstream processing tasks the entrypoint can run, one per variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Scrape game logs into the stats database.
    Scrape,
    /// Recompute per-season fantasy values.
    FantasyValue,
    /// Calculate and store player availability probabilities.
    Availability,
    /// Full-league head-to-head simulation.
    H2h,
    /// Search for mutually beneficial trades between two teams.
    Trade(TradeSpec),
    /// Elo-rated draft-agent simulation.
    DraftSim,
    /// Dump per-game stats to CSV.
    ExportCsv,
    /// Dump modeled player values to CSV.
    ExportPlayerValues,
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::Scrape => "scrape",
            Task::FantasyValue => "fantasy-value",
            Task::Availability => "availability",
            Task::H2h => "h2h",
            Task::Trade(_) => "trade",
            Task::DraftSim => "draft-sim",
            Task::ExportCsv => "export-csv",
            Task::ExportPlayerValues => "export-player-values",
        }
    }

    /// Build the invocation for this task. The database URL rides along as
    /// `DATABASE_URL`, which is the variable every utility reads.
    pub fn to_step(&self, launcher: &Launcher, database_url: &str) -> Step {
        let step = match self {
            Task::Scrape => launcher.script_step(self.name(), SCRAPE_SCRIPT),
            Task::FantasyValue => launcher.script_step(self.name(), FANTASY_VALUE_SCRIPT),
            Task::Availability => launcher
                .script_step(self.name(), SIMULATOR_SCRIPT)
                .arg("availability"),
            Task::H2h => launcher.script_step(self.name(), SIMULATOR_SCRIPT).arg("h2h"),
            Task::Trade(spec) => {
                let mut step = launcher
                    .script_step(self.name(), SIMULATOR_SCRIPT)
                    .arg("trade")
                    .arg("--team1")
                    .arg(spec.team1.as_str())
                    .arg("--team2")
                    .arg(spec.team2.as_str())
                    .arg("--num")
                    .arg(spec.players_per_side.to_string())
                    .arg("--tolerance")
                    .arg(spec.loss_tolerance.to_string());
                if spec.allow_injured {
                    step = step.arg("--injured");
                }
                step
            }
            Task::DraftSim => launcher.script_step(self.name(), DRAFT_SIM_SCRIPT),
            Task::ExportCsv => launcher.script_step(self.name(), EXPORT_CSV_SCRIPT),
            Task::ExportPlayerValues => {
                launcher.script_step(self.name(), EXPORT_PLAYER_VALUES_SCRIPT)
            }
        };
        step.env(DATABASE_URL_ENV_VAR, database_url)
    }
}
