//! Unit tests for task-to-invocation mapping and trade validation

use super::*;
use crate::cli::types::TeamName;
use std::num::NonZeroU32;
use std::path::Path;

fn launcher() -> Launcher {
    Launcher::new("python3", "/opt/pipeline")
}

fn team(name: &str) -> TeamName {
    TeamName::new(name).unwrap()
}

fn trade_spec(allow_injured: bool) -> TradeSpec {
    TradeSpec::new(
        team("Sharks"),
        team("Jets"),
        NonZeroU32::new(2).unwrap(),
        0.05,
        allow_injured,
    )
    .unwrap()
}

const URL: &str = "postgresql://bball_user:bball_password@db:5432/basketball_stats";

#[test]
fn scrape_invokes_the_scraper_script() {
    let step = Task::Scrape.to_step(&launcher(), URL);

    assert_eq!(step.name(), "scrape");
    assert_eq!(step.program(), Path::new("python3"));
    assert_eq!(step.args(), ["/opt/pipeline/scraper.py"]);
}

#[test]
fn simulator_modes_pass_their_subcommand() {
    let step = Task::Availability.to_step(&launcher(), URL);
    assert_eq!(step.args(), ["/opt/pipeline/main.py", "availability"]);

    let step = Task::H2h.to_step(&launcher(), URL);
    assert_eq!(step.args(), ["/opt/pipeline/main.py", "h2h"]);
}

#[test]
fn trade_builds_the_full_simulator_argv() {
    let step = Task::Trade(trade_spec(false)).to_step(&launcher(), URL);

    assert_eq!(
        step.args(),
        [
            "/opt/pipeline/main.py",
            "trade",
            "--team1",
            "Sharks",
            "--team2",
            "Jets",
            "--num",
            "2",
            "--tolerance",
            "0.05",
        ]
    );
}

#[test]
fn trade_appends_injured_flag_only_when_allowed() {
    let step = Task::Trade(trade_spec(true)).to_step(&launcher(), URL);
    assert_eq!(step.args().last().map(String::as_str), Some("--injured"));
}

#[test]
fn every_task_exports_the_database_url() {
    let tasks = [
        Task::Scrape,
        Task::FantasyValue,
        Task::Availability,
        Task::H2h,
        Task::Trade(trade_spec(false)),
        Task::DraftSim,
        Task::ExportCsv,
        Task::ExportPlayerValues,
    ];
    for task in tasks {
        let step = task.to_step(&launcher(), URL);
        assert!(
            step.envs()
                .iter()
                .any(|(key, value)| key.as_str() == "DATABASE_URL" && value.as_str() == URL),
            "task `{}` is missing DATABASE_URL",
            step.name(),
        );
    }
}

#[test]
fn init_step_runs_the_schema_script() {
    let step = launcher().init_step(URL);

    assert_eq!(step.name(), "init");
    assert_eq!(step.args(), ["/opt/pipeline/database.py"]);
    assert!(step
        .envs()
        .iter()
        .any(|(key, _)| key.as_str() == "DATABASE_URL"));
}

#[test]
fn trade_spec_rejects_identical_teams() {
    let err = TradeSpec::new(
        team("Sharks"),
        team("Sharks"),
        NonZeroU32::new(2).unwrap(),
        0.05,
        false,
    )
    .unwrap_err();

    assert!(matches!(err, crate::PipelineError::SameTeam { .. }));
}

#[test]
fn trade_spec_rejects_negative_tolerance() {
    let err = TradeSpec::new(
        team("Sharks"),
        team("Jets"),
        NonZeroU32::new(2).unwrap(),
        -0.1,
        false,
    )
    .unwrap_err();

    assert!(matches!(err, crate::PipelineError::InvalidTolerance { .. }));
}

#[test]
fn command_line_joins_program_and_args() {
    let step = Task::H2h.to_step(&launcher(), URL);
    assert_eq!(step.command_line(), "python3 /opt/pipeline/main.py h2h");
}
