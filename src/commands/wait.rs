//! `wait`: block until the database answers, report, and exit.

use crate::cli::{ConnectionArgs, WaitArgs};
use crate::commands::common::RunContext;
use serde_json::json;
use std::time::Instant;

pub async fn handle_wait(
    connection: ConnectionArgs,
    wait: WaitArgs,
    as_json: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let ctx = RunContext::establish(&connection, &wait).await?;
    let elapsed_secs = started.elapsed().as_secs_f64();

    if as_json {
        let summary = json!({
            "attempts": ctx.probe_report.attempts,
            "sleeps": ctx.probe_report.sleeps,
            "elapsed_secs": elapsed_secs,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "✓ database ready after {} attempt(s) in {:.2}s",
            ctx.probe_report.attempts, elapsed_secs
        );
    }

    Ok(())
}
