//! `run`: wait for the database, init the schema, run exactly one task.

use crate::cli::{ConnectionArgs, LauncherArgs, WaitArgs};
use crate::commands::common::RunContext;
use crate::db::probe::ProbeReport;
use crate::pipeline::plan::Plan;
use crate::pipeline::step::StepReport;
use crate::pipeline::tasks::Task;
use serde::Serialize;

pub struct RunTaskParams {
    pub task: Task,
    pub connection: ConnectionArgs,
    pub wait: WaitArgs,
    pub launcher: LauncherArgs,
    pub as_json: bool,
}

#[derive(Serialize)]
struct RunSummary {
    task: &'static str,
    probe: ProbeReport,
    steps: Vec<StepReport>,
}

pub async fn handle_run(params: RunTaskParams) -> anyhow::Result<()> {
    let ctx = RunContext::establish(&params.connection, &params.wait).await?;
    let launcher = params.launcher.to_launcher();

    let plan = Plan::new(
        launcher.init_step(ctx.config.url()),
        params.task.to_step(&launcher, ctx.config.url()),
    );
    let steps = plan.execute().await?;

    if params.as_json {
        let summary = RunSummary {
            task: params.task.name(),
            probe: ctx.probe_report,
            steps,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "✓ task `{}` finished (database ready after {} probe attempt(s))",
            params.task.name(),
            ctx.probe_report.attempts
        );
    }

    Ok(())
}
