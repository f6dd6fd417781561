//! Entry point: parse CLI and dispatch to command handlers.

use bball_pipeline::{
    cli::{BballPipeline, Commands},
    commands::{
        init::handle_init,
        run::{handle_run, RunTaskParams},
        wait::handle_wait,
    },
    PipelineError, DEFAULT_LOG_FILTER,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let app = BballPipeline::parse();

    if let Err(err) = run(app).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

async fn run(app: BballPipeline) -> anyhow::Result<()> {
    match app.command {
        Commands::Wait {
            connection,
            wait,
            json,
        } => handle_wait(connection, wait, json).await,

        Commands::Init {
            connection,
            wait,
            launcher,
        } => handle_init(connection, wait, launcher).await,

        Commands::Run {
            connection,
            wait,
            launcher,
            json,
            task,
        } => {
            let task = task.into_task()?;
            handle_run(RunTaskParams {
                task,
                connection,
                wait,
                launcher,
                as_json: json,
            })
            .await
        }
    }
}

/// A failing step's exit code bubbles up unchanged; everything else exits 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PipelineError>()
        .map(PipelineError::exit_code)
        .unwrap_or(1)
}
