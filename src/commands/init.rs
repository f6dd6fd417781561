//! `init`: wait for the database, run schema initialization, and exit.

use crate::cli::{ConnectionArgs, LauncherArgs, WaitArgs};
use crate::commands::common::RunContext;

pub async fn handle_init(
    connection: ConnectionArgs,
    wait: WaitArgs,
    launcher: LauncherArgs,
) -> anyhow::Result<()> {
    let ctx = RunContext::establish(&connection, &wait).await?;
    let launcher = launcher.to_launcher();

    let report = launcher.init_step(ctx.config.url()).run().await?;
    println!(
        "✓ schema initialization finished in {:.2}s",
        report.elapsed_secs
    );

    Ok(())
}
