pub mod client;
pub mod commands;
pub mod config;
pub mod output;
pub mod report;
pub mod runner;
pub mod suite;
pub mod types;

pub use client::{ClientError, ProbeClient};
pub use report::{
    BufferSink, NO_RESPONSE, ProbeResult, ReportSink, RunReport, StdoutSink, Summary, classify,
};
pub use runner::{exit_code, run_suite};
pub use suite::{DomainGroup, ProbeSpec, Verb, v2_suite};
pub use types::CheckupCli;

use tracing::error;
use types::CheckupCommands;

/// Top-level boundary. Every orchestration failure is converted into a
/// diagnostic plus exit code 1 here; individual probe failures never reach
/// this layer — they are data in the report.
pub async fn run(cli: CheckupCli) -> i32 {
    match dispatch(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!("checkup aborted: {err:#}");
            eprintln!("could not run checkup — is the target up? ({err:#})");
            1
        }
    }
}

async fn dispatch(cli: CheckupCli) -> anyhow::Result<i32> {
    match &cli.command {
        CheckupCommands::Run { target, output } => {
            commands::handle_run_command(target, output).await
        }
        CheckupCommands::List { output } => {
            commands::handle_list_command(output)?;
            Ok(0)
        }
    }
}
