use std::time::Duration;

use anyhow::Context;
use envconfig::Envconfig;

use crate::client::ProbeClient;
use crate::config::CheckupConfig;
use crate::output::write_output;
use crate::report::{RunReport, StdoutSink};
use crate::runner::{exit_code, run_suite};
use crate::suite::v2_suite;
use crate::types::{OutputArgs, TargetArgs};

/// Handle `checkup run`: sweep the declared suite against the configured
/// target and map the outcome to an exit code.
pub async fn handle_run_command(target: &TargetArgs, output: &OutputArgs) -> anyhow::Result<i32> {
    let config = CheckupConfig::init_from_env()
        .context("could not load environment configuration")?;

    let base_url = target
        .url
        .as_ref()
        .map(|u| u.to_string())
        .unwrap_or_else(|| config.target_url.clone());
    let timeout = target
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.timeout());

    let client = ProbeClient::new(&base_url, timeout)?;
    tracing::info!(url = client.base_url(), "starting v2 surface checkup");

    let mut report = RunReport::new();
    run_suite(&client, &v2_suite(), &mut report).await;

    write_output(&report, &output.output, &mut StdoutSink)?;
    Ok(exit_code(&report))
}
