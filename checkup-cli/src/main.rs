use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use checkup_cli::CheckupCli;

#[tokio::main]
async fn main() {
    init_log();
    let cli = CheckupCli::parse();
    let code = checkup_cli::run(cli).await;
    std::process::exit(code);
}

fn init_log() {
    // the report owns stdout; keep log lines on stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("CHECKUP_LOG")
                .from_env_lossy(),
        )
        .init();
}
