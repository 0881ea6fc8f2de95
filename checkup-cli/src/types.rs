use http::Uri;

/// Main CLI structure
#[derive(clap::Parser, Clone, Debug)]
#[clap(author, version, about = "Verify the v2 API surface of a target deployment", long_about = None)]
pub struct CheckupCli {
    #[command(subcommand)]
    pub command: CheckupCommands,
}

/// Available CLI commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum CheckupCommands {
    /// Probe every declared v2 endpoint and report per-domain health
    #[clap(aliases = &["r"])]
    Run {
        #[clap(flatten)]
        target: TargetArgs,
        #[clap(flatten)]
        output: OutputArgs,
    },
    /// Print the declared endpoint suite without touching the network
    #[clap(aliases = &["l", "ls"])]
    List {
        #[clap(flatten)]
        output: OutputArgs,
    },
}

/// Target selection, overriding the environment configuration
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Base URL of the service under verification (overrides CHECKUP_URL)
    #[arg(short, long)]
    pub url: Option<Uri>,
    /// Per-probe timeout in seconds (overrides CHECKUP_TIMEOUT_SECS)
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,
}

/// Global output arguments that can be added to any command
#[derive(clap::Args, Clone, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Available output formats
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}
