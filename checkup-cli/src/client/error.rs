use thiserror::Error;

/// Construction-time client errors. Probe execution itself is infallible:
/// transport failures become sentinel-status results, not errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid target URL '{0}': expected scheme://host[:port]")]
    InvalidTarget(String),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
