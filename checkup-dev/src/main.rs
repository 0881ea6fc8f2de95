use std::error::Error;

use checkup_dev::{StubConfig, start_server};
use envconfig::Envconfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let config = StubConfig::init_from_env()?;
    start_server(config).await?;
    Ok(())
}
