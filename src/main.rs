use anyhow::Result;
use aster_relay::{server, Args, Config};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aster_relay=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from(args);

    info!("Starting Aster relay");
    info!("Aster base URL: {}", config.aster_base_url);
    if let Some(timeout) = config.upstream_timeout {
        info!("Upstream timeout: {:?}", timeout);
    }

    server::run(config).await
}
