use anyhow::Result;
use restaurant_details::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so the log level can be read from it
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match logging::env_filter(&config.server.logs.level, rust_log.as_deref()) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    logging::init(filter);

    info!(
        "Starting restaurant details relay (log filter: {})",
        rust_log.as_deref().unwrap_or(&config.server.logs.level)
    );

    server::run(config).await?;

    Ok(())
}
