mod error;
pub mod handlers;
mod types;

pub use error::DetailsError;
pub use handlers::AppState;
pub use types::{DetailsRequest, ErrorResponse};

use crate::{
    Error, Result,
    config::{API_KEY_ENV, Config},
    gemini::GeminiClient,
};
use axum::{Router, routing::any};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState, path: &str) -> Router {
    Router::new()
        .route(path, any(handlers::get_details))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    if !config.server.path.starts_with('/') {
        return Err(Error::config(format!(
            "server.path must start with '/': {}",
            config.server.path
        )));
    }

    let client = GeminiClient::new(&config.gemini)?;
    let api_key = config.gemini.api_key().map(str::to_string);
    if api_key.is_none() {
        warn!(
            "{} is not set; details requests will fail until it is configured",
            API_KEY_ENV
        );
    }

    let app = router(AppState::new(api_key, Arc::new(client)), &config.server.path);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} (endpoint {}, model {})",
        addr, config.server.path, config.gemini.model
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
