//! Log filter selection and subscriber setup.

use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the subscriber filter.
///
/// A non-blank `RUST_LOG` wins and may hold any `EnvFilter` directive list
/// (`restaurant_details=debug,tower_http=info`). Otherwise the configured
/// `server.logs.level` applies and must be a bare level.
pub fn env_filter(config_level: &str, rust_log: Option<&str>) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::try_new(directives)
            .map_err(|e| Error::config(format!("Invalid RUST_LOG '{}': {}", directives, e)));
    }

    let level: LevelFilter = config_level.parse().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: off, error, warn, info, debug, trace",
            config_level
        ))
    })?;

    EnvFilter::try_new(level.to_string()).map_err(|e| Error::config(e.to_string()))
}

/// Installs the global JSON subscriber.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt().with_env_filter(filter).json().init();
}
