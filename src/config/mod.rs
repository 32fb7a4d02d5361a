mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable carrying the upstream API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides.
///
/// A missing default file falls back to built-in defaults; a missing file that
/// was named explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from_path(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    Ok(config.with_env_overrides(|key| env::var(key).ok()))
}

pub async fn load_from_path(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies overrides from a variable lookup, `GOOGLE_API_KEY` replacing
    /// `gemini.api_key` when set and non-empty.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.is_empty()) {
            self.gemini.api_key = Some(key);
        }
        self
    }
}
