use super::types::*;
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Outbound seam to the generation API. One call per invocation, no retries.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends `request` and returns the upstream body as untouched JSON.
    ///
    /// A non-success status yields [`Error::Upstream`]; a body that is not
    /// JSON yields [`Error::Serialization`].
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Endpoint without the key; the key travels as the `key` query parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value> {
        debug!("Calling generateContent on model {}", self.model);

        // Errors carry the request URL, which includes the key.
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| Error::Network(e.without_url()))?;
            error!("Google AI API error: {} - {}", status, body);
            return Err(Error::upstream(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.without_url()))?;
        let body: Value = serde_json::from_slice(&bytes)?;

        debug!("Received generateContent response ({} bytes)", bytes.len());
        Ok(body)
    }
}
