use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Result, SubmitError};
use crate::payload::ProductInput;

/// HTTP client for the products collection.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProductClient {
    client: Client,
    config: ClientConfig,
}

impl ProductClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint.as_str()
    }

    /// POSTs `payload` and returns the parsed response body.
    ///
    /// The body is parsed as JSON whatever the status; a non-JSON body is a
    /// [`SubmitError::MalformedResponse`] even when the status is an error.
    pub async fn create_product(&self, payload: &ProductInput) -> Result<Value> {
        log::info!("📡 [CLIENT] POST {}", self.config.endpoint);

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📊 [CLIENT] Response status: {}", status);

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|source| SubmitError::MalformedResponse { status, source })?;

        if !status.is_success() {
            return Err(SubmitError::Api { status, body });
        }

        Ok(body)
    }
}

impl Default for ProductClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
