//! HTTP implementation of [`PokemonSource`].

use crate::error::{IngestError, IngestResult};
use crate::payload::PokemonPayload;
use crate::source::PokemonSource;
use async_trait::async_trait;
use dex_core::ApiConfig;
use std::time::Duration;

/// Fetches entities from the public REST API, one request per id.
pub struct HttpSource {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpSource {
    /// Build a client with the configured per-request timeout.
    pub fn new(config: &ApiConfig) -> IngestResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("dex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IngestError::Client(e.to_string()))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl PokemonSource for HttpSource {
    async fn fetch(&self, id: u32) -> IngestResult<PokemonPayload> {
        let url = self.config.entity_url(id);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| IngestError::Fetch {
                id,
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                id,
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| IngestError::Fetch {
                id,
                url: url.clone(),
                source,
            })?;
        PokemonPayload::from_json(id, &body)
    }

    fn describe(&self) -> String {
        self.config.base_url.clone()
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
