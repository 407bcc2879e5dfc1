pub mod source;

pub use source::DatasetSource;

use crate::error::{CensusError, Result};
use crate::types::config::FetchSettings;
use crate::types::dataset::Dataset;
use std::time::Duration;

/// rustls needs a process-wide provider before the first client is built.
fn install_crypto_provider() {
    // Err only means a provider is already installed.
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// One-shot dataset retrieval. No retries; callers re-invoke on failure.
#[derive(Debug, Clone)]
pub struct Loader {
    client: reqwest::Client,
}

impl Loader {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        install_crypto_provider();
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| CensusError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    pub async fn load(&self, source: &DatasetSource) -> Result<Dataset> {
        let dataset = match source {
            DatasetSource::Url(url) => self.fetch(url).await?,
            DatasetSource::File(path) => {
                let bytes = tokio::fs::read(path).await?;
                Dataset::from_json_slice(&bytes)?
            }
        };
        tracing::info!(
            source = %source,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    async fn fetch(&self, url: &str) -> Result<Dataset> {
        tracing::debug!(url, "fetching dataset");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CensusError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CensusError::FetchStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_decode() {
                CensusError::Format(format!("body is not valid JSON: {e}"))
            } else {
                CensusError::Fetch {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;
        Dataset::from_json_value(body)
    }
}
