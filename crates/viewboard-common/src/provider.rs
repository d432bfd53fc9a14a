//! Dataset provider client
//!
//! One synchronous-at-the-boundary call at process startup returns the whole
//! viewership batch. A connectivity or parse failure here is fatal: the
//! dashboard must not render any tab over partial or empty data. Transient
//! failures are retried with bounded exponential backoff before giving up.

use crate::error::{Result, ViewboardError};
use crate::types::ViewRecord;
use reqwest::Client;
use std::time::Duration;
use tokio_retry::{strategy::ExponentialBackoff, RetryIf};
use tracing::{debug, error, info, instrument, warn};

/// Fetch failure carrying whether another attempt is worthwhile
struct FetchFailure {
    retryable: bool,
    error: ViewboardError,
}

impl FetchFailure {
    fn retryable(error: ViewboardError) -> Self {
        Self {
            retryable: true,
            error,
        }
    }

    fn fatal(error: ViewboardError) -> Self {
        Self {
            retryable: false,
            error,
        }
    }
}

/// Configuration for the dataset provider client
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the dataset endpoint
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connection pool max idle connections per host (default: 4)
    pub max_idle_per_host: usize,
    /// Maximum number of retry attempts (default: 3)
    pub max_retries: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8050".to_string(),
            timeout_secs: 30,
            max_idle_per_host: 4,
            max_retries: 3,
        }
    }
}

impl ProviderConfig {
    /// Create a new configuration with the minimum required parameters
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the maximum retry attempts
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// HTTP client for the viewership dataset provider
#[derive(Debug, Clone)]
pub struct DatasetClient {
    client: Client,
    config: ProviderConfig,
}

impl DatasetClient {
    /// Create a new dataset client with the given configuration
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| ViewboardError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    pub fn with_defaults(base_url: impl Into<String>) -> Result<Self> {
        Self::new(ProviderConfig::new(base_url))
    }

    /// The dataset endpoint URL
    fn dataset_url(&self) -> String {
        self.config.base_url.trim_end_matches('/').to_string()
    }

    /// Fetch the entire record batch from the provider
    ///
    /// Server errors and transport failures are retried with exponential
    /// backoff up to `max_retries`; client errors (4xx) are not.
    #[instrument(skip(self), fields(url = %self.dataset_url()))]
    pub async fn fetch_dataset(&self) -> Result<Vec<ViewRecord>> {
        let url = self.dataset_url();
        debug!("Fetching dataset from: {}", url);

        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(10))
            .take(self.config.max_retries);

        let response = RetryIf::spawn(
            retry_strategy,
            || async {
                match self.client.get(&url).send().await {
                    Ok(response) => {
                        if response.status().is_success() {
                            debug!("Dataset request successful: {}", response.status());
                            Ok(response)
                        } else if response.status().is_client_error() {
                            // Client errors (4xx) are not retried
                            error!("Provider client error: {}", response.status());
                            Err(FetchFailure::fatal(ViewboardError::data_unavailable(
                                format!("Provider returned client error: {}", response.status()),
                            )))
                        } else {
                            warn!("Provider server error, will retry: {}", response.status());
                            Err(FetchFailure::retryable(ViewboardError::data_unavailable(
                                format!("Provider returned server error: {}", response.status()),
                            )))
                        }
                    }
                    Err(e) if e.is_timeout() => {
                        warn!("Dataset request timeout, will retry: {}", e);
                        Err(FetchFailure::retryable(
                            ViewboardError::data_unavailable_with_source("Request timeout", e),
                        ))
                    }
                    Err(e) if e.is_connect() => {
                        warn!("Provider connection error, will retry: {}", e);
                        Err(FetchFailure::retryable(
                            ViewboardError::data_unavailable_with_source("Connection error", e),
                        ))
                    }
                    Err(e) => {
                        error!("Dataset request failed: {}", e);
                        Err(FetchFailure::fatal(
                            ViewboardError::data_unavailable_with_source("Request failed", e),
                        ))
                    }
                }
            },
            |failure: &FetchFailure| failure.retryable,
        )
        .await
        .map_err(|failure| failure.error)?;

        let text = response.text().await.map_err(|e| {
            ViewboardError::data_unavailable_with_source("Failed to read dataset body", e)
        })?;

        let records: Vec<ViewRecord> = serde_json::from_str(&text).map_err(|e| {
            ViewboardError::data_unavailable_with_source("Malformed dataset payload", e)
        })?;

        info!("Fetched {} viewership records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_provider_config_builder() {
        let config = ProviderConfig::new("https://example.com/dataset")
            .with_timeout(5)
            .with_max_retries(1);
        assert_eq!(config.base_url, "https://example.com/dataset");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn test_dataset_url_trims_trailing_slash() {
        let client = DatasetClient::with_defaults("https://example.com/data/").unwrap();
        assert_eq!(client.dataset_url(), "https://example.com/data");
    }

    #[tokio::test]
    async fn test_fetch_fails_fast_on_unresolvable_host() {
        let config = ProviderConfig::new("http://nonexistent.invalid")
            .with_timeout(1)
            .with_max_retries(0);
        let client = DatasetClient::new(config).unwrap();

        let result = client.fetch_dataset().await;
        assert!(matches!(
            result,
            Err(ViewboardError::DataUnavailable { .. })
        ));
    }
}
