//! HTTP people source

use contact_sync_core::contracts::SourceRecord;
use futures::future::BoxFuture;
use std::time::Duration;

use super::{FetchError, PeopleSource};
use crate::config::DEFAULT_TIMEOUT_MS;

/// `GET`s the whole people list from the upstream endpoint
pub struct HttpPeopleSource {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPeopleSource {
    /// Create new source for the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Share an existing HTTP client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<SourceRecord>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching people");

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))
        } else {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            Err(FetchError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl PeopleSource for HttpPeopleSource {
    fn fetch_all(&self) -> BoxFuture<'_, Result<Vec<SourceRecord>, FetchError>> {
        Box::pin(self.fetch())
    }
}
