//! HTTP contact sink

use contact_sync_core::contracts::NormalizedContact;
use futures::future::BoxFuture;
use std::time::Duration;

use super::{Acknowledgement, ContactSink, CreateError};
use crate::config::DEFAULT_TIMEOUT_MS;

/// `POST`s one contact per call to the upstream endpoint
pub struct HttpContactSink {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpContactSink {
    /// Create new sink for the given endpoint URL
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

    async fn post(&self, contact: &NormalizedContact) -> Result<Acknowledgement, CreateError> {
        let airtable_id = contact.source_id();
        tracing::debug!(url = %self.url, airtable_id = %airtable_id, "Creating contact");

        let response = self
            .client
            .post(&self.url)
            .json(contact)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CreateError::Network {
                airtable_id: airtable_id.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            // Upstream may answer with an empty or non-JSON body
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);

            Ok(Acknowledgement {
                status: status.as_u16(),
                body,
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CreateError::Server {
                airtable_id: airtable_id.to_string(),
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl ContactSink for HttpContactSink {
    fn create<'a>(
        &'a self,
        contact: &'a NormalizedContact,
    ) -> BoxFuture<'a, Result<Acknowledgement, CreateError>> {
        Box::pin(self.post(contact))
    }
}
