use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};

use crate::embed::WebhookPayload;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Delivers composed payloads to one Discord-compatible webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    http: Client,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for webhook delivery")?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }

    /// POST the payload once and return the HTTP status. A non-success
    /// status is reported back to the caller, not raised as an error.
    pub async fn deliver(&self, payload: &WebhookPayload) -> Result<StatusCode> {
        let res = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .context("Failed to send payload to webhook")?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "webhook answered with a non-success status");
        }

        Ok(status)
    }
}
