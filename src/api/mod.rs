//! HTTP glue around the transform.
//!
//! One endpoint serves both directions: GET hands us the flat input
//! document, POST takes the aggregated summary back. The client does no
//! retries and no validation beyond JSON parsing; any failure surfaces to
//! the entry point as-is.

use crate::model::{InputData, OutputData};
use anyhow::{Context, Result};
use std::time::Duration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the review endpoint.
pub struct ApiClient {
    url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }

    /// The endpoint this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the input document.
    pub async fn fetch_data(&self) -> Result<InputData> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Fetch failed ({status}): {body}");
        }

        resp.json()
            .await
            .context("response body is not a valid input document")
    }

    /// Post the aggregated document back.
    ///
    /// Returns a human-readable status report; a non-2xx response is part of
    /// the report, not an error.
    pub async fn post_data(&self, data: &OutputData) -> Result<String> {
        let resp = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(data)
            .send()
            .await
            .with_context(|| format!("POST {} failed", self.url))?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        Ok(format!("Status Code: {status}\n Message: {body}"))
    }
}
