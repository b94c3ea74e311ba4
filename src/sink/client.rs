//! HTTPS client for the hosted applicants table
//!
//! Rows are inserted through the table's REST endpoint
//! (`{endpoint}/rest/v1/{table}`), authenticated with the project's anon key.

use super::traits::ApplicantSink;
use crate::config::SinkConfig;
use crate::error::{ConfigurationError, SubmissionError};
use crate::state::ApplicantRecord;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use std::time::Duration;

/// Upper bound for a single insert round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Keys an error body may carry a readable message under, in priority order
const MESSAGE_KEYS: &[&str] = &["message", "error_description", "error", "hint"];

/// Client for inserting applicant rows over HTTPS
pub struct RestClient {
    /// Shared HTTP client with auth headers preset
    http: reqwest::Client,
    /// Fully resolved insert URL for the target table
    insert_url: Url,
}

impl RestClient {
    /// Create a new client from resolved settings
    pub fn new(config: &SinkConfig) -> Result<Self, ConfigurationError> {
        let insert_url = insert_url(&config.endpoint_url, &config.table)?;

        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|e| ConfigurationError::InvalidKey(e.to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|e| ConfigurationError::InvalidKey(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("prefer", HeaderValue::from_static("return=minimal"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigurationError::InvalidEndpoint(e.to_string()))?;

        Ok(Self { http, insert_url })
    }
}

#[async_trait]
impl ApplicantSink for RestClient {
    async fn insert(&self, records: &[ApplicantRecord]) -> Result<(), SubmissionError> {
        let response = self
            .http
            .post(self.insert_url.clone())
            .json(records)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Insert rejected by sink");
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message: error_message(&body).unwrap_or_default(),
        })
    }
}

/// Build `{endpoint}/rest/v1/{table}`, accepting only http(s) endpoints
fn insert_url(endpoint_url: &str, table: &str) -> Result<Url, ConfigurationError> {
    let raw = format!("{}/rest/v1/{}", endpoint_url.trim_end_matches('/'), table);
    let url = Url::parse(&raw).map_err(|e| ConfigurationError::InvalidEndpoint(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigurationError::InvalidEndpoint(format!(
            "unsupported scheme {other}"
        ))),
    }
}

/// Pull a readable message out of an error response body
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    MESSAGE_KEYS
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}
