//! Shared request plumbing for the Places and summary clients.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::ScraperError;
use crate::rate_limit::retry_with_backoff;

/// Transport settings common to every upstream client.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after the first failure for 429s and network
    /// errors. `0` disables retries.
    pub max_retries: u32,
    /// Base delay for exponential backoff: `backoff_base_secs * 2^attempt`.
    pub backoff_base_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "placescout/0.1 (tourism-info)".to_string(),
            max_retries: 0,
            backoff_base_secs: 2,
        }
    }
}

impl HttpSettings {
    /// Builds a `reqwest::Client` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the client cannot be constructed
    /// (e.g., invalid TLS config).
    pub(crate) fn build_client(&self) -> Result<Client, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&self.user_agent)
            .build()?;
        Ok(client)
    }
}

/// Parses a base URL, normalised to exactly one trailing slash so relative
/// joins append to the configured path instead of replacing its last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ScraperError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Renders a request URL without its query string. Places URLs carry the API
/// key as a query parameter, so this form is the only one that goes into
/// errors and logs.
pub(crate) fn display_url(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}

/// Sends a GET, maps non-2xx statuses to typed errors, and parses the body
/// as JSON, retrying transient failures per `settings`.
///
/// # Errors
///
/// - [`ScraperError::RateLimited`] — HTTP 429 after all retries.
/// - [`ScraperError::NotFound`] — HTTP 404.
/// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
/// - [`ScraperError::Http`] — network or TLS failure after all retries.
/// - [`ScraperError::Deserialize`] — body is not the expected JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    settings: &HttpSettings,
    url: &Url,
    context: &str,
) -> Result<T, ScraperError> {
    retry_with_backoff(settings.max_retries, settings.backoff_base_secs, || async move {
        let response = client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ScraperError::Http(e.without_url()))?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            return Err(ScraperError::RateLimited {
                domain: url.host_str().unwrap_or_default().to_owned(),
                retry_after_secs,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: display_url(url),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: display_url(url),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScraperError::Http(e.without_url()))?;
        serde_json::from_str::<T>(&body).map_err(|e| ScraperError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    })
    .await
}
