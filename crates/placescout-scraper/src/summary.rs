//! Client for the encyclopedia page-summary endpoint
//! (`/api/rest_v1/page/summary/{title}`).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::http::{get_json, parse_base_url, HttpSettings};
use crate::types::SummaryResponse;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/";

const SUMMARY_PATH: &str = "api/rest_v1/page/summary/";

/// Characters left unescaped in a page title, matching what browsers leave
/// alone in a URI component.
const TITLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Looks up a short free-text description for a place name.
#[derive(Clone)]
pub struct SummaryClient {
    client: Client,
    base_url: Url,
    http: HttpSettings,
}

impl SummaryClient {
    /// Creates a client pointed at English Wikipedia.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(http: &HttpSettings) -> Result<Self, ScraperError> {
        Self::with_base_url(DEFAULT_BASE_URL, http)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(base_url: &str, http: &HttpSettings) -> Result<Self, ScraperError> {
        Ok(Self {
            client: http.build_client()?,
            base_url: parse_base_url(base_url)?,
            http: http.clone(),
        })
    }

    /// Fetches the summary extract for `title`.
    ///
    /// Returns `Ok(None)` when no page exists (HTTP 404) or the page has no
    /// usable extract; absence is not an error.
    ///
    /// # Errors
    ///
    /// Any other transport, status, or decoding failure.
    pub async fn fetch_summary(&self, title: &str) -> Result<Option<String>, ScraperError> {
        let url = self.summary_url(title)?;
        match get_json::<SummaryResponse>(
            &self.client,
            &self.http,
            &url,
            &format!("page summary ({title})"),
        )
        .await
        {
            Ok(body) => Ok(body.extract.filter(|s| !s.trim().is_empty())),
            Err(ScraperError::NotFound { .. }) => {
                tracing::debug!(title, "no summary page for title");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn summary_url(&self, title: &str) -> Result<Url, ScraperError> {
        let encoded = utf8_percent_encode(title.trim(), TITLE).to_string();
        let raw = format!("{}{SUMMARY_PATH}{encoded}", self.base_url);
        Url::parse(&raw).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: self.base_url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SummaryClient {
        SummaryClient::with_base_url("https://en.wikipedia.org", &HttpSettings::default())
            .expect("client construction should not fail")
    }

    #[test]
    fn summary_url_encodes_spaces_and_accents() {
        let url = test_client().summary_url("Catedral de Santiago del Estero").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Catedral%20de%20Santiago%20del%20Estero"
        );

        let url = test_client().summary_url("Parque Aguirre – Río Dulce").unwrap();
        assert!(
            url.as_str().ends_with("Parque%20Aguirre%20%E2%80%93%20R%C3%ADo%20Dulce"),
            "unexpected encoding: {url}"
        );
    }

    #[test]
    fn summary_url_escapes_slashes_in_titles() {
        let url = test_client().summary_url("AC/DC").unwrap();
        assert!(url.as_str().ends_with("/summary/AC%2FDC"), "got {url}");
    }

    #[test]
    fn summary_url_leaves_parentheses_alone() {
        let url = test_client().summary_url("Mercury (planet)").unwrap();
        assert!(url.as_str().ends_with("/summary/Mercury%20(planet)"), "got {url}");
    }
}
