//! HTTP client for the Places web service (nearby search, details, photos).

use placescout_core::{Coordinates, PlaceDetail, PlaceSummary};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::http::{get_json, parse_base_url, HttpSettings};
use crate::normalize::{normalize_details, normalize_nearby_result};
use crate::types::{DetailsResponse, NearbySearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

const NEARBY_SEARCH_PATH: &str = "maps/api/place/nearbysearch/json";
const DETAILS_PATH: &str = "maps/api/place/details/json";
const PHOTO_PATH: &str = "maps/api/place/photo";

/// Only the attributes the enricher keeps are requested.
const DETAIL_FIELDS: &str = "formatted_phone_number,website,opening_hours,reviews,photos";

/// Width passed to the photo endpoint for every generated photo URL.
pub const PHOTO_MAX_WIDTH: u32 = 400;

/// One page of nearby-search results.
#[derive(Debug)]
pub struct NearbyPage {
    pub results: Vec<PlaceSummary>,
    /// Continuation cursor for the next page, if any.
    pub next_page_token: Option<String>,
}

/// Client for the Places web service.
///
/// Non-2xx HTTP responses and non-`OK` API statuses both surface as
/// [`ScraperError`]s. Use [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    http: HttpSettings,
}

impl PlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, http: &HttpSettings) -> Result<Self, ScraperError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, http)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        http: &HttpSettings,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            client: http.build_client()?,
            api_key: api_key.to_owned(),
            base_url: parse_base_url(base_url)?,
            http: http.clone(),
        })
    }

    /// Fetches one page of nearby-search results for a place type around
    /// `location`.
    ///
    /// `page_token` must come from the previous page and must already be
    /// redeemable; see [`crate::PageToken`].
    ///
    /// # Errors
    ///
    /// - [`ScraperError::ApiStatus`] if the API reports anything other than
    ///   `OK` or `ZERO_RESULTS`.
    /// - Any transport error from the shared request helper.
    pub async fn fetch_nearby_page(
        &self,
        location: Coordinates,
        radius_m: u32,
        place_type: &str,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, ScraperError> {
        let location = location.to_string();
        let radius = radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("type", place_type),
        ];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let url = self.endpoint_url(NEARBY_SEARCH_PATH, &params);
        let body: NearbySearchResponse =
            get_json(&self.client, &self.http, &url, &format!("nearby search ({place_type})"))
                .await?;
        Self::check_status(&body.status, body.error_message.as_deref())?;

        Ok(NearbyPage {
            results: body
                .results
                .into_iter()
                .map(normalize_nearby_result)
                .collect(),
            next_page_token: body.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    /// Fetches the detail attributes of one place.
    ///
    /// The returned record has no description; that comes from a separate
    /// source.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::ApiStatus`] if the API reports anything other than
    ///   `OK` or `ZERO_RESULTS` (e.g. `NOT_FOUND` for a stale identifier).
    /// - Any transport error from the shared request helper.
    pub async fn fetch_details(&self, place_id: &str) -> Result<PlaceDetail, ScraperError> {
        let url = self.endpoint_url(
            DETAILS_PATH,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        );
        let body: DetailsResponse = get_json(
            &self.client,
            &self.http,
            &url,
            &format!("place details ({place_id})"),
        )
        .await?;
        Self::check_status(&body.status, body.error_message.as_deref())?;

        Ok(normalize_details(body.result.unwrap_or_default(), |reference| {
            self.photo_url(reference)
        }))
    }

    /// Builds a fetchable photo URL for a photo reference.
    #[must_use]
    pub fn photo_url(&self, photo_reference: &str) -> String {
        let width = PHOTO_MAX_WIDTH.to_string();
        self.endpoint_url(
            PHOTO_PATH,
            &[("maxwidth", width.as_str()), ("photoreference", photo_reference)],
        )
        .to_string()
    }

    /// Builds `{base}/{path}?{params}&key={api_key}` with every value
    /// percent-encoded.
    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{path}", self.base_url.path()));
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Maps the Places `status` envelope field to a result.
    fn check_status(status: &str, error_message: Option<&str>) -> Result<(), ScraperError> {
        match status {
            "OK" | "ZERO_RESULTS" => Ok(()),
            other => Err(ScraperError::ApiStatus {
                status: other.to_owned(),
                message: error_message.unwrap_or("no error message").to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
