//! Response types for the Places web service and the encyclopedia summary
//! endpoint.
//!
//! ## Observed shape
//!
//! ### `status`
//! Every Places response carries a top-level `status` string. `"OK"` and
//! `"ZERO_RESULTS"` are successes; anything else (`"INVALID_REQUEST"`,
//! `"OVER_QUERY_LIMIT"`, `"REQUEST_DENIED"`, `"UNKNOWN_ERROR"`) is a failure
//! even though the HTTP status is 200. `error_message` is only present on
//! failures, and not always then.
//!
//! ### `next_page_token`
//! Present only when more results exist. A fresh token is rejected with
//! `"INVALID_REQUEST"` until it becomes valid a couple of seconds later.
//!
//! ### Optional fields
//! `vicinity`, `rating`, `types`, and `geometry` are all omitted for some
//! places. Details omit any attribute the place does not have. Everything
//! except identifiers is modelled as `Option` or `#[serde(default)]`.

use serde::Deserialize;

/// Top-level response from `GET /maps/api/place/nearbysearch/json`.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<NearbyResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single place in a nearby-search page.
#[derive(Debug, Deserialize)]
pub struct NearbyResult {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    /// Short street address, e.g. `"Av. Belgrano Sur 380, Santiago del Estero"`.
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Some results carry only a `viewport`; `location` is then absent.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Top-level response from `GET /maps/api/place/details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<DetailsResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailsResult {
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub reviews: Vec<ApiReview>,
    #[serde(default)]
    pub photos: Vec<ApiPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiReview {
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiPhoto {
    #[serde(default)]
    pub photo_reference: String,
}

/// Response from `GET /api/rest_v1/page/summary/{title}`.
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub extract: Option<String>,
}
