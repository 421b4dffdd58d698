use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by {domain} (retry after {retry_after_secs}s)")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The Places API answered 200 but reported a failure in its `status` field
    /// (e.g. `OVER_QUERY_LIMIT`, `REQUEST_DENIED`, `INVALID_REQUEST`).
    #[error("places API returned {status}: {message}")]
    ApiStatus { status: String, message: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// A failed enrichment lookup. Never escapes [`crate::Enricher::enrich`];
/// it exists so the failure is typed up to the point it is logged and
/// replaced with a default.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("details lookup failed for place {place_id}: {source}")]
    Details {
        place_id: String,
        #[source]
        source: ScraperError,
    },

    #[error("description lookup failed for \"{name}\": {source}")]
    Description {
        name: String,
        #[source]
        source: ScraperError,
    },
}
