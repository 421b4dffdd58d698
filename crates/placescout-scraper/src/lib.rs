//! HTTP clients and the search pipeline for collecting places of interest.

pub mod client;
pub mod concurrency;
pub mod enrich;
pub mod error;
pub mod http;
pub mod normalize;
pub mod pagination;
pub(crate) mod rate_limit;
pub mod search;
pub mod summary;
pub mod types;

pub use client::{NearbyPage, PlacesClient};
pub use concurrency::map_bounded;
pub use enrich::Enricher;
pub use error::{EnrichmentError, ScraperError};
pub use http::HttpSettings;
pub use pagination::PageToken;
pub use search::{SearchDriver, SearchSettings, MAX_PAGES};
pub use summary::SummaryClient;
