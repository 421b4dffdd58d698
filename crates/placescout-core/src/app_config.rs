use std::path::PathBuf;

use crate::places::Coordinates;

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    /// Centre of every nearby search.
    pub origin: Coordinates,
    pub radius_m: u32,
    pub categories_path: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: String,
    /// Detail lookups allowed in flight at once while enriching a page.
    pub detail_concurrency: usize,
    /// Minimum wait before a continuation token may be redeemed.
    pub page_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub places_base_url: String,
    pub summary_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"[redacted]")
            .field("origin", &self.origin)
            .field("radius_m", &self.radius_m)
            .field("categories_path", &self.categories_path)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .field("detail_concurrency", &self.detail_concurrency)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("places_base_url", &self.places_base_url)
            .field("summary_base_url", &self.summary_base_url)
            .finish()
    }
}
