//! Paginated nearby search for one category, with per-place enrichment.

use std::time::Duration;

use placescout_core::{Category, Coordinates, EnrichedPlace};

use crate::client::PlacesClient;
use crate::concurrency::map_bounded;
use crate::enrich::Enricher;
use crate::pagination::PageToken;

/// Pages fetched per category before giving up on a token chain. The
/// upstream API stops at three pages; this only guards against a cycling
/// cursor.
pub const MAX_PAGES: usize = 10;

/// Fixed parameters of a search run.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub origin: Coordinates,
    pub radius_m: u32,
    /// Detail lookups in flight at once while enriching a page.
    pub detail_concurrency: usize,
    /// Minimum wait before a continuation token is redeemed, measured from
    /// when the token arrived. Time spent enriching the page counts toward it.
    pub page_delay: Duration,
}

impl SearchSettings {
    #[must_use]
    pub fn new(origin: Coordinates, radius_m: u32) -> Self {
        Self {
            origin,
            radius_m,
            detail_concurrency: 5,
            page_delay: Duration::from_millis(2000),
        }
    }
}

pub struct SearchDriver {
    places: PlacesClient,
    enricher: Enricher,
    settings: SearchSettings,
}

impl SearchDriver {
    #[must_use]
    pub fn new(places: PlacesClient, enricher: Enricher, settings: SearchSettings) -> Self {
        Self {
            places,
            enricher,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Fetches and enriches every place of `category` around the configured
    /// origin.
    ///
    /// Follows continuation tokens page by page, waiting out each token's
    /// delay before redeeming it. Output order is page order, then the order
    /// within each page; nothing is deduplicated.
    ///
    /// **Best-effort semantics**: a failed page ends the category. Places
    /// from earlier pages are kept and the error is logged, not returned.
    /// A category with no results yields an empty `Vec`.
    pub async fn search_all(&self, category: &Category) -> Vec<EnrichedPlace> {
        let mut places: Vec<EnrichedPlace> = Vec::new();
        let mut next_token: Option<PageToken> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                tracing::warn!(
                    category = %category.label,
                    max_pages = MAX_PAGES,
                    "page limit reached — stopping pagination"
                );
                break;
            }

            let cursor = match next_token.take() {
                Some(token) => Some(token.redeem(self.settings.page_delay).await),
                None => None,
            };

            let page = match self
                .places
                .fetch_nearby_page(
                    self.settings.origin,
                    self.settings.radius_m,
                    &category.place_type,
                    cursor.as_deref(),
                )
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        category = %category.label,
                        page = page_count,
                        kept = places.len(),
                        error = %e,
                        "nearby search page failed — keeping results gathered so far"
                    );
                    break;
                }
            };

            // The token's delay starts now, so enrichment time counts toward it.
            next_token = page.next_page_token.map(PageToken::new);

            let details = map_bounded(&page.results, self.settings.detail_concurrency, |s| {
                self.enricher.enrich(&s.place_id, Some(s.name.as_str()))
            })
            .await;

            let page_len = page.results.len();
            places.extend(
                page.results
                    .into_iter()
                    .zip(details)
                    .map(|(summary, detail)| EnrichedPlace::new(summary, detail)),
            );

            tracing::debug!(
                category = %category.label,
                page = page_count,
                page_len,
                total = places.len(),
                has_next = next_token.is_some(),
                "nearby search page enriched"
            );

            if next_token.is_none() {
                break;
            }
        }

        tracing::info!(
            category = %category.label,
            count = places.len(),
            "category search complete"
        );
        places
    }
}
