//! Detail enrichment for a single place.
//!
//! Each place gets one details lookup and, when a display name is known and a
//! summary client is configured, one description lookup. The two run
//! concurrently and fail independently. Failures are typed as
//! [`EnrichmentError`] internally and collapsed to defaults at
//! [`Enricher::enrich`], so a single bad place never aborts a batch.

use placescout_core::PlaceDetail;

use crate::client::PlacesClient;
use crate::error::EnrichmentError;
use crate::summary::SummaryClient;

pub struct Enricher {
    places: PlacesClient,
    summaries: Option<SummaryClient>,
}

impl Enricher {
    /// `summaries = None` disables description lookups entirely.
    #[must_use]
    pub fn new(places: PlacesClient, summaries: Option<SummaryClient>) -> Self {
        Self { places, summaries }
    }

    /// Gathers every detail attribute available for `place_id`.
    ///
    /// Never fails: a failed details lookup yields the default (empty)
    /// record, and a failed description lookup leaves `description` unset.
    /// Both failures are logged.
    pub async fn enrich(&self, place_id: &str, display_name: Option<&str>) -> PlaceDetail {
        let (details, description) = tokio::join!(
            self.try_details(place_id),
            self.try_description(display_name)
        );

        let mut detail = details.unwrap_or_else(|e| {
            tracing::warn!(place_id, error = %e, "place details unavailable — using defaults");
            PlaceDetail::default()
        });

        detail.description = description.unwrap_or_else(|e| {
            tracing::warn!(place_id, error = %e, "description unavailable");
            None
        });

        detail
    }

    /// Details lookup for one place. An empty identifier is not looked up.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError::Details`] wrapping the underlying client error.
    pub async fn try_details(&self, place_id: &str) -> Result<PlaceDetail, EnrichmentError> {
        if place_id.trim().is_empty() {
            tracing::debug!("search result has no place_id — skipping details lookup");
            return Ok(PlaceDetail::default());
        }

        self.places
            .fetch_details(place_id)
            .await
            .map_err(|source| EnrichmentError::Details {
                place_id: place_id.to_owned(),
                source,
            })
    }

    /// Description lookup keyed by display name. `Ok(None)` when no name was
    /// given, descriptions are disabled, or the source has nothing.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError::Description`] wrapping the underlying client error.
    pub async fn try_description(
        &self,
        display_name: Option<&str>,
    ) -> Result<Option<String>, EnrichmentError> {
        let (Some(summaries), Some(name)) = (&self.summaries, display_name) else {
            return Ok(None);
        };
        if name.trim().is_empty() {
            return Ok(None);
        }

        summaries
            .fetch_summary(name)
            .await
            .map_err(|source| EnrichmentError::Description {
                name: name.to_owned(),
                source,
            })
    }
}
