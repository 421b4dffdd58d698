//! Conversion from raw Places response types to [`placescout_core`] records.

use placescout_core::{Coordinates, PlaceDetail, PlaceSummary, Review};

use crate::types::{DetailsResult, NearbyResult};

/// Reviews kept per place.
pub const MAX_REVIEWS: usize = 3;

/// Photo URLs kept per place.
pub const MAX_PHOTOS: usize = 3;

/// Converts one nearby-search result into a [`PlaceSummary`].
///
/// Blank strings are treated as absent.
#[must_use]
pub fn normalize_nearby_result(result: NearbyResult) -> PlaceSummary {
    PlaceSummary {
        place_id: result.place_id,
        name: result.name,
        address: non_blank(result.vicinity),
        rating: result.rating,
        types: result.types,
        coordinates: result
            .geometry
            .and_then(|g| g.location)
            .and_then(|l| l.lat.zip(l.lng))
            .map(|(lat, lng)| Coordinates::new(lat, lng)),
    }
}

/// Converts a details payload into a [`PlaceDetail`], truncating reviews
/// and photos and turning photo references into URLs with `photo_url`.
/// Photos without a reference are skipped before truncation.
///
/// `description` is always `None` here.
pub fn normalize_details<F>(result: DetailsResult, photo_url: F) -> PlaceDetail
where
    F: Fn(&str) -> String,
{
    PlaceDetail {
        phone: non_blank(result.formatted_phone_number),
        website: non_blank(result.website),
        opening_hours: result
            .opening_hours
            .and_then(|h| h.weekday_text)
            .filter(|lines| !lines.is_empty()),
        reviews: result
            .reviews
            .into_iter()
            .take(MAX_REVIEWS)
            .map(|r| Review {
                author: r.author_name,
                rating: r.rating,
                text: r.text,
            })
            .collect(),
        photo_urls: result
            .photos
            .iter()
            .filter(|p| !p.photo_reference.trim().is_empty())
            .take(MAX_PHOTOS)
            .map(|p| photo_url(&p.photo_reference))
            .collect(),
        description: None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
