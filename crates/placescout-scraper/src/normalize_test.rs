use super::*;
use crate::types::{ApiPhoto, ApiReview, Geometry, LatLng, OpeningHours};

// -----------------------------------------------------------------------
// normalize_nearby_result
// -----------------------------------------------------------------------

fn make_nearby_result() -> NearbyResult {
    NearbyResult {
        place_id: "ChIJ-hotel".to_owned(),
        name: "Hotel Carlos V".to_owned(),
        vicinity: Some("Independencia 110, Santiago del Estero".to_owned()),
        rating: Some(4.3),
        types: vec!["lodging".to_owned(), "point_of_interest".to_owned()],
        geometry: Some(Geometry {
            location: Some(LatLng {
                lat: Some(-27.7871),
                lng: Some(-64.2598),
            }),
        }),
    }
}

#[test]
fn nearby_result_maps_all_fields() {
    let summary = normalize_nearby_result(make_nearby_result());
    assert_eq!(summary.place_id, "ChIJ-hotel");
    assert_eq!(summary.name, "Hotel Carlos V");
    assert_eq!(
        summary.address.as_deref(),
        Some("Independencia 110, Santiago del Estero")
    );
    assert_eq!(summary.rating, Some(4.3));
    assert_eq!(summary.types, vec!["lodging", "point_of_interest"]);
    assert_eq!(summary.coordinates, Some(Coordinates::new(-27.7871, -64.2598)));
}

#[test]
fn nearby_result_blank_vicinity_is_absent() {
    let mut raw = make_nearby_result();
    raw.vicinity = Some("  ".to_owned());
    raw.geometry = None;
    raw.rating = None;
    let summary = normalize_nearby_result(raw);
    assert!(summary.address.is_none());
    assert!(summary.coordinates.is_none());
    assert!(summary.rating.is_none());
}

#[test]
fn nearby_result_without_full_location_has_no_coordinates() {
    let mut raw = make_nearby_result();
    raw.geometry = Some(Geometry { location: None });
    assert!(normalize_nearby_result(raw).coordinates.is_none());

    let mut raw = make_nearby_result();
    raw.geometry = Some(Geometry {
        location: Some(LatLng {
            lat: Some(-27.7871),
            lng: None,
        }),
    });
    let summary = normalize_nearby_result(raw);
    assert!(summary.coordinates.is_none());
    assert_eq!(summary.name, "Hotel Carlos V");
}

#[test]
fn nearby_result_decodes_geometry_with_only_viewport() {
    let raw: NearbyResult = serde_json::from_value(serde_json::json!({
        "place_id": "p2",
        "name": "Hostal",
        "geometry": { "viewport": {} }
    }))
    .expect("viewport-only geometry should decode");
    let summary = normalize_nearby_result(raw);
    assert_eq!(summary.place_id, "p2");
    assert!(summary.coordinates.is_none());
}

// -----------------------------------------------------------------------
// normalize_details
// -----------------------------------------------------------------------

fn review(n: usize) -> ApiReview {
    ApiReview {
        author_name: format!("Author {n}"),
        rating: Some(5.0),
        text: format!("Review {n}"),
    }
}

fn photo(n: usize) -> ApiPhoto {
    ApiPhoto {
        photo_reference: format!("ref-{n}"),
    }
}

fn fake_photo_url(reference: &str) -> String {
    format!("https://photos.test/{reference}")
}

#[test]
fn details_truncate_reviews_and_photos_to_three() {
    let result = DetailsResult {
        formatted_phone_number: Some("0385 421-1234".to_owned()),
        website: Some("https://hotel.example".to_owned()),
        opening_hours: Some(OpeningHours {
            weekday_text: Some(vec!["Monday: Open 24 hours".to_owned()]),
        }),
        reviews: (1..=5).map(review).collect(),
        photos: (1..=4).map(photo).collect(),
    };

    let detail = normalize_details(result, fake_photo_url);

    assert_eq!(detail.phone.as_deref(), Some("0385 421-1234"));
    assert_eq!(detail.website.as_deref(), Some("https://hotel.example"));
    assert_eq!(
        detail.opening_hours,
        Some(vec!["Monday: Open 24 hours".to_owned()])
    );
    assert_eq!(detail.reviews.len(), MAX_REVIEWS);
    assert_eq!(detail.reviews[0].author, "Author 1");
    assert_eq!(detail.reviews[2].text, "Review 3");
    assert_eq!(
        detail.photo_urls,
        vec![
            "https://photos.test/ref-1",
            "https://photos.test/ref-2",
            "https://photos.test/ref-3",
        ]
    );
    assert!(detail.description.is_none());
}

#[test]
fn details_empty_payload_is_default_record() {
    let detail = normalize_details(DetailsResult::default(), fake_photo_url);
    assert!(detail.is_empty());
}

#[test]
fn details_hours_without_weekday_text_is_absent() {
    let result = DetailsResult {
        opening_hours: Some(OpeningHours { weekday_text: None }),
        ..DetailsResult::default()
    };
    assert!(normalize_details(result, fake_photo_url).opening_hours.is_none());

    let result = DetailsResult {
        opening_hours: Some(OpeningHours {
            weekday_text: Some(vec![]),
        }),
        ..DetailsResult::default()
    };
    assert!(normalize_details(result, fake_photo_url).opening_hours.is_none());
}

#[test]
fn details_skip_photos_without_reference() {
    let raw: DetailsResult = serde_json::from_value(serde_json::json!({
        "photos": [
            { "height": 100 },
            { "photo_reference": "ref-1" },
            { "photo_reference": "  " },
            { "photo_reference": "ref-2" }
        ]
    }))
    .expect("photos without reference should decode");
    let detail = normalize_details(raw, fake_photo_url);
    assert_eq!(
        detail.photo_urls,
        vec!["https://photos.test/ref-1", "https://photos.test/ref-2"]
    );
}
