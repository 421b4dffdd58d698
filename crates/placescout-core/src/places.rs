//! Place records produced by a search run.
//!
//! Missing upstream values are modelled as `Option` (or an empty `Vec`) all the
//! way through. Placeholder text such as `"unavailable"` is a presentation
//! concern and only appears in the rendered report.

use std::fmt;
use std::str::FromStr;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Renders as `"lat,lng"`, the form the nearby-search `location` parameter takes.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinatesError {
    #[error("expected \"lat,lng\", got \"{0}\"")]
    Format(String),

    #[error("\"{0}\" is not a number")]
    Number(String),

    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_raw, lng_raw) = s
            .split_once(',')
            .ok_or_else(|| CoordinatesError::Format(s.to_string()))?;

        let parse = |raw: &str| -> Result<f64, CoordinatesError> {
            let raw = raw.trim();
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CoordinatesError::Number(raw.to_string()))
        };

        let lat = parse(lat_raw)?;
        let lng = parse(lng_raw)?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinatesError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinatesError::Longitude(lng));
        }

        Ok(Self { lat, lng })
    }
}

/// Base attributes of a place as returned by one nearby-search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    /// Opaque handle redeemable at the details endpoint.
    pub place_id: String,
    pub name: String,
    /// Short street address (`vicinity` upstream).
    pub address: Option<String>,
    pub rating: Option<f64>,
    /// Upstream category tags, e.g. `["lodging", "point_of_interest"]`.
    pub types: Vec<String>,
    pub coordinates: Option<Coordinates>,
}

/// One review attached to a place. Only the first three are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: Option<f64>,
    pub text: String,
}

/// Secondary attributes gathered by the enricher.
///
/// Every field is independent: a missing phone number says nothing about the
/// website or the description. `PlaceDetail::default()` is the record used
/// when nothing could be looked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Weekday lines such as `"Monday: 9:00 AM – 5:00 PM"`.
    pub opening_hours: Option<Vec<String>>,
    pub reviews: Vec<Review>,
    pub photo_urls: Vec<String>,
    /// Encyclopedia summary keyed by the place name.
    pub description: Option<String>,
}

impl PlaceDetail {
    /// Returns `true` if no detail attribute is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A search result merged with its details.
///
/// Serializes as one flat object; the two halves share no field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPlace {
    #[serde(flatten)]
    pub summary: PlaceSummary,
    #[serde(flatten)]
    pub detail: PlaceDetail,
}

impl EnrichedPlace {
    #[must_use]
    pub fn new(summary: PlaceSummary, detail: PlaceDetail) -> Self {
        Self { summary, detail }
    }
}

/// Places collected for one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResults {
    pub label: String,
    pub places: Vec<EnrichedPlace>,
}

/// Category label to places, kept in the order categories were collected.
///
/// Serializes as a JSON object whose keys follow insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryResultSet {
    categories: Vec<CategoryResults>,
}

impl CategoryResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `places` under `label`. A label seen before keeps its original
    /// position and the new places are appended after the existing ones.
    pub fn insert(&mut self, label: impl Into<String>, places: Vec<EnrichedPlace>) {
        let label = label.into();
        if let Some(existing) = self.categories.iter_mut().find(|c| c.label == label) {
            existing.places.extend(places);
        } else {
            self.categories.push(CategoryResults { label, places });
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[EnrichedPlace]> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.places.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryResults> {
        self.categories.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of places across every category.
    #[must_use]
    pub fn total_places(&self) -> usize {
        self.categories.iter().map(|c| c.places.len()).sum()
    }
}

impl Serialize for CategoryResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.categories.iter().map(|c| (&c.label, &c.places)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str) -> PlaceSummary {
        PlaceSummary {
            place_id: id.to_string(),
            name: name.to_string(),
            address: Some("Av. Belgrano 100".to_string()),
            rating: Some(4.2),
            types: vec!["lodging".to_string()],
            coordinates: Some(Coordinates::new(-27.78, -64.26)),
        }
    }

    #[test]
    fn coordinates_parse_and_display() {
        let c: Coordinates = "-27.7833,-64.2667".parse().unwrap();
        assert_eq!(c, Coordinates::new(-27.7833, -64.2667));
        assert_eq!(c.to_string(), "-27.7833,-64.2667");
    }

    #[test]
    fn coordinates_parse_tolerates_whitespace() {
        let c: Coordinates = " 10.5 , 20 ".parse().unwrap();
        assert_eq!(c, Coordinates::new(10.5, 20.0));
    }

    #[test]
    fn coordinates_parse_rejects_missing_comma() {
        let err = "10.5".parse::<Coordinates>().unwrap_err();
        assert_eq!(err, CoordinatesError::Format("10.5".to_string()));
    }

    #[test]
    fn coordinates_parse_rejects_non_numeric() {
        let err = "north,20".parse::<Coordinates>().unwrap_err();
        assert_eq!(err, CoordinatesError::Number("north".to_string()));
    }

    #[test]
    fn coordinates_parse_rejects_out_of_range() {
        assert_eq!(
            "91,0".parse::<Coordinates>().unwrap_err(),
            CoordinatesError::Latitude(91.0)
        );
        assert_eq!(
            "0,-181".parse::<Coordinates>().unwrap_err(),
            CoordinatesError::Longitude(-181.0)
        );
    }

    #[test]
    fn default_detail_is_empty() {
        assert!(PlaceDetail::default().is_empty());
        let detail = PlaceDetail {
            phone: Some("0385 421-0000".to_string()),
            ..PlaceDetail::default()
        };
        assert!(!detail.is_empty());
    }

    #[test]
    fn enriched_place_serializes_flat() {
        let place = EnrichedPlace::new(summary("p1", "Hotel Centro"), PlaceDetail::default());
        let value = serde_json::to_value(&place).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["name"], "Hotel Centro");
        assert_eq!(obj["place_id"], "p1");
        assert!(obj["phone"].is_null());
        assert!(obj["description"].is_null());
        assert_eq!(obj["reviews"], serde_json::json!([]));
        assert_eq!(obj["coordinates"]["lat"], -27.78);
        assert!(!obj.contains_key("summary"));
        assert!(!obj.contains_key("detail"));
    }

    #[test]
    fn enriched_place_deserializes_from_flat_object() {
        let place = EnrichedPlace::new(
            summary("p1", "Hotel Centro"),
            PlaceDetail {
                website: Some("https://hotelcentro.example".to_string()),
                ..PlaceDetail::default()
            },
        );
        let json = serde_json::to_string(&place).unwrap();
        let back: EnrichedPlace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, place);
    }

    #[test]
    fn result_set_serializes_in_insertion_order() {
        let mut set = CategoryResultSet::new();
        set.insert("restaurants", vec![]);
        set.insert(
            "hotels",
            vec![EnrichedPlace::new(summary("p1", "A"), PlaceDetail::default())],
        );
        set.insert("attractions", vec![]);

        let json = serde_json::to_string(&set).unwrap();
        let r = json.find("\"restaurants\"").unwrap();
        let h = json.find("\"hotels\"").unwrap();
        let a = json.find("\"attractions\"").unwrap();
        assert!(r < h && h < a, "keys out of order: {json}");
        assert_eq!(set.len(), 3);
        assert_eq!(set.total_places(), 1);
    }

    #[test]
    fn result_set_insert_appends_to_existing_label() {
        let mut set = CategoryResultSet::new();
        set.insert(
            "hotels",
            vec![EnrichedPlace::new(summary("p1", "A"), PlaceDetail::default())],
        );
        set.insert(
            "hotels",
            vec![EnrichedPlace::new(summary("p2", "B"), PlaceDetail::default())],
        );
        let hotels = set.get("hotels").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].summary.place_id, "p1");
        assert_eq!(hotels[1].summary.place_id, "p2");
    }

    #[test]
    fn result_set_get_unknown_label_is_none() {
        let set = CategoryResultSet::new();
        assert!(set.get("cafes").is_none());
        assert!(set.is_empty());
    }
}
