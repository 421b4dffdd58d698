use std::path::Path;

use placescout_core::{
    CategoryResultSet, Coordinates, EnrichedPlace, PlaceDetail, PlaceSummary, Review,
};

use super::*;

fn bare_place(id: &str, name: &str) -> EnrichedPlace {
    EnrichedPlace::new(
        PlaceSummary {
            place_id: id.to_string(),
            name: name.to_string(),
            address: None,
            rating: None,
            types: vec!["lodging".to_string()],
            coordinates: None,
        },
        PlaceDetail::default(),
    )
}

fn full_place() -> EnrichedPlace {
    EnrichedPlace::new(
        PlaceSummary {
            place_id: "p1".to_string(),
            name: "Hotel Savoy".to_string(),
            address: Some("Tucumán 39, Santiago del Estero".to_string()),
            rating: Some(4.5),
            types: vec!["lodging".to_string()],
            coordinates: Some(Coordinates::new(-27.78, -64.26)),
        },
        PlaceDetail {
            phone: Some("0385 421-1234".to_string()),
            website: Some("https://savoy.example".to_string()),
            opening_hours: Some(vec!["Monday: Open 24 hours".to_string()]),
            reviews: vec![Review {
                author: "Ana".to_string(),
                rating: Some(5.0),
                text: "Great".to_string(),
            }],
            photo_urls: vec![],
            description: Some("A historic hotel in the city centre.".to_string()),
        },
    )
}

fn render_report(results: &CategoryResultSet) -> String {
    let mut buf = Vec::new();
    write_report(results, &mut buf).expect("report should render");
    String::from_utf8(buf).expect("report should be utf-8")
}

fn render_json(results: &CategoryResultSet) -> String {
    let mut buf = Vec::new();
    write_json(results, &mut buf).expect("json should render");
    String::from_utf8(buf).expect("json should be utf-8")
}

#[test]
fn default_path_uses_format_extension() {
    let dir = Path::new("./data");
    assert_eq!(
        OutputFormat::Json.default_path(dir),
        Path::new("./data/info-turismo.json")
    );
    assert_eq!(
        OutputFormat::Pdf.default_path(dir),
        Path::new("./data/info-turismo.pdf")
    );
    assert_eq!(
        OutputFormat::Report.default_path(dir),
        Path::new("./data/info-turismo.txt")
    );
}

#[test]
fn json_keeps_category_run_order() {
    let mut results = CategoryResultSet::new();
    results.insert("hotels", vec![bare_place("h1", "Savoy")]);
    results.insert("attractions", vec![bare_place("a1", "Parque Aguirre")]);

    let json = render_json(&results);
    let hotels = json.find("\"hotels\"").expect("hotels key present");
    let attractions = json.find("\"attractions\"").expect("attractions key present");
    assert!(hotels < attractions, "run order must be kept:\n{json}");
    assert!(json.ends_with('\n'));
}

#[test]
fn json_writes_missing_values_as_null_not_sentinels() {
    let mut results = CategoryResultSet::new();
    results.insert("hotels", vec![bare_place("h1", "Savoy")]);

    let json = render_json(&results);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let place = &value["hotels"][0];

    assert_eq!(place["place_id"], "h1");
    assert!(place["phone"].is_null());
    assert!(place["rating"].is_null());
    assert!(place["description"].is_null());
    assert!(!json.contains(UNAVAILABLE));
}

#[test]
fn report_renders_known_fields() {
    let mut results = CategoryResultSet::new();
    results.insert("hotels", vec![full_place()]);

    let report = render_report(&results);
    assert!(report.contains(REPORT_TITLE));
    assert!(report.contains("HOTELS\n======\n"));
    assert!(report.contains("Hotel Savoy\n"));
    assert!(report.contains("  Address: Tucumán 39, Santiago del Estero\n"));
    assert!(report.contains("  Rating: 4.5\n"), "rating shown with one decimal");
    assert!(report.contains("  Phone: 0385 421-1234\n"));
    assert!(report.contains("  Website: https://savoy.example\n"));
    assert!(report.contains("    Monday: Open 24 hours\n"));
    assert!(report.contains("  Description: A historic hotel in the city centre.\n"));
}

#[test]
fn report_uses_sentinels_for_missing_values() {
    let mut results = CategoryResultSet::new();
    results.insert("hotels", vec![bare_place("h1", "Savoy")]);

    let report = render_report(&results);
    assert!(report.contains("  Address: unavailable\n"));
    assert!(report.contains("  Rating: unrated\n"));
    assert!(report.contains("  Phone: unavailable\n"));
    assert!(report.contains("  Website: unavailable\n"));
    assert!(report.contains("  Hours: unavailable\n"));
    assert!(report.contains("  Description: description unavailable\n"));
}

#[test]
fn report_marks_empty_category() {
    let mut results = CategoryResultSet::new();
    results.insert("cafes", Vec::new());

    let report = render_report(&results);
    assert!(report.contains("CAFES\n"));
    assert!(report.contains("(no places found)"));
}

#[test]
fn report_for_empty_result_set_is_a_single_page() {
    let report = render_report(&CategoryResultSet::new());
    assert!(report.contains("No places collected."));
    assert!(report.trim_end().ends_with("page 1"));
    assert!(!report.contains('\x0C'));
}

#[test]
fn report_paginates_with_form_feed_and_fixed_height_pages() {
    let places: Vec<EnrichedPlace> = (0..30)
        .map(|i| bare_place(&format!("h{i}"), &format!("Hotel {i}")))
        .collect();
    let mut results = CategoryResultSet::new();
    results.insert("hotels", places);

    let report = render_report(&results);
    let pages: Vec<&str> = report.split("\x0C\n").collect();
    assert!(pages.len() > 1, "30 places should span several pages");

    for (i, page) in pages.iter().enumerate() {
        let lines: Vec<&str> = page.lines().collect();
        assert_eq!(
            lines.len(),
            PAGE_BODY_LINES + 2,
            "page {} should have a fixed height",
            i + 1
        );
        assert_eq!(
            lines.last().map(|l| l.trim()),
            Some(format!("page {}", i + 1).as_str())
        );
    }
}

#[test]
fn report_never_splits_a_place_across_pages() {
    let places: Vec<EnrichedPlace> = (0..30)
        .map(|i| bare_place(&format!("h{i}"), &format!("Hotel {i}")))
        .collect();
    let mut results = CategoryResultSet::new();
    results.insert("hotels", places);

    let report = render_report(&results);
    for page in report.split("\x0C\n") {
        let body: Vec<&str> = page.lines().take(PAGE_BODY_LINES).collect();
        let names = body.iter().filter(|l| l.starts_with("Hotel ")).count();
        let descriptions = body
            .iter()
            .filter(|l| l.starts_with("  Description:"))
            .count();
        assert_eq!(names, descriptions, "a place block was split:\n{page}");
    }
}

#[test]
fn wrap_breaks_on_word_boundaries() {
    let lines = wrap("one two three four five", 9);
    assert_eq!(lines, vec!["one two", "three", "four five"]);
}

#[test]
fn wrap_keeps_overlong_word_on_its_own_line() {
    let lines = wrap("a supercalifragilistic b", 5);
    assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
}

#[test]
fn wrap_of_empty_text_is_one_empty_line() {
    assert_eq!(wrap("   ", 10), vec![String::new()]);
}
