use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", base_url, &HttpSettings::default())
        .expect("client construction should not fail")
}

#[test]
fn endpoint_url_appends_params_then_key() {
    let client = test_client("https://maps.googleapis.com");
    let url = client.endpoint_url(NEARBY_SEARCH_PATH, &[("type", "lodging")]);
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json?type=lodging&key=test-key"
    );
}

#[test]
fn endpoint_url_keeps_base_path_prefix() {
    let client = test_client("http://127.0.0.1:8080/proxy/");
    let url = client.endpoint_url(DETAILS_PATH, &[("place_id", "abc")]);
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8080/proxy/maps/api/place/details/json?place_id=abc&key=test-key"
    );
}

#[test]
fn endpoint_url_encodes_location_comma() {
    let client = test_client("https://maps.googleapis.com");
    let url = client.endpoint_url(
        NEARBY_SEARCH_PATH,
        &[("location", "-27.7833,-64.2667")],
    );
    assert!(
        url.as_str().contains("location=-27.7833%2C-64.2667"),
        "location should be percent-encoded: {url}"
    );
}

#[test]
fn photo_url_uses_fixed_width_reference_and_key() {
    let client = test_client("https://maps.googleapis.com");
    assert_eq!(
        client.photo_url("AbC123"),
        "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photoreference=AbC123&key=test-key"
    );
}

#[test]
fn check_status_accepts_ok_and_zero_results() {
    assert!(PlacesClient::check_status("OK", None).is_ok());
    assert!(PlacesClient::check_status("ZERO_RESULTS", None).is_ok());
}

#[test]
fn check_status_rejects_everything_else() {
    let err = PlacesClient::check_status("REQUEST_DENIED", Some("The provided API key is invalid."))
        .unwrap_err();
    match err {
        ScraperError::ApiStatus { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[test]
fn with_base_url_rejects_invalid_base() {
    let result = PlacesClient::with_base_url("k", "::not-a-url::", &HttpSettings::default());
    assert!(matches!(result, Err(ScraperError::InvalidBaseUrl { .. })));
}
