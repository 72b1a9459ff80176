use locfinder_core::{CountryCode, ProviderType};
use serde_json::json;

use super::*;

fn test_client(base_url: &str) -> LocationFinderClient {
    LocationFinderClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn wire(value: Value) -> WireParams {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn base_url_gains_trailing_slash() {
    let client = test_client("https://api.dhl.com");
    assert_eq!(client.base_url().as_str(), "https://api.dhl.com/");

    let client = test_client("https://api.dhl.com//");
    assert_eq!(client.base_url().as_str(), "https://api.dhl.com/");
}

#[test]
fn base_url_path_is_kept_when_joining() {
    let client = test_client("http://localhost:8080/proxy");
    let url = client.build_url(FIND_BY_GEO, None).unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8080/proxy/location-finder/v1/find-by-geo"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = LocationFinderClient::with_base_url("k", 30, "not a url").unwrap_err();
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}

#[test]
fn build_url_encodes_keyword_params() {
    let client = test_client("https://api.dhl.com/");
    let params = FindByKeywordIdParams::new("153", CountryCode::parse("DE").unwrap(), "112233");
    let url = client
        .build_url(FIND_BY_KEYWORD_ID, Some(&params.to_request_format()))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.dhl.com/location-finder/v1/find-by-keyword-id?keywordId=153&countryCode=DE&postalCode=112233"
    );
}

#[test]
fn build_url_omits_nulls_and_repeats_lists() {
    let client = test_client("https://api.dhl.com/");
    let params = FindByAddressParams::new(CountryCode::parse("DE").unwrap())
        .with_provider_types(vec![ProviderType::Express, ProviderType::Parcel]);
    let url = client
        .build_url(FIND_BY_ADDRESS, Some(&params.to_request_format()))
        .unwrap();
    assert_eq!(
        url.query(),
        Some(
            "countryCode=DE&providerType=express&providerType=parcel&radius=5000&limit=15&hideClosedLocations=false"
        )
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://api.dhl.com");
    let params = FindByAddressParams::new(CountryCode::parse("DE").unwrap())
        .with_street_address("Frankfurter Landstrasse 107 & Co");
    let url = client
        .build_url(FIND_BY_ADDRESS, Some(&params.to_request_format()))
        .unwrap();
    assert!(
        url.as_str().contains("streetAddress=Frankfurter+Landstrasse+107+%26+Co"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn query_pairs_render_scalars_as_text() {
    let pairs = query_pairs(&wire(json!({
        "latitude": 50.716_002_7,
        "limit": 15,
        "hideClosedLocations": true,
        "countryCode": null,
        "serviceType": []
    })));
    assert_eq!(
        pairs,
        vec![
            ("latitude".to_string(), "50.7160027".to_string()),
            ("limit".to_string(), "15".to_string()),
            ("hideClosedLocations".to_string(), "true".to_string()),
        ]
    );
}

#[test]
fn location_url_encodes_id_as_single_segment() {
    let client = test_client("https://api.dhl.com");
    let url = client.location_url("8003-4103268").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.dhl.com/location-finder/v1/locations/8003-4103268"
    );

    let url = client.location_url("a/b c").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.dhl.com/location-finder/v1/locations/a%2Fb%20c"
    );
}

#[test]
fn blank_location_id_is_rejected() {
    let client = test_client("https://api.dhl.com");
    assert!(matches!(
        client.location_url("   "),
        Err(ClientError::InvalidLocationId(ref id)) if id == "   "
    ));
    assert!(matches!(
        client.location_url("\t\n"),
        Err(ClientError::InvalidLocationId(ref id)) if id == "\t\n"
    ));
}

#[test]
fn location_id_is_sent_unaltered() {
    let client = test_client("https://api.dhl.com");
    let url = client.location_url(" 8003-4103268 ").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.dhl.com/location-finder/v1/locations/%208003-4103268%20"
    );
}

#[test]
fn zero_timeout_is_rejected() {
    assert!(matches!(
        LocationFinderClient::new("k", 0),
        Err(ClientError::InvalidTimeout)
    ));
    assert!(matches!(
        LocationFinderClient::with_base_url("k", 0, "https://api.dhl.com"),
        Err(ClientError::InvalidTimeout)
    ));

    let config = ClientConfig {
        api_key: "k".to_string(),
        base_url: "https://api.dhl.com".to_string(),
        timeout_secs: 0,
        user_agent: "locfinder-test".to_string(),
        log_level: "info".to_string(),
    };
    assert!(matches!(
        LocationFinderClient::from_config(&config),
        Err(ClientError::InvalidTimeout)
    ));
}

#[test]
fn debug_output_redacts_api_key() {
    let client = test_client("https://api.dhl.com");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("test-key"));
}
