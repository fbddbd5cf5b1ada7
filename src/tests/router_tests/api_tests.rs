// src/tests/router_tests/api_tests.rs
use crate::router::respond;
use crate::tests::utils::{body_string, get, test_app};
use serde_json::Value;

fn json(uri: &str) -> (u16, Value) {
    let app = test_app();
    let mut resp = respond(get(uri), &app);
    let ct = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(ct, "application/json", "GET {uri}");

    let body = body_string(&mut resp);
    (resp.status().as_u16(), serde_json::from_str(&body).unwrap())
}

fn ids(v: &Value) -> Vec<&str> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect()
}

#[test]
fn properties_endpoint_applies_filters() {
    let (status, all) = json("/api/properties");
    assert_eq!(status, 200);
    assert_eq!(ids(&all), vec!["soya-apartment", "city-hostel", "lake-villa"]);

    let (_, cheap) = json("/api/properties?max_price=100000");
    assert_eq!(ids(&cheap), vec!["city-hostel"]);
}

#[test]
fn property_records_use_camel_case() {
    let (status, p) = json("/api/properties/soya-apartment");
    assert_eq!(status, 200);
    assert_eq!(p["type"], "Apartment");
    assert_eq!(p["priceUnit"], "night");
    assert_eq!(p["beds"], 2);

    let (_, hostel) = json("/api/properties/city-hostel");
    assert!(hostel["beds"].is_null());
}

#[test]
fn featured_and_lookups() {
    let (_, featured) = json("/api/properties/featured");
    assert_eq!(ids(&featured), vec!["soya-apartment", "lake-villa"]);

    let (_, types) = json("/api/property-types");
    assert_eq!(
        types,
        serde_json::json!(["Apartment", "Hostel", "Airbnb", "Villa", "Studio", "Commercial"])
    );

    let (_, locations) = json("/api/locations");
    assert_eq!(
        locations,
        serde_json::json!(["Soya", "Entebbe", "Kampala"])
    );
}

#[test]
fn faq_endpoints() {
    let (_, faqs) = json("/api/faqs?q=book");
    assert_eq!(ids(&faqs), vec!["how-book"]);

    let (_, categories) = json("/api/faq-categories");
    assert_eq!(categories, serde_json::json!(["Booking", "Payments"]));
}

#[test]
fn errors_are_json_under_api() {
    let (status, err) = json("/api/properties/nowhere");
    assert_eq!(status, 404);
    assert_eq!(err["status"], 404);
    assert!(err["error"].is_string());

    let (status, _) = json("/api/properties?guests=two");
    assert_eq!(status, 400);
}
