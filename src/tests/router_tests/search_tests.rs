// src/tests/router_tests/search_tests.rs
use crate::app::AppState;
use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, card_ids, count, expect_err, get, test_app, test_catalog};
use std::time::{Duration, Instant};

fn page(uri: &str) -> String {
    let app = test_app();
    let mut resp = handle(get(uri), &app).unwrap();
    assert_eq!(resp.status(), 200, "GET {uri}");
    body_string(&mut resp)
}

#[test]
fn home_without_search_shows_featured_only() {
    let html = page("/");

    assert_eq!(count(&html, "#properties-section"), 0);
    assert_eq!(card_ids(&html, ".featured"), vec!["soya-apartment", "lake-villa"]);
    assert!(html.contains("Why Choose Jia Properties Hub?"));
}

#[test]
fn home_search_with_all_types_lists_everything() {
    let html = page("/?type=all");

    assert_eq!(count(&html, "#properties-section"), 1);
    assert_eq!(
        card_ids(&html, "#results"),
        vec!["soya-apartment", "city-hostel", "lake-villa"]
    );
    assert!(html.contains("Found 3 properties matching your criteria"));
}

#[test]
fn home_search_by_category_ignores_case() {
    let html = page("/?type=villa");

    assert_eq!(card_ids(&html, "#results"), vec!["lake-villa"]);
    assert!(html.contains("Found 1 property matching your criteria"));
}

#[test]
fn location_is_a_case_insensitive_substring() {
    let html = page("/properties?location=KAMPALA");
    assert_eq!(card_ids(&html, "#results"), vec!["lake-villa"]);
}

#[test]
fn guest_rule_allows_two_per_bed_and_unlimited_hostels() {
    let html = page("/properties?guests=3");
    assert_eq!(
        card_ids(&html, "#results"),
        vec!["soya-apartment", "city-hostel", "lake-villa"]
    );

    let html = page("/properties?guests=5");
    assert_eq!(card_ids(&html, "#results"), vec!["city-hostel", "lake-villa"]);
}

#[test]
fn price_bounds_are_inclusive() {
    let html = page("/properties?min_price=40000&max_price=250000");
    assert_eq!(card_ids(&html, "#results"), vec!["soya-apartment", "city-hostel"]);
}

#[test]
fn blank_parameters_do_not_filter() {
    let html = page("/properties?type=&location=&guests=&min_price=&max_price=");
    assert_eq!(card_ids(&html, "#results").len(), 3);
}

#[test]
fn no_match_renders_empty_state() {
    let html = page("/?type=studio");

    assert_eq!(count(&html, "#results .property-card"), 0);
    assert!(html.contains("No properties found matching your criteria"));
    assert!(html.contains("Found 0 properties matching your criteria"));
}

#[test]
fn results_fragment_has_no_layout() {
    let html = page("/properties/results?type=hostel");

    assert!(!html.contains("<!DOCTYPE"));
    assert_eq!(card_ids(&html, "body"), vec!["city-hostel"]);
}

#[test]
fn search_form_keeps_current_selection() {
    let html = page("/properties?type=hostel&location=Entebbe");

    let doc = scraper::Html::parse_document(&html);
    let selected = scraper::Selector::parse("select[name=type] option[selected]").unwrap();
    let value = doc
        .select(&selected)
        .next()
        .and_then(|o| o.value().attr("value"));
    assert_eq!(value, Some("hostel"));
}

#[test]
fn malformed_number_is_bad_request() {
    let app = test_app();
    let err = expect_err(handle(get("/properties?guests=lots"), &app));
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn simulated_latency_delays_search() {
    let mut config = AppConfig::defaults();
    config.catalog.simulated_latency_ms = 20;
    let app = AppState::new(test_catalog(), config);

    let started = Instant::now();
    let resp = handle(get("/properties/results?type=villa"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(started.elapsed() >= Duration::from_millis(20));
}
