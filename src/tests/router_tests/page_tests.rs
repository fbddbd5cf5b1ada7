// src/tests/router_tests/page_tests.rs
use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::templates::components::{image_url, KNOWN_IMAGES};
use crate::tests::utils::{body_string, count, expect_err, get, post_form, test_app};
use astra::{Body, Request};
use http::Method;

#[test]
fn property_detail_renders_booking_form() {
    let app = test_app();
    let mut resp = handle(get("/properties/lake-villa"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(&mut resp);
    assert!(html.contains("<title>Lake Villa"));
    assert_eq!(count(&html, "section#book form[action='/properties/lake-villa/book']"), 1);
    assert_eq!(count(&html, "select[name=guests] option"), 8);
}

#[test]
fn unknown_property_is_not_found() {
    let app = test_app();
    let err = expect_err(handle(get("/properties/no-such-place"), &app));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn respond_renders_error_page_with_status() {
    let app = test_app();
    let mut resp = respond(get("/properties/no-such-place"), &app);
    assert_eq!(resp.status(), 404);

    let html = body_string(&mut resp);
    assert_eq!(count(&html, "body.error-page"), 1);
}

#[test]
fn wrong_method_on_known_path_is_405() {
    let app = test_app();

    let err = expect_err(handle(post_form("/faq", ""), &app));
    assert!(matches!(err, ServerError::MethodNotAllowed));

    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::DELETE;
    *req.uri_mut() = "/contact".parse().unwrap();
    assert_eq!(respond(req, &app).status(), 405);
}

#[test]
fn unknown_path_is_404() {
    let app = test_app();
    assert_eq!(respond(get("/dashboard"), &app).status(), 404);
}

#[test]
fn faq_page_lists_everything_and_categories() {
    let app = test_app();
    let mut resp = handle(get("/faq"), &app).unwrap();
    let html = body_string(&mut resp);

    assert_eq!(count(&html, "details.faq-item"), 2);
    assert_eq!(count(&html, ".chips .chip"), 2);
    assert_eq!(count(&html, "input[hx-get='/faq/results']"), 1);
}

#[test]
fn faq_search_matches_answers_too() {
    let app = test_app();
    let mut resp = handle(get("/faq/results?q=MOBILE"), &app).unwrap();
    let html = body_string(&mut resp);

    assert!(!html.contains("<!DOCTYPE"));
    assert_eq!(count(&html, "details.faq-item"), 1);
    assert_eq!(count(&html, "#faq-pay"), 1);
}

#[test]
fn faq_search_without_hits_says_so() {
    let app = test_app();
    let mut resp = handle(get("/faq?q=helicopter"), &app).unwrap();
    let html = body_string(&mut resp);

    assert_eq!(count(&html, "details.faq-item"), 0);
    assert!(html.contains("No questions match"));
}

#[test]
fn gallery_links_every_image() {
    let app = test_app();
    let mut resp = handle(get("/gallery"), &app).unwrap();
    let html = body_string(&mut resp);

    assert_eq!(count(&html, ".masonry a.tile"), 9);
}

#[test]
fn lightbox_wraps_at_both_ends() {
    let app = test_app();

    let mut resp = handle(get("/gallery/1"), &app).unwrap();
    let html = body_string(&mut resp);
    assert_eq!(count(&html, "a.lightbox-prev[href='/gallery/9']"), 1);
    assert_eq!(count(&html, "a.lightbox-next[href='/gallery/2']"), 1);
    assert!(html.contains("1 / 9"));

    let mut resp = handle(get("/gallery/9"), &app).unwrap();
    let html = body_string(&mut resp);
    assert_eq!(count(&html, "a.lightbox-next[href='/gallery/1']"), 1);

    assert!(matches!(
        expect_err(handle(get("/gallery/42"), &app)),
        ServerError::NotFound
    ));
}

#[test]
fn about_page_uses_site_name() {
    let app = test_app();
    let mut resp = handle(get("/about"), &app).unwrap();
    let html = body_string(&mut resp);

    assert!(html.contains("About Jia Properties Hub"));
    assert_eq!(count(&html, ".timeline li"), 5);
}

#[test]
fn stylesheet_is_served() {
    let app = test_app();
    let resp = handle(get("/static/main.css"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let ct = resp.headers().get("Content-Type").and_then(|v| v.to_str().ok());
    assert_eq!(ct, Some("text/css; charset=utf-8"));
}

#[test]
fn static_paths_cannot_escape_root() {
    let app = test_app();
    let err = expect_err(handle(get("/static/../Cargo.toml"), &app));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn every_known_image_is_served() {
    let app = test_app();
    for key in KNOWN_IMAGES {
        let url = image_url(key);
        let resp = handle(get(&url), &app).unwrap_or_else(|e| panic!("GET {url}: {e}"));
        assert_eq!(resp.status(), 200, "GET {url}");
        let ct = resp.headers().get("Content-Type").and_then(|v| v.to_str().ok());
        assert_eq!(ct, Some("image/svg+xml"), "GET {url}");
    }
}

#[test]
fn rendered_pages_only_reference_shipped_images() {
    let app = test_app();
    for uri in ["/", "/properties", "/properties/lake-villa", "/gallery", "/gallery/3"] {
        let mut resp = handle(get(uri), &app).unwrap();
        let html = body_string(&mut resp);

        let doc = scraper::Html::parse_document(&html);
        let img = scraper::Selector::parse("img[src], link[rel=icon]").unwrap();
        for el in doc.select(&img) {
            let src = el
                .value()
                .attr("src")
                .or_else(|| el.value().attr("href"))
                .unwrap();
            let status = respond(get(src), &app).status();
            assert_eq!(status, 200, "{uri} references {src}");
        }
    }
}

#[test]
fn unknown_subpaths_are_404_not_405() {
    let app = test_app();
    for (method, uri) in [
        (Method::POST, "/properties/a/b/c"),
        (Method::GET, "/properties/lake-villa/photos"),
        (Method::GET, "/gallery/1/full"),
    ] {
        let mut req = Request::new(Body::empty());
        *req.method_mut() = method.clone();
        *req.uri_mut() = uri.parse().unwrap();
        assert_eq!(respond(req, &app).status(), 404, "{method} {uri}");
    }

    // The booking path exists for POST, so only the method is wrong.
    for method in [Method::GET, Method::PUT] {
        let mut req = Request::new(Body::empty());
        *req.method_mut() = method;
        *req.uri_mut() = "/properties/lake-villa/book".parse().unwrap();
        assert_eq!(respond(req, &app).status(), 405);
    }
}
