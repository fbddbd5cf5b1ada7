use crate::app::AppState;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::errors::{ResultResp, ServerError};
use crate::leads::{Lead, LeadSink};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Small catalog with one property per interesting filter case.
pub const PROPERTIES_JSON: &str = r#"[
  {
    "id": "soya-apartment", "title": "Soya Apartment", "description": "Two bedrooms.",
    "type": "Apartment", "location": "Bunga, Soya", "price": 250000,
    "currency": "UGX", "priceUnit": "night", "beds": 2, "baths": 1,
    "amenities": ["WiFi"], "image": "property-1", "featured": true
  },
  {
    "id": "city-hostel", "title": "City Hostel", "description": "Dorm beds.",
    "type": "Hostel", "location": "Entebbe", "price": 40000,
    "currency": "UGX", "priceUnit": "night", "beds": null, "baths": null,
    "amenities": [], "image": "property-2", "featured": false
  },
  {
    "id": "lake-villa", "title": "Lake Villa", "description": "By the water.",
    "type": "Villa", "location": "Munyonyo, Kampala", "price": 900000,
    "currency": "UGX", "priceUnit": "night", "beds": 4, "baths": 3,
    "amenities": ["Pool"], "image": "property-3", "featured": true
  }
]"#;

pub const FAQ_JSON: &str = r#"[
  { "id": "how-book", "question": "How do I book?", "answer": "Use the booking form.", "category": "Booking" },
  { "id": "pay", "question": "Which payment methods?", "answer": "Mobile money and cards.", "category": "Payments" }
]"#;

pub fn test_catalog() -> Catalog {
    Catalog::from_json(PROPERTIES_JSON, FAQ_JSON).expect("fixture catalog is valid")
}

/// Keeps every captured lead so tests can inspect it.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub captured: Arc<Mutex<Vec<(String, String)>>>,
}

impl LeadSink for RecordingSink {
    fn capture(&self, lead: Lead<'_>) -> String {
        let email = match &lead {
            Lead::Contact(c) => c.email.clone(),
            Lead::Booking { request, .. } => request.email.clone(),
        };
        let mut captured = self.captured.lock().unwrap();
        captured.push((lead.kind().to_string(), email));
        format!("TEST-{}", captured.len())
    }
}

pub fn test_app() -> AppState {
    AppState::new(test_catalog(), AppConfig::defaults())
}

pub fn test_app_with_sink() -> (AppState, RecordingSink) {
    let sink = RecordingSink::default();
    let app = test_app().with_leads(sink.clone());
    (app, sink)
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn count(html: &str, selector: &str) -> usize {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

/// `data-id` of every property card under `scope`, in page order.
pub fn card_ids(html: &str, scope: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(&format!("{scope} .property-card")).unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr("data-id").map(str::to_string))
        .collect()
}

/// The error a handler returned. Panics if it succeeded.
pub fn expect_err(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(err) => err,
    }
}
