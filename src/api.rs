// src/api.rs
//
// Read-only JSON views over the catalog. Errors surface as JSON through
// `router::respond` because every path here starts with `/api/`.

use crate::app::AppState;
use crate::errors::{ResultResp, ServerError};
use crate::forms::{filter_spec, parse_query};
use crate::responses::json_response;
use astra::Request;

pub fn handle(segments: &[&str], req: &Request, app: &AppState) -> ResultResp {
    let catalog = &app.catalog;

    match segments {
        ["properties"] => {
            let filter = filter_spec(&parse_query(req))?;
            app.config.catalog.latency().apply();
            if filter.is_unconstrained() {
                return json_response(catalog.all_properties());
            }
            json_response(&catalog.search(&filter))
        }
        ["properties", "featured"] => json_response(&catalog.featured_properties()),
        ["properties", id] => {
            let property = catalog.property_by_id(id).ok_or(ServerError::NotFound)?;
            json_response(property)
        }
        ["property-types"] => {
            let labels: Vec<&str> = catalog
                .property_categories()
                .iter()
                .map(|c| c.label())
                .collect();
            json_response(&labels)
        }
        ["locations"] => json_response(&catalog.distinct_locations()),
        ["faqs"] => {
            let query = parse_query(req).remove("q").unwrap_or_default();
            app.config.catalog.latency().apply();
            if query.trim().is_empty() {
                return json_response(catalog.all_faqs());
            }
            json_response(&catalog.search_faqs(&query))
        }
        ["faq-categories"] => json_response(&catalog.faq_categories()),
        _ => Err(ServerError::NotFound),
    }
}
