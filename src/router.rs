use crate::api;
use crate::app::AppState;
use crate::domain::gallery::{lightbox, GALLERY};
use crate::domain::inquiry::{BookingRequest, ContactInquiry, FieldErrors};
use crate::errors::{ResultResp, ServerError};
use crate::forms::{filter_spec, has_filter_params, parse_query, read_form};
use crate::leads::Lead;
use crate::responses::{
    error_to_response, html_response, html_response_with_status, json_error_response,
    static_file_response,
};
use crate::templates::pages::{self, FaqVm, HomeVm, ListingVm};
use astra::{Request, Response};
use std::time::Instant;

/// Route, render, and turn any error into a page. Also the per-request log line.
pub fn respond(req: Request, app: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::InternalError => {
                    tracing::error!(%method, %path, error = %err, "request failed")
                }
                _ => tracing::warn!(%method, %path, error = %err, "request rejected"),
            }
            if path.starts_with("/api/") {
                json_error_response(&err)
            } else {
                error_to_response(&err)
            }
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(&req, app),
        ("GET", ["properties"]) => listing(&req, app),
        ("GET", ["properties", "results"]) => listing_results(&req, app),
        ("GET", ["properties", id]) => property_detail(id, app),
        ("POST", ["properties", id, "book"]) => {
            let form = read_form(&mut req)?;
            submit_booking(id, &form, app)
        }

        ("GET", ["faq"]) => faq(&req, app),
        ("GET", ["faq", "results"]) => faq_results(&req, app),

        ("GET", ["gallery"]) => html_response(pages::gallery_page(&GALLERY, &app.config.site)),
        ("GET", ["gallery", id]) => {
            let view = lightbox(id).ok_or(ServerError::NotFound)?;
            html_response(pages::lightbox_page(&view, GALLERY.len(), &app.config.site))
        }

        ("GET", ["about"]) => html_response(pages::about_page(&app.config.site)),
        ("GET", ["contact"]) => html_response(pages::contact_page(
            &ContactInquiry::default(),
            &FieldErrors::new(),
            app.catalog.property_categories(),
            &app.config.site,
        )),
        ("POST", ["contact"]) => {
            let form = read_form(&mut req)?;
            submit_contact(&form, app)
        }

        ("GET", ["static", rest @ ..]) => {
            static_file_response(&app.config.server.static_dir, &rest.join("/"))
        }

        ("GET", ["api", rest @ ..]) => api::handle(rest, &req, app),

        (_, segs) if is_known_route(segs) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn is_known_route(segments: &[&str]) -> bool {
    matches!(
        segments,
        [] | ["properties"]
            | ["properties", _]
            | ["properties", _, "book"]
            | ["faq"]
            | ["faq", "results"]
            | ["gallery"]
            | ["gallery", _]
            | ["about"]
            | ["contact"]
            | ["static", _, ..]
            | ["api", _, ..]
    )
}

fn home(req: &Request, app: &AppState) -> ResultResp {
    let params = parse_query(req);
    let filter = filter_spec(&params)?;
    let catalog = &app.catalog;

    let results = if has_filter_params(&params) {
        app.config.catalog.latency().apply();
        Some(catalog.search(&filter))
    } else {
        None
    };

    let vm = HomeVm {
        featured: catalog.featured_properties(),
        categories: catalog.property_categories(),
        locations: catalog.distinct_locations(),
        filter,
        results,
    };
    html_response(pages::home_page(&vm, &app.config.site))
}

fn listing(req: &Request, app: &AppState) -> ResultResp {
    let filter = filter_spec(&parse_query(req))?;
    app.config.catalog.latency().apply();

    let catalog = &app.catalog;
    let vm = ListingVm {
        categories: catalog.property_categories(),
        locations: catalog.distinct_locations(),
        results: catalog.search(&filter),
        filter,
    };
    html_response(pages::listing_page(&vm, &app.config.site))
}

fn listing_results(req: &Request, app: &AppState) -> ResultResp {
    let filter = filter_spec(&parse_query(req))?;
    app.config.catalog.latency().apply();
    html_response(pages::results_fragment(&app.catalog.search(&filter)))
}

fn property_detail(id: &str, app: &AppState) -> ResultResp {
    let property = app.catalog.property_by_id(id).ok_or(ServerError::NotFound)?;
    let request = BookingRequest {
        property_id: property.id.clone(),
        ..Default::default()
    };
    html_response(pages::property_page(
        property,
        &request,
        &FieldErrors::new(),
        &app.config.site,
    ))
}

fn submit_booking(id: &str, form: &crate::forms::Params, app: &AppState) -> ResultResp {
    let property = app.catalog.property_by_id(id).ok_or(ServerError::NotFound)?;
    let request = BookingRequest::from_form(&property.id, form);

    match request.validate() {
        Ok(stay) => {
            let reference = app.leads.capture(Lead::Booking {
                request: &request,
                stay: &stay,
            });
            html_response(pages::booking_confirmation(
                property,
                &stay,
                &reference,
                &app.config.site,
            ))
        }
        Err(errors) => html_response_with_status(
            422,
            pages::property_page(property, &request, &errors, &app.config.site),
        ),
    }
}

fn submit_contact(form: &crate::forms::Params, app: &AppState) -> ResultResp {
    let inquiry = ContactInquiry::from_form(form);

    match inquiry.validate() {
        Ok(()) => {
            let reference = app.leads.capture(Lead::Contact(&inquiry));
            html_response(pages::contact_sent_page(&reference, &app.config.site))
        }
        Err(errors) => html_response_with_status(
            422,
            pages::contact_page(
                &inquiry,
                &errors,
                app.catalog.property_categories(),
                &app.config.site,
            ),
        ),
    }
}

fn faq_query(req: &Request) -> String {
    parse_query(req).remove("q").unwrap_or_default()
}

fn faq(req: &Request, app: &AppState) -> ResultResp {
    let query = faq_query(req);
    let catalog = &app.catalog;

    let vm = FaqVm {
        faqs: catalog.search_faqs(&query),
        categories: catalog.faq_categories(),
        query,
    };
    html_response(pages::faq_page(&vm, &app.config.site))
}

fn faq_results(req: &Request, app: &AppState) -> ResultResp {
    let query = faq_query(req);
    app.config.catalog.latency().apply();
    html_response(crate::templates::components::faq_list(
        &app.catalog.search_faqs(&query),
        &query,
    ))
}
