use crate::config::SiteConfig;
use crate::domain::inquiry::{BookingRequest, FieldErrors};
use crate::domain::{FilterSpec, PropertyCategory, PropertyRecord};
use crate::templates::components::{
    image_url, price_tag, property_grid, search_card, SearchCardVm,
};
use crate::templates::pages::booking::booking_form;
use crate::templates::pages::home::result_count;
use crate::templates::{desktop_layout, PageMeta};
use maud::{html, Markup};

pub struct ListingVm<'a> {
    pub categories: &'a [PropertyCategory],
    pub locations: Vec<&'a str>,
    pub filter: FilterSpec,
    pub results: Vec<&'a PropertyRecord>,
}

pub fn listing_page(vm: &ListingVm<'_>, site: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: "All Properties",
        description: "Browse every apartment, hostel, villa and studio we rent across Uganda.",
        active: "",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main class="container" {
                h1 class="section-heading" { "Our Properties" }
                (search_card(&SearchCardVm {
                    action: "/properties",
                    categories: vm.categories,
                    locations: &vm.locations,
                    current: &vm.filter,
                    with_price: true,
                    live: true,
                }))
                div id="results-loading" class="htmx-indicator" { "Loading properties..." }
                div id="results" {
                    (results_fragment(&vm.results))
                }
            }
        },
    )
}

/// The part of the listing that htmx swaps in after each search.
pub fn results_fragment(results: &[&PropertyRecord]) -> Markup {
    html! {
        p class="result-count" { (result_count(results.len())) }
        (property_grid(results, html! {
            p { "No properties found matching your criteria" }
            a href="/properties" class="btn btn-accent" { "View All Properties" }
        }))
    }
}

pub fn property_page(
    p: &PropertyRecord,
    request: &BookingRequest,
    errors: &FieldErrors,
    site: &SiteConfig,
) -> Markup {
    let meta = PageMeta {
        title: &p.title,
        description: &p.description,
        active: "",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main class="container property-detail" {
                div class="detail-hero" {
                    img src=(image_url(&p.image)) alt=(p.title);
                }
                div class="detail-grid" {
                    section {
                        span class="badge" { (p.category.label()) }
                        h1 { (p.title) }
                        p class="location" { (p.location) }
                        p class="price-box" { (price_tag(p)) }
                        ul class="facts" {
                            @if let Some(beds) = p.beds { li { "Beds: " (beds) } }
                            @if let Some(baths) = p.baths { li { "Baths: " (baths) } }
                        }
                        p { (p.description) }
                        h2 { "Amenities" }
                        ul class="amenities" {
                            @for a in &p.amenities { li { (a) } }
                        }
                    }
                    section id="book" class="card" {
                        (booking_form(p, request, errors))
                    }
                }
            }
        },
    )
}
