// templates/pages/home.rs

use crate::config::SiteConfig;
use crate::domain::{FilterSpec, PropertyCategory, PropertyRecord};
use crate::templates::components::{property_grid, search_card, SearchCardVm};
use crate::templates::{desktop_layout, PageMeta};
use maud::{html, Markup};

const FEATURES: [(&str, &str); 3] = [
    (
        "Secure Booking",
        "Your payments are protected with bank-level security and instant confirmation for peace of mind.",
    ),
    (
        "Easy Search",
        "Find exactly what you're looking for with our advanced filtering system tailored to your needs.",
    ),
    (
        "24/7 Support",
        "Our dedicated customer service team is always ready to help you with any questions or concerns.",
    ),
];

pub struct HomeVm<'a> {
    pub featured: Vec<&'a PropertyRecord>,
    pub categories: &'a [PropertyCategory],
    pub locations: Vec<&'a str>,
    pub filter: FilterSpec,
    /// `Some` once the visitor has searched, even when nothing matched.
    pub results: Option<Vec<&'a PropertyRecord>>,
}

pub fn home_page(vm: &HomeVm<'_>, site: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: "Luxury Accommodations in Uganda",
        description: "Find luxury apartments, cozy hostels, and unique Airbnb experiences across Uganda.",
        active: "/",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main {
                section class="hero" role="banner" {
                    div class="container" {
                        h1 { "Where Luxury " span class="accent" { "Meets" } " Comfort." }
                        p class="lead" {
                            "Your trusted partner for amazing apartments, cozy hostels, and unique Airbnb experiences across Uganda."
                        }
                        (search_card(&SearchCardVm {
                            action: "/",
                            categories: vm.categories,
                            locations: &vm.locations,
                            current: &vm.filter,
                            with_price: false,
                            live: false,
                        }))
                        ul class="trust-badges" {
                            li { "Verified Properties" }
                            li { "Secure Payments" }
                            li { "24/7 Support" }
                        }
                    }
                }

                @if !vm.featured.is_empty() {
                    section class="featured" {
                        div class="container" {
                            h2 class="section-heading" { "Featured Properties" }
                            div class="carousel" {
                                (property_grid(&vm.featured, html! {}))
                            }
                        }
                    }
                }

                @if let Some(results) = &vm.results {
                    section id="properties-section" class="search-results" {
                        div class="container" {
                            div class="results-header" {
                                div {
                                    h2 class="section-heading" { "Search Results" }
                                    p class="result-count" { (result_count(results.len())) }
                                }
                                a href="/" class="btn btn-navy" { "Clear Filters" }
                            }
                            div id="results" {
                                (property_grid(results, html! {
                                    p { "No properties found matching your criteria" }
                                    a href="/properties" class="btn btn-accent" { "View All Properties" }
                                }))
                            }
                        }
                    }
                }

                section class="why-us" {
                    div class="container" {
                        h2 class="section-heading" { "Why Choose " (site.name) "?" }
                        div class="feature-grid" {
                            @for (title, text) in FEATURES {
                                div class="card feature" {
                                    h3 { (title) }
                                    p { (text) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// "Found 1 property matching your criteria" / "Found 3 properties ..."
pub fn result_count(n: usize) -> String {
    let noun = if n == 1 { "property" } else { "properties" };
    format!("Found {n} {noun} matching your criteria")
}
