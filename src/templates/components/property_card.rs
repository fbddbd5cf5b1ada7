use crate::domain::PropertyRecord;
use crate::templates::components::{format_price, image_url};
use maud::{html, Markup};

fn plural(n: u32, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// `UGX 250,000/night`
pub fn price_tag(p: &PropertyRecord) -> Markup {
    html! {
        span class="price" {
            span class="amount" { (p.currency) " " (format_price(p.price)) }
            span class="unit" { "/" (p.price_unit) }
        }
    }
}

pub fn property_card(p: &PropertyRecord) -> Markup {
    html! {
        article class="property-card" data-id=(p.id) {
            a href={ "/properties/" (p.id) } class="property-image" {
                img src=(image_url(&p.image)) alt=(p.title) loading="lazy";
                span class="badge" { (p.category.label()) }
                @if p.featured {
                    span class="badge badge-featured" { "Featured" }
                }
            }
            div class="property-body" {
                h3 { a href={ "/properties/" (p.id) } { (p.title) } }
                p class="location" { (p.location) }
                ul class="facts" {
                    @if let Some(beds) = p.beds {
                        li { (plural(beds, "Bed", "Beds")) }
                    }
                    @if let Some(baths) = p.baths {
                        li { (plural(baths, "Bath", "Baths")) }
                    }
                    @for amenity in p.amenities.iter().take(2) {
                        li { (amenity) }
                    }
                }
                div class="property-footer" {
                    (price_tag(p))
                    a href={ "/properties/" (p.id) "#book" } class="btn btn-accent" { "Book Now" }
                }
            }
        }
    }
}

/// Result grid, or `empty` when there is nothing to show.
pub fn property_grid(properties: &[&PropertyRecord], empty: Markup) -> Markup {
    html! {
        @if properties.is_empty() {
            div class="empty-state" { (empty) }
        } @else {
            div class="property-grid" {
                @for p in properties {
                    (property_card(p))
                }
            }
        }
    }
}
