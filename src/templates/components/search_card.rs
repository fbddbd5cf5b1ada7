use crate::domain::filter::ALL_CATEGORIES;
use crate::domain::inquiry::{MAX_GUESTS, MIN_GUESTS};
use crate::domain::{FilterSpec, PropertyCategory};
use maud::{html, Markup};

/// What the search card needs to render its selectors.
pub struct SearchCardVm<'a> {
    /// Where a plain (non-htmx) submit goes.
    pub action: &'a str,
    pub categories: &'a [PropertyCategory],
    pub locations: &'a [&'a str],
    pub current: &'a FilterSpec,
    /// Show the min/max price inputs.
    pub with_price: bool,
    /// Swap results into `#results` via htmx instead of reloading the page.
    pub live: bool,
}

fn price_value(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

pub fn search_card(vm: &SearchCardVm<'_>) -> Markup {
    let current_type = vm.current.category.as_deref().unwrap_or(ALL_CATEGORIES).to_lowercase();
    let current_location = vm.current.location.as_deref().unwrap_or("");
    let current_guests = vm.current.guests.unwrap_or(i64::from(MIN_GUESTS));

    html! {
        form
            class="search-card"
            method="get"
            action=(vm.action)
            hx-get=[vm.live.then_some("/properties/results")]
            hx-target=[vm.live.then_some("#results")]
            hx-swap=[vm.live.then_some("innerHTML")]
            hx-push-url=[vm.live.then_some(vm.action)]
            hx-indicator=[vm.live.then_some("#results-loading")]
        {
            div class="field" {
                label for="property-type" { "Property Type" }
                select id="property-type" name="type" aria-label="Select property type" {
                    option value=(ALL_CATEGORIES) selected[current_type == ALL_CATEGORIES] { "All Types" }
                    @for category in vm.categories {
                        @let value = category.label().to_lowercase();
                        option value=(value) selected[current_type == value] { (category.label()) }
                    }
                }
            }

            div class="field" {
                label for="location" { "Location" }
                select id="location" name="location" aria-label="Select location" {
                    option value="" selected[current_location.is_empty()] { "Any Location" }
                    @for loc in vm.locations {
                        option value=(loc) selected[*loc == current_location] { (loc) }
                    }
                }
            }

            div class="field" {
                label for="guests" { "Guests" }
                select id="guests" name="guests" aria-label="Select number of guests" {
                    @for n in MIN_GUESTS..=MAX_GUESTS {
                        option value=(n) selected[i64::from(n) == current_guests] {
                            (n) " " @if n == 1 { "Guest" } @else { "Guests" }
                        }
                    }
                }
            }

            @if vm.with_price {
                div class="field" {
                    label for="min-price" { "Min Price" }
                    input id="min-price" name="min_price" type="number" min="0" step="any"
                        value=(price_value(vm.current.min_price));
                }
                div class="field" {
                    label for="max-price" { "Max Price" }
                    input id="max-price" name="max_price" type="number" min="0" step="any"
                        value=(price_value(vm.current.max_price));
                }
            }

            button type="submit" class="btn btn-accent" aria-label="Search properties" { "Search" }
        }
    }
}
