// src/domain/filter.rs

use crate::domain::property::PropertyRecord;
use serde::{Deserialize, Serialize};

/// Category value the search card sends for its "All Types" option.
pub const ALL_CATEGORIES: &str = "all";

/// Constraints a property search may carry. Every field is optional and an
/// absent field does not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub location: Option<String>,
    pub guests: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterSpec {
    /// True when no field would remove anything from the catalog.
    pub fn is_unconstrained(&self) -> bool {
        self.category_constraint().is_none()
            && self.location_constraint().is_none()
            && self.guests_constraint().is_none()
            && set_amount(self.min_price).is_none()
            && set_amount(self.max_price).is_none()
    }

    /// Blank text and the "all" sentinel leave the category open.
    fn category_constraint(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
    }

    fn location_constraint(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    // Zero guests is the same as no guest count.
    fn guests_constraint(&self) -> Option<i64> {
        self.guests.filter(|g| *g != 0)
    }

    /// Whether a single record satisfies every set constraint.
    ///
    /// A field that is absent, blank or zero is unset. Checks run category,
    /// location, guests, min price, max price and stop at the first failure.
    pub fn matches(&self, property: &PropertyRecord) -> bool {
        if let Some(category) = self.category_constraint() {
            if !property.category.label().eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(location) = self.location_constraint() {
            if !contains_folded(&property.location, location) {
                return false;
            }
        }

        if let Some(guests) = self.guests_constraint() {
            if !fits_guests(property.beds, guests) {
                return false;
            }
        }

        if let Some(min) = set_amount(self.min_price) {
            if property.price < min {
                return false;
            }
        }

        if let Some(max) = set_amount(self.max_price) {
            if property.price > max {
                return false;
            }
        }

        true
    }
}

/// A price bound of zero (or NaN) is unset, so `max_price = 0` does not empty
/// the result.
fn set_amount(bound: Option<f64>) -> Option<f64> {
    bound.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Capacity rule: each bed sleeps up to two guests. A property without a bed
/// count (sold by unit) takes any party size.
pub fn fits_guests(beds: Option<u32>, guests: i64) -> bool {
    match beds {
        None => true,
        Some(beds) => i64::from(beds) >= beds_needed(guests),
    }
}

/// `ceil(guests / 2)`, also for zero and negative counts.
fn beds_needed(guests: i64) -> i64 {
    (guests + 1).div_euclid(2)
}

/// Case-insensitive substring test shared by the property and FAQ searches.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// The ordered subsequence of `properties` that satisfies `spec`.
pub fn filter_properties<'a>(
    properties: &'a [PropertyRecord],
    spec: &FilterSpec,
) -> Vec<&'a PropertyRecord> {
    properties.iter().filter(|p| spec.matches(p)).collect()
}
