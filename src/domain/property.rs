// src/domain/property.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of property kinds the business rents out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCategory {
    Apartment,
    Hostel,
    Airbnb,
    Villa,
    Studio,
    Commercial,
}

impl PropertyCategory {
    /// Every category, in declaration order.
    pub const ALL: [PropertyCategory; 6] = [
        PropertyCategory::Apartment,
        PropertyCategory::Hostel,
        PropertyCategory::Airbnb,
        PropertyCategory::Villa,
        PropertyCategory::Studio,
        PropertyCategory::Commercial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "Apartment",
            PropertyCategory::Hostel => "Hostel",
            PropertyCategory::Airbnb => "Airbnb",
            PropertyCategory::Villa => "Villa",
            PropertyCategory::Studio => "Studio",
            PropertyCategory::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rentable property as shipped in `data/properties.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: PropertyCategory,
    pub location: String,

    pub price: f64,
    pub currency: String,
    pub price_unit: String,

    // Absent for stock sold by unit rather than by bed (hostels, commercial space).
    pub beds: Option<u32>,
    pub baths: Option<u32>,

    #[serde(default)]
    pub amenities: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

impl PropertyRecord {
    /// The trailing comma-delimited segment of the location, trimmed.
    /// `"Bunga, Soya"` gives `"Soya"`; a location without commas is returned whole.
    pub fn area(&self) -> &str {
        area_token(&self.location)
    }
}

pub fn area_token(location: &str) -> &str {
    location
        .rsplit(',')
        .next()
        .unwrap_or(location)
        .trim()
}
