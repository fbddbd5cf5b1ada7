use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::CatalogError;
use crate::domain::{
    filter_properties, search_faqs, FaqRecord, FilterSpec, PropertyCategory, PropertyRecord,
};

const BUNDLED_PROPERTIES: &str = include_str!("../../data/properties.json");
const BUNDLED_FAQS: &str = include_str!("../../data/faq.json");

/// Read-only store of every property and FAQ the site knows about.
///
/// Loaded once at startup and shared by all workers; nothing mutates it after
/// construction, so handing out `&` views is all the access control needed.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<PropertyRecord>,
    faqs: Vec<FaqRecord>,
}

impl Catalog {
    /// Build a catalog from already-decoded records, checking id uniqueness
    /// and non-negative prices.
    pub fn new(properties: Vec<PropertyRecord>, faqs: Vec<FaqRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for p in &properties {
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
            // NaN fails this too.
            if !(p.price >= 0.0) {
                return Err(CatalogError::NegativePrice {
                    id: p.id.clone(),
                    price: p.price,
                });
            }
        }

        let mut seen = HashSet::new();
        for f in &faqs {
            if !seen.insert(f.id.as_str()) {
                return Err(CatalogError::DuplicateId(f.id.clone()));
            }
        }

        Ok(Self { properties, faqs })
    }

    /// Decode both collections from JSON text.
    pub fn from_json(properties_json: &str, faq_json: &str) -> Result<Self, CatalogError> {
        let properties: Vec<PropertyRecord> =
            serde_json::from_str(properties_json).map_err(|e| CatalogError::Parse {
                source_name: "properties".into(),
                source: e,
            })?;
        let faqs: Vec<FaqRecord> = serde_json::from_str(faq_json).map_err(|e| CatalogError::Parse {
            source_name: "faq".into(),
            source: e,
        })?;

        Self::new(properties, faqs)
    }

    /// Load from files, falling back to the bundled copy for any path not given.
    pub fn load(properties_path: Option<&Path>, faq_path: Option<&Path>) -> Result<Self, CatalogError> {
        let properties = match properties_path {
            Some(path) => read(path)?,
            None => BUNDLED_PROPERTIES.to_string(),
        };
        let faqs = match faq_path {
            Some(path) => read(path)?,
            None => BUNDLED_FAQS.to_string(),
        };

        let catalog = Self::from_json(&properties, &faqs)?;
        tracing::info!(
            properties = catalog.properties.len(),
            faqs = catalog.faqs.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn all_properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    pub fn property_by_id(&self, id: &str) -> Option<&PropertyRecord> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn featured_properties(&self) -> Vec<&PropertyRecord> {
        self.properties.iter().filter(|p| p.featured).collect()
    }

    /// Fixed declaration order, independent of the data.
    pub fn property_categories(&self) -> &'static [PropertyCategory] {
        &PropertyCategory::ALL
    }

    /// Area tokens in first-seen order, duplicates collapsed.
    pub fn distinct_locations(&self) -> Vec<&str> {
        first_seen(self.properties.iter().map(|p| p.area()))
    }

    pub fn search(&self, spec: &FilterSpec) -> Vec<&PropertyRecord> {
        filter_properties(&self.properties, spec)
    }

    pub fn all_faqs(&self) -> &[FaqRecord] {
        &self.faqs
    }

    pub fn search_faqs(&self, query: &str) -> Vec<&FaqRecord> {
        search_faqs(&self.faqs, query)
    }

    pub fn faq_categories(&self) -> Vec<&str> {
        first_seen(self.faqs.iter().map(|f| f.category.as_str()))
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn first_seen<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.filter(|s| seen.insert(*s)).collect()
}
