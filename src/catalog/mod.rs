pub mod store;

pub use store::Catalog;

use thiserror::Error;

/// Problems found while loading the bundled or configured catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {source_name} data: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate id {0:?}")]
    DuplicateId(String),
    #[error("property {id:?} has a negative price ({price})")]
    NegativePrice { id: String, price: f64 },
}
