//! Runtime configuration.
//!
//! [`AppConfig::load`] layers, lowest to highest priority: the embedded
//! defaults below, an optional TOML file, then `HUB__SECTION__KEY`
//! environment variables. [`AppConfig::defaults`] skips the file and the
//! environment (useful in tests).

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG: &str = r#"
[server]
addr        = "127.0.0.1:3000"
max_workers = 8
static_dir  = "static"

[catalog]
simulated_latency_ms = 0

[site]
name    = "Jia Properties Hub"
tagline = "Where Luxury Meets Comfort."
phone   = "+256 700 123 456"
email   = "info@jiapropertieshub.com"
address = "Plot 45, Kampala Road, Kampala, Uganda"
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub site: SiteConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub static_dir: PathBuf,
}

/// `[catalog]` section. Paths default to the data compiled into the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub properties_path: Option<PathBuf>,
    #[serde(default)]
    pub faq_path: Option<PathBuf>,
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl CatalogConfig {
    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency(Duration::from_millis(self.simulated_latency_ms))
    }
}

/// `[site]` section: business details printed in the header, footer and contact page.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Artificial delay applied by the HTTP layer before answering list and search
/// requests, so loading states can be demoed. Zero means no delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(pub Duration);

impl SimulatedLatency {
    pub fn apply(self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("property-hub").required(false)),
        };

        builder
            .add_source(config::Environment::with_prefix("HUB").separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
