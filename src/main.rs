use crate::app::AppState;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::router::respond;
use anyhow::Context;
use astra::Server;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

mod api;
mod app;
mod catalog;
mod config;
mod domain;
mod errors;
mod forms;
mod leads;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "property-hub", about = "Property rental site: listings, search, FAQ and enquiries")]
struct Cli {
    /// TOML config file. Without it `property-hub.toml` is used if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding `server.addr`.
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(addr) = cli.addr {
        config.server.addr = addr;
    }

    let catalog = Catalog::load(
        config.catalog.properties_path.as_deref(),
        config.catalog.faq_path.as_deref(),
    )
    .context("loading catalog")?;

    let addr = config.server.addr;
    let workers = config.server.max_workers;
    let app = Arc::new(AppState::new(catalog, config));

    tracing::info!(%addr, workers, "starting server");

    Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| respond(req, &app))
        .context("server stopped")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
