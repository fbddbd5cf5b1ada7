use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::leads::{LeadSink, LogLeadSink};

/// Everything a request handler can read. Built once in `main` and shared by
/// every worker thread behind an `Arc`.
pub struct AppState {
    pub catalog: Catalog,
    pub config: AppConfig,
    pub leads: Box<dyn LeadSink>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self {
            catalog,
            config,
            leads: Box::new(LogLeadSink),
        }
    }

    pub fn with_leads(mut self, leads: impl LeadSink + 'static) -> Self {
        self.leads = Box::new(leads);
        self
    }
}
