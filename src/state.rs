//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{DirectoryService, ReportService};
use crate::domain::gateway::BillingGateway;

#[derive(Clone)]
pub struct AppState {
    pub directory_service: Arc<DirectoryService>,
    pub report_service: Arc<ReportService>,
}

impl AppState {
    /// Wires both services onto one shared gateway.
    pub fn new(gateway: Arc<dyn BillingGateway>) -> Self {
        Self {
            directory_service: Arc::new(DirectoryService::new(gateway.clone())),
            report_service: Arc::new(ReportService::new(gateway)),
        }
    }
}
