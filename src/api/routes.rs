//! API route configuration.
//!
//! Credentials travel with each request (body or headers); there is no
//! session state, so no authentication middleware wraps these routes.

use crate::api::handlers::{invoices_handler, login_handler, report_handler, teams_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /login`          - Verify credentials against the upstream
/// - `GET  /teams`          - List workspace teams (credential headers)
/// - `POST /invoices`       - Aggregate invoices across requested periods
/// - `POST /reports/excel`  - Same aggregation, delivered as an XLSX download
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/teams", get(teams_handler))
        .route("/invoices", post(invoices_handler))
        .route("/reports/excel", post(report_handler))
}
