//! DTOs for the invoice listing and report endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::invoice::InvoiceRecord;
use crate::domain::period::PeriodSelection;

/// Request payload shared by the invoice listing and Excel report endpoints.
///
/// Credentials travel in the body, constructed fresh per request; they are
/// never cached server-side. Month/year values are validated by the domain
/// layer, which accepts numbers and numeric strings alike.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportRequest {
    pub email: String,
    pub password: String,

    #[validate(length(min = 1, message = "Team name is required"))]
    pub team_name: String,

    #[serde(default)]
    pub months: Vec<PeriodSelection>,
}

/// Aggregated invoices for the requested periods, in request order.
#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
    pub message: &'static str,
    pub data: Vec<InvoiceRecord>,
}
