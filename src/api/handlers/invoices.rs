//! Handler for the invoice listing endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::report::{InvoicesResponse, ReportRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Aggregates invoices for a team across the requested periods.
///
/// # Endpoint
///
/// `POST /api/invoices`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "secret",
///   "team_name": "Acme",
///   "months": [
///     { "month": 1, "year": 2023 },
///     { "month": 2, "year": 2023 }
///   ]
/// }
/// ```
///
/// Records come back in request-period order, then upstream order within a
/// period. A failed period aborts the whole request rather than returning a
/// silently incomplete set.
///
/// # Errors
///
/// Returns 400 Bad Request when validation fails, 502 Bad Gateway when any
/// period's upstream query is rejected or the upstream is unreachable.
pub async fn invoices_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReportRequest>,
) -> Result<Json<InvoicesResponse>, AppError> {
    payload.validate()?;

    let data = state
        .report_service
        .validate_and_fetch(
            &payload.email,
            &payload.password,
            &payload.team_name,
            &payload.months,
        )
        .await?;

    Ok(Json(InvoicesResponse {
        message: "Invoices retrieved successfully",
        data,
    }))
}
