//! Handler for the Excel report endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::api::dto::report::ReportRequest;
use crate::error::AppError;
use crate::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Aggregates invoices and returns them as a downloadable XLSX workbook.
///
/// # Endpoint
///
/// `POST /api/reports/excel`
///
/// Takes the same payload as `POST /api/invoices`. The response body is the
/// workbook itself, delivered as an attachment named
/// `invoices_{team}_{timestamp}.xlsx`.
///
/// # Errors
///
/// Returns 400 Bad Request when validation fails, 404 Not Found when no
/// invoices match the selection, 502 Bad Gateway when a period's upstream
/// query fails.
pub async fn report_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReportRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let report = state
        .report_service
        .validate_and_render(
            &payload.email,
            &payload.password,
            &payload.team_name,
            &payload.months,
        )
        .await?;

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.filename),
        ),
    ];

    Ok((headers, report.bytes).into_response())
}
