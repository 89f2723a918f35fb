//! Multi-period invoice aggregation and report generation.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::credentials::Credentials;
use crate::domain::error::ReportError;
use crate::domain::gateway::{BillingGateway, UpstreamError};
use crate::domain::invoice::InvoiceRecord;
use crate::domain::period::{Period, PeriodSelection, validate_periods};
use crate::infrastructure::excel::ExcelReportWriter;

/// A rendered spreadsheet plus the filename it should be delivered under.
#[derive(Debug)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Service running the invoice aggregation pipeline.
///
/// Queries are issued sequentially, one per requested period, in the
/// caller-supplied order. Sequential issuance keeps the accumulation order
/// deterministic and avoids merging concurrent partial results. Each
/// invocation's accumulator is local, so independent reports may run
/// concurrently without coordination.
///
/// Records whose date range spans two requested periods appear once per
/// matching query window; no deduplication is performed.
pub struct ReportService {
    gateway: Arc<dyn BillingGateway>,
    writer: ExcelReportWriter,
}

impl ReportService {
    /// Creates a new report service backed by the given gateway.
    pub fn new(gateway: Arc<dyn BillingGateway>) -> Self {
        Self {
            gateway,
            writer: ExcelReportWriter::new(),
        }
    }

    /// Validates the request and aggregates invoices across all periods.
    ///
    /// Validation happens before any network call. The fetch is fail-fast:
    /// the first period whose query is rejected aborts the whole operation
    /// and already-fetched records are discarded.
    ///
    /// # Errors
    ///
    /// Validation kinds from [`Credentials::parse`] and [`validate_periods`];
    /// [`ReportError::UpstreamRejected`] or [`ReportError::Transport`] when a
    /// query fails.
    pub async fn validate_and_fetch(
        &self,
        email: &str,
        password: &str,
        team_name: &str,
        selections: &[PeriodSelection],
    ) -> Result<Vec<InvoiceRecord>, ReportError> {
        let credentials = Credentials::parse(email, password)?;
        let periods = validate_periods(selections)?;
        self.fetch_all(&credentials, team_name, &periods).await
    }

    /// Aggregates invoices and renders them into a downloadable workbook.
    ///
    /// # Errors
    ///
    /// Everything [`Self::validate_and_fetch`] returns, plus
    /// [`ReportError::EmptyResult`] when the aggregation matched nothing and
    /// [`ReportError::Render`] when workbook serialization fails.
    pub async fn validate_and_render(
        &self,
        email: &str,
        password: &str,
        team_name: &str,
        selections: &[PeriodSelection],
    ) -> Result<RenderedReport, ReportError> {
        let records = self
            .validate_and_fetch(email, password, team_name, selections)
            .await?;

        let bytes = self.writer.render(&records)?;
        let filename = report_filename(team_name, Utc::now());

        tracing::info!(
            team = team_name,
            invoices = records.len(),
            filename = %filename,
            "generated invoice report"
        );

        Ok(RenderedReport { bytes, filename })
    }

    async fn fetch_all(
        &self,
        credentials: &Credentials,
        team_name: &str,
        periods: &[Period],
    ) -> Result<Vec<InvoiceRecord>, ReportError> {
        let mut invoices = Vec::new();

        for period in periods {
            let range = period.date_range();

            tracing::info!(team = team_name, period = %period, "fetching invoices");

            let records = self
                .gateway
                .invoices_in_range(credentials, team_name, &range)
                .await
                .map_err(|e| match e {
                    UpstreamError::Rejected { status, detail } => {
                        tracing::error!(team = team_name, period = %period, status, "invoice query rejected");
                        ReportError::UpstreamRejected {
                            period: *period,
                            status,
                            detail,
                        }
                    }
                    UpstreamError::Transport(cause) => ReportError::Transport(cause),
                })?;

            tracing::info!(team = team_name, period = %period, count = records.len(), "invoices received");

            invoices.extend(records);
        }

        Ok(invoices)
    }
}

/// Builds the caller-facing attachment name from the team and a timestamp.
fn report_filename(team_name: &str, at: DateTime<Utc>) -> String {
    format!("invoices_{}_{}.xlsx", team_name, at.format("%Y%m%d_%H%M%S"))
}
