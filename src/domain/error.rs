//! Error kinds surfaced by the reporting pipeline.

use crate::domain::period::Period;
use thiserror::Error;

/// Failures the reporting pipeline can return to its caller.
///
/// Validation variants are produced before any network call. Fetch variants
/// abort the whole aggregation: a multi-month report must not silently omit
/// a month's data. [`ReportError::EmptyResult`] is kept separate from fetch
/// failures so callers can present "no invoices for this selection"
/// differently from "the lookup failed".
#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    /// Credentials are missing or the email is not well-formed.
    #[error("{0}")]
    InvalidCredentials(&'static str),

    /// The requested period list was empty.
    #[error("at least one month/year selection is required")]
    EmptySelection,

    /// A period selection is missing its month or year.
    #[error("all month and year fields must be filled")]
    MissingField,

    /// A month could not be parsed or falls outside 1-12.
    #[error("month must be a whole number between 1 and 12")]
    InvalidMonth,

    /// A year could not be parsed or falls outside the accepted range.
    #[error("year must be a whole number between 2020 and {max}")]
    InvalidYear { max: i32 },

    /// The upstream rejected the capability check during login.
    #[error("invalid credentials")]
    AccessDenied,

    /// The team directory listing was rejected by the upstream.
    #[error("team directory lookup failed: upstream returned {status}")]
    DirectoryRejected { status: u16, detail: String },

    /// An invoice query for one period came back with a non-success status
    /// or an unreadable body. Records accumulated for earlier periods are
    /// discarded.
    #[error("invoice lookup failed for {period}: upstream returned {status}: {detail}")]
    UpstreamRejected {
        period: Period,
        status: u16,
        detail: String,
    },

    /// The request never completed: timeout, refused connection, DNS failure.
    #[error("could not reach the billing service: {0}")]
    Transport(String),

    /// The aggregation matched no invoices; an empty report is not produced.
    #[error("no invoices found for the selected periods")]
    EmptyResult,

    /// Workbook serialization failed.
    #[error("failed to build the report workbook: {0}")]
    Render(String),
}
