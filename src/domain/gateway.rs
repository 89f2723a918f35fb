//! Upstream billing gateway trait definition.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::credentials::Credentials;
use crate::domain::invoice::InvoiceRecord;
use crate::domain::period::DateRange;

/// Failures raised by a gateway call, before any period context is attached.
///
/// The caller decides what each variant means for the operation in flight:
/// the report pipeline wraps [`UpstreamError::Rejected`] with the offending
/// period, the login check turns it into an authentication failure.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Non-success status or unreadable body from the upstream.
    #[error("upstream returned {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The request never completed: timeout, refused connection, DNS failure.
    #[error("{0}")]
    Transport(String),
}

/// Interface to the remote workspace-management API.
///
/// The upstream's authentication, pagination, and query-filter semantics are
/// a fixed external contract; implementations only translate between domain
/// types and that contract.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::NexudusGateway`] - reqwest-backed
///   implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BillingGateway: Send + Sync {
    /// Verifies the credentials with a minimal authenticated query.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Rejected`] when the upstream refuses the
    /// credentials, [`UpstreamError::Transport`] when it cannot be reached.
    async fn check_access(&self, credentials: &Credentials) -> Result<(), UpstreamError>;

    /// Lists the workspace's teams, first page, ascending.
    ///
    /// The upstream payload is passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Rejected`] on a non-success status or a
    /// malformed body, [`UpstreamError::Transport`] on connection failure.
    async fn list_teams(&self, credentials: &Credentials)
    -> Result<serde_json::Value, UpstreamError>;

    /// Fetches the first page of invoices billed to `team_name` within the
    /// inclusive date range.
    ///
    /// A response without a record list yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Rejected`] on a non-success status or a
    /// malformed body, [`UpstreamError::Transport`] on connection failure.
    async fn invoices_in_range(
        &self,
        credentials: &Credentials,
        team_name: &str,
        range: &DateRange,
    ) -> Result<Vec<InvoiceRecord>, UpstreamError>;

    /// Whether the upstream is reachable at all, for health reporting.
    /// Any HTTP response counts as reachable, including auth rejections.
    async fn ping(&self) -> bool;
}
