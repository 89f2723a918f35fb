//! Credential capability check and team listing.

use std::sync::Arc;

use crate::domain::credentials::Credentials;
use crate::domain::error::ReportError;
use crate::domain::gateway::{BillingGateway, UpstreamError};

/// Service for login verification and workspace team discovery.
///
/// Both operations validate credential well-formedness locally, then issue a
/// single authenticated query against the upstream. Neither is part of the
/// aggregation pipeline proper; they exist so a frontend can verify
/// credentials and offer a team picker before requesting a report.
pub struct DirectoryService {
    gateway: Arc<dyn BillingGateway>,
}

impl DirectoryService {
    /// Creates a new directory service backed by the given gateway.
    pub fn new(gateway: Arc<dyn BillingGateway>) -> Self {
        Self { gateway }
    }

    /// Verifies credentials with a minimal upstream query.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidCredentials`] before any network call
    /// when the pair is malformed, [`ReportError::AccessDenied`] when the
    /// upstream refuses it, [`ReportError::Transport`] when the upstream is
    /// unreachable.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ReportError> {
        let credentials = Credentials::parse(email, password)?;

        match self.gateway.check_access(&credentials).await {
            Ok(()) => {
                tracing::info!(email = credentials.email(), "login succeeded");
                Ok(())
            }
            Err(UpstreamError::Rejected { status, .. }) => {
                tracing::warn!(email = credentials.email(), status, "login rejected");
                Err(ReportError::AccessDenied)
            }
            Err(UpstreamError::Transport(cause)) => Err(ReportError::Transport(cause)),
        }
    }

    /// Lists the workspace's teams, passing the upstream payload through.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidCredentials`] on a malformed pair,
    /// [`ReportError::DirectoryRejected`] when the upstream refuses the
    /// listing, [`ReportError::Transport`] when it is unreachable.
    pub async fn teams(
        &self,
        email: &str,
        password: &str,
    ) -> Result<serde_json::Value, ReportError> {
        let credentials = Credentials::parse(email, password)?;

        let teams = self
            .gateway
            .list_teams(&credentials)
            .await
            .map_err(|e| match e {
                UpstreamError::Rejected { status, detail } => {
                    tracing::error!(status, "team listing rejected");
                    ReportError::DirectoryRejected { status, detail }
                }
                UpstreamError::Transport(cause) => ReportError::Transport(cause),
            })?;

        tracing::info!("retrieved team directory");
        Ok(teams)
    }

    /// Whether the upstream answers at all, for health reporting.
    pub async fn upstream_reachable(&self) -> bool {
        self.gateway.ping().await
    }
}
