//! reqwest-backed gateway to the Nexudus REST API.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use url::Url;

use crate::domain::credentials::Credentials;
use crate::domain::gateway::{BillingGateway, UpstreamError};
use crate::domain::invoice::InvoiceRecord;
use crate::domain::period::DateRange;

/// First-page envelope returned by Nexudus list endpoints.
/// A payload without a `Records` key is treated as an empty page.
#[derive(Debug, Deserialize)]
struct InvoicePage {
    #[serde(default, rename = "Records")]
    records: Vec<InvoiceRecord>,
}

/// Gateway speaking the Nexudus workspace-management REST dialect.
///
/// Holds no credentials: the `Authorization` header is rebuilt per call from
/// the credentials the caller passes in, so one gateway instance serves any
/// number of tenants. The shared [`Client`] carries the bounded request
/// timeout configured at startup.
pub struct NexudusGateway {
    client: Client,
    base_url: Url,
    invoice_page_size: u32,
    team_page_size: u32,
}

impl NexudusGateway {
    /// Creates a gateway rooted at `base_url` (must end with a slash for
    /// relative joins to resolve under it).
    pub fn new(client: Client, base_url: Url, invoice_page_size: u32, team_page_size: u32) -> Self {
        Self {
            client,
            base_url,
            invoice_page_size,
            team_page_size,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, UpstreamError> {
        self.base_url
            .join(path)
            .map_err(|e| UpstreamError::Transport(format!("invalid upstream url: {e}")))
    }
}

/// Query string for one per-period invoice lookup: first page only, team
/// name equality, datetime bounds covering the whole range.
fn invoice_query(team_name: &str, range: &DateRange, page_size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("page", "1".to_string()),
        ("size", page_size.to_string()),
        ("Invoice_BillToName", team_name.to_string()),
        (
            "from_Invoice_InvoiceFromDate",
            format!("{}T00:00:00", range.start),
        ),
        (
            "to_Invoice_InvoiceToDate",
            format!("{}T23:59:59", range.end),
        ),
    ]
}

fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Transport("request timed out".to_string())
    } else if e.is_connect() {
        UpstreamError::Transport(format!("connection failed: {e}"))
    } else {
        UpstreamError::Transport(e.to_string())
    }
}

async fn rejected(response: reqwest::Response) -> UpstreamError {
    let status = response.status().as_u16();
    let detail = response.text().await.unwrap_or_default();
    UpstreamError::Rejected { status, detail }
}

#[async_trait]
impl BillingGateway for NexudusGateway {
    async fn check_access(&self, credentials: &Credentials) -> Result<(), UpstreamError> {
        let url = self.endpoint("spaces/teams")?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, credentials.authorization_header())
            .query(&[("page", "1"), ("size", "1")])
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejected(response).await)
        }
    }

    async fn list_teams(
        &self,
        credentials: &Credentials,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = self.endpoint("spaces/teams")?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, credentials.authorization_header())
            .query(&[
                ("page", "1".to_string()),
                ("size", self.team_page_size.to_string()),
                ("dir", "Ascending".to_string()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(rejected(response).await);
        }

        response.json().await.map_err(|e| UpstreamError::Rejected {
            status: status.as_u16(),
            detail: format!("malformed response body: {e}"),
        })
    }

    async fn invoices_in_range(
        &self,
        credentials: &Credentials,
        team_name: &str,
        range: &DateRange,
    ) -> Result<Vec<InvoiceRecord>, UpstreamError> {
        let url = self.endpoint("billing/invoices")?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, credentials.authorization_header())
            .query(&invoice_query(team_name, range, self.invoice_page_size))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(rejected(response).await);
        }

        let page: InvoicePage = response.json().await.map_err(|e| UpstreamError::Rejected {
            status: status.as_u16(),
            detail: format!("malformed response body: {e}"),
        })?;

        Ok(page.records)
    }

    async fn ping(&self) -> bool {
        let Ok(url) = self.endpoint("spaces/teams") else {
            return false;
        };

        // Unauthenticated on purpose: any HTTP response proves reachability.
        self.client
            .get(url)
            .query(&[("page", "1"), ("size", "1")])
            .send()
            .await
            .is_ok()
    }
}
