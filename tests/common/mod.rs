#![allow(dead_code)]

use async_trait::async_trait;
use invoice_reporter::domain::credentials::Credentials;
use invoice_reporter::domain::gateway::{BillingGateway, UpstreamError};
use invoice_reporter::domain::invoice::InvoiceRecord;
use invoice_reporter::domain::period::DateRange;
use invoice_reporter::state::AppState;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One canned answer for an invoice query.
pub enum CannedResult {
    Records(Vec<InvoiceRecord>),
    Rejected { status: u16, detail: String },
    Transport(String),
}

/// Scripted gateway double for handler tests.
///
/// Invoice queries pop canned results in order and are recorded as
/// `(team, start, end)` tuples so tests can assert on the exact upstream
/// queries a request produced.
pub struct StubGateway {
    pub access_ok: bool,
    pub reachable: bool,
    pub teams: Value,
    pub invoice_results: Mutex<VecDeque<CannedResult>>,
    pub queries: Mutex<Vec<(String, String, String)>>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            access_ok: true,
            reachable: true,
            teams: json!({ "Records": [] }),
            invoice_results: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose invoice queries answer with the given batches, in order.
    pub fn with_invoices(batches: Vec<Vec<InvoiceRecord>>) -> Self {
        let stub = Self::new();
        for batch in batches {
            stub.push(CannedResult::Records(batch));
        }
        stub
    }

    pub fn push(&self, result: CannedResult) {
        self.invoice_results.lock().unwrap().push_back(result);
    }

    pub fn recorded_queries(&self) -> Vec<(String, String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillingGateway for StubGateway {
    async fn check_access(&self, _credentials: &Credentials) -> Result<(), UpstreamError> {
        if self.access_ok {
            Ok(())
        } else {
            Err(UpstreamError::Rejected {
                status: 401,
                detail: "unauthorized".to_string(),
            })
        }
    }

    async fn list_teams(&self, _credentials: &Credentials) -> Result<Value, UpstreamError> {
        if self.access_ok {
            Ok(self.teams.clone())
        } else {
            Err(UpstreamError::Rejected {
                status: 401,
                detail: "unauthorized".to_string(),
            })
        }
    }

    async fn invoices_in_range(
        &self,
        _credentials: &Credentials,
        team_name: &str,
        range: &DateRange,
    ) -> Result<Vec<InvoiceRecord>, UpstreamError> {
        self.queries.lock().unwrap().push((
            team_name.to_string(),
            range.start.to_string(),
            range.end.to_string(),
        ));

        match self.invoice_results.lock().unwrap().pop_front() {
            Some(CannedResult::Records(records)) => Ok(records),
            Some(CannedResult::Rejected { status, detail }) => {
                Err(UpstreamError::Rejected { status, detail })
            }
            Some(CannedResult::Transport(cause)) => Err(UpstreamError::Transport(cause)),
            None => Ok(Vec::new()),
        }
    }

    async fn ping(&self) -> bool {
        self.reachable
    }
}

/// Builds application state around a stub gateway.
pub fn test_state(gateway: Arc<StubGateway>) -> AppState {
    AppState::new(gateway)
}

/// A minimal invoice record carrying the projected fields.
pub fn invoice(id: i64, team: &str) -> InvoiceRecord {
    serde_json::from_value(json!({
        "RecordID": id,
        "Invoice_BillToName": team,
        "Invoice_InvoiceFromDate": "2023-01-01T00:00:00",
        "Invoice_InvoiceToDate": "2023-01-31T00:00:00",
        "Invoice_TotalGrossAmount": 100.0 * id as f64,
        "Invoice_Reference": format!("INV-{id}"),
    }))
    .unwrap()
}

/// The request body shared by the invoice and report endpoints.
pub fn report_payload(team: &str, months: &[(i32, i32)]) -> Value {
    let months: Vec<Value> = months
        .iter()
        .map(|(m, y)| json!({ "month": m, "year": y }))
        .collect();

    json!({
        "email": "ops@example.com",
        "password": "pw",
        "team_name": team,
        "months": months,
    })
}
