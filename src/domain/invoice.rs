//! Opaque invoice records returned by the upstream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single invoice as returned by the upstream billing endpoint.
///
/// The upstream schema is a fixed external contract; the pipeline does not
/// validate or interpret fields beyond presence-or-absence handling of the
/// subset projected into the report. Everything else passes through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceRecord(Map<String, Value>);

impl InvoiceRecord {
    /// Looks up a field by its upstream name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl From<Map<String, Value>> for InvoiceRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
