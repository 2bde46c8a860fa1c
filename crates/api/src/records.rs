//! Response shapes.
//!
//! Records are opaque: their fields are defined by the API, not by this crate.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// A single record returned by the API.
pub type Record = Value;

/// One page of records as returned by a list endpoint.
///
/// The API answers either with a bare array or with an object holding the
/// array under the resource name (`{"swaps": [...]}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordBatch {
    Bare(Vec<Record>),
    Wrapped {
        #[serde(alias = "swaps", alias = "transfers", alias = "events")]
        records: Vec<Record>,
    },
}

impl RecordBatch {
    /// Extract the records from a decoded response body.
    pub fn from_body(body: Value) -> Result<Self> {
        Ok(serde_json::from_value(body)?)
    }

    /// The records in response order.
    pub fn into_records(self) -> Vec<Record> {
        match self {
            RecordBatch::Bare(records) | RecordBatch::Wrapped { records } => records,
        }
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        match self {
            RecordBatch::Bare(records) | RecordBatch::Wrapped { records } => records.len(),
        }
    }

    /// Whether the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
