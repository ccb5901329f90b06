mod remote;

pub use remote::RemoteStore;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
pub(crate) mod memory;

/// Failure taxonomy at the store boundary. Callers above the ledger degrade
/// these to empty views; tests and logs keep the distinction.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("credential missing or unreadable: {0}")]
    Credential(String),
    #[error("store unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store rejected the request: HTTP {status}")]
    Status { status: u16, body: String },
    #[error("malformed store payload: {0}")]
    Payload(String),
    #[error("row {0} is out of range")]
    RowOutOfRange(usize),
}

/// A whole tab read: header row plus data rows. Field lookup is by header
/// name so column order in the document is free to drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(header: Vec<&str>) -> Self {
        Self {
            header: header.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h.eq_ignore_ascii_case(name))
    }

    pub fn cell<'a>(&self, row: &'a [Value], name: &str) -> Option<&'a Value> {
        self.field(name).and_then(|i| row.get(i))
    }

    /// Cell rendered as text: strings pass through, numbers print, anything
    /// else (including a missing column) reads as empty.
    pub fn cell_text(&self, row: &[Value], name: &str) -> String {
        match self.cell(row, name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

/// The collaborator surface of the remote spreadsheet. Row positions are
/// 1-based over data rows, header excluded; positional deletes are
/// last-write-wins by design.
pub trait SheetStore {
    fn read_all(&self, tab: &str) -> Result<Table, SheetError>;
    fn append_row(&self, tab: &str, values: &[Value]) -> Result<(), SheetError>;
    fn delete_row(&self, tab: &str, position: usize) -> Result<(), SheetError>;
    /// Clear the tab and write header + rows back in one call.
    fn rewrite(&self, tab: &str, table: &Table) -> Result<(), SheetError>;
    /// Position of the first data row whose first column equals `key`.
    fn find_row(&self, tab: &str, key: &str) -> Result<Option<usize>, SheetError>;
}

#[cfg(test)]
mod tests;
