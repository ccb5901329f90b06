use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

use super::{SheetError, SheetStore, Table};

/// In-memory stand-in for the remote store, mirroring its row semantics
/// (1-based positions, first-column find, whole-tab rewrite).
pub(crate) struct MemStore {
    tabs: RefCell<HashMap<String, Table>>,
}

impl MemStore {
    pub(crate) fn new() -> Self {
        Self {
            tabs: RefCell::new(HashMap::new()),
        }
    }

    pub(crate) fn with_tab(self, name: &str, table: Table) -> Self {
        self.tabs.borrow_mut().insert(name.to_string(), table);
        self
    }

    fn tab(&self, name: &str) -> Result<Table, SheetError> {
        self.tabs
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| SheetError::Payload(format!("no such tab: {name}")))
    }
}

impl SheetStore for MemStore {
    fn read_all(&self, tab: &str) -> Result<Table, SheetError> {
        self.tab(tab)
    }

    fn append_row(&self, tab: &str, values: &[Value]) -> Result<(), SheetError> {
        let mut tabs = self.tabs.borrow_mut();
        let table = tabs
            .get_mut(tab)
            .ok_or_else(|| SheetError::Payload(format!("no such tab: {tab}")))?;
        table.rows.push(values.to_vec());
        Ok(())
    }

    fn delete_row(&self, tab: &str, position: usize) -> Result<(), SheetError> {
        let mut tabs = self.tabs.borrow_mut();
        let table = tabs
            .get_mut(tab)
            .ok_or_else(|| SheetError::Payload(format!("no such tab: {tab}")))?;
        if position == 0 || position > table.rows.len() {
            return Err(SheetError::RowOutOfRange(position));
        }
        table.rows.remove(position - 1);
        Ok(())
    }

    fn rewrite(&self, tab: &str, table: &Table) -> Result<(), SheetError> {
        self.tabs
            .borrow_mut()
            .insert(tab.to_string(), table.clone());
        Ok(())
    }

    fn find_row(&self, tab: &str, key: &str) -> Result<Option<usize>, SheetError> {
        let tabs = self.tabs.borrow();
        let table = tabs
            .get(tab)
            .ok_or_else(|| SheetError::Payload(format!("no such tab: {tab}")))?;
        Ok(table
            .rows
            .iter()
            .position(|row| match row.first() {
                Some(Value::String(s)) => s == key,
                Some(Value::Number(n)) => n.to_string() == key,
                _ => false,
            })
            .map(|i| i + 1))
    }
}
