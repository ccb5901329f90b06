#![allow(clippy::unwrap_used)]

use super::memory::MemStore;
use super::*;
use serde_json::json;

fn sample() -> Table {
    let mut table = Table::new(vec!["plate", "notes"]);
    table.rows.push(vec![json!("AA-00-AA"), json!("first")]);
    table.rows.push(vec![json!("BB-11-BB"), json!("second")]);
    table
}

// ── Table field mapping ───────────────────────────────────────

#[test]
fn test_field_lookup_is_case_insensitive() {
    let table = sample();
    assert_eq!(table.field("Plate"), Some(0));
    assert_eq!(table.field("NOTES"), Some(1));
    assert_eq!(table.field("missing"), None);
}

#[test]
fn test_cell_text_renders_numbers() {
    let mut table = Table::new(vec!["plate", "odometer_km"]);
    table.rows.push(vec![json!("AA-00-AA"), json!(123456)]);
    let row = &table.rows[0];
    assert_eq!(table.cell_text(row, "odometer_km"), "123456");
}

#[test]
fn test_cell_text_missing_column_is_empty() {
    let table = sample();
    let row = &table.rows[0];
    assert_eq!(table.cell_text(row, "odometer_km"), "");
}

#[test]
fn test_cell_text_null_is_empty() {
    let mut table = Table::new(vec!["plate", "notes"]);
    table.rows.push(vec![json!("AA-00-AA"), serde_json::Value::Null]);
    let row = &table.rows[0];
    assert_eq!(table.cell_text(row, "notes"), "");
}

// ── MemStore row semantics ────────────────────────────────────

#[test]
fn test_append_and_read() {
    let store = MemStore::new().with_tab("expenses", sample());
    store
        .append_row("expenses", &[json!("CC-22-CC"), json!("third")])
        .unwrap();
    let table = store.read_all("expenses").unwrap();
    assert_eq!(table.rows.len(), 3);
}

#[test]
fn test_delete_is_one_based() {
    let store = MemStore::new().with_tab("expenses", sample());
    store.delete_row("expenses", 1).unwrap();
    let table = store.read_all("expenses").unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.cell_text(&table.rows[0], "plate"), "BB-11-BB");
}

#[test]
fn test_delete_out_of_range() {
    let store = MemStore::new().with_tab("expenses", sample());
    assert!(matches!(
        store.delete_row("expenses", 0),
        Err(SheetError::RowOutOfRange(0))
    ));
    assert!(matches!(
        store.delete_row("expenses", 9),
        Err(SheetError::RowOutOfRange(9))
    ));
}

#[test]
fn test_find_row_matches_first_column() {
    let store = MemStore::new().with_tab("validities", sample());
    assert_eq!(store.find_row("validities", "BB-11-BB").unwrap(), Some(2));
    assert_eq!(store.find_row("validities", "ZZ-99-ZZ").unwrap(), None);
}

#[test]
fn test_rewrite_replaces_tab() {
    let store = MemStore::new().with_tab("validities", sample());
    let replacement = Table::new(vec!["plate", "notes"]);
    store.rewrite("validities", &replacement).unwrap();
    assert!(store.read_all("validities").unwrap().rows.is_empty());
}

#[test]
fn test_unknown_tab_is_payload_error() {
    let store = MemStore::new();
    assert!(matches!(
        store.read_all("nope"),
        Err(SheetError::Payload(_))
    ));
}
