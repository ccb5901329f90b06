use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::models::{is_known_plate, Category, Expense, NewExpense, Validity, ROSTER};
use crate::normalize::{normalize_amount, CorrectionRules};
use crate::sheet::{SheetError, SheetStore, Table};

pub const EXPENSES_TAB: &str = "expenses";
pub const VALIDITIES_TAB: &str = "validities";

const EXPENSE_HEADER: [&str; 8] = [
    "recorded_at",
    "invoice_date",
    "plate",
    "category",
    "amount",
    "odometer_km",
    "invoice_no",
    "description",
];

const VALIDITY_HEADER: [&str; 5] = [
    "plate",
    "insurance_due",
    "inspection_due",
    "road_tax_due",
    "notes",
];

/// Typed record layer over the two tabs of the fleet document. Reads are
/// tolerant: a malformed cell degrades to a default on that field, never to
/// a failed batch. Writes go through as-is; the store enforces nothing.
pub struct Ledger {
    store: Box<dyn SheetStore>,
    rules: CorrectionRules,
}

impl Ledger {
    pub fn new(store: Box<dyn SheetStore>, rules: CorrectionRules) -> Self {
        Self { store, rules }
    }

    // ── Expenses ──────────────────────────────────────────────

    pub fn expenses(&self) -> Result<Vec<Expense>, SheetError> {
        let table = self.store.read_all(EXPENSES_TAB)?;
        let amount_col = table.field("amount");

        let expenses = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let raw_amount = amount_col
                    .and_then(|c| row.get(c))
                    .cloned()
                    .unwrap_or(Value::Null);
                let category = Category::parse(&table.cell_text(row, "category"));
                let normalized = normalize_amount(&raw_amount, category, &self.rules);

                let plate = table.cell_text(row, "plate");
                if !plate.is_empty() && !is_known_plate(&plate) {
                    if crate::models::plate_like(&plate) {
                        tracing::debug!(row = i + 1, %plate, "plate not on the roster");
                    } else {
                        tracing::debug!(row = i + 1, %plate, "plate column holds non-plate text");
                    }
                }

                Expense {
                    row: i + 1,
                    recorded_at: table.cell_text(row, "recorded_at"),
                    invoice_date: table.cell_text(row, "invoice_date"),
                    plate,
                    category,
                    amount: normalized.value,
                    amount_outcome: normalized.outcome,
                    odometer_km: table.cell_text(row, "odometer_km").parse().ok(),
                    invoice_no: table.cell_text(row, "invoice_no"),
                    description: table.cell_text(row, "description"),
                }
            })
            .collect();

        Ok(expenses)
    }

    pub fn append_expense(&self, new: &NewExpense) -> Result<(), SheetError> {
        let recorded_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        // Amounts are written back as canonical decimal text so the store
        // never re-acquires the bare-number encoding that caused the
        // dropped-decimal defect in the first place.
        let values = vec![
            json!(recorded_at),
            json!(new.invoice_date),
            json!(new.plate),
            json!(new.category.as_str()),
            json!(new.amount.round_dp(2).to_string()),
            new.odometer_km.map(|km| json!(km)).unwrap_or(json!("")),
            json!(new.invoice_no),
            json!(new.description),
        ];
        self.store.append_row(EXPENSES_TAB, &values)
    }

    /// Positional delete. The position comes from the last read, so a write
    /// from another session in between can shift rows underneath it.
    pub fn delete_expense(&self, row: usize) -> Result<(), SheetError> {
        self.store.delete_row(EXPENSES_TAB, row)
    }

    // ── Validities ────────────────────────────────────────────

    /// All validity records, one per roster plate, roster order first.
    /// Plates with no stored row are backfilled as unset; stray rows for
    /// off-roster plates are kept at the end.
    pub fn validities(&self) -> Result<Vec<Validity>, SheetError> {
        let table = self.store.read_all(VALIDITIES_TAB)?;
        let stored: Vec<Validity> = table
            .rows
            .iter()
            .map(|row| parse_validity(&table, row))
            .collect();

        let mut out: Vec<Validity> = ROSTER
            .iter()
            .map(|plate| {
                stored
                    .iter()
                    .find(|v| v.plate == *plate)
                    .cloned()
                    .unwrap_or_else(|| Validity::new(*plate))
            })
            .collect();
        out.extend(
            stored
                .into_iter()
                .filter(|v| !is_known_plate(&v.plate) && !v.plate.is_empty()),
        );
        Ok(out)
    }

    /// Overwrite the plate's row, or append one if the plate has none. The
    /// boundary has no update-row op, so an existing row goes through
    /// read-modify-rewrite of the whole tab.
    pub fn upsert_validity(&self, validity: &Validity) -> Result<(), SheetError> {
        let values = validity_values(validity);
        match self.store.find_row(VALIDITIES_TAB, &validity.plate)? {
            Some(position) => {
                let mut table = self.store.read_all(VALIDITIES_TAB)?;
                if position == 0 || position > table.rows.len() {
                    return Err(SheetError::RowOutOfRange(position));
                }
                table.header = VALIDITY_HEADER.iter().map(|h| h.to_string()).collect();
                table.rows[position - 1] = values;
                self.store.rewrite(VALIDITIES_TAB, &table)
            }
            None => self.store.append_row(VALIDITIES_TAB, &values),
        }
    }

    // ── Export ────────────────────────────────────────────────

    /// Write normalized expenses to a local CSV, optionally filtered to one
    /// "YYYY-MM" month. Returns the number of rows written.
    pub fn export_csv(&self, path: &str, month: Option<&str>) -> Result<usize> {
        let expenses = self
            .expenses()
            .context("reading expenses from the store")?;
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating export file: {path}"))?;

        writer.write_record([
            "invoice_date",
            "plate",
            "category",
            "amount",
            "odometer_km",
            "invoice_no",
            "description",
            "review",
            "recorded_at",
        ])?;

        let mut count = 0;
        for e in &expenses {
            if let Some(m) = month {
                if !e.invoice_date.starts_with(m) {
                    continue;
                }
            }
            let amount = e.amount.round_dp(2).to_string();
            let odometer = e.odometer_km.map(|km| km.to_string()).unwrap_or_default();
            writer.write_record([
                e.invoice_date.as_str(),
                e.plate.as_str(),
                e.category_label(),
                amount.as_str(),
                odometer.as_str(),
                e.invoice_no.as_str(),
                e.description.as_str(),
                if e.needs_review() { "yes" } else { "" },
                e.recorded_at.as_str(),
            ])?;
            count += 1;
        }
        writer.flush()?;
        Ok(count)
    }

    /// Fresh, empty tabs in the expected layout.
    #[cfg(test)]
    pub(crate) fn empty_expenses_table() -> Table {
        Table::new(EXPENSE_HEADER.to_vec())
    }

    #[cfg(test)]
    pub(crate) fn empty_validities_table() -> Table {
        Table::new(VALIDITY_HEADER.to_vec())
    }
}

fn parse_validity(table: &Table, row: &[Value]) -> Validity {
    Validity {
        plate: table.cell_text(row, "plate"),
        insurance_due: crate::models::parse_due(&table.cell_text(row, "insurance_due")),
        inspection_due: crate::models::parse_due(&table.cell_text(row, "inspection_due")),
        road_tax_due: crate::models::parse_due(&table.cell_text(row, "road_tax_due")),
        notes: table.cell_text(row, "notes"),
    }
}

fn validity_values(validity: &Validity) -> Vec<Value> {
    let date = |d: Option<chrono::NaiveDate>| {
        json!(d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
    };
    vec![
        json!(validity.plate),
        date(validity.insurance_due),
        date(validity.inspection_due),
        date(validity.road_tax_due),
        json!(validity.notes),
    ]
}
