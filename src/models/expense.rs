use rust_decimal::Decimal;

use super::Category;
use crate::normalize::Outcome;

/// One invoice row as read back from the expenses sheet. `amount` has already
/// been through the normalizer; `amount_outcome` says what it took.
#[derive(Debug, Clone)]
pub struct Expense {
    /// 1-based data row position in the sheet, used for positional delete.
    pub row: usize,
    pub recorded_at: String,
    /// Format: "YYYY-MM-DD"
    pub invoice_date: String,
    pub plate: String,
    /// None when the stored tag is not a known category.
    pub category: Option<Category>,
    pub amount: Decimal,
    pub amount_outcome: Outcome,
    pub odometer_km: Option<i64>,
    pub invoice_no: String,
    pub description: String,
}

impl Expense {
    pub fn needs_review(&self) -> bool {
        self.amount_outcome.needs_review()
    }

    pub fn category_label(&self) -> &str {
        self.category.map(|c| c.as_str()).unwrap_or("—")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("invoice number is required")]
    MissingInvoiceNo,
}

/// Form payload for a row about to be appended. Validation happens here, at
/// the entry boundary only; the store accepts whatever it is handed.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Format: "YYYY-MM-DD"
    pub invoice_date: String,
    pub plate: String,
    pub category: Category,
    pub amount: Decimal,
    pub odometer_km: Option<i64>,
    pub invoice_no: String,
    pub description: String,
}

impl NewExpense {
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.amount <= Decimal::ZERO {
            return Err(EntryError::NonPositiveAmount);
        }
        if self.invoice_no.trim().is_empty() {
            return Err(EntryError::MissingInvoiceNo);
        }
        Ok(())
    }
}
