use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::alerts::AlertSummary;
use crate::auth::Session;
use crate::ledger::Ledger;
use crate::models::{Category, Expense, NewExpense, Validity, ROSTER};
use crate::report::{self, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Entry,
    Summary,
    Validity,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Entry, Self::Summary, Self::Validity]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => write!(f, "Add Expense"),
            Self::Summary => write!(f, "Summary"),
            Self::Validity => write!(f, "Validity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Login,
    Normal,
    Editing,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "LOGIN"),
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteExpense { row: usize, invoice_no: String },
}

pub(crate) const ENTRY_FIELDS: [&str; 8] = [
    "Vehicle",
    "Category",
    "Invoice date",
    "Invoice no",
    "Amount",
    "Odometer (km)",
    "Detail tag",
    "Description",
];

/// The Add Expense form. Select fields hold roster/category indices; text
/// fields hold raw buffers parsed on save.
#[derive(Debug, Clone)]
pub(crate) struct EntryForm {
    pub(crate) plate_index: usize,
    pub(crate) category_index: usize,
    pub(crate) invoice_date: String,
    pub(crate) invoice_no: String,
    pub(crate) amount: String,
    pub(crate) odometer: String,
    pub(crate) detail_tag: String,
    pub(crate) description: String,
}

impl EntryForm {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            plate_index: 0,
            category_index: 0,
            invoice_date: today.format("%Y-%m-%d").to_string(),
            invoice_no: String::new(),
            amount: String::new(),
            odometer: String::new(),
            detail_tag: String::new(),
            description: String::new(),
        }
    }

    pub(crate) fn is_select(field: usize) -> bool {
        field <= 1
    }

    pub(crate) fn field_value(&self, field: usize) -> String {
        match field {
            0 => ROSTER[self.plate_index % ROSTER.len()].to_string(),
            1 => Category::all()[self.category_index % Category::all().len()].to_string(),
            2 => self.invoice_date.clone(),
            3 => self.invoice_no.clone(),
            4 => self.amount.clone(),
            5 => self.odometer.clone(),
            6 => self.detail_tag.clone(),
            _ => self.description.clone(),
        }
    }

    pub(crate) fn set_field(&mut self, field: usize, value: String) {
        match field {
            2 => self.invoice_date = value,
            3 => self.invoice_no = value,
            4 => self.amount = value,
            5 => self.odometer = value,
            6 => self.detail_tag = value,
            7 => self.description = value,
            _ => {}
        }
    }

    pub(crate) fn cycle(&mut self, field: usize, delta: i32) {
        let step = |index: usize, len: usize| {
            if delta >= 0 {
                (index + 1) % len
            } else if index == 0 {
                len - 1
            } else {
                index - 1
            }
        };
        match field {
            0 => self.plate_index = step(self.plate_index, ROSTER.len()),
            1 => self.category_index = step(self.category_index, Category::all().len()),
            _ => {}
        }
    }

    /// Build the row to append, or a specific message for the entry error.
    pub(crate) fn to_new_expense(&self) -> Result<NewExpense, String> {
        let date = NaiveDate::parse_from_str(self.invoice_date.trim(), "%Y-%m-%d")
            .map_err(|_| "Invoice date must be YYYY-MM-DD".to_string())?;

        let amount_text = self.amount.trim().replace(',', ".");
        let amount = if amount_text.is_empty() {
            Decimal::ZERO
        } else {
            Decimal::from_str(&amount_text)
                .map_err(|_| format!("'{}' is not an amount", self.amount.trim()))?
        };

        let odometer_text = self.odometer.trim();
        let odometer_km = if odometer_text.is_empty() {
            None
        } else {
            Some(
                odometer_text
                    .parse::<i64>()
                    .map_err(|_| format!("'{odometer_text}' is not a km reading"))?,
            )
        };

        let tag = self.detail_tag.trim();
        let text = self.description.trim();
        let description = if tag.is_empty() {
            text.to_string()
        } else if text.is_empty() {
            tag.to_string()
        } else {
            format!("{tag}: {text}")
        };

        let new = NewExpense {
            invoice_date: date.format("%Y-%m-%d").to_string(),
            plate: ROSTER[self.plate_index % ROSTER.len()].to_string(),
            category: Category::all()[self.category_index % Category::all().len()],
            amount,
            odometer_km,
            invoice_no: self.invoice_no.trim().to_string(),
            description,
        };
        new.validate().map_err(|e| e.to_string())?;
        Ok(new)
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) session: Session,
    pub(crate) passphrase_digest: String,
    pub(crate) today: NaiveDate,

    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) login_input: String,
    pub(crate) login_error: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// None means all time.
    pub(crate) current_month: Option<String>,

    // Entry
    pub(crate) form: EntryForm,
    pub(crate) entry_field: usize,

    // Summary
    all_expenses: Vec<Expense>,
    pub(crate) expenses: Vec<Expense>,
    pub(crate) summary: Summary,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Validity
    pub(crate) validities: Vec<Validity>,
    pub(crate) alert_summary: AlertSummary,
    pub(crate) validity_index: usize,
    pub(crate) validity_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(today: NaiveDate, passphrase_digest: String) -> Self {
        Self {
            running: true,
            screen: Screen::Entry,
            input_mode: InputMode::Login,
            session: Session::new(),
            passphrase_digest,
            today,

            command_input: String::new(),
            search_input: String::new(),
            login_input: String::new(),
            login_error: String::new(),
            status_message: String::new(),
            show_help: false,
            current_month: Some(today.format("%Y-%m").to_string()),

            form: EntryForm::new(today),
            entry_field: 0,

            all_expenses: Vec::new(),
            expenses: Vec::new(),
            summary: Summary::default(),
            expense_index: 0,
            expense_scroll: 0,

            validities: Vec::new(),
            alert_summary: AlertSummary::default(),
            validity_index: 0,
            validity_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Pull expenses from the store. A store failure degrades to the last
    /// good view plus a status message; it never takes the screen down.
    pub(crate) fn refresh_expenses(&mut self, ledger: &Ledger) {
        match ledger.expenses() {
            Ok(expenses) => {
                self.all_expenses = expenses;
            }
            Err(e) => {
                tracing::warn!(error = %e, "expense read failed");
                self.set_status(format!("Store unavailable: {e}"));
            }
        }
        self.apply_filters();
    }

    /// Re-derive the visible table and the summary from the cached rows.
    pub(crate) fn apply_filters(&mut self) {
        let month = self.current_month.as_deref();
        self.expenses = self
            .all_expenses
            .iter()
            .filter(|e| report::in_month(e, month))
            .filter(|e| report::matches_search(e, &self.search_input))
            .cloned()
            .collect();
        self.summary = Summary::compute(&self.expenses);
        if self.expense_index >= self.expenses.len() {
            self.expense_index = self.expenses.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn refresh_validities(&mut self, ledger: &Ledger) {
        match ledger.validities() {
            Ok(validities) => {
                self.validities = validities;
                self.alert_summary = crate::alerts::AlertSummary::compute(&self.validities, self.today);
            }
            Err(e) => {
                tracing::warn!(error = %e, "validity read failed");
                self.set_status(format!("Store unavailable: {e}"));
            }
        }
        if self.validity_index >= self.validities.len() {
            self.validity_index = self.validities.len().saturating_sub(1);
        }
    }

    pub(crate) fn refresh_all(&mut self, ledger: &Ledger) {
        self.refresh_expenses(ledger);
        self.refresh_validities(ledger);
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_index)
    }

    pub(crate) fn selected_validity(&self) -> Option<&Validity> {
        self.validities.get(self.validity_index)
    }

    pub(crate) fn reset_form(&mut self) {
        let plate = self.form.plate_index;
        self.form = EntryForm::new(self.today);
        // Keep the vehicle: consecutive invoices are usually the same truck.
        self.form.plate_index = plate;
        self.entry_field = 0;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
