use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::models::Category;

/// Magnitude thresholds for undoing the historical dropped-decimal defect.
/// These are empirical fits to the observed data, so they live in
/// configuration rather than in the match arms below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRules {
    /// Wash invoices above this are assumed to have lost one decimal place.
    pub wash_limit: Decimal,
    /// Other categories above this (but below `hundredfold_limit`) divide by 10.
    pub tenfold_limit: Decimal,
    /// Other categories at or above this divide by 100.
    pub hundredfold_limit: Decimal,
}

impl Default for CorrectionRules {
    fn default() -> Self {
        Self {
            wash_limit: Decimal::from(50),
            tenfold_limit: Decimal::from(300),
            hundredfold_limit: Decimal::from(2000),
        }
    }
}

/// What the normalizer did to produce the value. Callers that render tables
/// only look at `value`; callers that audit look here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Parsed as-is.
    Exact,
    /// Cell was empty or absent; value defaulted to zero.
    Missing,
    /// Textual separators were rewritten (European comma-decimal form).
    Reformatted,
    /// Magnitude correction applied; the row should be reviewed by a human.
    Corrected { divisor: u32 },
    /// Could not be read as an amount; value defaulted to zero.
    Unparseable(String),
}

impl Outcome {
    pub fn needs_review(&self) -> bool {
        matches!(self, Self::Corrected { .. } | Self::Unparseable(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: Decimal,
    pub outcome: Outcome,
}

impl Normalized {
    fn zero(outcome: Outcome) -> Self {
        Self {
            value: Decimal::ZERO,
            outcome,
        }
    }
}

/// Map a raw stored cell to a non-negative amount in currency major units.
///
/// Total by contract: every input maps to a value, so a single bad cell can
/// never fail a whole-sheet read. Text cells get separator cleanup; numeric
/// cells get the magnitude correction for the old write path that dropped
/// decimal points. Textual cells are never magnitude-corrected: their
/// separators are evidence enough of intent.
pub fn normalize_amount(
    raw: &Value,
    category: Option<Category>,
    rules: &CorrectionRules,
) -> Normalized {
    match raw {
        Value::Null => Normalized::zero(Outcome::Missing),
        Value::String(s) => normalize_text(s),
        Value::Number(n) => normalize_number(&n.to_string(), category, rules),
        other => Normalized::zero(Outcome::Unparseable(format!(
            "unexpected cell type: {other}"
        ))),
    }
}

fn normalize_text(s: &str) -> Normalized {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Normalized::zero(Outcome::Missing);
    }

    let stripped = trimmed.strip_suffix('€').unwrap_or(trimmed).trim();

    let (cleaned, reformatted) = if stripped.contains('.') && stripped.contains(',') {
        // European convention: '.' groups thousands, ',' is the decimal mark.
        (stripped.replace('.', "").replace(',', "."), true)
    } else if stripped.contains(',') {
        (stripped.replace(',', "."), true)
    } else {
        (stripped.to_string(), false)
    };

    match Decimal::from_str(&cleaned) {
        Ok(v) if v >= Decimal::ZERO => Normalized {
            value: v,
            outcome: if reformatted {
                Outcome::Reformatted
            } else {
                Outcome::Exact
            },
        },
        Ok(_) => Normalized::zero(Outcome::Unparseable(format!("negative amount: {s}"))),
        Err(_) => Normalized::zero(Outcome::Unparseable(format!("not an amount: {s}"))),
    }
}

fn normalize_number(
    literal: &str,
    category: Option<Category>,
    rules: &CorrectionRules,
) -> Normalized {
    let value = match Decimal::from_str(literal) {
        Ok(v) => v,
        Err(_) => {
            return Normalized::zero(Outcome::Unparseable(format!("not an amount: {literal}")))
        }
    };

    if value < Decimal::ZERO {
        return Normalized::zero(Outcome::Unparseable(format!("negative amount: {literal}")));
    }

    let divisor: u32 = if category == Some(Category::Wash) {
        if value > rules.wash_limit {
            10
        } else {
            1
        }
    } else if value >= rules.hundredfold_limit {
        100
    } else if value > rules.tenfold_limit {
        10
    } else {
        1
    };

    if divisor == 1 {
        Normalized {
            value,
            outcome: Outcome::Exact,
        }
    } else {
        Normalized {
            value: value / Decimal::from(divisor),
            outcome: Outcome::Corrected { divisor },
        }
    }
}
