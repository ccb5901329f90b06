use rust_decimal::Decimal;

use crate::models::Expense;

/// Financial rollup over a set of expenses. Pure computation; both the
/// Summary screen and the CLI print from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: Decimal,
    pub invoice_count: usize,
    /// Rows whose amount was corrected or defaulted by the normalizer.
    pub review_count: usize,
    /// (category label, spend), largest first.
    pub by_category: Vec<(String, Decimal)>,
    /// (plate, spend), largest first.
    pub by_plate: Vec<(String, Decimal)>,
}

impl Summary {
    pub fn compute(expenses: &[Expense]) -> Self {
        let mut by_category: Vec<(String, Decimal)> = Vec::new();
        let mut by_plate: Vec<(String, Decimal)> = Vec::new();
        let mut total = Decimal::ZERO;
        let mut review_count = 0;

        for e in expenses {
            total += e.amount;
            if e.needs_review() {
                review_count += 1;
            }
            bump(&mut by_category, e.category_label(), e.amount);
            if !e.plate.is_empty() {
                bump(&mut by_plate, &e.plate, e.amount);
            }
        }

        by_category.sort_by(|a, b| b.1.cmp(&a.1));
        by_plate.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            total,
            invoice_count: expenses.len(),
            review_count,
            by_category,
            by_plate,
        }
    }
}

fn bump(groups: &mut Vec<(String, Decimal)>, key: &str, amount: Decimal) {
    match groups.iter_mut().find(|(k, _)| k == key) {
        Some((_, sum)) => *sum += amount,
        None => groups.push((key.to_string(), amount)),
    }
}

/// Month filter used by the Summary screen and the export path.
pub fn in_month(expense: &Expense, month: Option<&str>) -> bool {
    month.is_none_or(|m| expense.invoice_date.starts_with(m))
}

/// Case-insensitive search over invoice number and description.
pub fn matches_search(expense: &Expense, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    expense.invoice_no.to_lowercase().contains(&needle)
        || expense.description.to_lowercase().contains(&needle)
        || expense.plate.to_lowercase().contains(&needle)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
