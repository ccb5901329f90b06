#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Category;
use crate::normalize::Outcome;
use rust_decimal_macros::dec;

fn expense(plate: &str, category: Option<Category>, amount: Decimal, date: &str) -> Expense {
    Expense {
        row: 1,
        recorded_at: String::new(),
        invoice_date: date.into(),
        plate: plate.into(),
        category,
        amount,
        amount_outcome: Outcome::Exact,
        odometer_km: None,
        invoice_no: "INV-1".into(),
        description: "diesel fill-up".into(),
    }
}

#[test]
fn test_empty_summary() {
    let summary = Summary::compute(&[]);
    assert_eq!(summary.total, Decimal::ZERO);
    assert_eq!(summary.invoice_count, 0);
    assert!(summary.by_category.is_empty());
}

#[test]
fn test_totals_and_grouping() {
    let expenses = vec![
        expense("06-QO-19", Some(Category::Fuel), dec!(80.00), "2025-06-01"),
        expense("06-QO-19", Some(Category::Fuel), dec!(20.00), "2025-06-02"),
        expense("59-RT-87", Some(Category::Tires), dec!(450.00), "2025-06-03"),
    ];
    let summary = Summary::compute(&expenses);

    assert_eq!(summary.total, dec!(550.00));
    assert_eq!(summary.invoice_count, 3);
    // Largest group first.
    assert_eq!(summary.by_category[0], ("Tires".into(), dec!(450.00)));
    assert_eq!(summary.by_category[1], ("Fuel".into(), dec!(100.00)));
    assert_eq!(summary.by_plate[0], ("59-RT-87".into(), dec!(450.00)));
}

#[test]
fn test_review_count() {
    let mut flagged = expense("06-QO-19", Some(Category::Fuel), dec!(87.06), "2025-06-01");
    flagged.amount_outcome = Outcome::Corrected { divisor: 100 };
    let clean = expense("06-QO-19", Some(Category::Fuel), dec!(60.00), "2025-06-02");

    let summary = Summary::compute(&[flagged, clean]);
    assert_eq!(summary.review_count, 1);
}

#[test]
fn test_untagged_rows_group_separately() {
    let expenses = vec![
        expense("06-QO-19", None, dec!(10.00), "2025-06-01"),
        expense("06-QO-19", Some(Category::Tolls), dec!(5.00), "2025-06-01"),
    ];
    let summary = Summary::compute(&expenses);
    assert_eq!(summary.by_category.len(), 2);
    assert!(summary.by_category.iter().any(|(label, _)| label == "—"));
}

#[test]
fn test_in_month() {
    let e = expense("06-QO-19", Some(Category::Fuel), dec!(10.00), "2025-06-01");
    assert!(in_month(&e, None));
    assert!(in_month(&e, Some("2025-06")));
    assert!(!in_month(&e, Some("2025-07")));
}

#[test]
fn test_matches_search() {
    let e = expense("06-QO-19", Some(Category::Fuel), dec!(10.00), "2025-06-01");
    assert!(matches_search(&e, ""));
    assert!(matches_search(&e, "inv-1"));
    assert!(matches_search(&e, "DIESEL"));
    assert!(matches_search(&e, "06-qo"));
    assert!(!matches_search(&e, "petrol"));
}
