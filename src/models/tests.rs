#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn new_expense(amount: Decimal, invoice_no: &str) -> NewExpense {
    NewExpense {
        invoice_date: "2025-06-10".into(),
        plate: "06-QO-19".into(),
        category: Category::Fuel,
        amount,
        odometer_km: None,
        invoice_no: invoice_no.into(),
        description: String::new(),
    }
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_round_trip() {
    for cat in Category::all() {
        assert_eq!(Category::parse(cat.as_str()), Some(*cat));
    }
}

#[test]
fn test_category_parse_variants() {
    assert_eq!(Category::parse("road-tax"), Some(Category::RoadTax));
    assert_eq!(Category::parse(" TYRES "), Some(Category::Tires));
    assert_eq!(Category::parse("groceries"), None);
    assert_eq!(Category::parse(""), None);
}

// ── Roster ────────────────────────────────────────────────────

#[test]
fn test_roster_membership() {
    assert!(is_known_plate("06-QO-19"));
    assert!(is_known_plate("74-LU-19"));
    assert!(!is_known_plate("ZZ-99-ZZ"));
}

#[test]
fn test_roster_has_no_duplicates() {
    let mut plates: Vec<&str> = ROSTER.to_vec();
    plates.sort_unstable();
    plates.dedup();
    assert_eq!(plates.len(), ROSTER.len());
}

#[test]
fn test_plate_like() {
    assert!(plate_like("AB-12-CD"));
    assert!(plate_like("06-QO-19"));
    assert!(!plate_like("AB12CD"));
    assert!(!plate_like("ab-12-cd"));
    assert!(!plate_like("total"));
}

// ── NewExpense validation ─────────────────────────────────────

#[test]
fn test_validate_accepts_good_entry() {
    assert!(new_expense(dec!(42.50), "F-1").validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_amount() {
    assert_eq!(
        new_expense(Decimal::ZERO, "F-1").validate(),
        Err(EntryError::NonPositiveAmount)
    );
}

#[test]
fn test_validate_rejects_negative_amount() {
    assert_eq!(
        new_expense(dec!(-5), "F-1").validate(),
        Err(EntryError::NonPositiveAmount)
    );
}

#[test]
fn test_validate_rejects_blank_invoice_no() {
    assert_eq!(
        new_expense(dec!(5), "   ").validate(),
        Err(EntryError::MissingInvoiceNo)
    );
}

// ── Validity ──────────────────────────────────────────────────

#[test]
fn test_due_accessors() {
    let mut v = Validity::new("06-QO-19");
    let date = NaiveDate::from_ymd_opt(2026, 3, 1);
    v.set_due(DueKind::Inspection, date);
    assert_eq!(v.due(DueKind::Inspection), date);
    assert_eq!(v.due(DueKind::Insurance), None);

    v.set_due(DueKind::Inspection, None);
    assert_eq!(v.due(DueKind::Inspection), None);
}

#[test]
fn test_parse_due_formats() {
    let expected = NaiveDate::from_ymd_opt(2025, 9, 1);
    assert_eq!(parse_due("2025-09-01"), expected);
    assert_eq!(parse_due("01/09/2025"), expected);
    assert_eq!(parse_due(" 2025-09-01 "), expected);
}

#[test]
fn test_parse_due_failures_are_unset() {
    assert_eq!(parse_due(""), None);
    assert_eq!(parse_due("soon"), None);
    assert_eq!(parse_due("2025-13-40"), None);
}

#[test]
fn test_due_kind_parse() {
    assert_eq!(DueKind::parse("insurance"), Some(DueKind::Insurance));
    assert_eq!(DueKind::parse("INSP"), Some(DueKind::Inspection));
    assert_eq!(DueKind::parse("road-tax"), Some(DueKind::RoadTax));
    assert_eq!(DueKind::parse("mot"), None);
}
