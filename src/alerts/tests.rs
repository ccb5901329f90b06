#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[test]
fn test_no_date_is_none() {
    assert_eq!(evaluate(None, today()), AlertLevel::None);
}

#[test]
fn test_due_today_is_critical() {
    assert_eq!(evaluate(Some(today()), today()), AlertLevel::Critical);
}

#[test]
fn test_due_yesterday_is_expired() {
    let due = today() - Duration::days(1);
    assert_eq!(evaluate(Some(due), today()), AlertLevel::Expired);
}

#[test]
fn test_seven_days_out_is_critical() {
    let due = today() + Duration::days(7);
    assert_eq!(evaluate(Some(due), today()), AlertLevel::Critical);
}

#[test]
fn test_eight_days_out_is_warning() {
    let due = today() + Duration::days(8);
    assert_eq!(evaluate(Some(due), today()), AlertLevel::Warning);
}

#[test]
fn test_thirty_days_out_is_warning() {
    let due = today() + Duration::days(30);
    assert_eq!(evaluate(Some(due), today()), AlertLevel::Warning);
}

#[test]
fn test_thirty_one_days_out_is_ok() {
    let due = today() + Duration::days(31);
    assert_eq!(evaluate(Some(due), today()), AlertLevel::Ok);
}

#[test]
fn test_far_future_is_ok() {
    let due = today() + Duration::days(400);
    assert_eq!(evaluate(Some(due), today()), AlertLevel::Ok);
}

// ── AlertSummary ──────────────────────────────────────────────

#[test]
fn test_summary_counts_all_kinds() {
    let mut v = Validity::new("AA-00-AA");
    v.insurance_due = Some(today() - Duration::days(3)); // expired
    v.inspection_due = Some(today() + Duration::days(2)); // critical
    v.road_tax_due = Some(today() + Duration::days(20)); // warning

    let summary = AlertSummary::compute(&[v], today());
    assert_eq!(summary.expired, 1);
    assert_eq!(summary.critical, 1);
    assert_eq!(summary.warning, 1);
    assert!(!summary.is_clear());
}

#[test]
fn test_summary_ignores_unset_and_ok() {
    let mut a = Validity::new("AA-00-AA");
    a.insurance_due = Some(today() + Duration::days(90));
    let b = Validity::new("BB-11-BB");

    let summary = AlertSummary::compute(&[a, b], today());
    assert!(summary.is_clear());
}
