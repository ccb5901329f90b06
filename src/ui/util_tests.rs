#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "1.234,56 €");
}

#[test]
fn test_format_amount_no_grouping() {
    assert_eq!(format_amount(dec!(999.99)), "999,99 €");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "0,00 €");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-42,50 €");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "1.234.567,89 €");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "1,50 €");
}

#[test]
fn test_format_amount_single_digit() {
    assert_eq!(format_amount(dec!(5)), "5,00 €");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("camião frigorífico", 7), "camião…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (4, 0);
    scroll_down(&mut index, &mut scroll, 10, 5);
    assert_eq!(index, 5);
    assert_eq!(scroll, 1);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (9, 5);
    scroll_down(&mut index, &mut scroll, 10, 5);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

// ── shift_month ───────────────────────────────────────────────

#[test]
fn test_shift_month_forward() {
    assert_eq!(shift_month("2025-06", 1), Some("2025-07".into()));
    assert_eq!(shift_month("2025-12", 1), Some("2026-01".into()));
}

#[test]
fn test_shift_month_backward() {
    assert_eq!(shift_month("2025-01", -1), Some("2024-12".into()));
    assert_eq!(shift_month("2025-06", -6), Some("2024-12".into()));
}

#[test]
fn test_shift_month_rejects_garbage() {
    assert_eq!(shift_month("202506", 1), None);
    assert_eq!(shift_month("2025-13", 1), None);
    assert_eq!(shift_month("abcd-ef", 1), None);
}
