use rust_decimal::Decimal;

/// Format an amount in European style with 2 decimal places and a trailing
/// euro sign. e.g. `1234567.89` → `"1.234.567,89 €"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_dots: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    if val < Decimal::ZERO {
        format!("-{with_dots},{dec_part} €")
    } else {
        format!("{with_dots},{dec_part} €")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Shift a "YYYY-MM" month by `delta` months.
pub(crate) fn shift_month(month: &str, delta: i32) -> Option<String> {
    let (year_s, month_s) = month.split_once('-')?;
    let year: i32 = year_s.parse().ok()?;
    let m: i32 = month_s.parse().ok()?;
    if !(1..=12).contains(&m) {
        return None;
    }
    let total = year * 12 + (m - 1) + delta;
    if total < 0 {
        return None;
    }
    Some(format!("{:04}-{:02}", total / 12, total % 12 + 1))
}
