use regex::Regex;
use std::sync::LazyLock;

/// The fixed vehicle roster. One validity row exists per plate; the entry
/// form only offers these.
pub const ROSTER: [&str; 24] = [
    "06-QO-19", "59-RT-87", "19-TF-05", "28-UO-50", "17-UM-19", "83-ZL-79",
    "83-ZL-83", "AD-66-VN", "AD-71-VN", "AL-36-FF", "AL-30-FF", "AT-79-QU",
    "AT-87-QU", "BE-64-TJ", "BE-16-TL", "BE-35-TJ", "BL-33-LG", "BL-68-LF",
    "BR-83-SQ", "BU-45-NF", "BX-53-AB", "BO-08-DB", "AU-56-NT", "74-LU-19",
];

static PLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // literal pattern
    Regex::new(r"^[A-Z0-9]{2}-[A-Z0-9]{2}-[A-Z0-9]{2}$").unwrap()
});

pub fn is_known_plate(plate: &str) -> bool {
    ROSTER.contains(&plate)
}

/// Whether a string has the registration format at all. Used to flag stray
/// rows that landed in the plate column.
pub fn plate_like(s: &str) -> bool {
    PLATE_RE.is_match(s)
}
