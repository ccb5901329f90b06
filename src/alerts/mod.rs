use chrono::NaiveDate;

use crate::models::{DueKind, Validity};

/// Severity of a tracked due date relative to today. Boundary days belong to
/// the more urgent tier: day 0 and day 7 are Critical, day 30 is Warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    /// No date set; ignored silently.
    None,
    Ok,
    Warning,
    Critical,
    Expired,
}

pub fn evaluate(due: Option<NaiveDate>, today: NaiveDate) -> AlertLevel {
    let Some(due) = due else {
        return AlertLevel::None;
    };
    let days = (due - today).num_days();
    if days < 0 {
        AlertLevel::Expired
    } else if days <= 7 {
        AlertLevel::Critical
    } else if days <= 30 {
        AlertLevel::Warning
    } else {
        AlertLevel::Ok
    }
}

/// Roster-wide counts for the tracker header and the CLI `alerts` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertSummary {
    pub expired: usize,
    pub critical: usize,
    pub warning: usize,
}

impl AlertSummary {
    pub fn compute(validities: &[Validity], today: NaiveDate) -> Self {
        let mut summary = Self::default();
        for v in validities {
            for kind in DueKind::all() {
                match evaluate(v.due(*kind), today) {
                    AlertLevel::Expired => summary.expired += 1,
                    AlertLevel::Critical => summary.critical += 1,
                    AlertLevel::Warning => summary.warning += 1,
                    AlertLevel::Ok | AlertLevel::None => {}
                }
            }
        }
        summary
    }

    pub fn is_clear(&self) -> bool {
        self.expired == 0 && self.critical == 0 && self.warning == 0
    }
}

#[cfg(test)]
mod tests;
