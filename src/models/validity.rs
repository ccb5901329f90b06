use chrono::NaiveDate;

/// The three tracked legal documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueKind {
    Insurance,
    Inspection,
    RoadTax,
}

impl DueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insurance => "insurance",
            Self::Inspection => "inspection",
            Self::RoadTax => "tax",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "insurance" | "ins" => Some(Self::Insurance),
            "inspection" | "insp" => Some(Self::Inspection),
            "tax" | "road-tax" | "roadtax" => Some(Self::RoadTax),
            _ => None,
        }
    }

    pub fn all() -> &'static [DueKind] {
        &[Self::Insurance, Self::Inspection, Self::RoadTax]
    }
}

/// One renewal-tracking row per plate. Unset dates mean "unknown"; a parse
/// failure on read also lands here as unset so one bad cell never takes the
/// tracker down. The plate is the natural key; writes locate the row by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub plate: String,
    pub insurance_due: Option<NaiveDate>,
    pub inspection_due: Option<NaiveDate>,
    pub road_tax_due: Option<NaiveDate>,
    pub notes: String,
}

impl Validity {
    pub fn new(plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            insurance_due: None,
            inspection_due: None,
            road_tax_due: None,
            notes: String::new(),
        }
    }

    pub fn due(&self, kind: DueKind) -> Option<NaiveDate> {
        match kind {
            DueKind::Insurance => self.insurance_due,
            DueKind::Inspection => self.inspection_due,
            DueKind::RoadTax => self.road_tax_due,
        }
    }

    pub fn set_due(&mut self, kind: DueKind, date: Option<NaiveDate>) {
        match kind {
            DueKind::Insurance => self.insurance_due = date,
            DueKind::Inspection => self.inspection_due = date,
            DueKind::RoadTax => self.road_tax_due = date,
        }
    }
}

/// Parse a stored due date. Empty or unparseable cells read as unset.
pub fn parse_due(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}
