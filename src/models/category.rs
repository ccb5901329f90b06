/// Expense category tags. The set is closed: rows written by the entry form
/// always carry one of these, and readers treat anything else as untagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fuel,
    Tires,
    Workshop,
    Refrigeration,
    Wash,
    Tolls,
    Insurance,
    Inspection,
    RoadTax,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fuel => "Fuel",
            Self::Tires => "Tires",
            Self::Workshop => "Workshop",
            Self::Refrigeration => "Refrigeration",
            Self::Wash => "Wash",
            Self::Tolls => "Tolls",
            Self::Insurance => "Insurance",
            Self::Inspection => "Inspection",
            Self::RoadTax => "Road Tax",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fuel" => Some(Self::Fuel),
            "tires" | "tyres" => Some(Self::Tires),
            "workshop" => Some(Self::Workshop),
            "refrigeration" => Some(Self::Refrigeration),
            "wash" => Some(Self::Wash),
            "tolls" | "toll" => Some(Self::Tolls),
            "insurance" => Some(Self::Insurance),
            "inspection" => Some(Self::Inspection),
            "road tax" | "roadtax" | "road-tax" => Some(Self::RoadTax),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Fuel,
            Self::Tires,
            Self::Workshop,
            Self::Refrigeration,
            Self::Wash,
            Self::Tolls,
            Self::Insurance,
            Self::Inspection,
            Self::RoadTax,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
