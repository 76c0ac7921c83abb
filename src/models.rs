use serde::{Serialize, Serializer};
use std::fmt;

/// Placeholder written for text fields whose source element is missing.
pub const NOT_SPECIFIED: &str = "not specified";

/// Regulatory regime a tender is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcurementType {
    Fz44,
    Fz223,
    Commercial,
    #[default]
    Unknown,
}

impl ProcurementType {
    /// Returns the label written to the output file.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fz44 => "44-FZ",
            Self::Fz223 => "223-FZ",
            Self::Commercial => "Commercial",
            Self::Unknown => "Unknown",
        }
    }
}

impl Serialize for ProcurementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for ProcurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tender listing as exported to CSV.
///
/// Field order here is the column order of the output file. Every field is
/// always present; absent source data is replaced by the fallbacks applied in
/// [`crate::parser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenderRecord {
    pub id: String,
    pub number: String,
    pub title: String,
    pub link: String,
    pub category: String,
    pub region: String,
    pub price: String,
    pub end_date: String,
    pub end_time: String,
    pub procurement_type: ProcurementType,
}

impl TenderRecord {
    /// Column names in output order.
    pub const FIELD_NAMES: [&'static str; 10] = [
        "id",
        "number",
        "title",
        "link",
        "category",
        "region",
        "price",
        "end_date",
        "end_time",
        "procurement_type",
    ];
}
