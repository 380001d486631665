use crate::ParsePrimitiveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The concrete rendering types a layout section can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Meta,
    ItemsTable,
    Summary,
    Payment,
    Sign,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Meta => "meta",
            SectionKind::ItemsTable => "items_table",
            SectionKind::Summary => "summary",
            SectionKind::Payment => "payment",
            SectionKind::Sign => "sign",
        }
    }
}

impl FromStr for SectionKind {
    type Err = ParsePrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(SectionKind::Header),
            "meta" => Ok(SectionKind::Meta),
            "items_table" => Ok(SectionKind::ItemsTable),
            "summary" => Ok(SectionKind::Summary),
            "payment" => Ok(SectionKind::Payment),
            "sign" => Ok(SectionKind::Sign),
            other => Err(ParsePrimitiveError::UnknownSectionKind(other.to_string())),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
