use crate::ParsePrimitiveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paper sizes a template can be laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
}

impl PaperSize {
    /// Portrait dimensions in millimetres (width, height).
    pub fn dimensions_mm(self) -> (u16, u16) {
        match self {
            PaperSize::A4 => (210, 297),
            PaperSize::A5 => (148, 210),
        }
    }
}

impl FromStr for PaperSize {
    type Err = ParsePrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A4" => Ok(PaperSize::A4),
            "A5" => Ok(PaperSize::A5),
            _ => Err(ParsePrimitiveError::UnknownPaperSize(s.to_string())),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSize::A4 => f.write_str("A4"),
            PaperSize::A5 => f.write_str("A5"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paper_size() {
        assert_eq!("a5".parse::<PaperSize>().unwrap(), PaperSize::A5);
        assert_eq!("A4".parse::<PaperSize>().unwrap(), PaperSize::A4);
        assert!("Letter".parse::<PaperSize>().is_err());
        assert_eq!(PaperSize::A5.dimensions_mm(), (148, 210));
    }
}
