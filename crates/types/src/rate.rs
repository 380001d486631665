use crate::ParsePrimitiveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The GST slab applied to a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GstRate {
    Zero,
    Five,
    Twelve,
    Eighteen,
    TwentyEight,
}

impl GstRate {
    pub const ALL: [GstRate; 5] = [
        GstRate::Zero,
        GstRate::Five,
        GstRate::Twelve,
        GstRate::Eighteen,
        GstRate::TwentyEight,
    ];

    /// The rate in whole percent.
    pub fn percent(self) -> u8 {
        match self {
            GstRate::Zero => 0,
            GstRate::Five => 5,
            GstRate::Twelve => 12,
            GstRate::Eighteen => 18,
            GstRate::TwentyEight => 28,
        }
    }
}

impl TryFrom<u8> for GstRate {
    type Error = ParsePrimitiveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GstRate::ALL
            .into_iter()
            .find(|r| r.percent() == value)
            .ok_or_else(|| ParsePrimitiveError::UnsupportedRate(value.to_string()))
    }
}

impl From<GstRate> for u8 {
    fn from(rate: GstRate) -> Self {
        rate.percent()
    }
}

impl fmt::Display for GstRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
