pub mod ids;
pub mod paper;
pub mod rate;
pub mod section;
pub mod state;

pub use ids::{SectionId, TemplateId};
pub use paper::{Orientation, PaperSize};
pub use rate::GstRate;
pub use section::SectionKind;
pub use state::{StateCode, StateCodeError};

use thiserror::Error;

/// Error returned when a primitive cannot be parsed from its textual form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePrimitiveError {
    #[error("unsupported GST rate: {0}% (expected one of 0, 5, 12, 18, 28)")]
    UnsupportedRate(String),
    #[error("unknown paper size: '{0}'")]
    UnknownPaperSize(String),
    #[error("unknown section type: '{0}'")]
    UnknownSectionKind(String),
}
