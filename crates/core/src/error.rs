//! Errors raised while turning a resolved layout into a document.

use gstdoc_types::{PaperSize, SectionId, TemplateId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Template '{template}' does not support paper size {paper}")]
    UnsupportedPaperSize { template: TemplateId, paper: PaperSize },

    #[error("Layout was resolved for '{found}' but the template is '{expected}'")]
    LayoutMismatch { expected: TemplateId, found: TemplateId },

    #[error("Tax breakdown covers {taxed} lines but the invoice has {lines}")]
    BreakdownMismatch { lines: usize, taxed: usize },

    #[error("Section '{section}': {message}")]
    InvalidSectionData { section: SectionId, message: String },
}

impl AssemblyError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        AssemblyError::MissingRequiredField { field: field.into() }
    }
}
