use crate::{GstinError, HsnError, InvoiceNumberError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Gstin(#[from] GstinError),

    #[error(transparent)]
    Hsn(#[from] HsnError),

    #[error(transparent)]
    InvoiceNumber(#[from] InvoiceNumberError),

    #[error("GSTIN is required by this template")]
    MissingGstin,

    #[error("HSN/SAC code is required by this template")]
    MissingHsn,

    #[error("GSTIN is registered in state {gstin_state} but the party is in state {party_state}")]
    StateMismatch { gstin_state: String, party_state: String },

    #[error("line carries {rate} GST but the template is not a tax invoice")]
    TaxOnNonGstDocument { rate: String },
}

/// One failed check, tagged with the input it refers to (e.g. `supplier.gstin`,
/// `lines[2].hsn`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub error: ValidationError,
}

/// Every validation failure found for one invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, error: impl Into<ValidationError>) {
        let issue = ValidationIssue { field: field.into(), error: error.into() };
        log::debug!("Validation issue at {}: {}", issue.field, issue.error);
        self.issues.push(issue);
    }

    /// Records the error of `result`, if any.
    pub fn check<E: Into<ValidationError>>(&mut self, field: impl Into<String>, result: Result<(), E>) {
        if let Err(err) = result {
            self.push(field, err);
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// `Ok(())` when no issue was recorded, otherwise the report itself.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_clean() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation issue(s)", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  {}: {}", issue.field, issue.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
