//! Pure validation functions for the identifiers printed on a GST invoice.
//!
//! None of these functions panic or allocate on the success path; malformed
//! input always comes back as a typed error.

mod gstin;
mod hsn;
mod invoice_number;
mod report;

pub use gstin::{Gstin, GstinError, validate_gstin, validate_gstin_with};
pub use hsn::{HsnError, validate_hsn};
pub use invoice_number::{InvoiceNumberError, validate_invoice_number};
pub use report::{ValidationError, ValidationIssue, ValidationReport};
