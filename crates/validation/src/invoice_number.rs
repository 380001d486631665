use gstdoc_template_core::InvoiceNumberRules;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvoiceNumberError {
    #[error("Invoice number is {length} characters; at least {min} required")]
    TooShort { length: usize, min: usize },

    #[error("Invoice number is {length} characters; at most {max} allowed")]
    TooLong { length: usize, max: usize },

    #[error("Invoice number contains '{found}'; only letters, digits, '-' and '/' are allowed")]
    InvalidCharacters { found: char },
}

/// Length is counted in characters. Only ASCII alphanumerics, `-` and `/`
/// are permitted.
pub fn validate_invoice_number(
    value: &str,
    rules: &InvoiceNumberRules,
) -> Result<(), InvoiceNumberError> {
    let length = value.chars().count();
    if length < rules.min_length.max(1) {
        return Err(InvoiceNumberError::TooShort { length, min: rules.min_length.max(1) });
    }
    if length > rules.max_length {
        return Err(InvoiceNumberError::TooLong { length, max: rules.max_length });
    }
    match value.chars().find(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == '/')) {
        Some(found) => Err(InvoiceNumberError::InvalidCharacters { found }),
        None => Ok(()),
    }
}
