use gstdoc_template_core::HsnDigits;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HsnError {
    /// Raised both for the wrong number of characters and for non-digits.
    #[error("HSN/SAC code '{code}' must be exactly {expected} digits")]
    WrongLength { code: String, expected: usize },
}

pub fn validate_hsn(code: &str, required: HsnDigits) -> Result<(), HsnError> {
    let expected = required.count();
    if code.len() == expected && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(HsnError::WrongLength { code: code.to_string(), expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_digit_count() {
        assert_eq!(validate_hsn("1234", HsnDigits::Four), Ok(()));
        assert!(validate_hsn("123", HsnDigits::Four).is_err());
        assert!(validate_hsn("12a4", HsnDigits::Four).is_err());
        assert!(validate_hsn("123456", HsnDigits::Four).is_err());
        assert_eq!(validate_hsn("998314", HsnDigits::Six), Ok(()));
        assert_eq!(validate_hsn("84713010", HsnDigits::Eight), Ok(()));
        assert!(validate_hsn("8471 301", HsnDigits::Eight).is_err());
        assert!(validate_hsn("", HsnDigits::Four).is_err());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Devanagari digits are numeric but not valid HSN characters
        assert!(validate_hsn("\u{967}\u{968}", HsnDigits::Four).is_err());
    }
}
