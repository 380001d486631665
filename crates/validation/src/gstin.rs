use gstdoc_template_core::GstinChecksum;
use gstdoc_types::StateCode;
use thiserror::Error;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LEN: usize = 15;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GstinError {
    #[error("Invalid GSTIN format: {0}")]
    InvalidFormat(&'static str),

    #[error("Invalid GSTIN checksum: expected '{expected}', found '{found}'")]
    InvalidChecksum { expected: char, found: char },
}

/// A structurally valid GSTIN with a verified check character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gstin {
    value: String,
    state: StateCode,
}

impl Gstin {
    pub fn parse(value: &str, scheme: GstinChecksum) -> Result<Self, GstinError> {
        let state = check_structure(value)?;
        let bytes = value.as_bytes();
        let expected = check_char(&bytes[..LEN - 1], scheme);
        let found = char::from(bytes[LEN - 1]);
        if expected != found {
            return Err(GstinError::InvalidChecksum { expected, found });
        }
        Ok(Self { value: value.to_string(), state })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The state the taxpayer is registered in (characters 1-2).
    pub fn state(&self) -> StateCode {
        self.state
    }

    /// The embedded PAN (characters 3-12).
    pub fn pan(&self) -> &str {
        &self.value[2..12]
    }
}

/// Validates with the default check-character scheme.
pub fn validate_gstin(value: &str) -> Result<(), GstinError> {
    validate_gstin_with(value, GstinChecksum::default())
}

pub fn validate_gstin_with(value: &str, scheme: GstinChecksum) -> Result<(), GstinError> {
    Gstin::parse(value, scheme).map(|_| ())
}

fn check_structure(value: &str) -> Result<StateCode, GstinError> {
    use GstinError::InvalidFormat;

    let bytes = value.as_bytes();
    if bytes.len() != LEN {
        return Err(InvalidFormat("must be exactly 15 characters"));
    }
    if !bytes.iter().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()) {
        return Err(InvalidFormat("only digits and upper-case letters are allowed"));
    }

    let state = value[..2]
        .parse::<StateCode>()
        .map_err(|_| InvalidFormat("characters 1-2 are not a GST state code"))?;

    let pan = &bytes[2..12];
    if !(pan[..5].iter().all(u8::is_ascii_uppercase)
        && pan[5..9].iter().all(u8::is_ascii_digit)
        && pan[9].is_ascii_uppercase())
    {
        return Err(InvalidFormat("characters 3-12 are not a PAN"));
    }
    if bytes[12] == b'0' {
        return Err(InvalidFormat("character 13 must be 1-9 or A-Z"));
    }
    if bytes[13] != b'Z' {
        return Err(InvalidFormat("character 14 must be 'Z'"));
    }
    Ok(state)
}

fn value_of(byte: u8) -> u32 {
    match byte {
        b'0'..=b'9' => u32::from(byte - b'0'),
        _ => u32::from(byte - b'A') + 10,
    }
}

/// Computes the 15th character over the first 14. Callers have already
/// checked that every byte is in `ALPHABET`.
fn check_char(body: &[u8], scheme: GstinChecksum) -> char {
    let index = match scheme {
        GstinChecksum::Iso7064Mod37_36 => {
            let mut p = 36;
            for &b in body {
                let mut s = (p + value_of(b)) % 36;
                if s == 0 {
                    s = 36;
                }
                p = (s * 2) % 37;
            }
            (37 - p) % 36
        }
        GstinChecksum::GstnMod36 => {
            let sum: u32 = body
                .iter()
                .enumerate()
                .map(|(i, &b)| {
                    let product = value_of(b) * if i % 2 == 0 { 1 } else { 2 };
                    product / 36 + product % 36
                })
                .sum();
            (36 - sum % 36) % 36
        }
    };
    char::from(ALPHABET[index as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_gstin() {
        assert_eq!(validate_gstin("27AABCU9603R1ZM"), Ok(()));
        assert_eq!(
            validate_gstin("27AABCU9603R1ZX"),
            Err(GstinError::InvalidChecksum { expected: 'M', found: 'X' })
        );
        assert!(matches!(validate_gstin("123"), Err(GstinError::InvalidFormat(_))));
    }

    #[test]
    fn test_portal_scheme() {
        let scheme = GstinChecksum::GstnMod36;
        for gstin in ["27AAPFU0939F1ZV", "29AAGCB7383J1Z4", "33AAACH7409R1Z8", "24AAACC1206D1ZM"] {
            assert_eq!(validate_gstin_with(gstin, scheme), Ok(()), "{}", gstin);
        }
        assert!(matches!(
            validate_gstin_with("27AABCU9603R1ZM", scheme),
            Err(GstinError::InvalidChecksum { expected: 'N', .. })
        ));
    }

    #[test]
    fn test_structure_is_checked_before_checksum() {
        let cases = [
            "27aabcu9603r1zm", // lower case
            "27AABCU9603R1Z",  // 14 chars
            "27AABCU9603R1ZM0",
            "27AABCU9603R1-M",
            "40AABCU9603R1ZM", // unassigned state
            "00AABCU9603R1ZM",
            "27AAB1U9603R1ZM", // digit in PAN letters
            "27AABCUX603R1ZM", // letter in PAN digits
            "27AABCU96031ZZM", // PAN ends in digit
            "27AABCU9603R0ZM", // entity code 0
            "27AABCU9603R1YM", // 14th not Z
            "27AABCU9603R1Z\u{e9}",
        ];
        for case in cases {
            assert!(
                matches!(validate_gstin(case), Err(GstinError::InvalidFormat(_))),
                "{} should be a format error",
                case
            );
        }
    }

    #[test]
    fn test_parsed_parts() {
        let gstin = Gstin::parse("27AABCU9603R1ZM", GstinChecksum::Iso7064Mod37_36).unwrap();
        assert_eq!(gstin.state().value(), 27);
        assert_eq!(gstin.pan(), "AABCU9603R");
        assert_eq!(gstin.as_str(), "27AABCU9603R1ZM");
    }

    #[test]
    fn test_every_wrong_check_char_is_rejected() {
        let body = "29AAGCB7383J1Z";
        let valid = ['9'];
        for &c in ALPHABET {
            let candidate = format!("{}{}", body, char::from(c));
            let ok = validate_gstin(&candidate).is_ok();
            assert_eq!(ok, valid.contains(&char::from(c)), "{}", candidate);
        }
    }
}
