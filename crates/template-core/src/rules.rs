use serde::{Deserialize, Serialize};

/// Per-template validation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRules {
    pub invoice_number: InvoiceNumberRules,
    /// Required HSN/SAC digit count; `None` when the template does not print HSN codes.
    pub hsn_digits: Option<HsnDigits>,
    pub gstin_required: bool,
    pub gstin_checksum: GstinChecksum,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            invoice_number: InvoiceNumberRules::default(),
            hsn_digits: None,
            gstin_required: false,
            gstin_checksum: GstinChecksum::default(),
        }
    }
}

/// Length bounds for invoice numbers. GST rules cap them at 16 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceNumberRules {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for InvoiceNumberRules {
    fn default() -> Self {
        Self { min_length: 1, max_length: 16 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HsnDigits {
    Four,
    Six,
    Eight,
}

impl HsnDigits {
    pub fn count(self) -> usize {
        match self {
            HsnDigits::Four => 4,
            HsnDigits::Six => 6,
            HsnDigits::Eight => 8,
        }
    }
}

impl TryFrom<u8> for HsnDigits {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(HsnDigits::Four),
            6 => Ok(HsnDigits::Six),
            8 => Ok(HsnDigits::Eight),
            other => Err(format!("HSN digit count must be 4, 6 or 8, got {}", other)),
        }
    }
}

impl From<HsnDigits> for u8 {
    fn from(digits: HsnDigits) -> Self {
        digits.count() as u8
    }
}

/// Check-character scheme used for the 15th GSTIN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GstinChecksum {
    /// ISO/IEC 7064 hybrid system MOD 37,36 over the first 14 characters.
    #[default]
    #[serde(rename = "iso7064")]
    Iso7064Mod37_36,
    /// The GSTN portal's Luhn mod-36 variant.
    #[serde(rename = "gstn_mod36")]
    GstnMod36,
}

/// How intra-state tax is split and whether the grand total is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct TaxLogic {
    pub odd_paise_to: SplitBias,
    pub round_off: RoundOff,
}

/// Which half receives the extra paisa when a line's tax is odd in paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitBias {
    #[default]
    Cgst,
    Sgst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundOff {
    #[default]
    None,
    NearestRupee,
}
