use chrono::NaiveDate;
use gstdoc_tax::LineItem;
use gstdoc_types::StateCode;
use serde::{Deserialize, Serialize};

/// A supplier or customer as printed on the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "state_code")]
    pub state: StateCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Party {
    pub fn new(name: impl Into<String>, state: StateCode) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            state,
            gstin: None,
            phone: None,
            email: None,
        }
    }

    pub fn with_gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// The GSTIN, treating an empty string as absent.
    pub fn gstin(&self) -> Option<&str> {
        self.gstin.as_deref().filter(|g| !g.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub ifsc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyData {
    pub supplier: Party,
    pub customer: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceData {
    pub number: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Defaults to the customer's state when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_supply: Option<StateCode>,
    #[serde(default)]
    pub reverse_charge: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub lines: Vec<LineItem>,
}

impl InvoiceData {
    pub fn place_of_supply(&self, parties: &PartyData) -> StateCode {
        self.place_of_supply.unwrap_or(parties.customer.state)
    }
}

/// The on-disk shape of one render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInput {
    pub invoice: InvoiceData,
    #[serde(flatten)]
    pub parties: PartyData,
}
