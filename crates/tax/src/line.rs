use gstdoc_types::GstRate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One invoice line as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub quantity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub unit_price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    /// HSN code for goods, SAC code for services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn: Option<String>,
    pub gst_rate: GstRate,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        gst_rate: GstRate,
    ) -> Self {
        Self {
            description: description.into(),
            product_id: None,
            quantity,
            unit: None,
            unit_price,
            discount: Decimal::ZERO,
            hsn: None,
            gst_rate,
        }
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_hsn(mut self, hsn: impl Into<String>) -> Self {
        self.hsn = Some(hsn.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Quantity times unit price, before discount.
    pub fn gross(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}
