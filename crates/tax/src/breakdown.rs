use gstdoc_types::{GstRate, StateCode};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    /// CGST + SGST.
    IntraState,
    /// IGST.
    InterState,
}

/// Tax figures for one line, every amount rounded to paise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTax {
    pub line: usize,
    pub rate: GstRate,
    pub gross: Decimal,
    pub discount: Decimal,
    pub taxable_value: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl LineTax {
    pub fn tax(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }

    pub fn total(&self) -> Decimal {
        self.taxable_value + self.tax()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaxTotals {
    pub taxable_value: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl TaxTotals {
    pub fn tax(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }

    pub fn total(&self) -> Decimal {
        self.taxable_value + self.tax()
    }

    /// Adds one line; `None` leaves `self` untouched on overflow.
    pub(crate) fn checked_add(&mut self, line: &LineTax) -> Option<()> {
        *self = TaxTotals {
            taxable_value: self.taxable_value.checked_add(line.taxable_value)?,
            cgst: self.cgst.checked_add(line.cgst)?,
            sgst: self.sgst.checked_add(line.sgst)?,
            igst: self.igst.checked_add(line.igst)?,
        };
        Some(())
    }

    pub(crate) fn checked_total(&self) -> Option<Decimal> {
        self.taxable_value
            .checked_add(self.cgst)?
            .checked_add(self.sgst)?
            .checked_add(self.igst)
    }
}

/// Aggregate of every line taxed at one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateSummary {
    pub rate: GstRate,
    pub lines: usize,
    #[serde(flatten)]
    pub totals: TaxTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub supplier_state: StateCode,
    pub place_of_supply: StateCode,
    pub supply_type: SupplyType,
    pub lines: Vec<LineTax>,
    pub totals: TaxTotals,
    /// Ordered by ascending rate; only rates that occur on the invoice.
    pub rate_summary: Vec<RateSummary>,
    /// Taxable value plus all tax, before any round-off.
    pub grand_total: Decimal,
    /// Signed adjustment added to `grand_total`; zero unless rounding is enabled.
    pub round_off: Decimal,
    pub invoice_total: Decimal,
}

impl TaxBreakdown {
    pub fn is_intra_state(&self) -> bool {
        self.supply_type == SupplyType::IntraState
    }

    pub fn has_tax(&self) -> bool {
        !self.totals.tax().is_zero()
    }
}
