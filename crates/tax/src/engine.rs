use crate::TaxError;
use crate::breakdown::{LineTax, RateSummary, SupplyType, TaxBreakdown, TaxTotals};
use crate::line::LineItem;
use gstdoc_template_core::{RoundOff, SplitBias, TaxLogic};
use gstdoc_types::{GstRate, StateCode};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds half away from zero to two decimal places.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn supply_type(supplier: StateCode, place_of_supply: StateCode) -> SupplyType {
    if supplier == place_of_supply {
        SupplyType::IntraState
    } else {
        SupplyType::InterState
    }
}

pub fn compute_tax(
    supplier: StateCode,
    place_of_supply: StateCode,
    items: &[LineItem],
    logic: &TaxLogic,
) -> Result<TaxBreakdown, TaxError> {
    let supply = supply_type(supplier, place_of_supply);

    let lines = items
        .iter()
        .enumerate()
        .map(|(idx, item)| line_tax(idx + 1, item, supply, logic.odd_paise_to))
        .collect::<Result<Vec<_>, _>>()?;

    let mut totals = TaxTotals::default();
    let mut by_rate: BTreeMap<GstRate, (usize, TaxTotals)> = BTreeMap::new();
    for line in &lines {
        totals.checked_add(line).ok_or(TaxError::TotalsOverflow)?;
        let bucket = by_rate.entry(line.rate).or_default();
        bucket.0 += 1;
        bucket.1.checked_add(line).ok_or(TaxError::TotalsOverflow)?;
    }
    let rate_summary = by_rate
        .into_iter()
        .map(|(rate, (lines, totals))| RateSummary { rate, lines, totals })
        .collect();

    let grand_total = totals.checked_total().ok_or(TaxError::TotalsOverflow)?;
    let invoice_total = match logic.round_off {
        RoundOff::None => grand_total,
        RoundOff::NearestRupee => {
            grand_total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
    };

    log::debug!(
        "Computed {:?} tax for {} lines: taxable {}, tax {}, total {}",
        supply,
        lines.len(),
        totals.taxable_value,
        totals.tax(),
        invoice_total
    );

    Ok(TaxBreakdown {
        supplier_state: supplier,
        place_of_supply,
        supply_type: supply,
        lines,
        totals,
        rate_summary,
        grand_total,
        round_off: invoice_total - grand_total,
        invoice_total,
    })
}

fn line_tax(
    line: usize,
    item: &LineItem,
    supply: SupplyType,
    bias: SplitBias,
) -> Result<LineTax, TaxError> {
    let invalid = |reason: String| TaxError::InvalidLineItem { line, reason };

    if item.quantity.is_sign_negative() && !item.quantity.is_zero() {
        return Err(invalid(format!("quantity {} is negative", item.quantity)));
    }
    if item.unit_price.is_sign_negative() && !item.unit_price.is_zero() {
        return Err(invalid(format!("unit price {} is negative", item.unit_price)));
    }
    if item.discount.is_sign_negative() && !item.discount.is_zero() {
        return Err(invalid(format!("discount {} is negative", item.discount)));
    }

    let gross = item
        .quantity
        .checked_mul(item.unit_price)
        .ok_or_else(|| invalid("quantity times unit price overflows".to_string()))?;
    if item.discount > gross {
        return Err(invalid(format!(
            "discount {} exceeds gross value {}",
            item.discount, gross
        )));
    }
    let taxable_value = round2(gross - item.discount);

    let tax = taxable_value
        .checked_mul(Decimal::from(item.gst_rate.percent()))
        .and_then(|v| v.checked_div(HUNDRED))
        .map(round2)
        .ok_or_else(|| invalid(format!("tax on taxable value {} overflows", taxable_value)))?;
    // Keeps LineTax::total() in range.
    taxable_value
        .checked_add(tax)
        .ok_or_else(|| invalid(format!("line total for taxable value {} overflows", taxable_value)))?;
    let (cgst, sgst, igst) = match supply {
        SupplyType::IntraState => {
            let (major, minor) = split_paise(tax);
            match bias {
                SplitBias::Cgst => (major, minor, Decimal::ZERO),
                SplitBias::Sgst => (minor, major, Decimal::ZERO),
            }
        }
        SupplyType::InterState => (Decimal::ZERO, Decimal::ZERO, tax),
    };

    Ok(LineTax {
        line,
        rate: item.gst_rate,
        gross,
        discount: item.discount,
        taxable_value,
        cgst,
        sgst,
        igst,
    })
}

/// Splits a paise-exact, non-negative amount into two halves that sum to it
/// exactly. The first half carries the odd paisa, if any.
fn split_paise(tax: Decimal) -> (Decimal, Decimal) {
    let minor = (tax / Decimal::TWO).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    (tax - minor, minor)
}
