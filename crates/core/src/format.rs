//! Text formatting for amounts, quantities and dates.

use chrono::NaiveDate;
use gstdoc_tax::round2;
use rust_decimal::Decimal;

/// Two decimal places with Indian digit grouping: `12,34,567.80`.
pub fn money(value: Decimal) -> String {
    let mut rounded = round2(value);
    rounded.rescale(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + int.len() / 2 + 1);
    if negative {
        out.push('-');
    }
    if int.len() > 3 {
        let (head, tail) = int.split_at(int.len() - 3);
        let lead = head.len() % 2;
        if lead == 1 {
            out.push_str(&head[..1]);
        }
        for start in (lead..head.len()).step_by(2) {
            if start > 0 {
                out.push(',');
            }
            out.push_str(&head[start..start + 2]);
        }
        out.push(',');
        out.push_str(tail);
    } else {
        out.push_str(int);
    }
    out.push('.');
    out.push_str(frac);
    out
}

/// Quantities print without trailing zeros: `2.50` becomes `2.5`.
pub fn quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

pub fn date(value: NaiveDate) -> String {
    value.format("%d-%m-%Y").to_string()
}
