//! Amounts in words, Indian numbering (thousand, lakh, crore).

use gstdoc_tax::round2;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// `1180.50` becomes `"Rupees One Thousand One Hundred Eighty and Fifty Paise Only"`.
pub fn amount_in_words(amount: Decimal) -> String {
    let amount = round2(amount.abs());
    let rupees = amount.trunc();
    let paise = ((amount - rupees) * Decimal::ONE_HUNDRED).to_u64().unwrap_or(0);
    let Some(rupees) = rupees.to_u64() else {
        return format!("Rupees {} Only", amount);
    };

    let mut text = format!("Rupees {}", integer_words(rupees));
    if paise > 0 {
        text.push_str(" and ");
        text.push_str(&below_hundred(paise));
        text.push_str(" Paise");
    }
    text.push_str(" Only");
    text
}

fn integer_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut parts = Vec::new();
    let crore = n / 10_000_000;
    let mut rest = n % 10_000_000;
    if crore > 0 {
        parts.push(format!("{} Crore", integer_words(crore)));
    }
    for (unit, name) in [(100_000, "Lakh"), (1_000, "Thousand"), (100, "Hundred")] {
        let count = rest / unit;
        rest %= unit;
        if count > 0 {
            parts.push(format!("{} {}", below_hundred(count), name));
        }
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }
    parts.join(" ")
}

fn below_hundred(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        _ if n % 10 == 0 => TENS[(n / 10) as usize].to_string(),
        _ => format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize]),
    }
}
