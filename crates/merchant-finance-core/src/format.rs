//! US-locale display formatting for amounts and percentages.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::time_value::CURRENCY_DP;
use crate::types::{Money, Percent};

/// Format an amount as US dollars with two decimals: `$1,234.56`, `-$12.50`.
pub fn format_currency(amount: Money) -> String {
    let rounded = fixed_scale(amount, CURRENCY_DP);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Format a percentage-point value: `format_percentage(8, 2)` is `8.00%`.
pub fn format_percentage(value: Percent, decimals: u32) -> String {
    let rounded = fixed_scale(value, decimals);
    let rounded = if rounded.is_zero() { rounded.abs() } else { rounded };
    format!("{rounded}%")
}

/// Round half-even to `dp` places and pad so exactly `dp` digits print.
fn fixed_scale(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(dp);
    rounded
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
