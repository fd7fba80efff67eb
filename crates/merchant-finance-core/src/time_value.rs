use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::FinanceError;
use crate::types::{Money, Percent, Rate};
use crate::FinanceResult;

/// Decimal places of the smallest currency unit (cents).
pub const CURRENCY_DP: u32 = 2;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Round a monetary amount to cents, half-even.
pub fn round_cents(amount: Money) -> Money {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Share of `amount` given as percentage points (15 => 15%).
pub fn percent_of(amount: Money, pct: Percent) -> FinanceResult<Money> {
    amount
        .checked_mul(pct)
        .and_then(|v| v.checked_div(PERCENT))
        .ok_or_else(|| overflow(&format!("{pct}% of {amount}")))
}

/// Sum of `values`, failing instead of overflowing.
pub fn checked_total<I>(values: I, what: &str) -> FinanceResult<Money>
where
    I: IntoIterator<Item = Money>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or_else(|| overflow(what))
}

pub(crate) fn overflow(what: &str) -> FinanceError {
    FinanceError::FinancialImpossibility(format!("{what} overflows decimal range"))
}

/// Convert an annual percentage into a periodic decimal rate.
///
/// `periods_per_year` is 12 for monthly and 4 for quarterly schedules.
pub fn periodic_rate(annual_pct: Percent, periods_per_year: u32) -> FinanceResult<Rate> {
    if periods_per_year == 0 {
        return Err(FinanceError::invalid(
            "periods_per_year",
            "must be > 0",
        ));
    }
    Ok(annual_pct / PERCENT / Decimal::from(periods_per_year))
}

/// Monthly decimal rate for an annual percentage.
pub fn monthly_rate(annual_pct: Percent) -> Rate {
    annual_pct / PERCENT / MONTHS_PER_YEAR
}

/// `(1 + rate)^nper`, failing instead of overflowing.
pub fn compound_factor(rate: Rate, nper: u32) -> FinanceResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(u64::from(nper))
        .ok_or_else(|| {
            FinanceError::FinancialImpossibility(format!(
                "(1 + {rate})^{nper} overflows decimal range"
            ))
        })
}

/// Level payment that retires `present_value` over `nper` periods.
///
/// A zero rate is plain division; otherwise the annuity formula
/// `PV * r * (1+r)^n / ((1+r)^n - 1)`. The result is unrounded and positive.
pub fn annuity_payment(present_value: Money, rate: Rate, nper: u32) -> FinanceResult<Money> {
    if nper == 0 {
        return Err(FinanceError::invalid(
            "nper",
            "Number of periods must be > 0",
        ));
    }

    if rate.is_zero() {
        return Ok(present_value / Decimal::from(nper));
    }

    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(FinanceError::FinancialImpossibility(
            "annuity factor collapsed to zero".into(),
        ));
    }

    present_value
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| overflow("annuity payment"))
}

/// Add calendar months to a date, clamping to the last day of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> FinanceResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| FinanceError::DateError(format!("{date} + {months} months is out of range")))
}
