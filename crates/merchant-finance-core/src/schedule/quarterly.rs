//! Quarterly interest-only schedules for investor offerings.
//!
//! Interest is flat: `principal * APY * 3/12`, computed once and paid every
//! quarter. Principal comes back with the last quarter. A term that is not
//! a whole number of quarters rounds up to the next quarter.

use log::{debug, warn};
use rust_decimal::Decimal;
use std::time::Instant;

use crate::schedule::terms::{FinancingTerms, ScheduleKind};
use crate::schedule::{status_for, Schedule, ScheduleEntry, ScheduleSummary};
use crate::error::FinanceError;
use crate::time_value::{add_months, checked_total, overflow, periodic_rate, round_cents};
use crate::types::{with_metadata, ComputationOutput};
use crate::FinanceResult;

const MONTHS_PER_QUARTER: u32 = 3;
const QUARTERS_PER_YEAR: u32 = 4;

/// Number of quarterly payments covering `term_months`.
pub fn quarters_in_term(term_months: u32) -> u32 {
    term_months.div_ceil(MONTHS_PER_QUARTER)
}

/// Build a quarterly interest-only schedule with principal at maturity.
pub fn compute_quarterly_interest_only(
    terms: &FinancingTerms,
) -> FinanceResult<ComputationOutput<Schedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    terms.validate()?;
    if !terms.down_payment_rate.is_zero() {
        return Err(FinanceError::invalid(
            "down_payment_rate",
            "interest-only offerings take no down payment",
        ));
    }
    if terms.schedule_kind != ScheduleKind::QuarterlyInterestOnly {
        warnings.push(format!(
            "schedule_kind {:?} ignored; building a quarterly interest-only schedule",
            terms.schedule_kind
        ));
    }
    if terms.term_months % MONTHS_PER_QUARTER != 0 {
        warn!(
            "term of {} months is not a whole number of quarters",
            terms.term_months
        );
        warnings.push(format!(
            "Term of {} months rounded up to {} quarters",
            terms.term_months,
            quarters_in_term(terms.term_months)
        ));
    }

    let invested = terms.principal;
    let rate = periodic_rate(terms.annual_interest_rate, QUARTERS_PER_YEAR)?;
    let quarterly_interest = round_cents(
        invested
            .checked_mul(rate)
            .ok_or_else(|| overflow("quarterly interest"))?,
    );
    let quarters = quarters_in_term(terms.term_months);

    let mut entries: Vec<ScheduleEntry> = Vec::with_capacity(quarters as usize);
    for quarter in 1..=quarters {
        let principal = if quarter == quarters {
            invested
        } else {
            Decimal::ZERO
        };

        entries.push(ScheduleEntry {
            period_index: quarter,
            due_date: add_months(terms.start_date, MONTHS_PER_QUARTER * quarter)?,
            interest_portion: quarterly_interest,
            principal_portion: principal,
            total_payment: quarterly_interest
                .checked_add(principal)
                .ok_or_else(|| overflow("quarterly payment"))?,
            remaining_balance: invested - principal,
            status: status_for(quarter),
        });
    }

    let total_interest =
        checked_total(entries.iter().map(|e| e.interest_portion), "total interest")?;
    let total_payments =
        checked_total(entries.iter().map(|e| e.total_payment), "total payments")?;
    let total_return = invested
        .checked_add(total_interest)
        .ok_or_else(|| overflow("total return"))?;

    debug!(
        "quarterly schedule: invested={invested} interest/quarter={quarterly_interest} quarters={quarters}"
    );

    let output = Schedule {
        summary: ScheduleSummary {
            schedule_kind: ScheduleKind::QuarterlyInterestOnly,
            down_payment_amount: Decimal::ZERO,
            financed_amount: invested,
            monthly_payment: None,
            periodic_interest: Some(quarterly_interest),
            number_of_payments: quarters,
            total_interest,
            total_payments,
            total_return,
            total_profit: total_return - invested,
        },
        entries,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Quarterly interest-only schedule — flat quarterly interest, principal at maturity",
        &serde_json::json!({
            "principal": terms.principal.to_string(),
            "down_payment_rate": terms.down_payment_rate.to_string(),
            "term_months": terms.term_months,
            "annual_interest_rate": terms.annual_interest_rate.to_string(),
            "quarterly_rate": rate.to_string(),
            "start_date": terms.start_date.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
