//! Monthly amortizing schedules for merchant financing.
//!
//! The level payment comes from the annuity formula (plain division at a
//! zero rate) and is rounded to cents. Each period then splits that payment
//! into interest on the opening balance and principal; the final period
//! repays whatever balance is left so principal sums to the financed
//! amount exactly.

use log::debug;
use rust_decimal::Decimal;
use std::time::Instant;

use crate::schedule::terms::{FinancingTerms, ScheduleKind};
use crate::schedule::{status_for, Schedule, ScheduleEntry, ScheduleSummary};
use crate::time_value::{
    add_months, annuity_payment, checked_total, monthly_rate, overflow, round_cents,
};
use crate::types::{with_metadata, ComputationOutput};
use crate::FinanceResult;

/// Build a monthly amortizing schedule with a declining-balance split.
pub fn compute_monthly_amortizing(
    terms: &FinancingTerms,
) -> FinanceResult<ComputationOutput<Schedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    terms.validate()?;
    if terms.schedule_kind != ScheduleKind::MonthlyAmortizing {
        warnings.push(format!(
            "schedule_kind {:?} ignored; building a monthly amortizing schedule",
            terms.schedule_kind
        ));
    }

    let down_payment_amount = terms.down_payment_amount()?;
    let financed_amount = terms.financed_amount()?;
    let rate = monthly_rate(terms.annual_interest_rate);
    let n = terms.term_months;

    let monthly_payment = round_cents(annuity_payment(financed_amount, rate, n)?);

    let mut entries: Vec<ScheduleEntry> = Vec::with_capacity(n as usize);
    let mut balance = financed_amount;

    for period in 1..=n {
        let interest = round_cents(
            balance
                .checked_mul(rate)
                .ok_or_else(|| overflow("period interest"))?,
        );
        let principal = if period == n {
            balance
        } else {
            (monthly_payment - interest).max(Decimal::ZERO).min(balance)
        };
        balance -= principal;

        entries.push(ScheduleEntry {
            period_index: period,
            due_date: add_months(terms.start_date, period)?,
            interest_portion: interest,
            principal_portion: principal,
            total_payment: interest
                .checked_add(principal)
                .ok_or_else(|| overflow("period payment"))?,
            remaining_balance: balance,
            status: status_for(period),
        });
    }

    let final_payment = entries
        .last()
        .map(|e| e.total_payment)
        .unwrap_or(monthly_payment);
    if final_payment != monthly_payment {
        let adjustment = final_payment - monthly_payment;
        debug!("final payment adjusted by {adjustment} to retire the balance");
        warnings.push(format!(
            "Final payment of {final_payment} differs from the level payment by {adjustment} (cent rounding)"
        ));
    }

    let total_interest =
        checked_total(entries.iter().map(|e| e.interest_portion), "total interest")?;
    let total_payments =
        checked_total(entries.iter().map(|e| e.total_payment), "total payments")?;
    let total_return = financed_amount
        .checked_add(total_interest)
        .ok_or_else(|| overflow("total return"))?;

    debug!(
        "monthly schedule: financed={financed_amount} payment={monthly_payment} n={n} interest={total_interest}"
    );

    let output = Schedule {
        summary: ScheduleSummary {
            schedule_kind: ScheduleKind::MonthlyAmortizing,
            down_payment_amount,
            financed_amount,
            monthly_payment: Some(monthly_payment),
            periodic_interest: None,
            number_of_payments: n,
            total_interest,
            total_payments,
            total_return,
            total_profit: total_return - financed_amount,
        },
        entries,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Monthly amortizing schedule — level payment, declining-balance interest split",
        &serde_json::json!({
            "principal": terms.principal.to_string(),
            "down_payment_rate": terms.down_payment_rate.to_string(),
            "term_months": n,
            "annual_interest_rate": terms.annual_interest_rate.to_string(),
            "monthly_rate": rate.to_string(),
            "start_date": terms.start_date.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn terms(principal: Decimal, down: Decimal, months: u32, rate: Decimal) -> FinancingTerms {
        FinancingTerms {
            principal,
            down_payment_rate: down,
            term_months: months,
            annual_interest_rate: rate,
            schedule_kind: ScheduleKind::MonthlyAmortizing,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Interest-free merchant financing
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_rate_known_answer() {
        let out = compute_monthly_amortizing(&terms(dec!(10000), dec!(15), 24, dec!(0))).unwrap();
        let s = &out.result.summary;

        assert_eq!(s.down_payment_amount, dec!(1500.00));
        assert_eq!(s.financed_amount, dec!(8500.00));
        assert_eq!(s.monthly_payment, Some(dec!(354.17)));
        assert_eq!(s.total_interest, Decimal::ZERO);
        assert_eq!(s.number_of_payments, 24);
    }

    #[test]
    fn test_zero_rate_has_no_interest_anywhere() {
        let out = compute_monthly_amortizing(&terms(dec!(10000), dec!(15), 24, dec!(0))).unwrap();
        assert!(out
            .result
            .entries
            .iter()
            .all(|e| e.interest_portion.is_zero()));
    }

    #[test]
    fn test_final_payment_absorbs_rounding() {
        let out = compute_monthly_amortizing(&terms(dec!(10000), dec!(15), 24, dec!(0))).unwrap();
        let entries = &out.result.entries;

        // 23 * 354.17 = 8145.91, leaving 354.09
        assert_eq!(entries[22].total_payment, dec!(354.17));
        assert_eq!(entries[23].total_payment, dec!(354.09));
        assert_eq!(entries[23].remaining_balance, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_even_split_has_no_warning() {
        let out = compute_monthly_amortizing(&terms(dec!(1200), dec!(0), 12, dec!(0))).unwrap();
        assert_eq!(out.result.summary.monthly_payment, Some(dec!(100.00)));
        assert!(out.warnings.is_empty());
    }

    // -----------------------------------------------------------------------
    // 2. Interest-bearing financing
    // -----------------------------------------------------------------------
    #[test]
    fn test_annuity_payment_with_interest() {
        // 10,000 at 12% APR, 12 months => 888.49
        let out = compute_monthly_amortizing(&terms(dec!(10000), dec!(0), 12, dec!(12))).unwrap();
        let s = &out.result.summary;
        assert_eq!(s.monthly_payment, Some(dec!(888.49)));

        // First month: 1% of 10,000
        let first = &out.result.entries[0];
        assert_eq!(first.interest_portion, dec!(100.00));
        assert_eq!(first.principal_portion, dec!(788.49));
        assert_eq!(first.remaining_balance, dec!(9211.51));
    }

    #[test]
    fn test_interest_declines_over_term() {
        let out = compute_monthly_amortizing(&terms(dec!(25000), dec!(10), 36, dec!(9.5))).unwrap();
        let entries = &out.result.entries;
        for pair in entries.windows(2) {
            assert!(pair[1].interest_portion <= pair[0].interest_portion);
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_principal_sums_to_financed_amount() {
        let out = compute_monthly_amortizing(&terms(dec!(7349.99), dec!(12.5), 18, dec!(7.25))).unwrap();
        let s = &out.result;
        assert_eq!(s.principal_repaid(), s.summary.financed_amount);
        assert_eq!(
            s.summary.total_payments,
            s.summary.financed_amount + s.summary.total_interest
        );
    }

    // -----------------------------------------------------------------------
    // 3. Boundaries and errors
    // -----------------------------------------------------------------------
    #[test]
    fn test_single_month_repays_everything() {
        let out = compute_monthly_amortizing(&terms(dec!(999.99), dec!(15), 1, dec!(18))).unwrap();
        let entries = &out.result.entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].principal_portion, out.result.summary.financed_amount);
        assert_eq!(entries[0].status, crate::schedule::EntryStatus::Upcoming);
    }

    #[test]
    fn test_due_dates_clamp_to_month_end() {
        let out = compute_monthly_amortizing(&terms(dec!(1000), dec!(0), 3, dec!(0))).unwrap();
        let dates: Vec<NaiveDate> = out.result.entries.iter().map(|e| e.due_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            ]
        );
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = compute_monthly_amortizing(&terms(dec!(1000), dec!(15), 0, dec!(0))).unwrap_err();
        assert_eq!(err.field(), Some("term_months"));
    }

    #[test]
    fn test_metadata_populated() {
        let out = compute_monthly_amortizing(&terms(dec!(1000), dec!(15), 6, dec!(0))).unwrap();
        assert!(out.methodology.contains("Monthly amortizing"));
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert_eq!(out.assumptions["term_months"], 6);
    }
}
