//! Live previews for the merchant and investor dashboards, and the
//! submission-time quote echoed next to a persisted contract.
//!
//! Each preview fills omitted fields from [`CalculatorDefaults`], runs the
//! shared schedule calculator, and attaches display strings so the web
//! layer renders figures without re-deriving any arithmetic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::format::{format_currency, format_percentage};
use crate::schedule::{
    compute_monthly_amortizing, compute_quarterly_interest_only, compute_schedule,
    CalculatorDefaults, FinancingTerms, Schedule, ScheduleKind,
};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinanceResult;

// ---------------------------------------------------------------------------
// Merchant financing preview
// ---------------------------------------------------------------------------

/// Purchase being financed; omitted fields take the configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantPreviewInput {
    pub purchase_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_payment_rate: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_interest_rate: Option<Percent>,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantDisplay {
    pub purchase_amount: String,
    pub down_payment: String,
    pub down_payment_rate: String,
    pub financed_amount: String,
    pub monthly_payment: String,
    pub final_payment: String,
    pub total_interest: String,
    pub interest_rate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantPreview {
    pub terms: FinancingTerms,
    pub schedule: Schedule,
    pub display: MerchantDisplay,
}

/// Preview a merchant financing plan.
pub fn merchant_preview(
    input: &MerchantPreviewInput,
    defaults: &CalculatorDefaults,
) -> FinanceResult<ComputationOutput<MerchantPreview>> {
    let start = Instant::now();
    defaults.validate()?;

    let terms = FinancingTerms {
        principal: input.purchase_amount,
        down_payment_rate: input.down_payment_rate.unwrap_or(defaults.down_payment_rate),
        term_months: input.term_months.unwrap_or(defaults.term_months),
        annual_interest_rate: input
            .annual_interest_rate
            .unwrap_or(defaults.merchant_interest_rate),
        schedule_kind: ScheduleKind::MonthlyAmortizing,
        start_date: input.start_date,
    };

    let computed = compute_monthly_amortizing(&terms)?;
    let schedule = computed.result;
    let s = &schedule.summary;

    let monthly_payment = s.monthly_payment.unwrap_or(Decimal::ZERO);
    let final_payment = schedule
        .entries
        .last()
        .map(|e| e.total_payment)
        .unwrap_or(monthly_payment);

    let display = MerchantDisplay {
        purchase_amount: format_currency(terms.principal),
        down_payment: format_currency(s.down_payment_amount),
        down_payment_rate: format_percentage(terms.down_payment_rate, 0),
        financed_amount: format_currency(s.financed_amount),
        monthly_payment: format_currency(monthly_payment),
        final_payment: format_currency(final_payment),
        total_interest: format_currency(s.total_interest),
        interest_rate: format_percentage(terms.annual_interest_rate, 2),
    };

    let output = MerchantPreview {
        terms,
        schedule,
        display,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Merchant financing preview",
        &serde_json::json!({
            "defaults": defaults,
            "defaults_applied": {
                "down_payment_rate": input.down_payment_rate.is_none(),
                "term_months": input.term_months.is_none(),
                "annual_interest_rate": input.annual_interest_rate.is_none(),
            },
        }),
        computed.warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Investor offering preview
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorPreviewInput {
    pub investment_amount: Money,
    /// Offering APY in percent.
    pub apy: Percent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorDisplay {
    pub investment_amount: String,
    pub apy: String,
    pub quarterly_interest: String,
    pub total_return: String,
    pub total_profit: String,
    pub maturity_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorPreview {
    pub terms: FinancingTerms,
    pub schedule: Schedule,
    pub display: InvestorDisplay,
}

/// Preview the return on an investor offering.
pub fn investor_preview(
    input: &InvestorPreviewInput,
    defaults: &CalculatorDefaults,
) -> FinanceResult<ComputationOutput<InvestorPreview>> {
    let start = Instant::now();
    defaults.validate()?;

    let terms = FinancingTerms::offering(
        input.investment_amount,
        input.apy,
        input.term_months.unwrap_or(defaults.term_months),
        input.start_date,
    );

    let computed = compute_quarterly_interest_only(&terms)?;
    let schedule = computed.result;
    let s = &schedule.summary;

    let display = InvestorDisplay {
        investment_amount: format_currency(s.financed_amount),
        apy: format_percentage(terms.annual_interest_rate, 2),
        quarterly_interest: format_currency(s.periodic_interest.unwrap_or(Decimal::ZERO)),
        total_return: format_currency(s.total_return),
        total_profit: format_currency(s.total_profit),
        maturity_date: schedule
            .final_due_date()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default(),
    };

    let output = InvestorPreview {
        terms,
        schedule,
        display,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Investor offering preview",
        &serde_json::json!({
            "term_months_defaulted": input.term_months.is_none(),
        }),
        computed.warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Contract submission quote
// ---------------------------------------------------------------------------

/// Figures stored alongside a contract at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractQuote {
    pub schedule_kind: ScheduleKind,
    pub principal: Money,
    pub down_payment_amount: Money,
    pub financed_amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_interest: Option<Money>,
    pub total_interest: Money,
    pub number_of_payments: u32,
    pub first_due_date: Option<NaiveDate>,
    pub final_due_date: Option<NaiveDate>,
}

/// Recompute the schedule at commit time and echo its headline figures.
pub fn quote_contract(terms: &FinancingTerms) -> FinanceResult<ComputationOutput<ContractQuote>> {
    let start = Instant::now();
    let computed = compute_schedule(terms)?;
    let schedule = &computed.result;
    let s = &schedule.summary;

    let quote = ContractQuote {
        schedule_kind: s.schedule_kind,
        principal: terms.principal,
        down_payment_amount: s.down_payment_amount,
        financed_amount: s.financed_amount,
        monthly_payment: s.monthly_payment,
        periodic_interest: s.periodic_interest,
        total_interest: s.total_interest,
        number_of_payments: s.number_of_payments,
        first_due_date: schedule.first_due_date(),
        final_due_date: schedule.final_due_date(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Contract submission quote",
        terms,
        computed.warnings,
        elapsed,
        quote,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn purchase(amount: Decimal) -> MerchantPreviewInput {
        MerchantPreviewInput {
            purchase_amount: amount,
            down_payment_rate: None,
            term_months: None,
            annual_interest_rate: None,
            start_date: start(),
        }
    }

    #[test]
    fn test_merchant_preview_applies_defaults() {
        let out = merchant_preview(&purchase(dec!(10000)), &CalculatorDefaults::default()).unwrap();
        let p = &out.result;

        assert_eq!(p.terms.down_payment_rate, dec!(15));
        assert_eq!(p.terms.term_months, 24);
        assert_eq!(p.display.down_payment, "$1,500.00");
        assert_eq!(p.display.down_payment_rate, "15%");
        assert_eq!(p.display.financed_amount, "$8,500.00");
        assert_eq!(p.display.monthly_payment, "$354.17");
        assert_eq!(p.display.final_payment, "$354.09");
        assert_eq!(p.display.interest_rate, "0.00%");
        assert_eq!(out.assumptions["defaults_applied"]["term_months"], true);
    }

    #[test]
    fn test_merchant_preview_overrides_win() {
        let mut input = purchase(dec!(6000));
        input.down_payment_rate = Some(dec!(0));
        input.term_months = Some(12);
        let out = merchant_preview(&input, &CalculatorDefaults::default()).unwrap();
        assert_eq!(out.result.display.monthly_payment, "$500.00");
        assert_eq!(out.result.schedule.entries.len(), 12);
    }

    #[test]
    fn test_merchant_preview_uses_configured_defaults() {
        let defaults = CalculatorDefaults {
            down_payment_rate: dec!(20),
            term_months: 12,
            merchant_interest_rate: dec!(0),
        };
        let out = merchant_preview(&purchase(dec!(1000)), &defaults).unwrap();
        assert_eq!(out.result.display.financed_amount, "$800.00");
        assert_eq!(out.result.schedule.entries.len(), 12);
    }

    #[test]
    fn test_merchant_preview_rejects_bad_defaults() {
        let defaults = CalculatorDefaults {
            term_months: 0,
            ..CalculatorDefaults::default()
        };
        assert!(merchant_preview(&purchase(dec!(1000)), &defaults).is_err());
    }

    #[test]
    fn test_investor_preview_display() {
        let input = InvestorPreviewInput {
            investment_amount: dec!(10000),
            apy: dec!(8),
            term_months: Some(24),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        let out = investor_preview(&input, &CalculatorDefaults::default()).unwrap();
        let d = &out.result.display;

        assert_eq!(d.apy, "8.00%");
        assert_eq!(d.quarterly_interest, "$200.00");
        assert_eq!(d.total_return, "$11,600.00");
        assert_eq!(d.total_profit, "$1,600.00");
        assert_eq!(d.maturity_date, "Jan 1, 2027");
    }

    #[test]
    fn test_investor_preview_term_defaults() {
        let input = InvestorPreviewInput {
            investment_amount: dec!(5000),
            apy: dec!(10),
            term_months: None,
            start_date: start(),
        };
        let out = investor_preview(&input, &CalculatorDefaults::default()).unwrap();
        assert_eq!(out.result.terms.term_months, 24);
        assert_eq!(out.result.schedule.summary.number_of_payments, 8);
    }

    #[test]
    fn test_quote_echoes_monthly_figures() {
        let terms = FinancingTerms::merchant(dec!(10000), start());
        let quote = quote_contract(&terms).unwrap().result;

        assert_eq!(quote.financed_amount, dec!(8500.00));
        assert_eq!(quote.monthly_payment, Some(dec!(354.17)));
        assert_eq!(quote.number_of_payments, 24);
        assert_eq!(quote.first_due_date, NaiveDate::from_ymd_opt(2025, 4, 10));
        assert_eq!(quote.final_due_date, NaiveDate::from_ymd_opt(2027, 3, 10));
    }

    #[test]
    fn test_quote_for_offering() {
        let terms = FinancingTerms::offering(dec!(10000), dec!(8), 24, start());
        let quote = quote_contract(&terms).unwrap().result;
        assert!(quote.monthly_payment.is_none());
        assert_eq!(quote.periodic_interest, Some(dec!(200.00)));
        assert_eq!(quote.total_interest, dec!(1600.00));
    }
}
