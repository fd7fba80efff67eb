use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinanceError;
use crate::time_value::{overflow, percent_of, round_cents, CURRENCY_DP};
use crate::types::{Money, Percent};
use crate::FinanceResult;

/// Default down payment on merchant financing, in percent.
pub const DEFAULT_DOWN_PAYMENT_RATE: Percent = dec!(15);
/// Default contract term in months.
pub const DEFAULT_TERM_MONTHS: u32 = 24;
/// Merchant financing is interest-free unless the caller says otherwise.
pub const DEFAULT_MERCHANT_INTEREST_RATE: Percent = dec!(0);
/// Longest accepted term, 100 years.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Repayment profile of a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    /// Level monthly payments that retire the financed amount.
    #[default]
    MonthlyAmortizing,
    /// Flat quarterly interest, principal repaid with the last quarter.
    QuarterlyInterestOnly,
}

/// Input terms shared by every schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinancingTerms {
    /// Purchase or offering amount.
    pub principal: Money,
    /// Down payment in percent of principal, `[0, 100)`.
    pub down_payment_rate: Percent,
    pub term_months: u32,
    /// Annual rate in percent (APR for merchants, APY for investors).
    pub annual_interest_rate: Percent,
    #[serde(default)]
    pub schedule_kind: ScheduleKind,
    /// Due dates are counted from this date.
    pub start_date: NaiveDate,
}

impl FinancingTerms {
    /// Merchant terms using the platform defaults.
    pub fn merchant(principal: Money, start_date: NaiveDate) -> Self {
        FinancingTerms {
            principal,
            down_payment_rate: DEFAULT_DOWN_PAYMENT_RATE,
            term_months: DEFAULT_TERM_MONTHS,
            annual_interest_rate: DEFAULT_MERCHANT_INTEREST_RATE,
            schedule_kind: ScheduleKind::MonthlyAmortizing,
            start_date,
        }
    }

    /// Investor offering terms: no down payment, quarterly interest-only.
    pub fn offering(
        principal: Money,
        apy: Percent,
        term_months: u32,
        start_date: NaiveDate,
    ) -> Self {
        FinancingTerms {
            principal,
            down_payment_rate: Decimal::ZERO,
            term_months,
            annual_interest_rate: apy,
            schedule_kind: ScheduleKind::QuarterlyInterestOnly,
            start_date,
        }
    }

    pub fn validate(&self) -> FinanceResult<()> {
        if self.term_months == 0 {
            return Err(FinanceError::invalid("term_months", "must be > 0"));
        }
        if self.term_months > MAX_TERM_MONTHS {
            return Err(FinanceError::invalid(
                "term_months",
                format!("must be <= {MAX_TERM_MONTHS}"),
            ));
        }
        if self.principal <= Decimal::ZERO {
            return Err(FinanceError::invalid("principal", "must be > 0"));
        }
        if self.principal.normalize().scale() > CURRENCY_DP {
            return Err(FinanceError::invalid(
                "principal",
                "must be a whole number of cents",
            ));
        }
        if self.down_payment_rate < Decimal::ZERO || self.down_payment_rate >= dec!(100) {
            return Err(FinanceError::invalid(
                "down_payment_rate",
                "must be in [0, 100)",
            ));
        }
        if self.annual_interest_rate < Decimal::ZERO {
            return Err(FinanceError::invalid(
                "annual_interest_rate",
                "must be >= 0",
            ));
        }
        Ok(())
    }

    /// Down payment rounded to cents.
    pub fn down_payment_amount(&self) -> FinanceResult<Money> {
        Ok(round_cents(percent_of(self.principal, self.down_payment_rate)?))
    }

    pub fn financed_amount(&self) -> FinanceResult<Money> {
        self.principal
            .checked_sub(self.down_payment_amount()?)
            .ok_or_else(|| overflow("financed amount"))
    }
}

/// Caller-side defaults applied when a preview omits a field.
///
/// Loaded from the CLI config file; every field falls back to the
/// platform default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub down_payment_rate: Percent,
    pub term_months: u32,
    pub merchant_interest_rate: Percent,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        CalculatorDefaults {
            down_payment_rate: DEFAULT_DOWN_PAYMENT_RATE,
            term_months: DEFAULT_TERM_MONTHS,
            merchant_interest_rate: DEFAULT_MERCHANT_INTEREST_RATE,
        }
    }
}

impl CalculatorDefaults {
    pub fn validate(&self) -> FinanceResult<()> {
        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(FinanceError::invalid(
                "term_months",
                format!("default must be in [1, {MAX_TERM_MONTHS}]"),
            ));
        }
        if self.down_payment_rate < Decimal::ZERO || self.down_payment_rate >= dec!(100) {
            return Err(FinanceError::invalid(
                "down_payment_rate",
                "default must be in [0, 100)",
            ));
        }
        if self.merchant_interest_rate < Decimal::ZERO {
            return Err(FinanceError::invalid(
                "merchant_interest_rate",
                "default must be >= 0",
            ));
        }
        Ok(())
    }
}
