//! Financing and investment schedules.
//!
//! One calculator backs every surface that shows a payment plan: the
//! merchant financing preview, the investor offering preview, and the
//! contract submission echo. Amounts are `rust_decimal::Decimal` and every
//! per-period figure is rounded to cents, half-even.

pub mod memo;
pub mod monthly;
pub mod quarterly;
pub mod terms;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ComputationOutput, Money};
use crate::FinanceResult;

pub use memo::ScheduleMemo;
pub use monthly::compute_monthly_amortizing;
pub use quarterly::compute_quarterly_interest_only;
pub use terms::{
    CalculatorDefaults, FinancingTerms, ScheduleKind, DEFAULT_DOWN_PAYMENT_RATE,
    DEFAULT_MERCHANT_INTEREST_RATE, DEFAULT_TERM_MONTHS, MAX_TERM_MONTHS,
};

/// Display status of a scheduled payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// The next payment due.
    Upcoming,
    Scheduled,
}

/// One payment period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based.
    pub period_index: u32,
    pub due_date: NaiveDate,
    pub interest_portion: Money,
    pub principal_portion: Money,
    /// `interest_portion + principal_portion`.
    pub total_payment: Money,
    /// Outstanding principal after this payment.
    pub remaining_balance: Money,
    pub status: EntryStatus,
}

/// Aggregate figures for a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub schedule_kind: ScheduleKind,
    pub down_payment_amount: Money,
    pub financed_amount: Money,
    /// Level payment; monthly schedules only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Money>,
    /// Flat interest per quarter; interest-only schedules only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_interest: Option<Money>,
    pub number_of_payments: u32,
    pub total_interest: Money,
    /// Sum of every `total_payment`.
    pub total_payments: Money,
    /// `financed_amount + total_interest`.
    pub total_return: Money,
    /// `total_return - financed_amount`.
    pub total_profit: Money,
}

/// A full schedule: summary plus one entry per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub summary: ScheduleSummary,
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn first_due_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.due_date)
    }

    pub fn final_due_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.due_date)
    }

    /// Sum of principal repaid across all entries.
    pub fn principal_repaid(&self) -> Money {
        self.entries.iter().map(|e| e.principal_portion).sum()
    }
}

/// Build the schedule selected by `terms.schedule_kind`.
pub fn compute_schedule(terms: &FinancingTerms) -> FinanceResult<ComputationOutput<Schedule>> {
    match terms.schedule_kind {
        ScheduleKind::MonthlyAmortizing => compute_monthly_amortizing(terms),
        ScheduleKind::QuarterlyInterestOnly => compute_quarterly_interest_only(terms),
    }
}

pub(crate) fn status_for(period_index: u32) -> EntryStatus {
    if period_index == 1 {
        EntryStatus::Upcoming
    } else {
        EntryStatus::Scheduled
    }
}
