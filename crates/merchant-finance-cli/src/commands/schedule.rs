use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use merchant_finance_core::preview;
use merchant_finance_core::schedule::{self, FinancingTerms, ScheduleKind};

use crate::commands::request_from_input;
use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Level monthly payments
    Monthly,
    /// Quarterly interest, principal at maturity
    Quarterly,
}

impl From<KindArg> for ScheduleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Monthly => ScheduleKind::MonthlyAmortizing,
            KindArg::Quarterly => ScheduleKind::QuarterlyInterestOnly,
        }
    }
}

/// Arguments shared by `schedule` and `quote`
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to JSON terms file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase or offering amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Down payment in percent
    #[arg(long)]
    pub down_payment_rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Annual interest rate in percent
    #[arg(long, alias = "apy")]
    pub rate: Option<Decimal>,

    /// Schedule kind
    #[arg(long, value_enum, default_value = "monthly")]
    pub kind: KindArg,

    /// First period is counted from this date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

fn terms_from_args(
    args: ScheduleArgs,
    config: Option<&str>,
) -> Result<FinancingTerms, Box<dyn std::error::Error>> {
    if let Some(terms) = request_from_input::<FinancingTerms>(args.input.as_deref())? {
        return Ok(terms);
    }
    let defaults = input::config::load_defaults(config)?;

    let principal = args
        .principal
        .ok_or("--principal is required (or provide --input)")?;
    let kind = ScheduleKind::from(args.kind);

    // Offerings carry no down payment and no default rate.
    let (default_down, default_rate) = match kind {
        ScheduleKind::MonthlyAmortizing => {
            (defaults.down_payment_rate, defaults.merchant_interest_rate)
        }
        ScheduleKind::QuarterlyInterestOnly => (Decimal::ZERO, Decimal::ZERO),
    };

    Ok(FinancingTerms {
        principal,
        down_payment_rate: args.down_payment_rate.unwrap_or(default_down),
        term_months: args.term_months.unwrap_or(defaults.term_months),
        annual_interest_rate: args.rate.unwrap_or(default_rate),
        schedule_kind: kind,
        start_date: input::start_date_or_today(args.start_date),
    })
}

pub fn run_schedule(
    args: ScheduleArgs,
    config: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = terms_from_args(args, config)?;
    let result = schedule::compute_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_quote(
    args: ScheduleArgs,
    config: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = terms_from_args(args, config)?;
    let result = preview::quote_contract(&terms)?;
    Ok(serde_json::to_value(result)?)
}
