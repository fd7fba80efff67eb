use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use merchant_finance_core::preview::{self, InvestorPreviewInput, MerchantPreviewInput};

use crate::commands::request_from_input;
use crate::input;

/// Arguments for the merchant financing preview
#[derive(Args)]
pub struct MerchantPreviewArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Down payment in percent (config default if omitted)
    #[arg(long)]
    pub down_payment_rate: Option<Decimal>,

    /// Term in months (config default if omitted)
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Annual interest rate in percent (config default if omitted)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Start date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_merchant_preview(
    args: MerchantPreviewArgs,
    config: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let defaults = input::config::load_defaults(config)?;

    let request = match request_from_input::<MerchantPreviewInput>(args.input.as_deref())? {
        Some(request) => request,
        None => MerchantPreviewInput {
            purchase_amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            down_payment_rate: args.down_payment_rate,
            term_months: args.term_months,
            annual_interest_rate: args.rate,
            start_date: input::start_date_or_today(args.start_date),
        },
    };

    let result = preview::merchant_preview(&request, &defaults)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the investor offering preview
#[derive(Args)]
pub struct InvestorPreviewArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount invested
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Offering APY in percent
    #[arg(long)]
    pub apy: Option<Decimal>,

    /// Term in months (config default if omitted)
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Start date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_investor_preview(
    args: InvestorPreviewArgs,
    config: Option<&str>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let defaults = input::config::load_defaults(config)?;

    let request = match request_from_input::<InvestorPreviewInput>(args.input.as_deref())? {
        Some(request) => request,
        None => InvestorPreviewInput {
            investment_amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            apy: args.apy.ok_or("--apy is required (or provide --input)")?,
            term_months: args.term_months,
            start_date: input::start_date_or_today(args.start_date),
        },
    };

    let result = preview::investor_preview(&request, &defaults)?;
    Ok(serde_json::to_value(result)?)
}
