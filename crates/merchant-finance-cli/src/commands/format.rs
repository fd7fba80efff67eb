use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use merchant_finance_core::format::{format_currency, format_percentage};

/// Arguments for currency formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CurrencyArgs {
    /// Amount to format
    pub amount: Decimal,
}

pub fn run_format_currency(args: CurrencyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "amount": args.amount.to_string(),
        "formatted": format_currency(args.amount),
    }))
}

/// Arguments for percentage formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PercentageArgs {
    /// Value in percentage points (8 = 8%)
    pub value: Decimal,

    /// Decimal places
    #[arg(long, default_value_t = 2)]
    pub decimals: u32,
}

pub fn run_format_percentage(args: PercentageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "value": args.value.to_string(),
        "formatted": format_percentage(args.value, args.decimals),
    }))
}
