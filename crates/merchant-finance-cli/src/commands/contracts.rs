use clap::Args;
use serde_json::{json, Value};

use merchant_finance_core::response::{ContractRecord, ListResponse};

use crate::input;

/// Arguments for contract response normalization
#[derive(Args)]
pub struct NormalizeArgs {
    /// Path to a saved backend response (otherwise read from stdin)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_normalize(args: NormalizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let body = if let Some(ref path) = args.input {
        input::file::read_json_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("--input <file.json> or stdin required for normalize-contracts".into());
    };

    let contracts = ListResponse::<ContractRecord>::from_value(body)?.into_items()?;
    log::debug!("normalized {} contract rows", contracts.len());
    Ok(json!({
        "count": contracts.len(),
        "results": contracts,
    }))
}
