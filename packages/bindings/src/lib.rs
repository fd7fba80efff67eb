use merchant_finance_core::schedule::CalculatorDefaults;
use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Defaults supplied by the caller as JSON, or the built-in ones.
fn parse_defaults(defaults_json: Option<String>) -> NapiResult<CalculatorDefaults> {
    match defaults_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error),
        None => Ok(CalculatorDefaults::default()),
    }
}

fn parse_decimal(field: &str, value: &str) -> NapiResult<Decimal> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| to_napi_error(format!("{field}: {e}")))
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_schedule(terms_json: String) -> NapiResult<String> {
    let terms: merchant_finance_core::schedule::FinancingTerms =
        serde_json::from_str(&terms_json).map_err(to_napi_error)?;
    let output =
        merchant_finance_core::schedule::compute_schedule(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_monthly_amortizing(terms_json: String) -> NapiResult<String> {
    let terms: merchant_finance_core::schedule::FinancingTerms =
        serde_json::from_str(&terms_json).map_err(to_napi_error)?;
    let output = merchant_finance_core::schedule::compute_monthly_amortizing(&terms)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_quarterly_interest_only(terms_json: String) -> NapiResult<String> {
    let terms: merchant_finance_core::schedule::FinancingTerms =
        serde_json::from_str(&terms_json).map_err(to_napi_error)?;
    let output = merchant_finance_core::schedule::compute_quarterly_interest_only(&terms)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Previews
// ---------------------------------------------------------------------------

#[napi]
pub fn merchant_preview(input_json: String, defaults_json: Option<String>) -> NapiResult<String> {
    let input: merchant_finance_core::preview::MerchantPreviewInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let defaults = parse_defaults(defaults_json)?;
    let output = merchant_finance_core::preview::merchant_preview(&input, &defaults)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn investor_preview(input_json: String, defaults_json: Option<String>) -> NapiResult<String> {
    let input: merchant_finance_core::preview::InvestorPreviewInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let defaults = parse_defaults(defaults_json)?;
    let output = merchant_finance_core::preview::investor_preview(&input, &defaults)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn quote_contract(terms_json: String) -> NapiResult<String> {
    let terms: merchant_finance_core::schedule::FinancingTerms =
        serde_json::from_str(&terms_json).map_err(to_napi_error)?;
    let output =
        merchant_finance_core::preview::quote_contract(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Amounts cross the boundary as strings to keep decimal precision.
#[napi]
pub fn format_currency(amount: String) -> NapiResult<String> {
    let amount = parse_decimal("amount", &amount)?;
    Ok(merchant_finance_core::format::format_currency(amount))
}

#[napi]
pub fn format_percentage(value: String, decimals: Option<u32>) -> NapiResult<String> {
    let value = parse_decimal("value", &value)?;
    Ok(merchant_finance_core::format::format_percentage(
        value,
        decimals.unwrap_or(2),
    ))
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[napi]
pub fn normalize_contracts(body_json: String) -> NapiResult<String> {
    let contracts =
        merchant_finance_core::response::normalize_contracts(&body_json).map_err(to_napi_error)?;
    serde_json::to_string(&contracts).map_err(to_napi_error)
}
