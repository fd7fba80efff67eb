use chrono::NaiveDate;
use merchant_finance_core::format::{format_currency, format_percentage};
use merchant_finance_core::preview::{
    investor_preview, merchant_preview, quote_contract, InvestorPreviewInput,
    MerchantPreviewInput,
};
use merchant_finance_core::response::{normalize_contracts, ContractStatus, ListResponse};
use merchant_finance_core::schedule::{compute_schedule, CalculatorDefaults, FinancingTerms};
use merchant_finance_core::FinanceError;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
}

// ===========================================================================
// Previews agree with the calculator
// ===========================================================================

#[test]
fn test_merchant_preview_matches_quote() {
    let input = MerchantPreviewInput {
        purchase_amount: dec!(10000),
        down_payment_rate: None,
        term_months: None,
        annual_interest_rate: None,
        start_date: start(),
    };
    let preview = merchant_preview(&input, &CalculatorDefaults::default())
        .unwrap()
        .result;
    let quote = quote_contract(&preview.terms).unwrap().result;

    assert_eq!(quote.financed_amount, preview.schedule.summary.financed_amount);
    assert_eq!(quote.monthly_payment, preview.schedule.summary.monthly_payment);
    assert_eq!(
        preview.display.monthly_payment,
        format_currency(quote.monthly_payment.unwrap())
    );
}

#[test]
fn test_merchant_preview_with_interest() {
    let input = MerchantPreviewInput {
        purchase_amount: dec!(10000),
        down_payment_rate: Some(dec!(0)),
        term_months: Some(12),
        annual_interest_rate: Some(dec!(12)),
        start_date: start(),
    };
    let out = merchant_preview(&input, &CalculatorDefaults::default()).unwrap();
    let p = &out.result;

    assert_eq!(p.display.monthly_payment, "$888.49");
    assert_eq!(p.display.interest_rate, "12.00%");
    assert!(p.schedule.summary.total_interest > dec!(0));
}

#[test]
fn test_investor_preview_matches_direct_schedule() {
    let input = InvestorPreviewInput {
        investment_amount: dec!(25000),
        apy: dec!(9.5),
        term_months: Some(36),
        start_date: start(),
    };
    let preview = investor_preview(&input, &CalculatorDefaults::default())
        .unwrap()
        .result;
    let direct = compute_schedule(&FinancingTerms::offering(dec!(25000), dec!(9.5), 36, start()))
        .unwrap()
        .result;

    assert_eq!(preview.schedule, direct);
    // 25000 * 9.5% / 4 = 593.75 per quarter, 12 quarters
    assert_eq!(preview.display.quarterly_interest, "$593.75");
    assert_eq!(preview.display.total_profit, "$7,125.00");
    assert_eq!(preview.display.total_return, "$32,125.00");
}

#[test]
fn test_preview_invalid_amount_is_input_error() {
    let input = InvestorPreviewInput {
        investment_amount: dec!(0),
        apy: dec!(8),
        term_months: Some(12),
        start_date: start(),
    };
    let err = investor_preview(&input, &CalculatorDefaults::default()).unwrap_err();
    assert_eq!(err.field(), Some("principal"));
}

#[test]
fn test_preview_input_from_dashboard_json() {
    let input: MerchantPreviewInput = serde_json::from_str(
        r#"{"purchase_amount": "2500", "term_months": 6, "start_date": "2025-05-01"}"#,
    )
    .unwrap();
    let out = merchant_preview(&input, &CalculatorDefaults::default()).unwrap();
    // 2500 - 375 down = 2125 / 6 = 354.1666 => 354.17
    assert_eq!(out.result.display.financed_amount, "$2,125.00");
    assert_eq!(out.result.display.monthly_payment, "$354.17");
}

// ===========================================================================
// Formatting
// ===========================================================================

#[test]
fn test_formatting_is_stable() {
    assert_eq!(format_currency(dec!(11600)), "$11,600.00");
    assert_eq!(format_percentage(dec!(15), 2), "15.00%");
}

// ===========================================================================
// Response normalization
// ===========================================================================

#[test]
fn test_both_response_shapes_yield_same_records() {
    let row = r#"{"id": "c-1", "amount": "8000", "termMonths": 12, "status": "pending"}"#;
    let bare = normalize_contracts(&format!("[{row}]")).unwrap();
    let wrapped = normalize_contracts(&format!(r#"{{"success": true, "contracts": [{row}]}}"#)).unwrap();

    assert_eq!(bare, wrapped);
    assert_eq!(bare[0].status, ContractStatus::Pending);
}

#[test]
fn test_generic_list_response_from_value() {
    let value = serde_json::json!({"success": true, "data": [1, 2, 3]});
    let items = ListResponse::<u32>::from_value(value)
        .unwrap()
        .into_items()
        .unwrap();
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn test_failed_response_surfaces_message() {
    let err = normalize_contracts(r#"{"success": false, "message": "session expired"}"#).unwrap_err();
    assert!(matches!(err, FinanceError::UnsuccessfulResponse(_)));
    assert!(err.to_string().contains("session expired"));
}

#[test]
fn test_contract_rows_rebuild_schedules() {
    let body = r#"{"success": true, "contracts": [
        {"id": 1, "amount": 10000, "termMonths": 24, "status": "active", "startDate": "2025-01-15"},
        {"id": 2, "amount": 1200, "downPaymentRate": 0, "termMonths": 12, "status": "completed"}
    ]}"#;
    let contracts = normalize_contracts(body).unwrap();
    let payments: Vec<_> = contracts
        .iter()
        .map(|c| {
            compute_schedule(&c.terms(dec!(15), start()))
                .unwrap()
                .result
                .summary
                .monthly_payment
        })
        .collect();

    assert_eq!(payments, vec![Some(dec!(354.17)), Some(dec!(100.00))]);
}
