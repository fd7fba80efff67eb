//! Normalization of backend list responses.
//!
//! Contract endpoints answer either with a bare JSON array or with a
//! `{ success, contracts | data, message }` wrapper. Both shapes are
//! accepted here, once, and flattened into a plain `Vec<T>`.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FinanceError;
use crate::schedule::{FinancingTerms, ScheduleKind};
use crate::types::{Money, Percent};
use crate::FinanceResult;

/// Either response shape a list endpoint may return.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Wrapped(ListEnvelope<T>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, rename = "contracts", alias = "data", alias = "items")]
    pub items: Vec<T>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T: DeserializeOwned> ListResponse<T> {
    pub fn from_json(body: &str) -> FinanceResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn from_value(body: serde_json::Value) -> FinanceResult<Self> {
        Ok(serde_json::from_value(body)?)
    }
}

impl<T> ListResponse<T> {
    /// Flatten to the item list; a wrapper with `success: false` is an error.
    pub fn into_items(self) -> FinanceResult<Vec<T>> {
        match self {
            ListResponse::Bare(items) => Ok(items),
            ListResponse::Wrapped(envelope) if envelope.success => Ok(envelope.items),
            ListResponse::Wrapped(envelope) => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| "backend reported failure".into());
                warn!("list response rejected: {message}");
                Err(FinanceError::UnsuccessfulResponse(message))
            }
        }
    }
}

/// Lifecycle state of a financing contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Pending,
    Active,
    Completed,
    Defaulted,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A contract row as the dashboards receive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub amount: Money,
    #[serde(default)]
    pub down_payment_rate: Option<Percent>,
    #[serde(default)]
    pub financed_amount: Option<Money>,
    pub term_months: u32,
    #[serde(default)]
    pub interest_rate: Option<Percent>,
    #[serde(default)]
    pub monthly_payment: Option<Money>,
    pub status: ContractStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl ContractRecord {
    /// Terms to rebuild this contract's payment schedule.
    ///
    /// `fallback_start` is used when the record carries no start date.
    pub fn terms(
        &self,
        default_down_payment_rate: Percent,
        fallback_start: NaiveDate,
    ) -> FinancingTerms {
        FinancingTerms {
            principal: self.amount,
            down_payment_rate: self.down_payment_rate.unwrap_or(default_down_payment_rate),
            term_months: self.term_months,
            annual_interest_rate: self.interest_rate.unwrap_or(Decimal::ZERO),
            schedule_kind: ScheduleKind::MonthlyAmortizing,
            start_date: self.start_date.unwrap_or(fallback_start),
        }
    }
}

/// Parse a contracts response of either shape.
pub fn normalize_contracts(body: &str) -> FinanceResult<Vec<ContractRecord>> {
    ListResponse::<ContractRecord>::from_json(body)?.into_items()
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
