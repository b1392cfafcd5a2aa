//! Wire representations of the API resources.
//!
//! The API is loosely typed: numbers may arrive as JSON numbers or numeric
//! strings, `createdBy` may be a populated user object or a bare id, and
//! derived loan fields may be present or stale. Incoming records are read
//! leniently and derived loan figures are dropped in favour of recomputation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fintrack_core::loans::{Loan, NewLoan};
use fintrack_core::transactions::{NewTransaction, Transaction, TransactionType};
use fintrack_core::utils::{parse_decimal_lenient, parse_months_lenient};

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn decimal_field(value: &Value, field_name: &str) -> Decimal {
    parse_decimal_lenient(value_as_text(value).as_deref(), field_name)
}

fn months_field(value: &Value) -> u32 {
    parse_months_lenient(value_as_text(value).as_deref())
}

fn creator_name(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map
            .get("username")
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiLoan {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: Value,
    #[serde(default)]
    duration: Value,
    #[serde(default)]
    interest_rate: Value,
    #[serde(default)]
    paid_amount: Value,
    #[serde(default)]
    created_by: Value,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<ApiLoan> for Loan {
    fn from(api: ApiLoan) -> Self {
        Loan {
            principal: decimal_field(&api.amount, "amount"),
            duration_months: months_field(&api.duration),
            interest_rate_percent: decimal_field(&api.interest_rate, "interestRate"),
            paid_amount: decimal_field(&api.paid_amount, "paidAmount"),
            created_by: creator_name(&api.created_by),
            created_at: timestamp(api.created_at.as_deref()),
            id: api.id,
            name: api.name,
        }
    }
}

/// Body of `POST /loan` and `PUT /loan/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiLoanPayload<'a> {
    name: &'a str,
    amount: Decimal,
    duration: u32,
    interest_rate: Decimal,
    paid_amount: Decimal,
}

impl<'a> From<&'a NewLoan> for ApiLoanPayload<'a> {
    fn from(loan: &'a NewLoan) -> Self {
        ApiLoanPayload {
            name: &loan.name,
            amount: loan.principal,
            duration: loan.duration_months,
            interest_rate: loan.interest_rate_percent,
            paid_amount: loan.paid_amount,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiTransaction {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "type", default)]
    transaction_type: Option<String>,
    #[serde(default)]
    amount: Value,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    created_by: Value,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<ApiTransaction> for Transaction {
    fn from(api: ApiTransaction) -> Self {
        let amount = decimal_field(&api.amount, "amount");
        // Legacy records carry a signed amount; the sign decides when the tag is missing.
        let parsed_type = api
            .transaction_type
            .as_deref()
            .map(str::parse::<TransactionType>);
        let transaction_type = match parsed_type {
            Some(Ok(t)) => t,
            _ if amount.is_sign_negative() && !amount.is_zero() => TransactionType::Expense,
            _ => TransactionType::Income,
        };
        Transaction {
            id: api.id,
            transaction_type,
            amount: amount.abs(),
            description: api.description.filter(|d| !d.is_empty()),
            created_by: creator_name(&api.created_by),
            created_at: timestamp(api.created_at.as_deref()),
        }
    }
}

/// Body of `POST /income` and `PUT /income/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct ApiTransactionPayload<'a> {
    #[serde(rename = "type")]
    transaction_type: &'static str,
    amount: Decimal,
    description: &'a str,
}

impl<'a> From<&'a NewTransaction> for ApiTransactionPayload<'a> {
    fn from(transaction: &'a NewTransaction) -> Self {
        ApiTransactionPayload {
            transaction_type: transaction.transaction_type.as_str(),
            amount: transaction.amount,
            description: transaction.description.as_deref().unwrap_or_default(),
        }
    }
}
