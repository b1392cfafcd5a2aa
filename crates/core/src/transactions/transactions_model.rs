//! Income and expense transaction models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{TRANSACTION_TYPE_EXPENSE, TRANSACTION_TYPE_INCOME};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::parse_decimal_strict;

/// Direction of a transaction. The amount itself is always a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => TRANSACTION_TYPE_INCOME,
            TransactionType::Expense => TRANSACTION_TYPE_EXPENSE,
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            TRANSACTION_TYPE_INCOME => Ok(TransactionType::Income),
            TRANSACTION_TYPE_EXPENSE => Ok(TransactionType::Expense),
            _ => Err(ValidationError::InvalidTransactionType(s.to_string()).into()),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Domain model representing a stored income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Unsigned magnitude.
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Amount with the sign implied by the type: negative for expenses.
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Validated payload sent to the API on create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,
}

/// Raw transaction form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: String,
    pub description: String,
}

impl Default for TransactionInput {
    fn default() -> Self {
        Self {
            transaction_type: TRANSACTION_TYPE_INCOME.to_string(),
            amount: String::new(),
            description: String::new(),
        }
    }
}

impl TransactionInput {
    /// Validates the form for submission. The amount rule runs before the type rule.
    ///
    /// A signed amount such as `-40` is stored as its magnitude; the type
    /// alone carries the direction.
    pub fn validate(&self) -> Result<NewTransaction> {
        let amount = parse_decimal_strict(&self.amount)
            .map(|amount| amount.abs())
            .ok_or(ValidationError::InvalidTransactionAmount)?;

        let transaction_type = self.transaction_type.parse::<TransactionType>()?;

        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(NewTransaction {
            transaction_type,
            amount,
            description,
        })
    }
}

impl From<&Transaction> for TransactionInput {
    fn from(transaction: &Transaction) -> Self {
        TransactionInput {
            transaction_type: transaction.transaction_type.as_str().to_string(),
            amount: transaction.amount.normalize().to_string(),
            description: transaction.description.clone().unwrap_or_default(),
        }
    }
}

/// Income, expense and savings totals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
}
