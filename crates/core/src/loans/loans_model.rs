//! Loan domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::loans_calculator::compute_loan_derived;
use crate::errors::{Result, ValidationError};
use crate::utils::{
    parse_decimal_lenient, parse_decimal_strict, parse_months_lenient, parse_months_strict,
};

/// The four numeric inputs the derived loan figures depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub principal: Decimal,
    pub duration_months: u32,
    /// Flat rate in percent per month.
    pub interest_rate_percent: Decimal,
    pub paid_amount: Decimal,
}

impl LoanTerms {
    pub fn new(
        principal: Decimal,
        duration_months: u32,
        interest_rate_percent: Decimal,
        paid_amount: Decimal,
    ) -> Self {
        Self {
            principal,
            duration_months,
            interest_rate_percent,
            paid_amount,
        }
    }

    /// Builds terms from raw form text. Missing or unparseable fields become zero.
    pub fn from_raw(
        principal: Option<&str>,
        duration_months: Option<&str>,
        interest_rate_percent: Option<&str>,
        paid_amount: Option<&str>,
    ) -> Self {
        Self {
            principal: parse_decimal_lenient(principal, "amount"),
            duration_months: parse_months_lenient(duration_months),
            interest_rate_percent: parse_decimal_lenient(interest_rate_percent, "interestRate"),
            paid_amount: parse_decimal_lenient(paid_amount, "paidAmount"),
        }
    }

    pub fn derive(&self) -> LoanDerived {
        compute_loan_derived(
            self.principal,
            self.duration_months,
            self.interest_rate_percent,
            self.paid_amount,
        )
    }
}

/// Figures computed from [`LoanTerms`]. Never persisted as a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDerived {
    pub total_interest: Decimal,
    pub total_payable: Decimal,
    pub remaining_amount: Decimal,
}

/// Domain model representing a stored loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub name: String,
    pub principal: Decimal,
    pub duration_months: u32,
    pub interest_rate_percent: Decimal,
    pub paid_amount: Decimal,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Loan {
    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(
            self.principal,
            self.duration_months,
            self.interest_rate_percent,
            self.paid_amount,
        )
    }

    /// Recomputes the derived figures from the stored terms.
    pub fn derived(&self) -> LoanDerived {
        self.terms().derive()
    }
}

/// Validated, numeric-typed payload sent to the API on create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    pub name: String,
    pub principal: Decimal,
    pub duration_months: u32,
    pub interest_rate_percent: Decimal,
    pub paid_amount: Decimal,
}

impl NewLoan {
    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(
            self.principal,
            self.duration_months,
            self.interest_rate_percent,
            self.paid_amount,
        )
    }
}

/// Raw loan form fields as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInput {
    pub name: String,
    pub amount: String,
    pub duration: String,
    pub interest_rate: String,
    /// Blank means nothing has been repaid yet.
    pub paid_amount: String,
}

impl LoanInput {
    /// Live view of the terms; never fails.
    pub fn terms(&self) -> LoanTerms {
        LoanTerms::from_raw(
            Some(&self.amount),
            Some(&self.duration),
            Some(&self.interest_rate),
            Some(&self.paid_amount),
        )
    }

    /// Validates the form for submission and returns the normalized payload.
    ///
    /// Rules run in a fixed order and the first failure is returned.
    pub fn validate(&self) -> Result<NewLoan> {
        let principal = parse_decimal_strict(&self.amount)
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or(ValidationError::InvalidAmount)?;

        let duration_months =
            parse_months_strict(&self.duration).ok_or(ValidationError::InvalidDuration)?;

        let interest_rate_percent = parse_decimal_strict(&self.interest_rate)
            .filter(|rate| *rate >= Decimal::ZERO)
            .ok_or(ValidationError::InvalidInterestRate)?;

        let paid_amount = if self.paid_amount.trim().is_empty() {
            Decimal::ZERO
        } else {
            parse_decimal_strict(&self.paid_amount)
                .filter(|paid| *paid >= Decimal::ZERO)
                .ok_or(ValidationError::InvalidPaidAmount)?
        };

        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        Ok(NewLoan {
            name: name.to_string(),
            principal,
            duration_months,
            interest_rate_percent,
            paid_amount,
        })
    }
}

impl From<&Loan> for LoanInput {
    fn from(loan: &Loan) -> Self {
        LoanInput {
            name: loan.name.clone(),
            amount: loan.principal.normalize().to_string(),
            duration: loan.duration_months.to_string(),
            interest_rate: loan.interest_rate_percent.normalize().to_string(),
            paid_amount: if loan.paid_amount.is_zero() {
                String::new()
            } else {
                loan.paid_amount.normalize().to_string()
            },
        }
    }
}

/// Totals across a list of loans
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub total_loans: usize,
    pub total_amount: Decimal,
    pub total_paid: Decimal,
    pub total_remaining: Decimal,
}
