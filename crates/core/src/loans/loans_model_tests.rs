//! Tests for loan submission validation and model conversions.

use crate::errors::{Error, ValidationError};
use crate::loans::{Loan, LoanInput, LoanTerms};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn input(amount: &str, duration: &str, rate: &str, paid: &str) -> LoanInput {
    LoanInput {
        name: "Home".to_string(),
        amount: amount.to_string(),
        duration: duration.to_string(),
        interest_rate: rate.to_string(),
        paid_amount: paid.to_string(),
    }
}

fn validation_error(input: &LoanInput) -> ValidationError {
    match input.validate() {
        Err(Error::Validation(e)) => e,
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ==================== Amount ====================

#[test]
fn test_zero_principal_is_invalid_amount() {
    assert_eq!(
        validation_error(&input("0", "12", "2", "")),
        ValidationError::InvalidAmount
    );
}

#[test]
fn test_blank_or_negative_principal_is_invalid_amount() {
    assert_eq!(validation_error(&input("", "12", "2", "")), ValidationError::InvalidAmount);
    assert_eq!(validation_error(&input("-5", "12", "2", "")), ValidationError::InvalidAmount);
    assert_eq!(validation_error(&input("ten", "12", "2", "")), ValidationError::InvalidAmount);
}

// ==================== Duration ====================

#[test]
fn test_negative_duration_is_invalid_duration() {
    assert_eq!(
        validation_error(&input("1000", "-1", "2", "")),
        ValidationError::InvalidDuration
    );
}

#[test]
fn test_zero_or_fractional_duration_is_invalid() {
    assert_eq!(validation_error(&input("1000", "0", "2", "")), ValidationError::InvalidDuration);
    assert_eq!(validation_error(&input("1000", "1.5", "2", "")), ValidationError::InvalidDuration);
    assert_eq!(validation_error(&input("1000", "", "2", "")), ValidationError::InvalidDuration);
}

// ==================== Interest rate ====================

#[test]
fn test_negative_rate_is_invalid_interest_rate() {
    assert_eq!(
        validation_error(&input("1000", "12", "-0.5", "")),
        ValidationError::InvalidInterestRate
    );
    assert_eq!(
        validation_error(&input("1000", "12", "", "")),
        ValidationError::InvalidInterestRate
    );
}

#[test]
fn test_zero_rate_is_accepted() {
    let new_loan = input("1000", "12", "0", "").validate().unwrap();
    assert_eq!(new_loan.interest_rate_percent, Decimal::ZERO);
}

// ==================== Paid amount and name ====================

#[test]
fn test_negative_paid_amount_is_rejected() {
    assert_eq!(
        validation_error(&input("1000", "12", "2", "-1")),
        ValidationError::InvalidPaidAmount
    );
}

#[test]
fn test_blank_name_is_missing_field() {
    let mut loan_input = input("1000", "12", "2", "");
    loan_input.name = "   ".to_string();
    assert_eq!(
        validation_error(&loan_input),
        ValidationError::MissingField("name".to_string())
    );
}

#[test]
fn test_first_violated_rule_wins() {
    // Everything is wrong; only the amount error is reported.
    let mut loan_input = input("0", "-1", "-2", "-3");
    loan_input.name = String::new();
    assert_eq!(validation_error(&loan_input), ValidationError::InvalidAmount);
}

#[test]
fn test_valid_input_is_normalized() {
    let new_loan = input(" 1000 ", "12", "2", "300").validate().unwrap();

    assert_eq!(new_loan.name, "Home");
    assert_eq!(new_loan.principal, dec!(1000));
    assert_eq!(new_loan.duration_months, 12);
    assert_eq!(new_loan.interest_rate_percent, dec!(2));
    assert_eq!(new_loan.paid_amount, dec!(300));
    assert_eq!(new_loan.terms().derive().remaining_amount, dec!(940));
}

// ==================== Conversions ====================

#[test]
fn test_loan_serializes_camel_case() {
    let loan = Loan {
        id: "1".to_string(),
        name: "Home".to_string(),
        principal: dec!(1000),
        duration_months: 12,
        interest_rate_percent: dec!(2),
        paid_amount: Decimal::ZERO,
        created_by: None,
        created_at: None,
    };

    let json = serde_json::to_value(&loan).unwrap();

    assert!(json.get("durationMonths").is_some());
    assert!(json.get("interestRatePercent").is_some());
    assert!(json.get("paidAmount").is_some());
}

#[test]
fn test_input_terms_are_lenient() {
    let terms = input("abc", "12", "2", "").terms();
    assert_eq!(terms, LoanTerms::new(Decimal::ZERO, 12, dec!(2), Decimal::ZERO));
}
