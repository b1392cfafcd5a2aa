//! Form state for creating or editing a loan.
//!
//! Every edit immediately recomputes the derived figures, so a reader never
//! observes stale values between an edit and the next read.

use super::loans_model::{Loan, LoanDerived, LoanInput, NewLoan};
use crate::errors::Result;

/// Editable fields of the loan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanField {
    Name,
    Amount,
    Duration,
    InterestRate,
    PaidAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoanForm {
    editing_id: Option<String>,
    input: LoanInput,
    derived: LoanDerived,
}

impl LoanForm {
    /// An empty form for creating a loan.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from a stored loan.
    pub fn from_loan(loan: &Loan) -> Self {
        let input = LoanInput::from(loan);
        let derived = input.terms().derive();
        Self {
            editing_id: Some(loan.id.clone()),
            input,
            derived,
        }
    }

    /// Replaces one field's raw text and recomputes the derived figures.
    pub fn edit(&mut self, field: LoanField, value: impl Into<String>) -> LoanDerived {
        let value = value.into();
        match field {
            LoanField::Name => self.input.name = value,
            LoanField::Amount => self.input.amount = value,
            LoanField::Duration => self.input.duration = value,
            LoanField::InterestRate => self.input.interest_rate = value,
            LoanField::PaidAmount => self.input.paid_amount = value,
        }
        self.derived = self.input.terms().derive();
        self.derived
    }

    pub fn derived(&self) -> LoanDerived {
        self.derived
    }

    pub fn input(&self) -> &LoanInput {
        &self.input
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Validates the current field values for submission.
    pub fn submit(&self) -> Result<NewLoan> {
        self.input.validate()
    }

    /// Clears all fields and leaves edit mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, ValidationError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn stored_loan() -> Loan {
        Loan {
            id: "loan-1".to_string(),
            name: "Car".to_string(),
            principal: dec!(1000),
            duration_months: 12,
            interest_rate_percent: dec!(2),
            paid_amount: dec!(300),
            created_by: Some("admin".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_new_form_starts_at_zero() {
        let form = LoanForm::new();
        assert!(!form.is_editing());
        assert_eq!(form.derived(), LoanDerived::default());
    }

    #[test]
    fn test_each_edit_recomputes() {
        let mut form = LoanForm::new();

        form.edit(LoanField::Amount, "1000");
        assert_eq!(form.derived().total_payable, dec!(1000));

        form.edit(LoanField::Duration, "12");
        assert_eq!(form.derived().total_interest, Decimal::ZERO);

        let derived = form.edit(LoanField::InterestRate, "2");
        assert_eq!(derived.total_interest, dec!(240));
        assert_eq!(derived.remaining_amount, dec!(1240));

        form.edit(LoanField::PaidAmount, "300");
        assert_eq!(form.derived().remaining_amount, dec!(940));
    }

    #[test]
    fn test_half_typed_input_does_not_fail() {
        let mut form = LoanForm::from_loan(&stored_loan());

        let derived = form.edit(LoanField::Amount, "-");
        assert_eq!(derived.total_payable, Decimal::ZERO);
        assert_eq!(derived.remaining_amount, Decimal::ZERO);

        let derived = form.edit(LoanField::Amount, "2000");
        assert_eq!(derived.total_interest, dec!(480));
    }

    #[test]
    fn test_from_loan_prefills_fields() {
        let form = LoanForm::from_loan(&stored_loan());

        assert_eq!(form.editing_id(), Some("loan-1"));
        assert_eq!(form.input().amount, "1000");
        assert_eq!(form.input().duration, "12");
        assert_eq!(form.input().paid_amount, "300");
        assert_eq!(form.derived(), stored_loan().derived());
    }

    #[test]
    fn test_submit_reports_first_violation() {
        let mut form = LoanForm::new();
        form.edit(LoanField::Duration, "0");
        form.edit(LoanField::InterestRate, "-1");

        assert_eq!(
            form.submit().unwrap_err(),
            Error::Validation(ValidationError::InvalidAmount)
        );

        form.edit(LoanField::Amount, "1000");
        assert_eq!(
            form.submit().unwrap_err(),
            Error::Validation(ValidationError::InvalidDuration)
        );
    }

    #[test]
    fn test_submit_returns_normalized_payload() {
        let mut form = LoanForm::new();
        form.edit(LoanField::Name, " Bike ");
        form.edit(LoanField::Amount, "1000.50");
        form.edit(LoanField::Duration, "6");
        form.edit(LoanField::InterestRate, "0");

        let new_loan = form.submit().unwrap();

        assert_eq!(new_loan.name, "Bike");
        assert_eq!(new_loan.principal, dec!(1000.50));
        assert_eq!(new_loan.duration_months, 6);
        assert_eq!(new_loan.interest_rate_percent, Decimal::ZERO);
        assert_eq!(new_loan.paid_amount, Decimal::ZERO);
    }

    #[test]
    fn test_reset_leaves_edit_mode() {
        let mut form = LoanForm::from_loan(&stored_loan());
        form.reset();
        assert_eq!(form, LoanForm::new());
    }
}
