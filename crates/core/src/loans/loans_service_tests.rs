//! Unit tests for the loan service.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use crate::session::{Role, SessionContext};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockLoanRepository {
    loans: Mutex<Vec<Loan>>,
    created: Mutex<Vec<NewLoan>>,
    updated: Mutex<Vec<(String, NewLoan)>>,
    deleted: Mutex<Vec<String>>,
    fail_with: Option<Error>,
}

impl MockLoanRepository {
    fn with_loans(loans: Vec<Loan>) -> Self {
        Self {
            loans: Mutex::new(loans),
            ..Default::default()
        }
    }

    fn failing(err: Error) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn calls(&self) -> usize {
        self.created.lock().unwrap().len()
            + self.updated.lock().unwrap().len()
            + self.deleted.lock().unwrap().len()
    }
}

#[async_trait]
impl LoanRepositoryTrait for MockLoanRepository {
    async fn list(&self, _session: &SessionContext) -> Result<Vec<Loan>> {
        self.check()?;
        Ok(self.loans.lock().unwrap().clone())
    }

    async fn create(&self, _session: &SessionContext, new_loan: &NewLoan) -> Result<()> {
        self.check()?;
        self.created.lock().unwrap().push(new_loan.clone());
        Ok(())
    }

    async fn update(&self, _session: &SessionContext, loan_id: &str, loan: &NewLoan) -> Result<()> {
        self.check()?;
        self.updated
            .lock()
            .unwrap()
            .push((loan_id.to_string(), loan.clone()));
        Ok(())
    }

    async fn delete(&self, _session: &SessionContext, loan_id: &str) -> Result<()> {
        self.check()?;
        self.deleted.lock().unwrap().push(loan_id.to_string());
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn admin() -> SessionContext {
    SessionContext::new("admin-token", Role::Admin)
}

fn viewer() -> SessionContext {
    SessionContext::new("user-token", Role::User)
}

fn stored(id: &str, principal: Decimal, months: u32, rate: Decimal, paid: Decimal) -> Loan {
    Loan {
        id: id.to_string(),
        name: id.to_string(),
        principal,
        duration_months: months,
        interest_rate_percent: rate,
        paid_amount: paid,
        created_by: Some("admin".to_string()),
        created_at: None,
    }
}

fn valid_input() -> LoanInput {
    LoanInput {
        name: "Car".to_string(),
        amount: "1000".to_string(),
        duration: "12".to_string(),
        interest_rate: "2".to_string(),
        paid_amount: String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_loan_summary_sums_recomputed_remaining() {
    let repo = Arc::new(MockLoanRepository::with_loans(vec![
        stored("a", dec!(1000), 12, dec!(2), dec!(300)),
        stored("b", dec!(500), 1, Decimal::ZERO, dec!(500)),
    ]));
    let service = LoanService::new(repo);

    let summary = service.get_loan_summary(&viewer()).await.unwrap();

    assert_eq!(summary.total_loans, 2);
    assert_eq!(summary.total_amount, dec!(1500));
    assert_eq!(summary.total_paid, dec!(800));
    assert_eq!(summary.total_remaining, dec!(940));
}

#[tokio::test]
async fn test_admin_can_create_loan() {
    let repo = Arc::new(MockLoanRepository::default());
    let service = LoanService::new(repo.clone());

    let created = service.create_loan(&admin(), valid_input()).await.unwrap();

    assert_eq!(created.principal, dec!(1000));
    assert_eq!(repo.created.lock().unwrap().as_slice(), &[created]);
}

#[tokio::test]
async fn test_user_cannot_mutate() {
    let repo = Arc::new(MockLoanRepository::default());
    let service = LoanService::new(repo.clone());

    let create = service.create_loan(&viewer(), valid_input()).await;
    let update = service.update_loan(&viewer(), "a", valid_input()).await;
    let delete = service.delete_loan(&viewer(), "a").await;

    assert!(matches!(create, Err(Error::PermissionDenied(_))));
    assert!(matches!(update, Err(Error::PermissionDenied(_))));
    assert!(matches!(delete, Err(Error::PermissionDenied(_))));
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_repository() {
    let repo = Arc::new(MockLoanRepository::default());
    let service = LoanService::new(repo.clone());
    let mut input = valid_input();
    input.amount = "0".to_string();

    let err = service.create_loan(&admin(), input).await.unwrap_err();

    assert_eq!(err, Error::Validation(ValidationError::InvalidAmount));
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_update_sends_normalized_payload() {
    let repo = Arc::new(MockLoanRepository::default());
    let service = LoanService::new(repo.clone());
    let mut input = valid_input();
    input.paid_amount = "250.5".to_string();

    service.update_loan(&admin(), "loan-7", input).await.unwrap();

    let updated = repo.updated.lock().unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "loan-7");
    assert_eq!(updated[0].1.paid_amount, dec!(250.5));
}

#[tokio::test]
async fn test_update_requires_id() {
    let repo = Arc::new(MockLoanRepository::default());
    let service = LoanService::new(repo.clone());

    let err = service.update_loan(&admin(), " ", valid_input()).await.unwrap_err();

    assert_eq!(
        err,
        Error::Validation(ValidationError::MissingField("id".to_string()))
    );
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_repository_errors_pass_through_unchanged() {
    let api_error = Error::Api {
        status: 500,
        message: "Server error".to_string(),
    };
    let service = LoanService::new(Arc::new(MockLoanRepository::failing(api_error.clone())));

    assert_eq!(service.get_loans(&admin()).await.unwrap_err(), api_error);
    assert_eq!(
        service.create_loan(&admin(), valid_input()).await.unwrap_err(),
        api_error
    );
    assert_eq!(service.delete_loan(&admin(), "x").await.unwrap_err(), api_error);
}

#[test]
fn test_preview_matches_calculator() {
    let service = LoanService::new(Arc::new(MockLoanRepository::default()));
    let terms = LoanTerms::new(dec!(1000), 12, dec!(2), dec!(1500));

    let derived = service.preview(&terms);

    assert_eq!(derived, compute_loan_derived(dec!(1000), 12, dec!(2), dec!(1500)));
    assert_eq!(derived.remaining_amount, Decimal::ZERO);
}

#[tokio::test]
async fn test_delete_requires_id() {
    let repo = Arc::new(MockLoanRepository::default());
    let service = LoanService::new(repo.clone());

    let err = service.delete_loan(&admin(), "").await.unwrap_err();

    assert_eq!(
        err,
        Error::Validation(ValidationError::MissingField("id".to_string()))
    );
    assert_eq!(repo.calls(), 0);
}
