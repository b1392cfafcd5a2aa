use async_trait::async_trait;

use super::loans_model::{Loan, LoanDerived, LoanInput, LoanSummary, LoanTerms, NewLoan};
use crate::errors::Result;
use crate::session::SessionContext;

/// Trait for loan persistence operations
#[async_trait]
pub trait LoanRepositoryTrait: Send + Sync {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Loan>>;
    async fn create(&self, session: &SessionContext, new_loan: &NewLoan) -> Result<()>;
    async fn update(&self, session: &SessionContext, loan_id: &str, loan: &NewLoan) -> Result<()>;
    async fn delete(&self, session: &SessionContext, loan_id: &str) -> Result<()>;
}

/// Trait for loan service operations
#[async_trait]
pub trait LoanServiceTrait: Send + Sync {
    async fn get_loans(&self, session: &SessionContext) -> Result<Vec<Loan>>;
    async fn get_loan_summary(&self, session: &SessionContext) -> Result<LoanSummary>;
    async fn create_loan(&self, session: &SessionContext, input: LoanInput) -> Result<NewLoan>;
    async fn update_loan(
        &self,
        session: &SessionContext,
        loan_id: &str,
        input: LoanInput,
    ) -> Result<NewLoan>;
    async fn delete_loan(&self, session: &SessionContext, loan_id: &str) -> Result<()>;
    fn preview(&self, terms: &LoanTerms) -> LoanDerived;
}
