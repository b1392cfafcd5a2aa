use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use super::loans_calculator::summarize_loans;
use super::loans_model::{Loan, LoanDerived, LoanInput, LoanSummary, LoanTerms, NewLoan};
use super::loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::session::SessionContext;

/// Service for managing loans
pub struct LoanService {
    repository: Arc<dyn LoanRepositoryTrait>,
}

impl LoanService {
    pub fn new(repository: Arc<dyn LoanRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Authorization and validation shared by create and update.
    fn prepare(session: &SessionContext, input: &LoanInput) -> Result<NewLoan> {
        session.ensure_can_modify()?;
        input.validate().inspect_err(|e| {
            warn!("Rejected loan submission: {}", e);
        })
    }
}

#[async_trait]
impl LoanServiceTrait for LoanService {
    async fn get_loans(&self, session: &SessionContext) -> Result<Vec<Loan>> {
        self.repository.list(session).await
    }

    async fn get_loan_summary(&self, session: &SessionContext) -> Result<LoanSummary> {
        let loans = self.repository.list(session).await?;
        Ok(summarize_loans(&loans))
    }

    async fn create_loan(&self, session: &SessionContext, input: LoanInput) -> Result<NewLoan> {
        let new_loan = Self::prepare(session, &input)?;
        debug!("Creating loan '{}'", new_loan.name);
        self.repository.create(session, &new_loan).await?;
        info!("Created loan '{}'", new_loan.name);
        Ok(new_loan)
    }

    async fn update_loan(
        &self,
        session: &SessionContext,
        loan_id: &str,
        input: LoanInput,
    ) -> Result<NewLoan> {
        let loan = Self::prepare(session, &input)?;
        if loan_id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        self.repository.update(session, loan_id, &loan).await?;
        info!("Updated loan {}", loan_id);
        Ok(loan)
    }

    async fn delete_loan(&self, session: &SessionContext, loan_id: &str) -> Result<()> {
        session.ensure_can_modify()?;
        if loan_id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        self.repository.delete(session, loan_id).await?;
        info!("Deleted loan {}", loan_id);
        Ok(())
    }

    fn preview(&self, terms: &LoanTerms) -> LoanDerived {
        terms.derive()
    }
}
