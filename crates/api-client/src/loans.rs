//! Loan resource (`/loan`).

use async_trait::async_trait;
use reqwest::Method;

use fintrack_core::errors::Result;
use fintrack_core::loans::{Loan, LoanRepositoryTrait, NewLoan};
use fintrack_core::session::SessionContext;

use crate::client::{resource_path, ApiClient};
use crate::models::{ApiLoan, ApiLoanPayload};

const LOAN_PATH: &str = "/loan";

pub struct LoanRepository {
    client: ApiClient,
}

impl LoanRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn payload(loan: &NewLoan) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(ApiLoanPayload::from(loan))?)
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Loan>> {
        let loans: Vec<ApiLoan> = self.client.get(LOAN_PATH, Some(session)).await?;
        Ok(loans.into_iter().map(Loan::from).collect())
    }

    async fn create(&self, session: &SessionContext, new_loan: &NewLoan) -> Result<()> {
        let body = Self::payload(new_loan)?;
        self.client
            .execute(Method::POST, LOAN_PATH, Some(session), Some(&body))
            .await
    }

    async fn update(&self, session: &SessionContext, loan_id: &str, loan: &NewLoan) -> Result<()> {
        let body = Self::payload(loan)?;
        let path = resource_path(LOAN_PATH, loan_id)?;
        self.client
            .execute(Method::PUT, &path, Some(session), Some(&body))
            .await
    }

    async fn delete(&self, session: &SessionContext, loan_id: &str) -> Result<()> {
        let path = resource_path(LOAN_PATH, loan_id)?;
        self.client.execute(Method::DELETE, &path, Some(session), None).await
    }
}
