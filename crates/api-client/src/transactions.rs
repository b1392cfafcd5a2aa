//! Income and expense resource (`/income`).

use async_trait::async_trait;
use reqwest::Method;

use fintrack_core::errors::Result;
use fintrack_core::session::SessionContext;
use fintrack_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};

use crate::client::{resource_path, ApiClient};
use crate::models::{ApiTransaction, ApiTransactionPayload};

const INCOME_PATH: &str = "/income";

pub struct TransactionRepository {
    client: ApiClient,
}

impl TransactionRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn payload(transaction: &NewTransaction) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(ApiTransactionPayload::from(transaction))?)
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Transaction>> {
        let items: Vec<ApiTransaction> = self.client.get(INCOME_PATH, Some(session)).await?;
        Ok(items.into_iter().map(Transaction::from).collect())
    }

    async fn create(&self, session: &SessionContext, transaction: &NewTransaction) -> Result<()> {
        let body = Self::payload(transaction)?;
        self.client
            .execute(Method::POST, INCOME_PATH, Some(session), Some(&body))
            .await
    }

    async fn update(
        &self,
        session: &SessionContext,
        transaction_id: &str,
        transaction: &NewTransaction,
    ) -> Result<()> {
        let body = Self::payload(transaction)?;
        let path = resource_path(INCOME_PATH, transaction_id)?;
        self.client
            .execute(Method::PUT, &path, Some(session), Some(&body))
            .await
    }

    async fn delete(&self, session: &SessionContext, transaction_id: &str) -> Result<()> {
        let path = resource_path(INCOME_PATH, transaction_id)?;
        self.client.execute(Method::DELETE, &path, Some(session), None).await
    }
}
