use async_trait::async_trait;

use super::transactions_model::{
    NewTransaction, Transaction, TransactionInput, TransactionSummary,
};
use crate::errors::Result;
use crate::session::SessionContext;

/// Trait for transaction persistence operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Transaction>>;
    async fn create(&self, session: &SessionContext, transaction: &NewTransaction) -> Result<()>;
    async fn update(
        &self,
        session: &SessionContext,
        transaction_id: &str,
        transaction: &NewTransaction,
    ) -> Result<()>;
    async fn delete(&self, session: &SessionContext, transaction_id: &str) -> Result<()>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn get_transactions(&self, session: &SessionContext) -> Result<Vec<Transaction>>;
    async fn get_transaction_summary(&self, session: &SessionContext)
        -> Result<TransactionSummary>;
    async fn create_transaction(
        &self,
        session: &SessionContext,
        input: TransactionInput,
    ) -> Result<NewTransaction>;
    async fn update_transaction(
        &self,
        session: &SessionContext,
        transaction_id: &str,
        input: TransactionInput,
    ) -> Result<NewTransaction>;
    async fn delete_transaction(&self, session: &SessionContext, transaction_id: &str)
        -> Result<()>;
}
