use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use super::transactions_model::{
    NewTransaction, Transaction, TransactionInput, TransactionSummary,
};
use super::transactions_summary::summarize_transactions;
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::session::SessionContext;

/// Service for managing income and expense entries
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn prepare(session: &SessionContext, input: &TransactionInput) -> Result<NewTransaction> {
        session.ensure_can_modify()?;
        input.validate().inspect_err(|e| {
            warn!("Rejected transaction submission: {}", e);
        })
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn get_transactions(&self, session: &SessionContext) -> Result<Vec<Transaction>> {
        self.repository.list(session).await
    }

    async fn get_transaction_summary(
        &self,
        session: &SessionContext,
    ) -> Result<TransactionSummary> {
        let transactions = self.repository.list(session).await?;
        Ok(summarize_transactions(&transactions))
    }

    async fn create_transaction(
        &self,
        session: &SessionContext,
        input: TransactionInput,
    ) -> Result<NewTransaction> {
        let transaction = Self::prepare(session, &input)?;
        debug!(
            "Creating {} of {}",
            transaction.transaction_type, transaction.amount
        );
        self.repository.create(session, &transaction).await?;
        info!("Created {} entry", transaction.transaction_type);
        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        session: &SessionContext,
        transaction_id: &str,
        input: TransactionInput,
    ) -> Result<NewTransaction> {
        let transaction = Self::prepare(session, &input)?;
        if transaction_id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        self.repository
            .update(session, transaction_id, &transaction)
            .await?;
        info!("Updated entry {}", transaction_id);
        Ok(transaction)
    }

    async fn delete_transaction(
        &self,
        session: &SessionContext,
        transaction_id: &str,
    ) -> Result<()> {
        session.ensure_can_modify()?;
        if transaction_id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        self.repository.delete(session, transaction_id).await?;
        info!("Deleted entry {}", transaction_id);
        Ok(())
    }
}
