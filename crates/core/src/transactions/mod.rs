//! Transactions module - income/expense models, validation, summaries, services, and traits.

mod transactions_model;
mod transactions_service;
mod transactions_summary;
mod transactions_traits;


pub use transactions_model::{
    NewTransaction, Transaction, TransactionInput, TransactionSummary, TransactionType,
};
pub use transactions_service::TransactionService;
pub use transactions_summary::summarize_transactions;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
