use rust_decimal::Decimal;

use super::transactions_model::{Transaction, TransactionSummary, TransactionType};

/// Reduces transactions to income, expense and savings totals.
///
/// Decimal accumulation keeps the result independent of input order. Totals
/// saturate at the `Decimal` bounds.
pub fn summarize_transactions(transactions: &[Transaction]) -> TransactionSummary {
    let (income, expenses) = transactions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expenses), t| match t.transaction_type {
            TransactionType::Income => (income.saturating_add(t.amount), expenses),
            TransactionType::Expense => (income, expenses.saturating_add(t.amount.abs())),
        },
    );

    TransactionSummary {
        income,
        expenses,
        savings: income.saturating_sub(expenses),
    }
}
