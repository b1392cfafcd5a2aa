//! Plain-text and JSON output. Amounts are rounded to two decimals here and nowhere else.

use serde::Serialize;

use fintrack_core::loans::{Loan, LoanDerived, LoanSummary};
use fintrack_core::transactions::{Transaction, TransactionSummary};
use fintrack_core::utils::format_amount;

/// A stored loan with its recomputed figures, the JSON counterpart of [`loan_table`].
#[derive(Debug, Serialize)]
pub struct LoanView<'a> {
    #[serde(flatten)]
    pub loan: &'a Loan,
    #[serde(flatten)]
    pub derived: LoanDerived,
}

pub fn loan_views(loans: &[Loan]) -> Vec<LoanView<'_>> {
    loans
        .iter()
        .map(|loan| LoanView {
            loan,
            derived: loan.derived(),
        })
        .collect()
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn loan_derived(derived: &LoanDerived) -> String {
    format!(
        "Total interest:   {}\nTotal payable:    {}\nRemaining amount: {}",
        format_amount(derived.total_interest),
        format_amount(derived.total_payable),
        format_amount(derived.remaining_amount),
    )
}

pub fn loan_table(loans: &[Loan]) -> String {
    let mut out = format!(
        "{:<24} {:<20} {:>12} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12} {:<12}",
        "ID", "Name", "Amount", "Months", "Rate %", "Paid", "Remaining", "Interest", "Payable",
        "Created by"
    );
    for loan in loans {
        let derived = loan.derived();
        out.push_str(&format!(
            "\n{:<24} {:<20} {:>12} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12} {:<12}",
            loan.id,
            loan.name,
            format_amount(loan.principal),
            loan.duration_months,
            loan.interest_rate_percent.normalize(),
            format_amount(loan.paid_amount),
            format_amount(derived.remaining_amount),
            format_amount(derived.total_interest),
            format_amount(derived.total_payable),
            loan.created_by.as_deref().unwrap_or("System"),
        ));
    }
    out
}

pub fn loan_summary(summary: &LoanSummary) -> String {
    format!(
        "Total loans:  {}\nTotal amount: {}\nAmount paid:  {}\nAmount due:   {}",
        summary.total_loans,
        format_amount(summary.total_amount),
        format_amount(summary.total_paid),
        format_amount(summary.total_remaining),
    )
}

pub fn transaction_table(transactions: &[Transaction]) -> String {
    let mut out = format!(
        "{:<24} {:<8} {:>12} {:<30} {:<12} {:<20}",
        "ID", "Type", "Amount", "Description", "Created by", "Created at"
    );
    for t in transactions {
        out.push_str(&format!(
            "\n{:<24} {:<8} {:>12} {:<30} {:<12} {:<20}",
            t.id,
            t.transaction_type,
            format_amount(t.amount),
            t.description.as_deref().unwrap_or(""),
            t.created_by.as_deref().unwrap_or("Unknown"),
            t.created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        ));
    }
    out
}

pub fn transaction_summary(summary: &TransactionSummary) -> String {
    format!(
        "Total income:    {}\nTotal expenses:  {}\nCurrent savings: {}",
        format_amount(summary.income),
        format_amount(summary.expenses),
        format_amount(summary.savings),
    )
}
