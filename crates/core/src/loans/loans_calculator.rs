//! Simple-interest loan arithmetic and loan list aggregation.
//!
//! Interest is flat: the monthly rate applies to the original principal for
//! every month of the duration, with no compounding.
//!
//! ```text
//! total_interest   = principal * duration_months * rate_percent / 100
//! total_payable    = principal + total_interest
//! remaining_amount = max(0, total_payable - paid_amount)
//! ```

use rust_decimal::Decimal;

use super::loans_model::{Loan, LoanDerived, LoanSummary};
use crate::constants::PERCENT_DIVISOR;

/// Derives interest, payable and remaining amounts for a loan.
///
/// Pure and infallible so it can run after every keystroke. Results that do
/// not fit in a `Decimal` saturate at its bounds instead of overflowing.
pub fn compute_loan_derived(
    principal: Decimal,
    duration_months: u32,
    interest_rate_percent: Decimal,
    paid_amount: Decimal,
) -> LoanDerived {
    let total_interest = flat_interest(principal, duration_months, interest_rate_percent);
    let total_payable = principal.saturating_add(total_interest);
    let remaining_amount = total_payable
        .saturating_sub(paid_amount)
        .max(Decimal::ZERO);

    LoanDerived {
        total_interest,
        total_payable,
        remaining_amount,
    }
}

/// Flat interest over the whole duration.
///
/// Multiplication order is tried exact-first so an intermediate product past
/// `Decimal::MAX` does not clamp a result that is itself representable.
fn flat_interest(
    principal: Decimal,
    duration_months: u32,
    interest_rate_percent: Decimal,
) -> Decimal {
    let months = Decimal::from(duration_months);
    let divisor = Decimal::from(PERCENT_DIVISOR);
    let ratio = interest_rate_percent / divisor;

    principal
        .checked_mul(months)
        .and_then(|p| p.checked_mul(interest_rate_percent))
        .and_then(|p| p.checked_div(divisor))
        .or_else(|| principal.checked_mul(ratio)?.checked_mul(months))
        .or_else(|| months.checked_mul(ratio)?.checked_mul(principal))
        .unwrap_or_else(|| principal.saturating_mul(months).saturating_mul(ratio))
}

/// Sums principal, paid and remaining amounts across loans.
pub fn summarize_loans(loans: &[Loan]) -> LoanSummary {
    loans.iter().fold(
        LoanSummary {
            total_loans: loans.len(),
            ..LoanSummary::default()
        },
        |mut summary, loan| {
            summary.total_amount = summary.total_amount.saturating_add(loan.principal);
            summary.total_paid = summary.total_paid.saturating_add(loan.paid_amount);
            summary.total_remaining = summary
                .total_remaining
                .saturating_add(loan.derived().remaining_amount);
            summary
        },
    )
}
