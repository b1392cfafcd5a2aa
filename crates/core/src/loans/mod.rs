//! Loans module - calculator, form state, domain models, services, and traits.

mod loans_calculator;
mod loans_form;
mod loans_model;
mod loans_service;
mod loans_traits;

#[cfg(test)]
mod loans_model_tests;

#[cfg(test)]
mod loans_service_tests;

pub use loans_calculator::{compute_loan_derived, summarize_loans};
pub use loans_form::{LoanField, LoanForm};
pub use loans_model::{Loan, LoanDerived, LoanInput, LoanSummary, LoanTerms, NewLoan};
pub use loans_service::LoanService;
pub use loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
