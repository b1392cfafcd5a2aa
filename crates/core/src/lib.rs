//! FinTrack Core - Domain entities, calculations, services, and traits.
//!
//! This crate holds the loan arithmetic, form validation and summary
//! aggregation of the FinTrack tracker. It is transport-agnostic and defines
//! repository traits that are implemented by the `api-client` crate.

pub mod constants;
pub mod errors;
pub mod loans;
pub mod session;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
