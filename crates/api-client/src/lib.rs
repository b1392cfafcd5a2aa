//! FinTrack API client - REST implementations of the core repository traits.
//!
//! The remote API owns persistence and authentication. This crate maps its
//! JSON resources onto the domain models in `fintrack-core` and converts
//! HTTP failures into core errors without further interpretation.

pub mod auth;
pub mod client;
pub mod config;
pub mod loans;
mod models;
pub mod transactions;

pub use auth::AuthRepository;
pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use loans::LoanRepository;
pub use transactions::TransactionRepository;
