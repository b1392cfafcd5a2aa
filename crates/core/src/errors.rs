//! Core error types for the FinTrack application.
//!
//! This module defines transport-agnostic error types. Failures from the remote
//! persistence API are converted to these types by the client crate and are
//! then passed through the services unchanged.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The remote API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The remote API could not be reached or its response could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid configuration value: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Field-attributed validation errors raised when a form is submitted.
///
/// Only one error is reported per submission: the first rule that fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Please enter valid duration (months)")]
    InvalidDuration,

    #[error("Please enter valid interest rate")]
    InvalidInterestRate,

    #[error("Please enter a valid paid amount")]
    InvalidPaidAmount,

    #[error("Please enter a valid transaction amount")]
    InvalidTransactionAmount,

    #[error("Unknown transaction type '{0}', expected 'income' or 'expense'")]
    InvalidTransactionType(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}
