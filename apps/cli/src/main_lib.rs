use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fintrack_api_client::{
    ApiClient, ApiConfig, AuthRepository, LoanRepository, TransactionRepository,
};
use fintrack_core::{
    loans::{LoanService, LoanServiceTrait},
    session::{AuthService, AuthServiceTrait, SessionContext},
    transactions::{TransactionService, TransactionServiceTrait},
};

pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub loan_service: Arc<dyn LoanServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub session: Option<SessionContext>,
}

impl AppState {
    /// The persisted session, or an error telling the user how to get one.
    pub fn session(&self) -> anyhow::Result<&SessionContext> {
        self.session.as_ref().context(
            "not logged in: run `fintrack login` and export FINTRACK_TOKEN and FINTRACK_ROLE",
        )
    }
}

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn init_tracing() {
    let log_format = std::env::var("FINTRACK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = env_filter();
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

pub fn build_state(config: &ApiConfig) -> anyhow::Result<AppState> {
    let client = ApiClient::new(config)?;

    Ok(AppState {
        auth_service: Arc::new(AuthService::new(Arc::new(AuthRepository::new(
            client.clone(),
        )))),
        loan_service: Arc::new(LoanService::new(Arc::new(LoanRepository::new(
            client.clone(),
        )))),
        transaction_service: Arc::new(TransactionService::new(Arc::new(
            TransactionRepository::new(client),
        ))),
        session: config.session.clone(),
    })
}
