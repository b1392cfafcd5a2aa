use async_trait::async_trait;

use super::session_model::{AuthToken, LoginCredentials, NewUser, SessionContext};
use crate::errors::Result;

/// Remote authentication endpoints.
#[async_trait]
pub trait AuthRepositoryTrait: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthToken>;
    async fn register(&self, new_user: &NewUser) -> Result<()>;
}

#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn login(&self, credentials: LoginCredentials) -> Result<SessionContext>;
    async fn register(&self, new_user: NewUser) -> Result<()>;
}
