use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::session_model::{LoginCredentials, NewUser, SessionContext};
use super::session_traits::{AuthRepositoryTrait, AuthServiceTrait};
use crate::errors::Result;

/// Service for logging in and registering users
pub struct AuthService {
    repository: Arc<dyn AuthRepositoryTrait>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn AuthRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, credentials: LoginCredentials) -> Result<SessionContext> {
        credentials.validate()?;
        debug!("Logging in as {}", credentials.username);
        let token = self.repository.login(&credentials).await?;
        info!("Logged in as {} ({})", credentials.username, token.role);
        Ok(token.into())
    }

    async fn register(&self, new_user: NewUser) -> Result<()> {
        new_user.validate()?;
        self.repository.register(&new_user).await?;
        info!("Registered user {}", new_user.username);
        Ok(())
    }
}
