//! Authentication endpoints (`/auth/login`, `/auth/register`).

use async_trait::async_trait;
use reqwest::Method;

use fintrack_core::errors::Result;
use fintrack_core::session::{AuthRepositoryTrait, AuthToken, LoginCredentials, NewUser};

use crate::client::ApiClient;

pub struct AuthRepository {
    client: ApiClient,
}

impl AuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepositoryTrait for AuthRepository {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthToken> {
        let body = serde_json::to_value(credentials)?;
        self.client.post("/auth/login", None, &body).await
    }

    async fn register(&self, new_user: &NewUser) -> Result<()> {
        let body = serde_json::to_value(new_user)?;
        self.client
            .execute(Method::POST, "/auth/register", None, Some(&body))
            .await
    }
}
