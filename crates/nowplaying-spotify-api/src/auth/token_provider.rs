use async_trait::async_trait;
use eyre::Result;

use crate::auth::refresh::Credentials;
use crate::auth::refresh::refresh_access_token;
use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;

/// Hands out an access token that is valid for the call about to be made.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<BearerToken>;
}

/// Runs the refresh-token grant on every call. Nothing is cached.
#[derive(Debug, Clone)]
pub struct RefreshTokenProvider {
    client: reqwest::Client,
    endpoints: Endpoints,
    credentials: Credentials,
}

impl RefreshTokenProvider {
    pub fn new(client: reqwest::Client, endpoints: Endpoints, credentials: Credentials) -> Self {
        Self {
            client,
            endpoints,
            credentials,
        }
    }
}

#[async_trait]
impl TokenProvider for RefreshTokenProvider {
    async fn bearer_token(&self) -> Result<BearerToken> {
        refresh_access_token(&self.client, &self.endpoints, &self.credentials).await
    }
}

/// Always returns the same token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider(pub BearerToken);

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<BearerToken> {
        Ok(self.0.clone())
    }
}
