//! HTTP implementation of `AuthApi`.

use async_trait::async_trait;
use mockprep_core::auth::{AuthApi, AuthContext, Credentials, TokenStatus};
use mockprep_core::error::Result;
use reqwest::Method;
use reqwest::header::AUTHORIZATION;

use crate::dto::AuthResponse;
use crate::http_client::ApiClient;

/// Talks to the `/auth` endpoints. Works without a signed-in user.
#[derive(Clone)]
pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthContext> {
        let response: AuthResponse = self.client.post("auth/login", credentials).await?;
        Ok(response.into())
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthContext> {
        let response: AuthResponse = self.client.post("auth/register", credentials).await?;
        Ok(response.into())
    }

    async fn validate(&self, context: &AuthContext) -> Result<TokenStatus> {
        let request = self
            .client
            .request(Method::GET, "auth/validate")
            .header(AUTHORIZATION, context.bearer());
        self.client.send(request).await
    }
}
