//! Authentication API trait.

use async_trait::async_trait;

use super::credentials::Credentials;
use super::model::{AuthContext, TokenStatus};
use crate::error::Result;

/// Remote authentication operations.
///
/// Token issuance happens on the server; implementations only exchange
/// credentials for an [`AuthContext`] and check a token's validity.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a token.
    async fn login(&self, credentials: &Credentials) -> Result<AuthContext>;

    /// Creates an account and returns its token. The first account registered
    /// on a server becomes an admin.
    async fn register(&self, credentials: &Credentials) -> Result<AuthContext>;

    /// Checks whether `context` still holds a valid token.
    async fn validate(&self, context: &AuthContext) -> Result<TokenStatus>;
}
