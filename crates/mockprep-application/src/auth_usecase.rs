//! Sign-in, sign-up and sign-out.

use std::sync::Arc;

use mockprep_core::PrepError;
use mockprep_core::auth::{AuthApi, AuthContext, AuthStore, Credentials};
use mockprep_core::error::Result;
use tracing::{info, warn};

/// Exchanges credentials for an [`AuthContext`] and keeps it in the store.
pub struct AuthUseCase {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn AuthStore>,
}

impl AuthUseCase {
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn AuthStore>) -> Self {
        Self { api, store }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthContext> {
        let credentials = Credentials::for_login(email, password)?;
        let context = self.api.login(&credentials).await?;
        self.store.save(&context).await?;
        info!(email = %context.email, role = %context.role, "signed in");
        Ok(context)
    }

    pub async fn register(&self, email: &str, password: &str, confirm: &str) -> Result<AuthContext> {
        let credentials = Credentials::for_registration(email, password, confirm)?;
        let context = self.api.register(&credentials).await?;
        self.store.save(&context).await?;
        info!(email = %context.email, role = %context.role, "account registered");
        Ok(context)
    }

    /// Forgets the saved context. Tokens are stateless on the server, so
    /// nothing is sent.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await?;
        info!("signed out");
        Ok(())
    }

    /// The saved context, or `Unauthorized` when signed out.
    pub async fn current(&self) -> Result<AuthContext> {
        self.store
            .load()
            .await?
            .ok_or_else(|| PrepError::unauthorized("Not signed in. Run `mockprep login` first"))
    }

    /// Checks the saved token with the server and drops it when rejected.
    pub async fn verify(&self) -> Result<AuthContext> {
        let context = self.current().await?;
        let status = self.api.validate(&context).await?;
        if !status.valid {
            warn!(email = %context.email, "saved token was rejected");
            self.store.clear().await?;
            return Err(PrepError::unauthorized("Session expired. Please sign in again"));
        }
        Ok(context)
    }
}
