//! Persistence of the signed-in user.

use async_trait::async_trait;

use super::model::AuthContext;
use crate::error::Result;

/// Stores at most one [`AuthContext`] between runs.
///
/// Implementations must keep the token readable only by the current user.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Returns the saved context, or `None` when signed out.
    async fn load(&self) -> Result<Option<AuthContext>>;

    /// Replaces any saved context.
    async fn save(&self, context: &AuthContext) -> Result<()>;

    /// Removes the saved context. Succeeds when nothing was saved.
    async fn clear(&self) -> Result<()>;
}
