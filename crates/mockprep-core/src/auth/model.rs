//! Authenticated user context.

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// The signed-in user.
///
/// Created by a successful login or registration and dropped on logout. It is
/// handed explicitly to whatever needs to authenticate requests; nothing reads
/// it from ambient state.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub token: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl AuthContext {
    pub fn new(token: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Tokens must never reach logs.
impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}

/// Result of `GET /auth/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenStatus {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}
