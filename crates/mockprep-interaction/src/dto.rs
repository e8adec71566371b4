//! Wire shapes that differ from the domain models.

use mockprep_core::auth::{AuthContext, UserRole};
use serde::Deserialize;

/// Error body returned by the server: `{"error": ...}` or `{"message": ...}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    /// Extracts the human-readable message, if the body carries one.
    pub(crate) fn parse(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .error
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Reply of `POST /session/{id}/followup`.
///
/// Older servers put the text under `data`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FollowUpResponse {
    #[serde(default)]
    follow_up_question: Option<String>,
    #[serde(default)]
    data: Option<String>,
}

impl FollowUpResponse {
    pub(crate) fn into_text(self) -> Option<String> {
        self.follow_up_question
            .or(self.data)
            .filter(|t| !t.trim().is_empty())
    }
}

/// Reply of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    token: String,
    email: String,
    #[serde(default)]
    role: UserRole,
}

impl From<AuthResponse> for AuthContext {
    fn from(response: AuthResponse) -> Self {
        AuthContext::new(response.token, response.email, response.role)
    }
}
