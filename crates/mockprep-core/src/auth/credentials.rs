//! Login and registration input validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{PrepError, Result};

const PASSWORD_SPECIALS: &str = "@$!%*?&";
const PASSWORD_RULE: &str =
    "Password must be at least 8 characters with uppercase, lowercase, number, and special character";

static PASSWORD_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$").expect("password charset pattern is valid")
});

/// Body of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Builds login credentials, trimming the email.
    ///
    /// # Errors
    ///
    /// Returns `PrepError::Validation` when the email is blank.
    pub fn for_login(email: &str, password: &str) -> Result<Self> {
        let email = email.trim();
        if email.is_empty() {
            return Err(PrepError::validation("Email is required"));
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Builds registration credentials after applying the password policy.
    ///
    /// # Errors
    ///
    /// Returns `PrepError::Validation` when the email is blank, the password
    /// is missing, the confirmation differs, or the password is too weak.
    pub fn for_registration(email: &str, password: &str, confirm: &str) -> Result<Self> {
        let creds = Self::for_login(email, password)?;
        if password.is_empty() {
            return Err(PrepError::validation("Password is required"));
        }
        if password != confirm {
            return Err(PrepError::validation("Passwords do not match"));
        }
        if !is_strong_password(password) {
            return Err(PrepError::validation(PASSWORD_RULE));
        }
        Ok(creds)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// At least 8 characters from the allowed set with one lowercase, one
/// uppercase, one digit and one of `@$!%*?&`.
pub fn is_strong_password(password: &str) -> bool {
    PASSWORD_CHARSET.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}
