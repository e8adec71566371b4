//! Configuration of a new interview session.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::model::{DEFAULT_QUESTION_COUNT, SessionType};
use crate::error::{PrepError, Result};

/// Roles offered when starting a session. Any non-empty role is accepted.
pub const SUGGESTED_ROLES: &[&str] = &[
    "Java Developer",
    "Python Developer",
    "C Programmer",
    "C++ Programmer",
    "Frontend Developer",
    "Backend Developer",
    "Mobile Developer",
    "Data Analyst",
    "DevOps Engineer",
    "Database Administrator",
    "Cloud Developer",
];

/// Allowed question counts per session.
pub const QUESTION_COUNTS: &[u32] = &[3, 5, 10, 15, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Interviewer persona used by the evaluation service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Personality {
    #[default]
    Friendly,
    Strict,
    Technical,
}

impl Personality {
    pub fn description(self) -> &'static str {
        match self {
            Personality::Friendly => "Supportive and encouraging mentor",
            Personality::Strict => "Demanding senior interviewer",
            Personality::Technical => "Deep technical expert with follow-ups",
        }
    }
}

/// Body of `POST /session/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub user_email: String,
    pub role: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub question_count: u32,
    /// `None` lets the server pick a difficulty from the user's history.
    pub difficulty: Option<Difficulty>,
    pub personality: Personality,
    pub mock_mode: bool,
}

impl StartSessionRequest {
    pub fn new(user_email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            role: role.into(),
            session_type: SessionType::Subjective,
            question_count: DEFAULT_QUESTION_COUNT,
            difficulty: None,
            personality: Personality::default(),
            mock_mode: false,
        }
    }

    /// Checks the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns `PrepError::Validation` when the role is blank, the type is
    /// `coding`, or the question count is not one of [`QUESTION_COUNTS`].
    pub fn validate(&self) -> Result<()> {
        if self.role.trim().is_empty() {
            return Err(PrepError::validation("Please select a role"));
        }
        if self.user_email.trim().is_empty() {
            return Err(PrepError::validation("A signed-in user is required"));
        }
        if self.session_type == SessionType::Coding {
            return Err(PrepError::validation(
                "Coding interviews are no longer supported",
            ));
        }
        if !QUESTION_COUNTS.contains(&self.question_count) {
            return Err(PrepError::validation(format!(
                "Question count must be one of {:?}",
                QUESTION_COUNTS
            )));
        }
        Ok(())
    }
}
