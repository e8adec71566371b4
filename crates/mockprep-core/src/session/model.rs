//! Interview session domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::question::QuestionType;

/// Identifier of an interview session.
pub type SessionId = i64;

/// Number of questions used when a session does not state its own count.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// The interview format chosen when the session was started.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SessionType {
    Subjective,
    Mcq,
    Coding,
    Full,
}

impl SessionType {
    /// The question type this session restricts itself to, if any.
    ///
    /// Only subjective and MCQ sessions filter; `full` and `coding` sessions
    /// take every question the server generated.
    pub fn question_filter(self) -> Option<QuestionType> {
        match self {
            SessionType::Subjective => Some(QuestionType::Subjective),
            SessionType::Mcq => Some(QuestionType::Mcq),
            SessionType::Coding | SessionType::Full => None,
        }
    }
}

impl TryFrom<String> for SessionType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<SessionType> for String {
    fn from(value: SessionType) -> Self {
        value.as_ref().to_string()
    }
}

/// Server-side lifecycle of a session: STARTED → IN_PROGRESS → COMPLETED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    Started,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Session metadata as returned by `GET /session/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    #[serde(default)]
    pub question_count: Option<u32>,
    #[serde(default)]
    pub status: SessionStatus,
    /// Only meaningful once the session is completed.
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub total_questions: Option<u32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
}

impl Session {
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_decodes_server_payload() {
        let session: Session = serde_json::from_str(
            r#"{
                "id": 42,
                "userEmail": "a@b.com",
                "role": "Java Developer",
                "type": "MCQ",
                "difficulty": "medium",
                "questionCount": 3,
                "totalQuestions": 3,
                "score": 0,
                "status": "IN_PROGRESS",
                "createdAt": "2026-10-01T09:30:00",
                "completedAt": null
            }"#,
        )
        .unwrap();

        assert_eq!(session.id, 42);
        assert_eq!(session.session_type, SessionType::Mcq);
        assert_eq!(session.status, SessionStatus::InProgress);
        assert_eq!(session.question_count, Some(3));
        assert!(session.completed_at.is_none());
    }

    #[test]
    fn test_question_count_and_status_are_optional() {
        let session: Session =
            serde_json::from_str(r#"{"id": 1, "type": "full"}"#).unwrap();
        assert_eq!(session.question_count, None);
        assert_eq!(session.status, SessionStatus::Started);
    }

    #[test]
    fn test_unknown_status_is_preserved_as_unknown() {
        let session: Session =
            serde_json::from_str(r#"{"id": 1, "type": "full", "status": "ARCHIVED"}"#).unwrap();
        assert_eq!(session.status, SessionStatus::Unknown);
        assert!(!session.is_completed());
    }

    #[test]
    fn test_question_filter_by_session_type() {
        assert_eq!(
            SessionType::Subjective.question_filter(),
            Some(QuestionType::Subjective)
        );
        assert_eq!(SessionType::Mcq.question_filter(), Some(QuestionType::Mcq));
        assert_eq!(SessionType::Full.question_filter(), None);
        assert_eq!(SessionType::Coding.question_filter(), None);
    }
}
