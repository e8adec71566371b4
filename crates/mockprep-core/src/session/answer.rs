//! Answer payloads exchanged with the session API.

use serde::{Deserialize, Serialize};

use super::model::SessionId;
use super::question::QuestionId;

/// Body of `POST /session/submit-answer`.
///
/// The server treats `(session_id, question_id)` as the key; resubmitting the
/// same pair replaces the earlier answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub session_id: SessionId,
    pub question_id: QuestionId,
    pub answer: String,
}

/// Acknowledgement returned for a submitted answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub answer_id: Option<i64>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Body of `POST /session/{id}/followup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpRequest {
    pub question: String,
    pub answer: String,
}

/// A stored answer with its evaluation, as listed by `GET /session/{id}/answers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedAnswer {
    pub id: i64,
    pub session_id: SessionId,
    pub question_id: QuestionId,
    #[serde(default)]
    pub user_answer: Option<String>,
    /// MCQ: 0 or 1, subjective: 0 to 10.
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub ai_feedback: Option<String>,
}
