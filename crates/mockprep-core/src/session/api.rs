//! Session API trait.
//!
//! Defines the remote operations an interview depends on.

use async_trait::async_trait;

use super::answer::{AnswerSubmission, EvaluatedAnswer, FollowUpRequest, SubmitAck};
use super::model::{Session, SessionId};
use super::question::{Question, QuestionId};
use super::start::StartSessionRequest;
use crate::error::Result;

/// An abstract client for the interview session service.
///
/// This trait decouples the interview flow from the transport. The HTTP
/// implementation lives in `mockprep-interaction`; tests provide in-memory
/// doubles.
///
/// # Implementation Notes
///
/// `submit_answer` must tolerate duplicate delivery: a failed completion is
/// retried by resending every buffered answer, including ones the server
/// already stored.
#[async_trait]
pub trait InterviewApi: Send + Sync {
    /// Starts a new session with the given configuration.
    async fn start_session(&self, request: &StartSessionRequest) -> Result<Session>;

    /// Fetches every question generated for a session, in server order.
    async fn fetch_questions(&self, session_id: SessionId) -> Result<Vec<Question>>;

    /// Fetches the session metadata.
    async fn fetch_session(&self, session_id: SessionId) -> Result<Session>;

    /// Stores one answer. Upsert keyed by `(session_id, question_id)`.
    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<SubmitAck>;

    /// Marks the session complete and triggers server-side evaluation.
    ///
    /// Evaluation may still be running when this returns.
    async fn complete_session(&self, session_id: SessionId) -> Result<Session>;

    /// Asks the evaluation service for a follow-up question.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(text))`: a follow-up was generated
    /// - `Ok(None)`: the service had nothing to add
    /// - `Err(_)`: the request failed
    async fn request_follow_up(
        &self,
        session_id: SessionId,
        request: &FollowUpRequest,
    ) -> Result<Option<String>>;

    /// Lists stored answers with their evaluation results.
    async fn fetch_answers(&self, session_id: SessionId) -> Result<Vec<EvaluatedAnswer>>;

    /// Generates and stores a model answer for one question.
    ///
    /// Returns the updated question. Generation can take several seconds.
    async fn generate_model_answer(
        &self,
        session_id: SessionId,
        question_id: QuestionId,
    ) -> Result<Question>;
}
