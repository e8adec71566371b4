//! Session domain module.
//!
//! This module contains the interview session models and the remote API
//! interface the interview flow is built on.
//!
//! # Module Structure
//!
//! - `model`: Session metadata (`Session`, `SessionType`, `SessionStatus`)
//! - `question`: Question model (`Question`, `QuestionType`)
//! - `answer`: Answer payloads (`AnswerSubmission`, `EvaluatedAnswer`, ...)
//! - `start`: New session configuration (`StartSessionRequest`)
//! - `api`: Remote API trait (`InterviewApi`)

mod answer;
mod api;
mod model;
mod question;
mod start;

// Re-export public API
pub use answer::{AnswerSubmission, EvaluatedAnswer, FollowUpRequest, SubmitAck};
pub use api::InterviewApi;
pub use model::{DEFAULT_QUESTION_COUNT, Session, SessionId, SessionStatus, SessionType};
pub use question::{Question, QuestionId, QuestionType};
pub use start::{Difficulty, Personality, QUESTION_COUNTS, SUGGESTED_ROLES, StartSessionRequest};
