//! Failures of interview operations.

use thiserror::Error;

use super::phase::Phase;
use crate::error::PrepError;
use crate::session::QuestionId;

/// Which half of a completion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CompletionStage {
    /// Submitting buffered answers.
    Flush,
    /// Signalling the session as complete.
    Finalize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterviewError {
    /// Questions or session metadata could not be loaded. Terminal for the
    /// controller instance.
    #[error("Failed to load questions or session details: {0}")]
    LoadFailure(PrepError),

    #[error("Please enter an answer")]
    EmptyAnswer,

    #[error("Question {question_id} has already been answered")]
    AlreadyAnswered { question_id: QuestionId },

    #[error("Submit your answer first")]
    FollowUpRefused { question_id: QuestionId },

    #[error("A follow-up is already being generated")]
    FollowUpInFlight,

    #[error("Follow-up failed: {0}")]
    FollowUpFailure(PrepError),

    /// Buffered answers are kept; the completion can be retried.
    #[error("Could not complete session ({stage}): {source}")]
    CompletionFailure {
        stage: CompletionStage,
        failed: usize,
        source: PrepError,
    },

    #[error("Operation not available while {0}")]
    NotReady(Phase),

    #[error("No question is currently displayed")]
    NoCurrentQuestion,
}

impl InterviewError {
    /// Every failure except a failed load leaves the controller usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InterviewError::LoadFailure(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            InterviewError::EmptyAnswer | InterviewError::AlreadyAnswered { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(!InterviewError::LoadFailure(PrepError::transport("down")).is_recoverable());
        assert!(InterviewError::EmptyAnswer.is_recoverable());
        assert!(
            InterviewError::CompletionFailure {
                stage: CompletionStage::Flush,
                failed: 1,
                source: PrepError::transport("down"),
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_messages_read_as_notices() {
        assert_eq!(InterviewError::EmptyAnswer.to_string(), "Please enter an answer");
        assert_eq!(
            InterviewError::FollowUpRefused { question_id: 3 }.to_string(),
            "Submit your answer first"
        );
        let err = InterviewError::CompletionFailure {
            stage: CompletionStage::Finalize,
            failed: 1,
            source: PrepError::api(500, "boom"),
        };
        assert_eq!(
            err.to_string(),
            "Could not complete session (finalize): API error (500): boom"
        );
    }
}
