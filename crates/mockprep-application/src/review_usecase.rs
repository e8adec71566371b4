//! Post-interview review.

use std::sync::Arc;

use mockprep_core::error::{PrepError, Result};
use mockprep_core::review::ReviewSummary;
use mockprep_core::session::{InterviewApi, QuestionId, QuestionType, SessionId};
use tracing::{debug, info, warn};

pub struct ReviewUseCase {
    api: Arc<dyn InterviewApi>,
}

impl ReviewUseCase {
    pub fn new(api: Arc<dyn InterviewApi>) -> Self {
        Self { api }
    }

    /// Fetches session, questions and evaluated answers together and scores
    /// them. The first failing request fails the whole load.
    pub async fn load(&self, session_id: SessionId) -> Result<ReviewSummary> {
        debug!(session_id, "loading review");
        let (session, questions, answers) = tokio::try_join!(
            self.api.fetch_session(session_id),
            self.api.fetch_questions(session_id),
            self.api.fetch_answers(session_id),
        )?;

        let summary = ReviewSummary::build(session, questions, answers);
        info!(
            session_id,
            score = summary.score,
            max_score = summary.max_score,
            pending = summary.evaluation_pending,
            "review loaded"
        );
        Ok(summary)
    }

    /// Generates a model answer for one subjective question of a loaded
    /// review and merges it in.
    ///
    /// Returns whether the row now has a usable model answer; the server
    /// may still store its placeholder when generation fails upstream.
    pub async fn generate_model_answer(
        &self,
        summary: &mut ReviewSummary,
        question_id: QuestionId,
    ) -> Result<bool> {
        let session_id = summary.session.id;
        let row = summary
            .row(question_id)
            .ok_or_else(|| PrepError::not_found("question", question_id.to_string()))?;
        if row.question.kind != QuestionType::Subjective {
            return Err(PrepError::validation(
                "Model answers can only be generated for subjective questions",
            ));
        }

        let updated = self
            .api
            .generate_model_answer(session_id, question_id)
            .await?;
        let usable = updated.usable_model_answer().is_some();
        summary.apply_model_answer(updated);
        if usable {
            info!(session_id, question_id, "model answer generated");
        } else {
            warn!(session_id, question_id, "model answer still unavailable");
        }
        Ok(usable)
    }
}
