//! HTTP implementation of `InterviewApi`.

use async_trait::async_trait;
use mockprep_core::error::Result;
use mockprep_core::session::{
    AnswerSubmission, EvaluatedAnswer, FollowUpRequest, InterviewApi, Question, QuestionId,
    Session, SessionId, StartSessionRequest, SubmitAck,
};
use tracing::debug;

use crate::dto::FollowUpResponse;
use crate::http_client::ApiClient;

/// Talks to the `/session` endpoints of the interview service.
#[derive(Clone)]
pub struct HttpInterviewApi {
    client: ApiClient,
}

impl HttpInterviewApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InterviewApi for HttpInterviewApi {
    async fn start_session(&self, request: &StartSessionRequest) -> Result<Session> {
        self.client.post("session/start", request).await
    }

    async fn fetch_questions(&self, session_id: SessionId) -> Result<Vec<Question>> {
        self.client
            .get(&format!("session/{session_id}/questions"))
            .await
    }

    async fn fetch_session(&self, session_id: SessionId) -> Result<Session> {
        self.client.get(&format!("session/{session_id}")).await
    }

    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<SubmitAck> {
        debug!(
            session_id = submission.session_id,
            question_id = submission.question_id,
            "submitting answer"
        );
        self.client.post("session/submit-answer", submission).await
    }

    async fn complete_session(&self, session_id: SessionId) -> Result<Session> {
        self.client
            .post_empty(&format!("session/complete/{session_id}"))
            .await
    }

    async fn request_follow_up(
        &self,
        session_id: SessionId,
        request: &FollowUpRequest,
    ) -> Result<Option<String>> {
        let response: FollowUpResponse = self
            .client
            .post(&format!("session/{session_id}/followup"), request)
            .await?;
        Ok(response.into_text())
    }

    async fn fetch_answers(&self, session_id: SessionId) -> Result<Vec<EvaluatedAnswer>> {
        self.client.get(&format!("session/{session_id}/answers")).await
    }

    async fn generate_model_answer(
        &self,
        session_id: SessionId,
        question_id: QuestionId,
    ) -> Result<Question> {
        debug!(session_id, question_id, "generating model answer");
        self.client
            .post_empty(&format!(
                "session/{session_id}/questions/{question_id}/model-answer"
            ))
            .await
    }
}
