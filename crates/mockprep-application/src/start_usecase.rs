//! Starting a new interview session.

use std::sync::Arc;

use mockprep_core::error::Result;
use mockprep_core::session::{InterviewApi, Session, StartSessionRequest};
use tracing::info;

/// Validates a start configuration and creates the session on the server.
pub struct StartInterviewUseCase {
    api: Arc<dyn InterviewApi>,
}

impl StartInterviewUseCase {
    pub fn new(api: Arc<dyn InterviewApi>) -> Self {
        Self { api }
    }

    /// Returns the created session. Invalid configurations never reach the
    /// server.
    pub async fn start(&self, request: &StartSessionRequest) -> Result<Session> {
        request.validate()?;
        let session = self.api.start_session(request).await?;
        info!(
            session_id = session.id,
            role = %request.role,
            kind = %request.session_type,
            count = request.question_count,
            "interview session started"
        );
        Ok(session)
    }
}
