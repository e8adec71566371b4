//! Interview session controller.
//!
//! Drives one timed attempt: loads the question set, keeps answers in a local
//! buffer, requests follow-ups, runs the countdown and finally flushes the
//! buffer and finalizes the session.

use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::future::join_all;
use mockprep_core::PrepError;
use mockprep_core::config::InterviewSettings;
use mockprep_core::interview::{
    CompletionStage, InterviewError, InterviewNotice, Phase, Route, Tick,
};
use mockprep_core::session::{
    AnswerSubmission, FollowUpRequest, InterviewApi, QuestionId, SessionId,
};
use tokio::sync::{Mutex, MutexGuard, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use super::state::{InterviewSnapshot, InterviewState};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

const LOAD_FAILED_NOTICE: &str = "Failed to load questions or session details";
const COMPLETION_FAILED_NOTICE: &str = "Could not complete session";
const FOLLOW_UP_FAILED_NOTICE: &str = "Follow-up failed";
const TIME_UP_NOTICE: &str = "Time is up! Submitting your interview...";
const COMPLETED_NOTICE: &str = "Interview completed!";

/// Result of a completion request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Answers flushed, session finalized, host should show the review.
    Completed(Route),
    /// Another completion is already running; nothing was done.
    AlreadyInFlight,
}

/// Result of advancing to the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    /// There was no next question, so the attempt was completed instead.
    Finished(CompletionOutcome),
}

/// State machine for a single interview attempt.
///
/// All methods take `&self`; the working state sits behind a mutex that is
/// released before every network call, so the timer task and user commands
/// can interleave freely. User-visible messages are pushed through the
/// notice channel returned by [`InterviewController::new`].
pub struct InterviewController {
    session_id: SessionId,
    api: Arc<dyn InterviewApi>,
    settings: InterviewSettings,
    state: Mutex<InterviewState>,
    notices: mpsc::UnboundedSender<InterviewNotice>,
    timer: CancellationToken,
}

impl InterviewController {
    pub fn new(
        session_id: SessionId,
        api: Arc<dyn InterviewApi>,
        settings: InterviewSettings,
    ) -> (Self, mpsc::UnboundedReceiver<InterviewNotice>) {
        let (notices, receiver) = mpsc::unbounded_channel();
        let controller = Self {
            session_id,
            api,
            state: Mutex::new(InterviewState::new(settings.time_budget_secs)),
            settings,
            notices,
            timer: CancellationToken::new(),
        };
        (controller, receiver)
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Starts the countdown and loads the attempt.
    ///
    /// The countdown runs from activation, even while loading.
    pub async fn activate(self: &Arc<Self>) -> Result<JoinHandle<()>, InterviewError> {
        let timer = self.spawn_timer();
        self.load().await?;
        Ok(timer)
    }

    /// Stops the countdown. Buffered answers are discarded with the controller.
    pub fn deactivate(&self) {
        if !self.timer.is_cancelled() {
            debug!(session_id = self.session_id, "stopping interview timer");
        }
        self.timer.cancel();
    }

    pub fn is_timer_running(&self) -> bool {
        !self.timer.is_cancelled()
    }

    pub async fn snapshot(&self) -> InterviewSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Fetches questions and session metadata concurrently.
    ///
    /// Either failure is terminal for this controller.
    #[instrument(skip_all, fields(session_id = self.session_id))]
    pub async fn load(&self) -> Result<(), InterviewError> {
        {
            let state = self.state.lock().await;
            if state.phase != Phase::Loading {
                return Err(InterviewError::NotReady(state.phase));
            }
        }

        let (questions, session) = tokio::join!(
            self.api.fetch_questions(self.session_id),
            self.api.fetch_session(self.session_id)
        );

        let mut state = self.state.lock().await;
        match questions.and_then(|q| session.map(|s| (q, s))) {
            Ok((questions, session)) => {
                state.apply_loaded(session, questions, self.settings.default_question_count);
                info!(
                    total = state.all_questions.len(),
                    active = state.active_questions.len(),
                    "interview loaded"
                );
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to load interview");
                state.phase = Phase::LoadFailed;
                drop(state);
                self.notify(InterviewNotice::Error(LOAD_FAILED_NOTICE.to_string()));
                Err(InterviewError::LoadFailure(err))
            }
        }
    }

    /// Replaces the in-progress text for the displayed question.
    pub async fn set_draft(&self, text: impl Into<String>) {
        self.state.lock().await.draft = text.into();
    }

    /// Stores an answer for the displayed question in the local buffer.
    ///
    /// Uses `explicit` when given (e.g. a picked MCQ option), otherwise the
    /// draft. Nothing is sent to the server until completion. A question that
    /// already has a buffered answer is left untouched.
    #[instrument(skip_all, fields(session_id = self.session_id))]
    pub async fn save_answer(&self, explicit: Option<&str>) -> Result<QuestionId, InterviewError> {
        let mut state = self.state.lock().await;
        if state.phase != Phase::Ready {
            return Err(InterviewError::NotReady(state.phase));
        }
        let question_id = state
            .current_question()
            .map(|q| q.id)
            .ok_or(InterviewError::NoCurrentQuestion)?;

        let text = match explicit {
            Some(text) => text.to_string(),
            None => state.draft.clone(),
        };
        if text.trim().is_empty() {
            drop(state);
            warn!(question_id, "refusing to save an empty answer");
            self.notify(InterviewNotice::Error(InterviewError::EmptyAnswer.to_string()));
            return Err(InterviewError::EmptyAnswer);
        }

        if state.answers.contains_key(&question_id) {
            drop(state);
            warn!(question_id, "question already has a saved answer");
            let err = InterviewError::AlreadyAnswered { question_id };
            self.notify(InterviewNotice::Info(err.to_string()));
            return Err(err);
        }

        state.answers.insert(question_id, text);
        state.draft.clear();
        state.follow_up = None;
        drop(state);

        debug!(question_id, "answer buffered");
        self.notify(InterviewNotice::Info("Answer saved".to_string()));
        Ok(question_id)
    }

    /// Asks the server for a follow-up to the displayed question and its
    /// buffered answer.
    ///
    /// A reply that arrives after the user moved to another question is
    /// dropped.
    #[instrument(skip_all, fields(session_id = self.session_id))]
    pub async fn request_follow_up(&self) -> Result<Option<String>, InterviewError> {
        let (question_id, request) = {
            let mut state = self.state.lock().await;
            if state.phase != Phase::Ready {
                return Err(InterviewError::NotReady(state.phase));
            }
            let question = state
                .current_question()
                .cloned()
                .ok_or(InterviewError::NoCurrentQuestion)?;
            let Some(answer) = state.answers.get(&question.id).cloned() else {
                drop(state);
                warn!(question_id = question.id, "follow-up requested before answering");
                let err = InterviewError::FollowUpRefused {
                    question_id: question.id,
                };
                self.notify(InterviewNotice::Info(err.to_string()));
                return Err(err);
            };
            if state.requesting_follow_up {
                return Err(InterviewError::FollowUpInFlight);
            }
            state.requesting_follow_up = true;
            (
                question.id,
                FollowUpRequest {
                    question: question.question_text,
                    answer,
                },
            )
        };

        let result = self.api.request_follow_up(self.session_id, &request).await;

        let mut state = self.state.lock().await;
        state.requesting_follow_up = false;
        match result {
            Ok(text) => {
                let still_current = state.current_question().map(|q| q.id) == Some(question_id);
                if still_current {
                    state.follow_up = text.clone();
                } else {
                    debug!(question_id, "discarding follow-up for a question no longer shown");
                }
                Ok(text)
            }
            Err(err) => {
                drop(state);
                warn!(question_id, error = %err, "follow-up request failed");
                self.notify(InterviewNotice::Error(FOLLOW_UP_FAILED_NOTICE.to_string()));
                Err(InterviewError::FollowUpFailure(err))
            }
        }
    }

    /// Moves back one question; stays put on the first.
    pub async fn previous(&self) -> Result<usize, InterviewError> {
        let mut state = self.navigable().await?;
        let target = state.current_index.saturating_sub(1);
        Ok(state.move_to(target))
    }

    /// Moves forward one question, or completes the attempt from the last one.
    pub async fn next(&self) -> Result<Advance, InterviewError> {
        {
            let mut state = self.navigable().await?;
            if state.current_index < state.last_index() {
                let target = state.current_index + 1;
                return Ok(Advance::Moved(state.move_to(target)));
            }
        }
        self.complete().await.map(Advance::Finished)
    }

    /// Jumps to `index`, clamped to the active question range.
    pub async fn jump_to(&self, index: usize) -> Result<usize, InterviewError> {
        let mut state = self.navigable().await?;
        Ok(state.move_to(index))
    }

    /// Submits every buffered answer, finalizes the session and signals
    /// navigation to the review.
    ///
    /// At most one completion runs at a time; a concurrent call returns
    /// `AlreadyInFlight` without touching the server. On failure the buffer
    /// is kept and the controller returns to `Ready` so the user can retry.
    #[instrument(skip_all, fields(session_id = self.session_id))]
    pub async fn complete(&self) -> Result<CompletionOutcome, InterviewError> {
        let submissions: Vec<AnswerSubmission> = {
            let mut state = self.state.lock().await;
            match state.phase {
                Phase::Ready => {}
                Phase::Completing => {
                    debug!("completion already in flight");
                    return Ok(CompletionOutcome::AlreadyInFlight);
                }
                other => return Err(InterviewError::NotReady(other)),
            }
            state.phase = Phase::Completing;
            state
                .answers
                .iter()
                .map(|(question_id, answer)| AnswerSubmission {
                    session_id: self.session_id,
                    question_id: *question_id,
                    answer: answer.clone(),
                })
                .collect()
        };

        info!(answers = submissions.len(), "flushing buffered answers");
        let results = join_all(submissions.iter().map(|s| self.api.submit_answer(s))).await;
        let mut failures = results.into_iter().filter_map(Result::err);
        if let Some(first) = failures.next() {
            let failed = 1 + failures.count();
            return Err(self.abort_completion(CompletionStage::Flush, failed, first).await);
        }

        if let Err(err) = self.api.complete_session(self.session_id).await {
            return Err(self.abort_completion(CompletionStage::Finalize, 1, err).await);
        }

        // Head start for server-side evaluation before the review loads.
        tokio::time::sleep(self.settings.settle_delay()).await;

        self.state.lock().await.phase = Phase::Done;
        self.deactivate();

        let route = Route::Review(self.session_id);
        info!(route = %route.path(), "interview completed");
        self.notify(InterviewNotice::Success(COMPLETED_NOTICE.to_string()));
        self.notify(InterviewNotice::Navigate(route));
        Ok(CompletionOutcome::Completed(route))
    }

    /// Advances the countdown by one second.
    ///
    /// Reaching zero stops the timer and triggers exactly one completion.
    pub async fn tick(&self) -> Tick {
        let tick = self.state.lock().await.countdown.tick();
        if tick == Tick::Expired {
            self.deactivate();
            info!(session_id = self.session_id, "time budget exhausted");
            self.notify(InterviewNotice::Info(TIME_UP_NOTICE.to_string()));
            match self.complete().await {
                Ok(outcome) => debug!(?outcome, "timed completion finished"),
                Err(err) => warn!(error = %err, "timed completion failed"),
            }
        }
        tick
    }

    /// Spawns the one-second countdown task.
    ///
    /// The task holds only a weak reference, so dropping the controller
    /// ends it as well.
    pub fn spawn_timer(self: &Arc<Self>) -> JoinHandle<()> {
        let weak: Weak<Self> = Arc::downgrade(self);
        let token = self.timer.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // The first tick of an interval completes immediately.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        let Some(controller) = weak.upgrade() else { break };
                        match controller.tick().await {
                            Tick::Running(_) => {}
                            Tick::Expired | Tick::Idle => break,
                        }
                    }
                }
            }
        })
    }

    async fn navigable(&self) -> Result<MutexGuard<'_, InterviewState>, InterviewError> {
        let state = self.state.lock().await;
        match state.phase {
            Phase::Ready | Phase::Completing => Ok(state),
            other => Err(InterviewError::NotReady(other)),
        }
    }

    async fn abort_completion(
        &self,
        stage: CompletionStage,
        failed: usize,
        source: PrepError,
    ) -> InterviewError {
        error!(%stage, failed, error = %source, "completion failed");
        self.state.lock().await.phase = Phase::Ready;
        self.notify(InterviewNotice::Error(COMPLETION_FAILED_NOTICE.to_string()));
        InterviewError::CompletionFailure {
            stage,
            failed,
            source,
        }
    }

    fn notify(&self, notice: InterviewNotice) {
        // Receiver may be gone once the host stops rendering.
        let _ = self.notices.send(notice);
    }
}

impl Drop for InterviewController {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
