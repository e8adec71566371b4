//! Working memory of one interview attempt.

use std::collections::BTreeMap;

use mockprep_core::interview::{
    Countdown, Phase, Urgency, format_clock, progress_percent, select_active_questions,
};
use mockprep_core::session::{Question, QuestionId, Session};
use serde::Serialize;

/// Mutable state owned by an `InterviewController`.
///
/// Only the controller touches this, and never while a network call is
/// pending, so every field is consistent whenever the lock is free.
#[derive(Debug)]
pub(crate) struct InterviewState {
    pub(crate) phase: Phase,
    pub(crate) session: Option<Session>,
    pub(crate) all_questions: Vec<Question>,
    pub(crate) active_questions: Vec<Question>,
    pub(crate) current_index: usize,
    pub(crate) draft: String,
    /// Local, unsent answers. Keyed by question so each has at most one.
    pub(crate) answers: BTreeMap<QuestionId, String>,
    pub(crate) countdown: Countdown,
    pub(crate) requesting_follow_up: bool,
    /// Scoped to the displayed question.
    pub(crate) follow_up: Option<String>,
}

impl InterviewState {
    pub(crate) fn new(time_budget_secs: u64) -> Self {
        Self {
            phase: Phase::Loading,
            session: None,
            all_questions: Vec::new(),
            active_questions: Vec::new(),
            current_index: 0,
            draft: String::new(),
            answers: BTreeMap::new(),
            countdown: Countdown::new(time_budget_secs),
            requesting_follow_up: false,
            follow_up: None,
        }
    }

    /// Installs loaded data and computes the active question set. Called once.
    pub(crate) fn apply_loaded(
        &mut self,
        session: Session,
        questions: Vec<Question>,
        fallback_count: u32,
    ) {
        let count = session.question_count.unwrap_or(fallback_count);
        self.active_questions = select_active_questions(&questions, session.session_type, count);
        self.all_questions = questions;
        self.session = Some(session);
        self.current_index = 0;
        self.phase = Phase::Ready;
    }

    pub(crate) fn current_question(&self) -> Option<&Question> {
        self.active_questions.get(self.current_index)
    }

    pub(crate) fn last_index(&self) -> usize {
        self.active_questions.len().saturating_sub(1)
    }

    /// Moves to `index` clamped into range and drops the follow-up.
    /// The draft is left alone.
    pub(crate) fn move_to(&mut self, index: usize) -> usize {
        self.current_index = index.min(self.last_index());
        self.follow_up = None;
        self.current_index
    }

    pub(crate) fn snapshot(&self) -> InterviewSnapshot {
        let remaining = self.countdown.remaining();
        InterviewSnapshot {
            phase: self.phase,
            session: self.session.clone(),
            total_questions: self.all_questions.len(),
            active_questions: self.active_questions.clone(),
            current_index: self.current_index,
            current_question: self.current_question().cloned(),
            draft: self.draft.clone(),
            answers: self.answers.clone(),
            answered: self
                .active_questions
                .iter()
                .map(|q| self.answers.contains_key(&q.id))
                .collect(),
            follow_up: self.follow_up.clone(),
            remaining_secs: remaining,
            clock: format_clock(remaining),
            urgency: self.countdown.urgency(),
            progress: progress_percent(self.current_index, self.active_questions.len()),
            is_loading: self.phase == Phase::Loading,
            is_requesting_follow_up: self.requesting_follow_up,
            is_completing: self.phase == Phase::Completing,
        }
    }
}

/// Read-only copy of the attempt for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewSnapshot {
    pub phase: Phase,
    pub session: Option<Session>,
    /// Size of the full question list before filtering.
    pub total_questions: usize,
    pub active_questions: Vec<Question>,
    pub current_index: usize,
    pub current_question: Option<Question>,
    pub draft: String,
    pub answers: BTreeMap<QuestionId, String>,
    /// Parallel to `active_questions`: whether each one has a buffered answer.
    pub answered: Vec<bool>,
    pub follow_up: Option<String>,
    pub remaining_secs: u64,
    pub clock: String,
    pub urgency: Urgency,
    pub progress: f64,
    pub is_loading: bool,
    pub is_requesting_follow_up: bool,
    pub is_completing: bool,
}

impl InterviewSnapshot {
    pub fn current_answer(&self) -> Option<&str> {
        self.current_question
            .as_ref()
            .and_then(|q| self.answers.get(&q.id))
            .map(String::as_str)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.active_questions.len()
    }
}
