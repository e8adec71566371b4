//! Post-interview review model.
//!
//! Evaluation runs asynchronously on the server, so a review may be built
//! while scores are still being written. `evaluation_pending` reports that
//! state instead of treating missing scores as zero.

use serde::Serialize;

use crate::session::{EvaluatedAnswer, Question, QuestionId, QuestionType, Session};

const MCQ_MAX_POINTS: i64 = 1;
const SUBJECTIVE_MAX_POINTS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    /// ≥70% strong, ≥50% fair. Nothing scorable is weak, matching the 0%
    /// shown for it.
    fn classify(score: i64, max: i64) -> Self {
        if max <= 0 {
            return ScoreBand::Weak;
        }
        let score = score as f64;
        let max = max as f64;
        if score >= max * 0.7 {
            ScoreBand::Strong
        } else if score >= max * 0.5 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    pub question: Question,
    pub answer: Option<EvaluatedAnswer>,
    pub max_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub session: Session,
    pub rows: Vec<ReviewRow>,
    pub score: i64,
    pub max_score: i64,
    pub percentage: u32,
    pub band: ScoreBand,
    pub evaluation_pending: bool,
}

impl ReviewSummary {
    pub fn build(session: Session, questions: Vec<Question>, answers: Vec<EvaluatedAnswer>) -> Self {
        let rows: Vec<ReviewRow> = questions
            .into_iter()
            .map(|question| {
                let answer = answers
                    .iter()
                    .find(|a| a.question_id == question.id)
                    .cloned();
                ReviewRow {
                    max_points: max_points(question.kind),
                    question,
                    answer,
                }
            })
            .collect();

        let max_score: i64 = rows.iter().map(|r| r.max_points).sum();
        let score = session.score.unwrap_or(0);
        let percentage = percentage(score, max_score);
        let evaluation_pending = !session.is_completed();

        Self {
            band: ScoreBand::classify(score, max_score),
            session,
            rows,
            score,
            max_score,
            percentage,
            evaluation_pending,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.rows.iter().filter(|r| r.answer.is_some()).count()
    }

    pub fn row(&self, question_id: QuestionId) -> Option<&ReviewRow> {
        self.rows.iter().find(|r| r.question.id == question_id)
    }

    /// Subjective questions still lacking a usable model answer, in order.
    pub fn missing_model_answers(&self) -> Vec<QuestionId> {
        self.rows
            .iter()
            .filter(|r| r.question.needs_model_answer())
            .map(|r| r.question.id)
            .collect()
    }

    /// Merges a freshly generated model answer into the matching row.
    ///
    /// Only the answer fields are taken from `updated`; the rest of the row
    /// keeps what the review was built from. Returns false when no row
    /// matches.
    pub fn apply_model_answer(&mut self, updated: Question) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.question.id == updated.id) else {
            return false;
        };
        row.question.model_answer = updated.model_answer;
        if updated.explanation.is_some() {
            row.question.explanation = updated.explanation;
        }
        true
    }
}

fn max_points(kind: QuestionType) -> i64 {
    match kind {
        QuestionType::Mcq => MCQ_MAX_POINTS,
        QuestionType::Subjective | QuestionType::Coding => SUBJECTIVE_MAX_POINTS,
    }
}

/// Rounded percentage capped at 100; 0 when nothing was scorable.
fn percentage(score: i64, max: i64) -> u32 {
    if max <= 0 {
        return 0;
    }
    let pct = ((score as f64 / max as f64) * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStatus, SessionType};

    fn question(id: i64, kind: QuestionType) -> Question {
        Question {
            id,
            kind,
            question_text: format!("Q{id}"),
            topic: None,
            options: None,
            difficulty: None,
            model_answer: None,
            explanation: None,
        }
    }

    fn session(status: SessionStatus, score: Option<i64>) -> Session {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "type": "full",
            "status": status,
            "score": score,
        }))
        .unwrap()
    }

    fn answer(question_id: i64, score: i64) -> EvaluatedAnswer {
        EvaluatedAnswer {
            id: question_id * 10,
            session_id: 1,
            question_id,
            user_answer: Some("x".into()),
            score,
            ai_feedback: None,
        }
    }

    #[test]
    fn test_max_score_weights_mcq_and_subjective() {
        let summary = ReviewSummary::build(
            session(SessionStatus::Completed, Some(12)),
            vec![
                question(1, QuestionType::Mcq),
                question(2, QuestionType::Subjective),
                question(3, QuestionType::Mcq),
            ],
            vec![answer(1, 1), answer(2, 10), answer(3, 1)],
        );

        assert_eq!(summary.max_score, 12);
        assert_eq!(summary.percentage, 100);
        assert_eq!(summary.band, ScoreBand::Strong);
        assert!(!summary.evaluation_pending);
        assert_eq!(summary.answered_count(), 3);
    }

    #[test]
    fn test_percentage_is_capped_and_rounded() {
        assert_eq!(percentage(13, 12), 100);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::classify(7, 10), ScoreBand::Strong);
        assert_eq!(ScoreBand::classify(5, 10), ScoreBand::Fair);
        assert_eq!(ScoreBand::classify(4, 10), ScoreBand::Weak);
    }

    #[test]
    fn test_nothing_scorable_is_weak() {
        let summary = ReviewSummary::build(session(SessionStatus::Completed, Some(0)), vec![], vec![]);
        assert_eq!(summary.max_score, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.band, ScoreBand::Weak);
    }

    #[test]
    fn test_generated_model_answer_is_merged_into_row() {
        let mut placeholder = question(2, QuestionType::Subjective);
        placeholder.model_answer = Some("Model answer not available.".into());
        let mut summary = ReviewSummary::build(
            session(SessionStatus::Completed, Some(1)),
            vec![question(1, QuestionType::Mcq), placeholder],
            vec![answer(2, 1)],
        );
        assert_eq!(summary.missing_model_answers(), vec![2]);

        let mut updated = question(2, QuestionType::Subjective);
        updated.question_text = "changed upstream".into();
        updated.model_answer = Some("Borrowing lends access without moving".into());
        assert!(summary.apply_model_answer(updated));

        let row = summary.row(2).unwrap();
        assert_eq!(
            row.question.usable_model_answer(),
            Some("Borrowing lends access without moving")
        );
        assert_eq!(row.question.question_text, "Q2");
        assert!(summary.missing_model_answers().is_empty());
        assert!(!summary.apply_model_answer(question(9, QuestionType::Subjective)));
    }

    #[test]
    fn test_pending_evaluation_and_unanswered_rows() {
        let summary = ReviewSummary::build(
            session(SessionStatus::InProgress, None),
            vec![
                question(1, QuestionType::Subjective),
                question(2, QuestionType::Subjective),
            ],
            vec![answer(2, 0)],
        );

        assert!(summary.evaluation_pending);
        assert_eq!(summary.score, 0);
        assert!(summary.rows[0].answer.is_none());
        assert_eq!(summary.rows[1].answer.as_ref().map(|a| a.id), Some(20));
        assert_eq!(summary.session.session_type, SessionType::Full);
    }
}
