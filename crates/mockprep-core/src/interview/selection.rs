//! Active question selection.

use crate::session::{Question, SessionType};

/// Picks the questions shown during an attempt.
///
/// Subjective and MCQ sessions keep only questions of their own type; `full`
/// and `coding` sessions keep everything. The result is then truncated to
/// `question_count`, preserving server order. Never padded: fewer matches
/// than requested yields a shorter list.
pub fn select_active_questions(
    all: &[Question],
    session_type: SessionType,
    question_count: u32,
) -> Vec<Question> {
    let filter = session_type.question_filter();
    all.iter()
        .filter(|q| filter.is_none_or(|kind| q.kind == kind))
        .take(question_count as usize)
        .cloned()
        .collect()
}

/// Completion percentage shown in the progress bar.
pub fn progress_percent(current_index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((current_index + 1) as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::QuestionType;

    fn question(id: i64, kind: QuestionType) -> Question {
        Question {
            id,
            kind,
            question_text: format!("Question {id}"),
            topic: None,
            options: None,
            difficulty: None,
            model_answer: None,
            explanation: None,
        }
    }

    fn mixed_bank() -> Vec<Question> {
        vec![
            question(1, QuestionType::Subjective),
            question(2, QuestionType::Mcq),
            question(3, QuestionType::Subjective),
            question(4, QuestionType::Subjective),
            question(5, QuestionType::Mcq),
            question(6, QuestionType::Subjective),
            question(7, QuestionType::Subjective),
        ]
    }

    #[test]
    fn test_mcq_session_is_never_padded() {
        let active = select_active_questions(&mixed_bank(), SessionType::Mcq, 3);
        let ids: Vec<_> = active.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_subjective_session_filters_and_truncates() {
        let active = select_active_questions(&mixed_bank(), SessionType::Subjective, 3);
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|q| q.kind == QuestionType::Subjective));
        let ids: Vec<_> = active.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_full_session_takes_prefix_in_order() {
        let bank = mixed_bank();
        let active = select_active_questions(&bank, SessionType::Full, 4);
        assert_eq!(active, bank[..4].to_vec());
    }

    #[test]
    fn test_coding_session_passes_everything_through() {
        let bank = mixed_bank();
        let active = select_active_questions(&bank, SessionType::Coding, 20);
        assert_eq!(active, bank);
    }

    #[test]
    fn test_type_filtered_sessions_respect_count_for_all_counts() {
        let bank = mixed_bank();
        for count in 0..10 {
            for session_type in [SessionType::Subjective, SessionType::Mcq] {
                let active = select_active_questions(&bank, session_type, count);
                assert!(active.len() <= count as usize);
                let expected = session_type.question_filter().unwrap();
                assert!(active.iter().all(|q| q.kind == expected));
            }
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(0, 4), 25.0);
        assert_eq!(progress_percent(3, 4), 100.0);
    }
}
