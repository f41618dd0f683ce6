use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the question bank, as supplied by the bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub variants: Vec<String>,
    pub correct_answer: String,
}

/// A selected question with its option order fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuestion {
    pub record: QuestionRecord,
    pub original_index: usize,
    pub shuffled_variants: Vec<String>,
}

impl PreparedQuestion {
    pub fn correct_answer(&self) -> &str {
        &self.record.correct_answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkingSet {
    pub prepared_questions: Vec<PreparedQuestion>,
    /// Added to a position to get the number shown to the user.
    pub index_offset: usize,
}

impl WorkingSet {
    pub fn len(&self) -> usize {
        self.prepared_questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prepared_questions.is_empty()
    }
}

/// Position in the working set -> selected option text. Missing key means unanswered.
pub type AnswerMap = BTreeMap<usize, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current_page: usize,
    pub answers: AnswerMap,
    pub submitted: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions whose recorded answer equals the correct one.
    pub fn score(&self, working_set: &WorkingSet) -> usize {
        working_set
            .prepared_questions
            .iter()
            .enumerate()
            .filter(|(position, q)| {
                self.answers
                    .get(position)
                    .is_some_and(|answer| answer == q.correct_answer())
            })
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
}

impl ScoreSummary {
    /// `round(100 * score / total)`, or 0 for an empty working set.
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (200 * self.score + self.total) / (2 * self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// Start over with freshly shuffled options.
    #[default]
    Reshuffle,
    /// Start over keeping the option order of the first attempt.
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Submit,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    QuestionListTop,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(correct: &str, variants: &[&str]) -> PreparedQuestion {
        let variants: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
        PreparedQuestion {
            record: QuestionRecord {
                question: "Q".to_string(),
                variants: variants.clone(),
                correct_answer: correct.to_string(),
            },
            original_index: 0,
            shuffled_variants: variants,
        }
    }

    #[test]
    fn test_score_ignores_unanswered_positions() {
        let ws = WorkingSet {
            prepared_questions: vec![
                prepared("B", &["A", "B"]),
                prepared("A", &["A", "B"]),
                prepared("A", &["A", "B"]),
            ],
            index_offset: 0,
        };
        let mut state = SessionState::new();
        state.answers.insert(0, "B".to_string());
        state.answers.insert(1, "B".to_string());

        assert_eq!(state.score(&ws), 1);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(ScoreSummary { score: 1, total: 3 }.percentage(), 33);
        assert_eq!(ScoreSummary { score: 2, total: 3 }.percentage(), 67);
        assert_eq!(ScoreSummary { score: 1, total: 2 }.percentage(), 50);
        assert_eq!(ScoreSummary { score: 1, total: 8 }.percentage(), 13);
        assert_eq!(ScoreSummary { score: 3, total: 3 }.percentage(), 100);
    }

    #[test]
    fn test_percentage_of_empty_set_is_zero() {
        assert_eq!(ScoreSummary { score: 0, total: 0 }.percentage(), 0);
    }

    #[test]
    fn test_new_session_state() {
        let state = SessionState::new();
        assert_eq!(state.current_page, 0);
        assert!(state.answers.is_empty());
        assert!(!state.submitted);
    }
}
