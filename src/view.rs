//! Derives what the screen shows from the session state.
//!
//! Rendering is a pure function of `(SessionState, WorkingSet, page_size)`:
//! the same inputs always give an equal [`PageView`].

use crate::models::{ScoreSummary, SessionState, WorkingSet};
use crate::pager::{display_page_count, has_next, has_prev, page_bounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVerdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    pub checked: bool,
    pub disabled: bool,
    pub mark: Option<OptionMark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCardView {
    pub position: usize,
    /// 1-based number including the display offset.
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub verdict: Option<CardVerdict>,
    pub feedback: Option<String>,
}

impl QuestionCardView {
    pub fn title(&self) -> String {
        format!("{}. {}", self.number, self.prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFooter {
    pub page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageFooter {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub cards: Vec<QuestionCardView>,
    pub footer: PageFooter,
    pub submit_visible: bool,
    pub reset_visible: bool,
    pub summary: Option<ScoreSummary>,
}

pub fn correct_answer_line(correct: &str) -> String {
    format!("Correct answer: {}", correct)
}

pub fn no_answer_line(correct: &str) -> String {
    format!("You did not answer. Correct answer: {}", correct)
}

pub fn summary_line(summary: &ScoreSummary) -> String {
    format!(
        "You answered {} of {} questions correctly ({}%).",
        summary.score,
        summary.total,
        summary.percentage()
    )
}

pub fn render(state: &SessionState, working_set: &WorkingSet, page_size: usize) -> PageView {
    let len = working_set.len();
    let bounds = page_bounds(state.current_page, len, page_size);

    let cards = bounds
        .map(|position| render_card(state, working_set, position))
        .collect();

    let footer = PageFooter {
        page: state.current_page + 1,
        total_pages: display_page_count(len, page_size),
        prev_enabled: has_prev(state.current_page),
        next_enabled: has_next(state.current_page, len, page_size),
    };

    let summary = state.submitted.then(|| ScoreSummary {
        score: state.score(working_set),
        total: len,
    });

    PageView {
        cards,
        footer,
        submit_visible: !state.submitted,
        reset_visible: state.submitted,
        summary,
    }
}

fn render_card(state: &SessionState, working_set: &WorkingSet, position: usize) -> QuestionCardView {
    let question = &working_set.prepared_questions[position];
    let correct = question.correct_answer();
    let selected = state.answers.get(&position).map(String::as_str);

    let options = question
        .shuffled_variants
        .iter()
        .map(|variant| {
            let mark = if !state.submitted {
                None
            } else if variant == correct {
                Some(OptionMark::Correct)
            } else if selected == Some(variant.as_str()) {
                Some(OptionMark::Incorrect)
            } else {
                None
            };
            OptionView {
                text: variant.clone(),
                checked: selected == Some(variant.as_str()),
                disabled: state.submitted,
                mark,
            }
        })
        .collect();

    let (verdict, feedback) = if state.submitted {
        if selected == Some(correct) {
            (Some(CardVerdict::Correct), None)
        } else if selected.is_none() {
            (Some(CardVerdict::Incorrect), Some(no_answer_line(correct)))
        } else {
            (Some(CardVerdict::Incorrect), Some(correct_answer_line(correct)))
        }
    } else {
        (None, None)
    };

    QuestionCardView {
        position,
        number: working_set.index_offset + position + 1,
        prompt: question.record.question.clone(),
        options,
        verdict,
        feedback,
    }
}
