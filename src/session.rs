use crate::logger;
use crate::models::{
    Confirmation, ResetMode, ScoreSummary, ScrollTarget, SessionState, WorkingSet,
};
use crate::pager::{has_next, has_prev, page_count, PAGE_SIZE};
use crate::shuffle::prepare_question;
use crate::view::{render, summary_line, PageView};
use rand::rngs::StdRng;
use rand::Rng;

pub const SUBMIT_PROMPT: &str = "Are you sure you want to finish the test?";
pub const RESET_PROMPT: &str = "Start over? All answers will be reset.";

impl Confirmation {
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirmation::Submit => SUBMIT_PROMPT,
            Confirmation::Reset => RESET_PROMPT,
        }
    }
}

/// Result of a confirmed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Submitted {
        summary: ScoreSummary,
        scroll: ScrollTarget,
    },
    Reset {
        reshuffled: bool,
        scroll: ScrollTarget,
    },
    Declined(Confirmation),
}

impl Outcome {
    pub fn scroll(&self) -> Option<ScrollTarget> {
        match self {
            Outcome::Submitted { scroll, .. } | Outcome::Reset { scroll, .. } => Some(*scroll),
            Outcome::Declined(_) => None,
        }
    }
}

/// Owns the only mutable state of a quiz session. Submit and reset are two-step:
/// a request parks a [`Confirmation`], and only `confirm(true)` applies it.
#[derive(Debug)]
pub struct QuizController<R: Rng = StdRng> {
    working_set: WorkingSet,
    state: SessionState,
    reset_mode: ResetMode,
    pending: Option<Confirmation>,
    page_size: usize,
    rng: R,
}

impl<R: Rng> QuizController<R> {
    pub fn new(working_set: WorkingSet, reset_mode: ResetMode, rng: R) -> Self {
        Self {
            working_set,
            state: SessionState::new(),
            reset_mode,
            pending: None,
            page_size: PAGE_SIZE,
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    pub fn pending(&self) -> Option<Confirmation> {
        self.pending
    }

    pub fn view(&self) -> PageView {
        render(&self.state, &self.working_set, self.page_size)
    }

    pub fn score(&self) -> ScoreSummary {
        ScoreSummary {
            score: self.state.score(&self.working_set),
            total: self.working_set.len(),
        }
    }

    /// Records `text` as the answer for `position`. Ignored after submission
    /// and for positions outside the working set.
    pub fn select_option(&mut self, position: usize, text: &str) -> bool {
        if self.state.submitted || position >= self.working_set.len() {
            return false;
        }
        self.state.answers.insert(position, text.to_string());
        true
    }

    pub fn next_page(&mut self) -> Option<ScrollTarget> {
        if !has_next(self.state.current_page, self.working_set.len(), self.page_size) {
            return None;
        }
        self.state.current_page += 1;
        logger::debug(&format!("Moved to page {}", self.state.current_page + 1));
        Some(ScrollTarget::QuestionListTop)
    }

    pub fn prev_page(&mut self) -> Option<ScrollTarget> {
        if !has_prev(self.state.current_page) {
            return None;
        }
        self.state.current_page -= 1;
        logger::debug(&format!("Moved to page {}", self.state.current_page + 1));
        Some(ScrollTarget::QuestionListTop)
    }

    pub fn go_to_page(&mut self, page: usize) -> Option<ScrollTarget> {
        let pages = page_count(self.working_set.len(), self.page_size).max(1);
        if page >= pages {
            return None;
        }
        self.state.current_page = page;
        logger::debug(&format!("Jumped to page {}", page + 1));
        Some(ScrollTarget::QuestionListTop)
    }

    pub fn request_submit(&mut self) -> Option<Confirmation> {
        if self.state.submitted {
            return None;
        }
        self.pending = Some(Confirmation::Submit);
        self.pending
    }

    pub fn request_reset(&mut self) -> Option<Confirmation> {
        if !self.state.submitted {
            return None;
        }
        self.pending = Some(Confirmation::Reset);
        self.pending
    }

    /// Answers the pending confirmation. `None` when nothing was pending.
    pub fn confirm(&mut self, accepted: bool) -> Option<Outcome> {
        let pending = self.pending.take()?;
        if !accepted {
            logger::info(&format!("Declined: {}", pending.prompt()));
            return Some(Outcome::Declined(pending));
        }
        let outcome = match pending {
            Confirmation::Submit => self.submit(),
            Confirmation::Reset => self.reset(),
        };
        Some(outcome)
    }

    fn submit(&mut self) -> Outcome {
        self.state.submitted = true;
        let summary = self.score();
        logger::info(&format!("Submitted: {}", summary_line(&summary)));
        Outcome::Submitted {
            summary,
            scroll: ScrollTarget::Summary,
        }
    }

    fn reset(&mut self) -> Outcome {
        self.state = SessionState::new();
        let reshuffled = self.reset_mode == ResetMode::Reshuffle;
        if reshuffled {
            for question in self.working_set.prepared_questions.iter_mut() {
                *question =
                    prepare_question(&question.record, question.original_index, &mut self.rng);
            }
        }
        logger::info(&format!("Session reset ({:?})", self.reset_mode));
        Outcome::Reset {
            reshuffled,
            scroll: ScrollTarget::QuestionListTop,
        }
    }
}
