use crate::models::ScrollTarget;
use crate::session::{Outcome, QuizController};
use crate::view::PageView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::Rng;

/// Terminal-side state around a [`QuizController`]: which option has focus
/// and how far the card list is scrolled.
#[derive(Debug)]
pub struct QuizApp<R: Rng = StdRng> {
    pub controller: QuizController<R>,
    /// Flattened index over every option on the current page.
    pub focus: usize,
    pub list_scroll: u16,
    pub scroll_target: ScrollTarget,
    pub should_quit: bool,
}

impl<R: Rng> QuizApp<R> {
    pub fn new(controller: QuizController<R>) -> Self {
        Self {
            controller,
            focus: 0,
            list_scroll: 0,
            scroll_target: ScrollTarget::QuestionListTop,
            should_quit: false,
        }
    }

    pub fn view(&self) -> PageView {
        self.controller.view()
    }

    /// (card index on the page, option index within the card) of the focused option.
    pub fn focused_option(&self, view: &PageView) -> Option<(usize, usize)> {
        let mut remaining = self.focus;
        for (card_index, card) in view.cards.iter().enumerate() {
            if remaining < card.options.len() {
                return Some((card_index, remaining));
            }
            remaining -= card.options.len();
        }
        None
    }

    fn option_count(view: &PageView) -> usize {
        view.cards.iter().map(|c| c.options.len()).sum()
    }

    fn apply_scroll(&mut self, target: ScrollTarget) {
        self.scroll_target = target;
        if target == ScrollTarget::QuestionListTop {
            self.focus = 0;
            self.list_scroll = 0;
        }
    }

    fn focus_down(&mut self) {
        let count = Self::option_count(&self.view());
        if self.focus + 1 < count {
            self.focus += 1;
        }
    }

    fn focus_up(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    fn select_focused(&mut self) {
        let view = self.view();
        if let Some((card_index, option_index)) = self.focused_option(&view) {
            let card = &view.cards[card_index];
            let text = &card.options[option_index].text;
            self.controller.select_option(card.position, text);
        }
    }

    fn answer_confirmation(&mut self, accepted: bool) {
        if let Some(target) = self
            .controller
            .confirm(accepted)
            .as_ref()
            .and_then(Outcome::scroll)
        {
            self.apply_scroll(target);
        }
    }
}

pub fn handle_quiz_input<R: Rng>(app: &mut QuizApp<R>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.controller.pending().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.answer_confirmation(true)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.answer_confirmation(false)
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.select_focused(),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            if let Some(target) = app.controller.next_page() {
                app.apply_scroll(target);
            }
        }
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            if let Some(target) = app.controller.prev_page() {
                app.apply_scroll(target);
            }
        }
        KeyCode::Home => {
            if let Some(target) = app.controller.go_to_page(0) {
                app.apply_scroll(target);
            }
        }
        KeyCode::Char('s') => {
            app.controller.request_submit();
        }
        KeyCode::Char('r') => {
            app.controller.request_reset();
        }
        _ => {}
    }
}
