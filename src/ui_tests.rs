#[cfg(test)]
mod ui_integration_tests {
    use crate::app::{handle_quiz_input, QuizApp};
    use crate::models::{QuestionRecord, ResetMode, ScrollTarget};
    use crate::selector::SelectionParams;
    use crate::session::QuizController;
    use crate::shuffle::build_working_set;
    use crate::ui::draw_quiz;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_app(bank: &[QuestionRecord], params: SelectionParams) -> QuizApp {
        let mut rng = StdRng::seed_from_u64(17);
        let ws = build_working_set(bank, &params, &mut rng);
        QuizApp::new(QuizController::new(ws, ResetMode::Preserve, rng))
    }

    fn scenario_bank() -> Vec<QuestionRecord> {
        [("Q1", "B"), ("Q2", "A"), ("Q3", "D")]
            .iter()
            .map(|(q, correct)| QuestionRecord {
                question: q.to_string(),
                variants: ["A", "B", "C", "D"].iter().map(|v| v.to_string()).collect(),
                correct_answer: correct.to_string(),
            })
            .collect()
    }

    fn large_bank(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| QuestionRecord {
                question: format!("Question number {}", i + 1),
                variants: vec!["yes".to_string(), "no".to_string()],
                correct_answer: "yes".to_string(),
            })
            .collect()
    }

    fn press(app: &mut QuizApp, code: KeyCode) {
        handle_quiz_input(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// Draws the app and returns the screen as one string per row.
    fn draw(app: &mut QuizApp, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_quiz(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_initial_screen_shows_cards_and_footer() {
        let mut app = create_test_app(&scenario_bank(), SelectionParams::default());
        let rows = draw(&mut app, 80, 40);

        assert!(screen_contains(&rows, "1. Q1"));
        assert!(screen_contains(&rows, "3. Q3"));
        assert!(screen_contains(&rows, "Page 1 of 1"));
        assert!(screen_contains(&rows, "Finish"));
        assert!(!screen_contains(&rows, "Results"));
    }

    #[test]
    fn test_offset_numbering_on_screen() {
        let bank = large_bank(50);
        let mut app = create_test_app(&bank, SelectionParams::range(10, 20));
        let rows = draw(&mut app, 80, 60);

        assert!(screen_contains(&rows, "11. Question number 11"));
        assert!(screen_contains(&rows, "Questions 11-20 (10 selected)"));
    }

    #[test]
    fn test_submitted_screen_shows_feedback_and_results() {
        let mut app = create_test_app(&scenario_bank(), SelectionParams::default());
        app.controller.select_option(0, "B");
        app.controller.select_option(1, "C");
        press(&mut app, KeyCode::Char('s'));

        let rows = draw(&mut app, 80, 50);
        assert!(screen_contains(&rows, "Finish Test"));
        assert!(screen_contains(&rows, "Are you sure you want to finish the test?"));

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.scroll_target, ScrollTarget::Summary);

        let rows = draw(&mut app, 80, 50);
        assert!(screen_contains(&rows, "Results"));
        assert!(screen_contains(
            &rows,
            "You answered 1 of 3 questions correctly (33%)."
        ));
        assert!(screen_contains(&rows, "Correct answer: A"));
        assert!(screen_contains(&rows, "You did not answer. Correct answer: D"));
        assert!(screen_contains(&rows, "Start Over"));
        assert!(!screen_contains(&rows, " Finish "));
    }

    #[test]
    fn test_empty_selection_screen() {
        let bank = large_bank(5);
        let mut app = create_test_app(&bank, SelectionParams::range(9, 12));
        let rows = draw(&mut app, 80, 20);

        assert!(screen_contains(&rows, "No questions selected."));
        assert!(screen_contains(&rows, "Page 1 of 1"));
    }

    #[test]
    fn test_second_page_after_navigation() {
        let bank = large_bank(31);
        let mut app = create_test_app(&bank, SelectionParams::all());
        press(&mut app, KeyCode::Right);

        let rows = draw(&mut app, 80, 30);
        assert!(screen_contains(&rows, "Page 2 of 2"));
        assert!(screen_contains(&rows, "31. Question number 31"));
        assert!(!screen_contains(&rows, "1. Question number 1 "));
    }

    #[test]
    fn test_list_scrolls_to_keep_focus_visible() {
        let bank = large_bank(30);
        let mut app = create_test_app(&bank, SelectionParams::all());

        for _ in 0..40 {
            press(&mut app, KeyCode::Down);
        }
        let rows = draw(&mut app, 80, 24);
        assert!(app.list_scroll > 0);
        assert!(screen_contains(&rows, "21. Question number 21"));
        assert!(!screen_contains(&rows, "1. Question number 1 "));

        press(&mut app, KeyCode::Home);
        assert_eq!(app.list_scroll, 0);
    }

    #[test]
    fn test_redraw_is_stable() {
        let mut app = create_test_app(&scenario_bank(), SelectionParams::default());
        app.controller.select_option(2, "D");
        let first = draw(&mut app, 80, 40);
        let second = draw(&mut app, 80, 40);
        assert_eq!(first, second);
    }
}
