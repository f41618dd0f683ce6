use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quiz_viewer::{
    draw_quiz, handle_quiz_input, load_bank, logger, select, shuffle::prepare,
    view::summary_line, Config, QuizApp, QuizController, SelectionParams, WorkingSet,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};

fn main() -> Result<()> {
    let config = Config::from_args();

    if let Some(path) = &config.log_file
        && let Err(e) = logger::init(path)
    {
        eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
    }

    let bank = load_bank(&config.bank_path)
        .with_context(|| format!("failed to load {}", config.bank_path.display()))?;
    logger::info(&format!(
        "Loaded {} questions from {}",
        bank.len(),
        config.bank_path.display()
    ));

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let selection = select(&bank, &config.selection);
    if selection.fallback && config.selection != SelectionParams::default() {
        logger::warn(&format!(
            "Unusable selection {:?}, using the whole bank",
            config.selection
        ));
    }
    logger::info(&format!(
        "Selected {} questions (offset {})",
        selection.records.len(),
        selection.index_offset
    ));

    let working_set = WorkingSet {
        prepared_questions: prepare(selection.records, &mut rng),
        index_offset: selection.index_offset,
    };
    let mut app = QuizApp::new(QuizController::new(working_set, config.reset_mode, rng));

    let mut terminal = setup_terminal(io::stdout())?;

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    result?;

    if app.controller.state().submitted {
        println!("{}", summary_line(&app.controller.score()));
    }
    logger::info("Exited");

    Ok(())
}

/// Enters raw mode and the alternate screen. If any step fails, raw mode is
/// turned off again before the error is returned.
fn setup_terminal<W: Write>(mut out: W) -> io::Result<Terminal<CrosstermBackend<W>>> {
    enable_raw_mode()?;

    let entered = execute!(out, EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(out)));
    if entered.is_err() {
        let _ = disable_raw_mode();
    }
    entered
}

fn restore_terminal<W: Write>(terminal: &mut Terminal<CrosstermBackend<W>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    raw
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut QuizApp,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_quiz(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_quiz_input(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
