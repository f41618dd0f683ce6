pub mod app;
pub mod bank;
pub mod config;
pub mod logger;
pub mod models;
pub mod pager;
pub mod selector;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod utils;
pub mod view;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use app::{handle_quiz_input, QuizApp};
pub use bank::{load_bank, parse_bank, BankError};
pub use config::{Cli, Config};
pub use models::{
    AnswerMap, Confirmation, PreparedQuestion, QuestionRecord, ResetMode, ScoreSummary,
    ScrollTarget, SessionState, WorkingSet,
};
pub use pager::PAGE_SIZE;
pub use selector::{select, SelectionParams};
pub use session::{Outcome, QuizController};
pub use shuffle::{build_working_set, fisher_yates};
pub use ui::draw_quiz;
pub use view::{render, PageView};
