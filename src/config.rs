use crate::logger::DEFAULT_LOG_FILE;
use crate::models::ResetMode;
use crate::selector::SelectionParams;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResetArg {
    /// Start over with a fresh option order
    Reshuffle,
    /// Start over keeping the current option order
    Preserve,
}

impl From<ResetArg> for ResetMode {
    fn from(arg: ResetArg) -> Self {
        match arg {
            ResetArg::Reshuffle => ResetMode::Reshuffle,
            ResetArg::Preserve => ResetMode::Preserve,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "quiz-viewer",
    version,
    about = "Paginated multiple-choice quiz in the terminal"
)]
pub struct Cli {
    #[arg(help = "Question bank (JSON array or `const questions = [...]` script)")]
    pub bank: PathBuf,

    #[arg(long, help = "Selection mode; `all` ignores any range")]
    pub mode: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "First question of the range (inclusive)")]
    pub start: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "End of the range (exclusive)")]
    pub end: Option<String>,

    #[arg(short, long, help = "Query string, e.g. `start=0&end=30` or `mode=all`")]
    pub query: Option<String>,

    #[arg(long, value_enum, default_value_t = ResetArg::Reshuffle, help = "What starting over does to option order")]
    pub reset: ResetArg,

    #[arg(long, help = "Seed for the option shuffle")]
    pub seed: Option<u64>,

    #[arg(long, default_value = DEFAULT_LOG_FILE, help = "Log file")]
    pub log: PathBuf,

    #[arg(long, help = "Disable logging")]
    pub no_log: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bank_path: PathBuf,
    pub selection: SelectionParams,
    pub reset_mode: ResetMode,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mut selection = cli
            .query
            .as_deref()
            .map(parse_query)
            .unwrap_or_default();

        if cli.mode.is_some() {
            selection.mode = cli.mode;
        }
        if cli.start.is_some() {
            selection.start = cli.start;
        }
        if cli.end.is_some() {
            selection.end = cli.end;
        }

        Self {
            bank_path: cli.bank,
            selection,
            reset_mode: cli.reset.into(),
            seed: cli.seed,
            log_file: (!cli.no_log).then_some(cli.log),
        }
    }
}

impl Config {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}

/// Reads `mode`, `start` and `end` from a URL-style query. A leading `?` is allowed;
/// the first occurrence of a key wins.
pub fn parse_query(query: &str) -> SelectionParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = SelectionParams::default();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let slot = match &*key {
            "mode" => &mut params.mode,
            "start" => &mut params.start,
            "end" => &mut params.end,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    params
}
