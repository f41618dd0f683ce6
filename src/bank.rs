use crate::models::QuestionRecord;
use crate::utils::truncate_string;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("cannot read question bank {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question bank does not contain a `[...]` array")]
    MissingArray,
    #[error("question #{index} has no variants")]
    EmptyVariants { index: usize },
    #[error("question #{index} ({question:?}): correct answer is not one of the variants")]
    CorrectAnswerNotInVariants { index: usize, question: String },
}

pub fn load_bank(path: &Path) -> Result<Vec<QuestionRecord>, BankError> {
    let content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bank(&content)
}

/// Accepts a bare JSON array or a JSON array wrapped in a script such as
/// `const questions = [...];`. `//` comments before the array and a trailing comma
/// after the last record are tolerated. The records themselves must be strict JSON.
pub fn parse_bank(content: &str) -> Result<Vec<QuestionRecord>, BankError> {
    let array = extract_array(content).ok_or(BankError::MissingArray)?;
    let records: Vec<QuestionRecord> = serde_json::from_str(&array)?;

    for (index, record) in records.iter().enumerate() {
        validate_record(index, record)?;
    }

    Ok(records)
}

fn extract_array(content: &str) -> Option<Cow<'_, str>> {
    let start = array_start(content)?;
    let end = content.rfind(']')?;
    if end < start {
        return None;
    }

    let items = content[start + 1..end].trim_end();
    match items.strip_suffix(',') {
        Some(items) => Some(Cow::Owned(format!("[{}]", items))),
        None => Some(Cow::Borrowed(&content[start..=end])),
    }
}

/// Byte offset of the first `[` that is not inside a `//` line comment.
fn array_start(content: &str) -> Option<usize> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let code = line.find("//").map_or(line, |i| &line[..i]);
        if let Some(i) = code.find('[') {
            return Some(offset + i);
        }
        offset += line.len();
    }
    None
}

fn validate_record(index: usize, record: &QuestionRecord) -> Result<(), BankError> {
    if record.variants.is_empty() {
        return Err(BankError::EmptyVariants { index });
    }
    if !record.variants.contains(&record.correct_answer) {
        return Err(BankError::CorrectAnswerNotInVariants {
            index,
            question: truncate_string(&record.question, 60),
        });
    }
    Ok(())
}
