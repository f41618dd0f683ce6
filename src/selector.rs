use crate::models::QuestionRecord;

pub const MODE_ALL: &str = "all";

/// Raw startup parameters. Values stay unparsed so that malformed input
/// can fall back to the full bank instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionParams {
    pub mode: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl SelectionParams {
    pub fn all() -> Self {
        Self {
            mode: Some(MODE_ALL.to_string()),
            ..Self::default()
        }
    }

    pub fn range(start: impl ToString, end: impl ToString) -> Self {
        Self {
            mode: None,
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub records: &'a [QuestionRecord],
    pub index_offset: usize,
    /// True when neither a mode nor a usable range was supplied.
    pub fallback: bool,
}

/// Reads the leading integer of `raw`: leading whitespace, an optional sign, then
/// digits. Anything after the digits is ignored (`"5abc"` and `"5.9"` give 5).
/// `None` when there are no digits. Values past the `i64` range saturate.
pub fn parse_bound(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.iter().fold(0i64, |acc, &d| {
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Some(value)
}

pub fn select<'a>(bank: &'a [QuestionRecord], params: &SelectionParams) -> Selection<'a> {
    if params.mode.as_deref() == Some(MODE_ALL) {
        return Selection {
            records: bank,
            index_offset: 0,
            fallback: false,
        };
    }

    let start = params.start.as_deref().and_then(parse_bound);
    let end = params.end.as_deref().and_then(parse_bound);

    match (start, end) {
        (Some(start), Some(end)) => {
            let start = clamp_bound(start, bank.len());
            let end = clamp_bound(end, bank.len()).max(start);
            Selection {
                records: &bank[start..end],
                index_offset: start,
                fallback: false,
            }
        }
        _ => Selection {
            records: bank,
            index_offset: 0,
            fallback: true,
        },
    }
}

fn clamp_bound(value: i64, len: usize) -> usize {
    usize::try_from(value.max(0)).map_or(len, |v| v.min(len))
}
