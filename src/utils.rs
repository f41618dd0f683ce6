use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` display columns, ending in "...".
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Number of rows `text` occupies when word-wrapped to `max_width` columns
/// (an estimate of ratatui word wrapping, used for scroll-follow).
pub fn wrapped_line_count(text: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return text.lines().count().max(1);
    }

    text.split('\n')
        .map(|line| {
            let mut rows = 1;
            let mut current = 0;
            for word in line.split_whitespace() {
                let w = word.width();
                if current == 0 {
                    current = w;
                } else if current + 1 + w <= max_width {
                    current += 1 + w;
                } else {
                    rows += 1;
                    current = w;
                }
                while current > max_width {
                    rows += 1;
                    current -= max_width;
                }
            }
            rows
        })
        .sum()
}

/// Smallest scroll offset that keeps rows `[start, start + height)` inside a
/// viewport of `visible` rows currently scrolled to `scroll`.
pub fn follow_scroll(scroll: usize, start: usize, height: usize, visible: usize) -> usize {
    if visible == 0 {
        return start;
    }
    if start < scroll {
        start
    } else if start + height > scroll + visible {
        (start + height).saturating_sub(visible).min(start)
    } else {
        scroll
    }
}
