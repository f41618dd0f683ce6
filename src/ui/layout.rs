use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    /// Only present once results are shown.
    pub summary_area: Option<Rect>,
    pub footer_area: Rect,
}

pub const SUMMARY_HEIGHT: u16 = 4;

pub fn calculate_quiz_chunks(area: Rect, with_summary: bool) -> QuizLayout {
    if with_summary {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(SUMMARY_HEIGHT),
                Constraint::Length(4),
            ])
            .split(area);

        QuizLayout {
            header_area: chunks[0],
            list_area: chunks[1],
            summary_area: Some(chunks[2]),
            footer_area: chunks[3],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(4),
            ])
            .split(area);

        QuizLayout {
            header_area: chunks[0],
            list_area: chunks[1],
            summary_area: None,
            footer_area: chunks[2],
        }
    }
}

/// Centered rectangle taking `percent_x` of the width and `height` rows.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_quiz_chunks(area, false);

        // margin 1 leaves 48 rows: 3 header + 4 footer
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 4);
        assert_eq!(layout.list_area.height, 41);
        assert!(layout.summary_area.is_none());
    }

    #[test]
    fn test_quiz_layout_with_summary() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_quiz_chunks(area, true);

        let summary = layout.summary_area.unwrap();
        assert_eq!(summary.height, SUMMARY_HEIGHT);
        assert_eq!(layout.list_area.height, 41 - SUMMARY_HEIGHT);
        assert_eq!(summary.y, layout.list_area.y + layout.list_area.height);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 7, area);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.width, 60);
        assert!(popup.x >= 19 && popup.x <= 21);
    }
}
