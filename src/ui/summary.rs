use crate::models::ScoreSummary;
use crate::view::summary_line;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Results panel shown under the question list after submission.
pub fn draw_summary(f: &mut Frame, area: Rect, summary: &ScoreSummary, highlighted: bool) {
    let color = match summary.percentage() {
        p if p >= 80 => Color::Green,
        p if p >= 50 => Color::Yellow,
        _ => Color::Red,
    };

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        summary_line(summary),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let border_style = if highlighted {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let panel = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Results"),
        );
    f.render_widget(panel, area);
}
