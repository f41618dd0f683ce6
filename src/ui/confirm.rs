use crate::models::Confirmation;
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_confirmation(f: &mut Frame, confirmation: Confirmation) {
    let area = centered_rect(60, 7, f.area());
    f.render_widget(Clear, area);

    let title = match confirmation {
        Confirmation::Submit => "Finish Test",
        Confirmation::Reset => "Start Over",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            confirmation.prompt(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Yes  "),
            Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from(" No"),
        ]),
    ];

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(title),
        );
    f.render_widget(popup, area);
}
