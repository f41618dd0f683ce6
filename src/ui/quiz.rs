use crate::app::QuizApp;
use crate::models::ScrollTarget;
use crate::ui::confirm::draw_confirmation;
use crate::ui::layout::calculate_quiz_chunks;
use crate::ui::summary::draw_summary;
use crate::utils::{follow_scroll, wrapped_line_count};
use crate::view::{CardVerdict, OptionMark, OptionView, PageView, QuestionCardView};
use rand::Rng;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_quiz<R: Rng>(f: &mut Frame, app: &mut QuizApp<R>) {
    let view = app.view();
    let layout = calculate_quiz_chunks(f.area(), view.summary.is_some());

    let header = Paragraph::new(header_text(&view, app.controller.working_set().len()))
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let focused = app.focused_option(&view);
    let text_width = layout.list_area.width.saturating_sub(2) as usize;
    let visible_height = layout.list_area.height.saturating_sub(2) as usize;

    let mut text = Text::default();
    let mut row = 0usize;
    let mut focus_rows = None;

    if view.cards.is_empty() {
        text.push_line(Line::from(Span::styled(
            "No questions selected.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (card_index, card) in view.cards.iter().enumerate() {
        for (option_index, line) in card_lines(card, focused, card_index) {
            let height = wrapped_line_count(&line_content(&line), text_width);
            if option_index.is_some_and(|i| focused == Some((card_index, i))) {
                focus_rows = Some((row, height));
            }
            row += height;
            text.push_line(line);
        }
    }

    if let Some((start, height)) = focus_rows {
        let scroll = follow_scroll(app.list_scroll as usize, start, height, visible_height);
        app.list_scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    }

    let list = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((app.list_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Questions"));
    f.render_widget(list, layout.list_area);

    if let (Some(area), Some(summary)) = (layout.summary_area, view.summary.as_ref()) {
        draw_summary(f, area, summary, app.scroll_target == ScrollTarget::Summary);
    }

    let footer = Paragraph::new(footer_lines(&view))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, layout.footer_area);

    if let Some(confirmation) = app.controller.pending() {
        draw_confirmation(f, confirmation);
    }
}

fn header_text(view: &PageView, total: usize) -> String {
    match (view.cards.first(), view.cards.last()) {
        (Some(first), Some(last)) => format!(
            "Questions {}-{} ({} selected)",
            first.number, last.number, total
        ),
        _ => "Quiz".to_string(),
    }
}

fn line_content(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Lines of one card, each tagged with the option index it renders (if any).
fn card_lines(
    card: &QuestionCardView,
    focused: Option<(usize, usize)>,
    card_index: usize,
) -> Vec<(Option<usize>, Line<'static>)> {
    let title_style = match card.verdict {
        Some(CardVerdict::Correct) => Style::default().fg(Color::Green),
        Some(CardVerdict::Incorrect) => Style::default().fg(Color::Red),
        None => Style::default(),
    }
    .add_modifier(Modifier::BOLD);

    let mut lines = vec![(None, Line::from(Span::styled(card.title(), title_style)))];

    for (option_index, option) in card.options.iter().enumerate() {
        let is_focused = focused == Some((card_index, option_index));
        lines.push((Some(option_index), option_line(option, is_focused)));
    }

    if let Some(feedback) = &card.feedback {
        lines.push((
            None,
            Line::from(Span::styled(
                format!("   {}", feedback),
                Style::default().fg(Color::Yellow),
            )),
        ));
    }

    lines.push((None, Line::from("")));
    lines
}

fn option_line(option: &OptionView, focused: bool) -> Line<'static> {
    let pointer = if focused { "> " } else { "  " };
    let radio = if option.checked { "(*) " } else { "( ) " };

    let mut style = match option.mark {
        Some(OptionMark::Correct) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(OptionMark::Incorrect) => Style::default().fg(Color::Red),
        None if option.disabled => Style::default().fg(Color::DarkGray),
        None => Style::default(),
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let suffix = match option.mark {
        Some(OptionMark::Correct) => " ✅",
        Some(OptionMark::Incorrect) => " ❌",
        None => "",
    };

    Line::from(vec![
        Span::styled(pointer, key_style()),
        Span::raw(radio),
        Span::styled(format!("{}{}", option.text, suffix), style),
    ])
}

fn nav_span(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(label, key_style())
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

fn footer_lines(view: &PageView) -> Vec<Line<'static>> {
    let page_line = Line::from(vec![
        nav_span("< Prev", view.footer.prev_enabled),
        Span::from(format!("   {}   ", view.footer.label())),
        nav_span("Next >", view.footer.next_enabled),
    ]);

    let mut help = vec![
        Span::styled("↑/↓", key_style()),
        Span::from(" Move  "),
    ];
    if view.submit_visible {
        help.extend([
            Span::styled("Space", key_style()),
            Span::from(" Select  "),
        ]);
    }
    help.extend([Span::styled("←/→", key_style()), Span::from(" Page  ")]);
    if view.submit_visible {
        help.extend([Span::styled("s", key_style()), Span::from(" Finish  ")]);
    }
    if view.reset_visible {
        help.extend([Span::styled("r", key_style()), Span::from(" Start Over  ")]);
    }
    help.extend([Span::styled("q", key_style()), Span::from(" Quit")]);

    vec![page_line, Line::from(help)]
}
