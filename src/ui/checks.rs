use crate::session::DeckSession;
use crate::ui::quiz::{feedback_text, key_style, option_lines};
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw_checks(f: &mut Frame, session: &DeckSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let answered = session.checks.iter().filter(|c| c.is_revealed()).count();
    let title = Paragraph::new(format!(
        "Quick Checks - {}   {} / {} answered",
        session.deck_name,
        answered,
        session.checks.len()
    ))
    .style(key_style())
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    let items: Vec<ListItem> = session
        .checks
        .iter()
        .enumerate()
        .map(|(i, check)| {
            let status = match check.is_correct() {
                Some(true) => "[✓]",
                Some(false) => "[✗]",
                None => "[ ]",
            };
            let label = format!(
                "{} {}",
                status,
                truncate_string(check.question().prompt(), 24)
            );
            let style = if i == session.focused_check {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(label).style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Checks"));
    let mut list_state = ListState::default().with_selected(Some(session.focused_check));
    f.render_stateful_widget(list, body[0], &mut list_state);

    if let Some(check) = session.checks.get(session.focused_check) {
        let question = check.question();
        let mut text = Text::default();
        text.push_line(Line::from(Span::styled(
            question.prompt().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        for line in option_lines(question, check.selected(), None) {
            text.push_line(line);
        }
        if check.is_revealed() {
            text.push_line(Line::from(""));
            text.extend(feedback_text(question, check.selected()));
        }

        let detail = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Check {} of {}",
                session.focused_check + 1,
                session.checks.len()
            )));
        f.render_widget(detail, body[1]);
    }

    let help_text = vec![Line::from(vec![
        Span::styled("1-9", key_style()),
        Span::from(" Answer  "),
        Span::styled("↑/↓", key_style()),
        Span::from(" Navigate  "),
        Span::styled("Enter", key_style()),
        Span::from(" Start Quiz  "),
        Span::styled("Esc", key_style()),
        Span::from(" Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
