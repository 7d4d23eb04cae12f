use crate::deck::deck_name;
use crate::ui::quiz::key_style;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::path::{Path, PathBuf};

pub fn draw_menu(
    f: &mut Frame,
    deck_files: &[PathBuf],
    selected_index: usize,
    decks_dir: &Path,
    status: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Knowledge Check v{}", env!("CARGO_PKG_VERSION")))
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = if deck_files.is_empty() {
        vec![ListItem::new(format!("No decks found in {}", decks_dir.display())).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        deck_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(deck_name(path)).style(style)
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a Deck"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state =
        ListState::default().with_selected((!deck_files.is_empty()).then_some(selected_index));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    let status_line = Paragraph::new(status.unwrap_or_default().to_string())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status_line, chunks[2]);

    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style()),
        Span::from(" Navigate  "),
        Span::styled("Enter", key_style()),
        Span::from(" Select  "),
        Span::styled("q/Esc/Ctrl+C", key_style()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
