use crate::models::{OptionIndex, Question};
use crate::session::DeckSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::option_key;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub(crate) fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// One line per option. Before an answer the highlighted option is marked;
/// after it the correct option is green and a wrong pick is red.
pub(crate) fn option_lines(
    question: &Question,
    selected: Option<OptionIndex>,
    highlighted: Option<usize>,
) -> Vec<Line<'static>> {
    question
        .options()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let key = option_key(i).unwrap_or(' ');
            let (marker, style) = match selected {
                Some(selected) => {
                    if i == question.correct().get() {
                        (
                            "✓ ",
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if i == selected.get() {
                        ("✗ ", Style::default().fg(Color::Red))
                    } else {
                        ("  ", Style::default().fg(Color::DarkGray))
                    }
                }
                None if highlighted == Some(i) => (
                    "> ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => ("  ", Style::default()),
            };
            Line::from(vec![
                Span::from(marker),
                Span::styled(format!("[{}] {}", key, text), style),
            ])
        })
        .collect()
}

pub(crate) fn feedback_text(question: &Question, selected: Option<OptionIndex>) -> Text<'static> {
    let mut text = Text::default();
    let Some(selected) = selected else {
        return text;
    };

    if question.is_correct(selected) {
        text.push_line(Line::from(Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        text.push_line(Line::from(Span::styled(
            format!(
                "Incorrect. The answer is: {}",
                question.option_text(question.correct())
            ),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    if !question.explanation().is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(question.explanation().to_string()));
    }
    text
}

pub fn draw_quiz(f: &mut Frame, session: &DeckSession) {
    let layout = calculate_quiz_chunks(f.area());
    let quiz = &session.quiz;
    let question = quiz.current_question();

    let progress = format!(
        "Question {} / {} - {}   Score: {}",
        quiz.current_index() + 1,
        quiz.len(),
        session.deck_name,
        quiz.score()
    );
    let header = Paragraph::new(progress)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_widget = Paragraph::new(question.prompt().to_string())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_widget, layout.question_area);

    let highlighted = (!quiz.is_revealed()).then_some(session.highlighted);
    let options = Paragraph::new(option_lines(question, quiz.selected(), highlighted))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let feedback = Paragraph::new(feedback_text(question, quiz.selected()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Explanation"));
    f.render_widget(feedback, layout.feedback_area);

    let help_spans = if quiz.is_revealed() {
        let next = if quiz.is_last_question() {
            " See Results  "
        } else {
            " Next Question  "
        };
        vec![
            Span::styled("Enter", key_style()),
            Span::from(next),
            Span::styled("Esc", key_style()),
            Span::from(" Quit to Menu"),
        ]
    } else {
        vec![
            Span::styled("1-9", key_style()),
            Span::from(" Answer  "),
            Span::styled("↑/↓", key_style()),
            Span::from(" Move  "),
            Span::styled("Enter", key_style()),
            Span::from(" Choose  "),
            Span::styled("Esc", key_style()),
            Span::from(" Quit to Menu"),
        ]
    };
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Return to main menu? Progress in this quiz is discarded.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
