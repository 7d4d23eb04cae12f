use crate::session::DeckSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::ui::quiz::key_style;
use crate::utils::{calculate_max_scroll, estimate_text_height, truncate_string};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, session: &mut DeckSession) {
    let layout = calculate_summary_chunks(f.area());

    let title_text = format!("Session Summary - {}", session.deck_name);
    let title = Paragraph::new(title_text)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let Some(results) = session.quiz.results(session.pass_threshold) else {
        return;
    };

    let verdict = if results.passed {
        Span::styled(
            "PASSED",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "NOT PASSED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    let score = Paragraph::new(vec![
        Line::from(format!(
            "Score: {} / {} ({}%)",
            results.score, results.total, results.percentage
        )),
        Line::from(vec![
            Span::from(format!("Pass mark {}%: ", session.pass_threshold)),
            verdict,
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let mut summary_text = Text::default();
    for (i, (record, question)) in results
        .answers
        .iter()
        .zip(session.quiz.questions().iter())
        .enumerate()
    {
        let (mark, style) = if record.was_correct {
            ("[✓]", Style::default().fg(Color::Green))
        } else {
            ("[✗]", Style::default().fg(Color::Red))
        };
        summary_text.push_line(Line::from(vec![
            Span::styled(mark, style),
            Span::from(format!(" {}. {}", i + 1, truncate_string(question.prompt(), 60))),
        ]));
        summary_text.push_line(Line::from(format!(
            "   Your Answer: {}",
            truncate_string(question.option_text(record.selected), 56)
        )));
        if !record.was_correct {
            summary_text.push_line(Line::from(format!(
                "   Correct Answer: {}",
                truncate_string(question.option_text(question.correct()), 53)
            )));
        }
        summary_text.push_line(Line::from(""));
    }

    let visible_height = layout.content_area.height.saturating_sub(2) as usize;
    let text_width = layout.content_area.width.saturating_sub(2) as usize;
    let content_height = estimate_text_height(&summary_text, text_width);
    let max_scroll = calculate_max_scroll(content_height, visible_height);
    let scroll = session.summary_scroll.min(max_scroll);
    session.summary_scroll = scroll;

    let answers_title = if max_scroll > 0 {
        format!("Answers ({} / {})", scroll, max_scroll)
    } else {
        "Answers".to_string()
    };
    let summary = Paragraph::new(summary_text)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(answers_title));
    f.render_widget(summary, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style()),
        Span::from(" Scroll  "),
        Span::styled("r", key_style()),
        Span::from(" Restart Quiz  "),
        Span::styled("m", key_style()),
        Span::from(" Main Menu  "),
        Span::styled("q/Esc", key_style()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
