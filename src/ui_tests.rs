#[cfg(test)]
mod ui_render_tests {
    use crate::deck::Deck;
    use crate::models::{Question, QuestionSet};
    use crate::session::{handle_summary_scroll, DeckSession};
    use crate::ui::{draw_checks, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Frame, Terminal};
    use std::path::{Path, PathBuf};

    /// Renders into an off-screen buffer and returns its rows joined by newlines.
    fn render<F: FnOnce(&mut Frame)>(draw: F) -> String {
        let backend = TestBackend::new(110, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn question(id: u64, prompt: &str, correct: usize, explanation: &str) -> Question {
        Question::new(
            id,
            prompt,
            vec![
                "Heat, fuel and oxygen".to_string(),
                "Heat, water and fuel".to_string(),
                "Fuel, oxygen and CO2".to_string(),
            ],
            correct,
            explanation,
        )
        .unwrap()
    }

    /// Helper function to create a test session
    fn create_test_session() -> DeckSession {
        DeckSession::new(Deck {
            title: "Fire Safety".to_string(),
            quick_checks: vec![question(
                10,
                "Which element is removed by smothering?",
                0,
                "Smothering removes oxygen.",
            )],
            questions: QuestionSet::new(vec![
                question(1, "What makes up the fire triangle?", 0, "All three are needed."),
                question(2, "Which is not part of the triangle?", 1, "Water puts fires out."),
            ])
            .unwrap(),
            pass_threshold: 80,
        })
    }

    #[test]
    fn test_quiz_screen_before_answer() {
        let session = create_test_session();
        let screen = render(|f| draw_quiz(f, &session));

        assert!(screen.contains("Question 1 / 2 - Fire Safety"));
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("What makes up the fire triangle?"));
        assert!(screen.contains("> [1] Heat, fuel and oxygen"));
        assert!(screen.contains("[3] Fuel, oxygen and CO2"));
        assert!(!screen.contains("All three are needed."));
    }

    #[test]
    fn test_quiz_screen_after_wrong_answer() {
        let mut session = create_test_session();
        session.quiz.select_option(2).unwrap();
        let screen = render(|f| draw_quiz(f, &session));

        assert!(screen.contains("✓ [1] Heat, fuel and oxygen"));
        assert!(screen.contains("✗ [3] Fuel, oxygen and CO2"));
        assert!(screen.contains("Incorrect. The answer is: Heat, fuel and oxygen"));
        assert!(screen.contains("All three are needed."));
        assert!(screen.contains("Next Question"));
    }

    #[test]
    fn test_quiz_screen_last_question_offers_results() {
        let mut session = create_test_session();
        session.quiz.select_option(0).unwrap();
        session.quiz.advance().unwrap();
        session.quiz.select_option(1).unwrap();
        let screen = render(|f| draw_quiz(f, &session));

        assert!(screen.contains("Question 2 / 2"));
        assert!(screen.contains("Score: 2"));
        assert!(screen.contains("Correct!"));
        assert!(screen.contains("See Results"));
    }

    #[test]
    fn test_checks_screen() {
        let mut session = create_test_session();
        let screen = render(|f| draw_checks(f, &session));
        assert!(screen.contains("0 / 1 answered"));
        assert!(screen.contains("[ ] Which element is remo..."));
        assert!(!screen.contains("Smothering removes oxygen."));

        session.checks[0].select_option(0);
        let screen = render(|f| draw_checks(f, &session));
        assert!(screen.contains("1 / 1 answered"));
        assert!(screen.contains("Smothering removes oxygen."));
    }

    #[test]
    fn test_summary_screen() {
        let mut session = create_test_session();
        session.quiz.select_option(0).unwrap();
        session.quiz.advance().unwrap();
        session.quiz.select_option(0).unwrap();
        session.quiz.advance().unwrap();
        let screen = render(|f| draw_summary(f, &mut session));

        assert!(screen.contains("Session Summary - Fire Safety"));
        assert!(screen.contains("Score: 1 / 2 (50%)"));
        assert!(screen.contains("NOT PASSED"));
        assert!(screen.contains("Your Answer: Heat, fuel and oxygen"));
        assert!(screen.contains("Correct Answer: Heat, water and fuel"));
    }

    #[test]
    fn test_summary_screen_before_finish_shows_only_title() {
        let mut session = create_test_session();
        let screen = render(|f| draw_summary(f, &mut session));
        assert!(screen.contains("Session Summary - Fire Safety"));
        assert!(!screen.contains("Score:"));
    }

    #[test]
    fn test_menu_lists_decks() {
        let decks = vec![PathBuf::from("decks/coshh.json"), PathBuf::from("decks/fire.json")];
        let screen = render(|f| draw_menu(f, &decks, 1, Path::new("decks"), None));
        assert!(screen.contains("coshh"));
        assert!(screen.contains("fire"));

        let screen = render(|f| draw_menu(f, &[], 0, Path::new("decks"), Some("failed")));
        assert!(screen.contains("No decks found in decks"));
        assert!(screen.contains("failed"));
    }

    #[test]
    fn test_quit_confirmation() {
        let screen = render(draw_quit_confirmation);
        assert!(screen.contains("Return to main menu?"));
    }

    fn session_with(questions: Vec<Question>, quick_checks: Vec<Question>) -> DeckSession {
        DeckSession::new(Deck {
            title: "Mock Exam".to_string(),
            quick_checks,
            questions: QuestionSet::new(questions).unwrap(),
            pass_threshold: 80,
        })
    }

    fn numbered(prefix: &str, n: u64) -> Vec<Question> {
        (1..=n)
            .map(|i| {
                Question::new(
                    i,
                    format!("{} {}?", prefix, i),
                    vec!["Right".to_string(), "Wrong".to_string()],
                    0,
                    "",
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_summary_scrolls_to_last_answer() {
        let mut session = session_with(numbered("Question", 30), Vec::new());
        for i in 0..30 {
            session.quiz.select_option(i % 2).unwrap();
            session.quiz.advance().unwrap();
        }

        let screen = render(|f| draw_summary(f, &mut session));
        assert!(screen.contains("1. Question 1?"));
        assert!(!screen.contains("30. Question 30?"));
        assert!(screen.contains("↑/↓"));

        let end = KeyEvent::new(KeyCode::End, KeyModifiers::empty());
        assert!(handle_summary_scroll(&mut session, end));
        let screen = render(|f| draw_summary(f, &mut session));
        assert!(screen.contains("30. Question 30?"));
        assert!(screen.contains("Your Answer: Wrong"));
        assert!(!screen.contains("1. Question 1?"));

        // Clamped to the content once drawn
        let max_scroll = session.summary_scroll;
        assert!(max_scroll > 0 && max_scroll < u16::MAX);
        assert!(screen.contains(&format!("Answers ({} / {})", max_scroll, max_scroll)));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::empty());
        handle_summary_scroll(&mut session, down);
        render(|f| draw_summary(f, &mut session));
        assert_eq!(session.summary_scroll, max_scroll);
    }

    #[test]
    fn test_summary_without_overflow_has_plain_title() {
        let mut session = create_test_session();
        for _ in 0..2 {
            session.quiz.select_option(0).unwrap();
            session.quiz.advance().unwrap();
        }
        session.summary_scroll = 5;
        let screen = render(|f| draw_summary(f, &mut session));
        assert!(screen.contains("Answers"));
        assert!(!screen.contains("Answers ("));
        assert_eq!(session.summary_scroll, 0);
    }

    #[test]
    fn test_quiz_screen_with_more_than_nine_options() {
        let wide = Question::new(
            1u64,
            "Pick the last option",
            (1..=12).map(|i| format!("Option {}", i)).collect(),
            11,
            "",
        )
        .unwrap();
        let mut session = session_with(vec![wide], Vec::new());

        let screen = render(|f| draw_quiz(f, &session));
        assert!(screen.contains("> [1] Option 1"));
        assert!(screen.contains("[9] Option 9"));
        assert!(screen.contains("[ ] Option 12"));

        session.highlighted = 11;
        let screen = render(|f| draw_quiz(f, &session));
        assert!(screen.contains("> [ ] Option 12"));
    }

    #[test]
    fn test_long_check_list_keeps_focus_visible() {
        let mut session = session_with(numbered("Question", 1), numbered("Check", 50));
        session.focused_check = 49;
        let screen = render(|f| draw_checks(f, &session));

        assert!(screen.contains("[ ] Check 50?"));
        assert!(!screen.contains("[ ] Check 1?"));
        assert!(screen.contains("Check 50 of 50"));
    }

    #[test]
    fn test_long_deck_list_keeps_selection_visible() {
        let decks: Vec<PathBuf> = (0..60)
            .map(|i| PathBuf::from(format!("decks/deck-{:02}.json", i)))
            .collect();
        let screen = render(|f| draw_menu(f, &decks, 59, Path::new("decks"), None));
        assert!(screen.contains("deck-59"));
        assert!(!screen.contains("deck-00"));
    }
}
