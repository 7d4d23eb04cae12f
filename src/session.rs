use crate::deck::Deck;
use crate::inline_check::InlineCheck;
use crate::models::AppState;
use crate::quiz::{QuizPhase, QuizSession};
use crate::utils::option_index_for_key;
use crossterm::event::{KeyCode, KeyEvent};

/// Everything the shell holds for the deck being worked through.
#[derive(Debug)]
pub struct DeckSession {
    pub deck_name: String,
    pub pass_threshold: u8,
    pub checks: Vec<InlineCheck>,
    pub focused_check: usize,
    pub quiz: QuizSession,
    /// Option under the cursor while the current question is unanswered.
    pub highlighted: usize,
    /// First visible line of the Summary answer list.
    pub summary_scroll: u16,
}

const SUMMARY_PAGE: u16 = 10;

impl DeckSession {
    pub fn new(deck: Deck) -> Self {
        Self {
            checks: deck.inline_checks(),
            quiz: deck.start_quiz(),
            deck_name: deck.title,
            pass_threshold: deck.pass_threshold,
            focused_check: 0,
            highlighted: 0,
            summary_scroll: 0,
        }
    }

    /// Decks with inline checks open on them, the rest go straight to the quiz.
    pub fn initial_state(&self) -> AppState {
        if self.checks.is_empty() {
            AppState::Quiz
        } else {
            AppState::Checks
        }
    }

    pub fn restart_quiz(&mut self) -> bool {
        match self.quiz.restart() {
            Ok(()) => {
                self.highlighted = 0;
                self.summary_scroll = 0;
                true
            }
            Err(e) => {
                log::debug!("restart ignored: {}", e);
                false
            }
        }
    }
}

pub fn handle_checks_input(session: &mut DeckSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if session.focused_check < session.checks.len().saturating_sub(1) {
                session.focused_check += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            session.focused_check = session.focused_check.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Tab => {
            *app_state = AppState::Quiz;
        }
        KeyCode::Char(c) => {
            if let Some(index) = option_index_for_key(c)
                && let Some(check) = session.checks.get_mut(session.focused_check)
            {
                check.select_option(index);
            }
        }
        _ => {}
    }
}

pub fn handle_quiz_input(session: &mut DeckSession, key: KeyEvent, app_state: &mut AppState) {
    if key.code == KeyCode::Esc {
        *app_state = AppState::QuizQuitConfirm;
        return;
    }

    match session.quiz.phase() {
        QuizPhase::Unanswered => match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let last = session.quiz.current_question().options().len() - 1;
                if session.highlighted < last {
                    session.highlighted += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                session.highlighted = session.highlighted.saturating_sub(1);
            }
            KeyCode::Enter => {
                let index = session.highlighted;
                select(session, index);
            }
            KeyCode::Char(c) => {
                if let Some(index) = option_index_for_key(c) {
                    select(session, index);
                }
            }
            _ => {}
        },
        QuizPhase::Revealed | QuizPhase::Finished => match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => match session.quiz.advance() {
                Ok(QuizPhase::Finished) => {
                    *app_state = AppState::Summary;
                }
                Ok(_) => {
                    session.highlighted = 0;
                }
                Err(e) => log::debug!("advance ignored: {}", e),
            },
            KeyCode::Char(c) => {
                if let Some(index) = option_index_for_key(c) {
                    select(session, index);
                }
            }
            _ => {}
        },
    }
}

/// Scroll keys for the Summary answer list. Returns true when handled.
///
/// The offset is clamped against the rendered content when drawn.
pub fn handle_summary_scroll(session: &mut DeckSession, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            session.summary_scroll = session.summary_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            session.summary_scroll = session.summary_scroll.saturating_sub(1);
        }
        KeyCode::PageDown => {
            session.summary_scroll = session.summary_scroll.saturating_add(SUMMARY_PAGE);
        }
        KeyCode::PageUp => {
            session.summary_scroll = session.summary_scroll.saturating_sub(SUMMARY_PAGE);
        }
        KeyCode::Home => {
            session.summary_scroll = 0;
        }
        KeyCode::End => {
            session.summary_scroll = u16::MAX;
        }
        _ => return false,
    }
    true
}

fn select(session: &mut DeckSession, index: usize) {
    match session.quiz.select_option(index) {
        Ok(outcome) => {
            session.highlighted = outcome.selected.get();
        }
        Err(e) => log::debug!("selection ignored: {}", e),
    }
}

/// Returns true when the user confirmed leaving the quiz.
pub fn handle_quit_confirm_input(key: KeyEvent, app_state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            *app_state = AppState::Menu;
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            *app_state = AppState::Quiz;
            false
        }
        _ => false,
    }
}
