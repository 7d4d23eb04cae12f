pub mod config;
pub mod deck;
pub mod error;
pub mod inline_check;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod selection;
pub mod session;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use config::AppConfig;
pub use deck::{get_deck_files, load_deck, Deck};
pub use error::{ConfigError, ContentError, DeckError, QuizError};
pub use inline_check::InlineCheck;
pub use models::{AnswerRecord, AppState, OptionIndex, Question, QuestionId, QuestionSet};
pub use quiz::{QuizPhase, QuizResults, QuizSession};
pub use session::{
    handle_checks_input, handle_quit_confirm_input, handle_quiz_input, handle_summary_scroll,
    DeckSession,
};
pub use ui::{draw_checks, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
