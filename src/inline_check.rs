use crate::error::QuizError;
use crate::models::{OptionIndex, Question, SelectionOutcome};

/// A single question embedded in reading material.
///
/// Same answer guard as a quiz question, without score or navigation.
/// Rejected selections are logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct InlineCheck {
    question: Question,
    selected: Option<OptionIndex>,
}

impl InlineCheck {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            selected: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selected(&self) -> Option<OptionIndex> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.selected.map(|s| self.question.is_correct(s))
    }

    pub fn try_select(&mut self, index: usize) -> Result<SelectionOutcome, QuizError> {
        if self.selected.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        let selected = self
            .question
            .option(index)
            .ok_or(QuizError::InvalidSelection {
                index,
                len: self.question.options().len(),
            })?;
        self.selected = Some(selected);

        Ok(SelectionOutcome {
            selected,
            correct: self.question.correct(),
            was_correct: self.question.is_correct(selected),
        })
    }

    /// Returns whether the selection was accepted.
    pub fn select_option(&mut self, index: usize) -> bool {
        match self.try_select(index) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("inline check {}: {}", self.question.id(), e);
                false
            }
        }
    }
}
