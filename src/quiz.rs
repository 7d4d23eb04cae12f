use crate::error::QuizError;
use crate::models::{AnswerRecord, OptionIndex, Question, QuestionSet, SelectionOutcome};

pub const DEFAULT_PASS_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Unanswered,
    Revealed,
    Finished,
}

/// Final tally of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults<'a> {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub passed: bool,
    pub answers: &'a [AnswerRecord],
}

/// Walks a question set one question at a time.
///
/// Each question moves Unanswered -> Revealed on the first valid selection,
/// and `advance` moves on to the next question or to Finished after the
/// last one. The score can only change on that first selection.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: QuestionSet,
    current_index: usize,
    selected: Option<OptionIndex>,
    phase: QuizPhase,
    score: usize,
    answered_log: Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            current_index: 0,
            selected: None,
            phase: QuizPhase::Unanswered,
            score: 0,
            answered_log: Vec::new(),
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions.as_slice()[self.current_index]
    }

    pub fn selected(&self) -> Option<OptionIndex> {
        self.selected
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == QuizPhase::Revealed
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_log(&self) -> &[AnswerRecord] {
        &self.answered_log
    }

    /// Answer the current question with a raw option index.
    pub fn select_option(&mut self, index: usize) -> Result<SelectionOutcome, QuizError> {
        self.ensure_unanswered()?;
        let question = self.current_question();
        let option = question.option(index).ok_or(QuizError::InvalidSelection {
            index,
            len: question.options().len(),
        })?;
        Ok(self.record(option))
    }

    /// Answer the current question with an index obtained from it.
    ///
    /// The index is still checked, since it may come from another question.
    pub fn select(&mut self, index: OptionIndex) -> Result<SelectionOutcome, QuizError> {
        self.select_option(index.get())
    }

    fn ensure_unanswered(&self) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::Unanswered => Ok(()),
            QuizPhase::Revealed => Err(QuizError::AlreadyAnswered),
            QuizPhase::Finished => Err(QuizError::Finished),
        }
    }

    fn record(&mut self, selected: OptionIndex) -> SelectionOutcome {
        let question = &self.questions.as_slice()[self.current_index];
        let correct = question.correct();
        let was_correct = question.is_correct(selected);

        self.answered_log.push(AnswerRecord {
            question_id: question.id().clone(),
            selected,
            was_correct,
        });
        if was_correct {
            self.score += 1;
        }
        self.selected = Some(selected);
        self.phase = QuizPhase::Revealed;

        log::debug!(
            "question {} answered with option {} ({})",
            self.current_index + 1,
            selected.get(),
            if was_correct { "correct" } else { "incorrect" }
        );

        SelectionOutcome {
            selected,
            correct,
            was_correct,
        }
    }

    /// Move past a revealed question. Returns the phase entered.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        match self.phase {
            QuizPhase::Unanswered => return Err(QuizError::NotYetAnswered),
            QuizPhase::Finished => return Err(QuizError::Finished),
            QuizPhase::Revealed => {}
        }

        if self.is_last_question() {
            self.phase = QuizPhase::Finished;
            log::info!(
                "quiz finished with score {}/{}",
                self.score,
                self.questions.len()
            );
        } else {
            self.current_index += 1;
            self.selected = None;
            self.phase = QuizPhase::Unanswered;
        }
        Ok(self.phase)
    }

    /// Start over from the first question. Only allowed once finished.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Finished {
            return Err(QuizError::NotFinished);
        }
        self.current_index = 0;
        self.selected = None;
        self.phase = QuizPhase::Unanswered;
        self.score = 0;
        self.answered_log.clear();
        Ok(())
    }

    pub fn results(&self, pass_threshold: u8) -> Option<QuizResults<'_>> {
        if !self.is_finished() {
            return None;
        }
        let total = self.questions.len();
        let percentage = (self.score * 100 / total) as u8;
        Some(QuizResults {
            score: self.score,
            total,
            percentage,
            passed: percentage >= pass_threshold,
            answers: &self.answered_log,
        })
    }
}
