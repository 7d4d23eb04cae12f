use crate::error::ContentError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Identifier of a question. Content uses both numeric and slug ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(u64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for QuestionId {
    fn from(n: u64) -> Self {
        QuestionId::Number(n)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

/// Index of an option, checked against the question it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionIndex(usize);

impl OptionIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Question as it appears in a deck file, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub id: QuestionId,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctIndex", alias = "correctAnswer", alias = "correct")]
    pub correct_option_index: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// A validated multiple-choice question. `correct` always indexes `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct: OptionIndex,
    explanation: String,
    section: Option<String>,
    topic: Option<String>,
    category: Option<String>,
    difficulty: Option<Difficulty>,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let id = id.into();
        let prompt = prompt.into();

        if prompt.trim().is_empty() {
            return Err(ContentError::BlankPrompt { id });
        }
        if options.is_empty() {
            return Err(ContentError::NoOptions { id });
        }
        if correct_option_index >= options.len() {
            return Err(ContentError::CorrectIndexOutOfRange {
                id,
                index: correct_option_index,
                len: options.len(),
            });
        }
        if options.len() == 1 {
            log::warn!("question {} has a single option", id);
        }

        Ok(Self {
            id,
            prompt,
            options,
            correct: OptionIndex(correct_option_index),
            explanation: explanation.into(),
            section: None,
            topic: None,
            category: None,
            difficulty: None,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct(&self) -> OptionIndex {
        self.correct
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Checked conversion of a raw index into an index of this question.
    pub fn option(&self, index: usize) -> Option<OptionIndex> {
        (index < self.options.len()).then_some(OptionIndex(index))
    }

    pub fn option_text(&self, index: OptionIndex) -> &str {
        &self.options[index.0]
    }

    pub fn is_correct(&self, index: OptionIndex) -> bool {
        index == self.correct
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = ContentError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let mut question = Question::new(
            raw.id,
            raw.prompt,
            raw.options,
            raw.correct_option_index,
            raw.explanation,
        )?;
        question.section = raw.section;
        question.topic = raw.topic;
        question.category = raw.category;
        question.difficulty = raw.difficulty;
        Ok(question)
    }
}

/// Non-empty ordered questions with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, ContentError> {
        if questions.is_empty() {
            return Err(ContentError::EmptyQuestionSet);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(ContentError::DuplicateId {
                    id: question.id().clone(),
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// One accepted answer, in the order it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub selected: OptionIndex,
    pub was_correct: bool,
}

/// What the shell needs to highlight after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub selected: OptionIndex,
    pub correct: OptionIndex,
    pub was_correct: bool,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Checks,
    Quiz,
    QuizQuitConfirm,
    Summary,
}
