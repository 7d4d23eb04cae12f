use crate::models::QuestionId;
use std::path::PathBuf;

/// Rejected interaction with a quiz or inline check. State is left unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {index} is out of range for a question with {len} options")]
    InvalidSelection { index: usize, len: usize },
    #[error("question has already been answered")]
    AlreadyAnswered,
    #[error("question has not been answered yet")]
    NotYetAnswered,
    #[error("quiz can only be restarted once finished")]
    NotFinished,
    #[error("quiz is finished")]
    Finished,
}

/// Malformed question content, reported when a question set is built.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("question set is empty")]
    EmptyQuestionSet,
    #[error("question {id} has no options")]
    NoOptions { id: QuestionId },
    #[error("question {id} has a blank prompt")]
    BlankPrompt { id: QuestionId },
    #[error("question {id} marks option {index} correct but only has {len} options")]
    CorrectIndexOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },
    #[error("question id {id} appears more than once")]
    DuplicateId { id: QuestionId },
    #[error("pass threshold {0} is not a percentage")]
    InvalidPassThreshold(u8),
    #[error("cannot draw {requested} questions from a bank of {available}")]
    InvalidQuestionCount { requested: usize, available: usize },
    #[error("difficulty weights must be non-negative and sum to 1")]
    InvalidDifficultyWeights,
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid content in {path}: {source}")]
    Content {
        path: PathBuf,
        #[source]
        source: ContentError,
    },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("KNOWLEDGE_CHECK_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
    #[error("KNOWLEDGE_CHECK_LOG_LEVEL must be one of error, warn, info, debug, trace; got {0:?}")]
    InvalidLogLevel(String),
}
