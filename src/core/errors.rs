use thiserror::Error;

use super::models::VerbClass;
use crate::conjugation::Inflection;

#[derive(Error, Debug)]
pub enum KatsuyoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Conjugation(#[from] ConjugationError),

    #[error("KatsuyoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KatsuyoError {
    fn from(error: std::io::Error) -> Self {
        KatsuyoError::Io(Box::new(error))
    }
}

/// Problems with the quiz configuration. Reported to the learner before any
/// question is asked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no inflections configured")]
    EmptyAdjacency,

    #[error("{0} has no target inflections")]
    NoTargets(Inflection),

    #[error("number of questions must be positive, got {0}")]
    InvalidQuestionCount(usize),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("unknown inflection: {0}")]
    UnknownInflection(String),
}

/// Gaps in the rule tables or the verb data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConjugationError {
    #[error("no {inflection} rule for {class} verbs ending in '{ending}'")]
    UnsupportedInflection { class: VerbClass, ending: String, inflection: Inflection },

    #[error("{verb} has no {rendering} form")]
    MissingForm { verb: String, rendering: &'static str },

    #[error("'{word}' does not end in '{ending}'")]
    EndingMismatch { word: String, ending: String },
}

/// Misuse of the quiz session. A correctly driven loop never produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionStateError {
    #[error("session has not been started")]
    NotStarted,

    #[error("session has already been started")]
    AlreadyStarted,

    #[error("session length must be positive, got {0}")]
    InvalidLength(usize),

    #[error("session already finished")]
    SessionAlreadyFinished,

    #[error("no question is pending")]
    NoPendingQuestion,

    #[error("session is not finished")]
    SessionNotFinished,
}

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("no verb matches the requested filters")]
    NoMatchingVerb,

    #[error("invalid verb record: {0}")]
    InvalidVerb(String),

    #[error("failed to read vocabulary: {0}")]
    Io(Box<std::io::Error>),

    #[error("failed to parse vocabulary: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for VocabularyError {
    fn from(error: std::io::Error) -> Self {
        VocabularyError::Io(Box::new(error))
    }
}

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("no predicate inflections to choose from")]
    EmptyConfiguration,

    #[error("{0} has no target inflection other than itself")]
    NoValidTarget(Inflection),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Conjugation(#[from] ConjugationError),

    #[error(transparent)]
    Session(#[from] SessionStateError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

impl QuizError {
    /// Errors that only spoil the current question. The controller regenerates
    /// the question when it sees one of these.
    pub fn is_question_local(&self) -> bool {
        matches!(
            self,
            QuizError::Conjugation(_) | QuizError::Vocabulary(VocabularyError::NoMatchingVerb)
        )
    }
}
