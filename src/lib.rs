pub mod conjugation;
pub mod core;
pub mod persistence;
pub mod presentation;
pub mod quiz;
pub mod vocabulary;

pub use crate::{
    conjugation::{
        conjugate,
        Inflection,
    },
    core::{
        KatsuyoError,
        SessionSummary,
        VerbClass,
        VerbRecord,
    },
    presentation::{
        Presentation,
        TerminalPresentation,
    },
    quiz::{
        QuizConfig,
        RunOutcome,
        SessionController,
    },
    vocabulary::{
        JsonVocabulary,
        MemoryVocabulary,
        VocabularyStore,
    },
};
