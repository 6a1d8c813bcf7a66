pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{
    ConfigurationError,
    ConjugationError,
    KatsuyoError,
    QuizError,
    SessionStateError,
    VocabularyError,
};
pub use models::{
    SessionSummary,
    VerbClass,
    VerbRecord,
};
