pub mod config;
pub mod controller;
pub mod history;
pub mod question;
pub mod session;


pub use config::{
    parse_inflection_list,
    InflectionAdjacency,
    QuizConfig,
    StandardConfig,
};
pub use controller::{
    ControllerOptions,
    RunOutcome,
    SessionController,
    DEFAULT_MAX_QUESTION_RETRIES,
};
pub use history::{
    HistoryLog,
    SessionRecord,
};
pub use question::{
    make_question,
    Question,
};
pub use session::{
    QuestionFactory,
    QuizSession,
    SessionState,
};
