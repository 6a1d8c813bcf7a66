pub mod terminal;

pub use terminal::TerminalPresentation;
use tokio::sync::oneshot;

use crate::{
    core::{
        ConfigurationError,
        QuizError,
        SessionSummary,
    },
    quiz::{
        Question,
        QuizConfig,
    },
};

/// What the learner sees for one turn.
#[derive(Debug)]
pub struct QuestionPrompt<'a> {
    pub question: &'a Question,
    /// The verb rendered in the predicate inflection
    pub predicate_form: &'a str,
    /// 1-based
    pub number: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub expected: String,
    pub provided: String,
}

/// The surface the quiz is played on.
///
/// Methods that take a `oneshot::Sender` hand over a continuation: the
/// controller waits until the sender is used. Dropping a sender unused
/// abandons the session.
pub trait Presentation: Send {
    fn notify_start(&mut self);

    fn request_quiz_config(&mut self, on_config_ready: oneshot::Sender<QuizConfig>);

    fn notify_cannot_start(&mut self, error: &ConfigurationError);

    fn notify_quiz_display_start(&mut self);

    fn ask_question(&mut self, prompt: &QuestionPrompt<'_>, on_answered: oneshot::Sender<String>);

    fn present_answer_feedback(
        &mut self,
        feedback: &AnswerFeedback,
        on_acknowledged: oneshot::Sender<()>,
    );

    /// A question could not be built and is being replaced.
    fn notify_question_error(&mut self, error: &QuizError);

    fn notify_quiz_complete(&mut self, summary: &SessionSummary);
}
