use std::sync::Arc;

use rand::{
    rngs::StdRng,
    SeedableRng,
};
use tokio::sync::oneshot;

use super::{
    config::QuizConfig,
    question::make_question,
    session::{
        QuestionFactory,
        QuizSession,
    },
};
use crate::{
    core::{
        ConfigurationError,
        QuizError,
        SessionStateError,
        SessionSummary,
    },
    presentation::{
        AnswerFeedback,
        Presentation,
        QuestionPrompt,
    },
    vocabulary::VocabularyStore,
};

pub const DEFAULT_MAX_QUESTION_RETRIES: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    /// Consecutive unbuildable questions tolerated before giving up
    pub max_question_retries: usize,
    /// Fixed seed for question sampling
    pub seed: Option<u64>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self { max_question_retries: DEFAULT_MAX_QUESTION_RETRIES, seed: None }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(SessionSummary),
    CannotStart(ConfigurationError),
    /// The presentation dropped a continuation without answering
    Abandoned,
    /// Too many questions in a row could not be built
    Failed(QuizError),
}

/// Drives one quiz from configuration to summary.
pub struct SessionController<P, V> {
    presentation: P,
    vocabulary: Arc<V>,
    options: ControllerOptions,
}

impl<P, V> SessionController<P, V>
where
    P: Presentation,
    V: VocabularyStore + 'static,
{
    pub fn new(presentation: P, vocabulary: Arc<V>) -> Self {
        Self { presentation, vocabulary, options: ControllerOptions::default() }
    }

    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn into_presentation(self) -> P {
        self.presentation
    }

    /// Runs the whole quiz. Turns are taken in a loop, each one only after the
    /// previous continuation fired, so session length does not grow the stack.
    ///
    /// Session state errors are bugs in the driving logic and come back as
    /// `Err`; everything the learner can cause is a [`RunOutcome`].
    pub async fn run(&mut self) -> Result<RunOutcome, QuizError> {
        self.presentation.notify_start();

        let (config_tx, config_rx) = oneshot::channel();
        self.presentation.request_quiz_config(config_tx);
        let Ok(config) = config_rx.await else {
            tracing::info!("configuration request abandoned");
            return Ok(RunOutcome::Abandoned);
        };

        if let Err(error) = config.validate() {
            tracing::warn!("cannot start quiz: {}", error);
            self.presentation.notify_cannot_start(&error);
            return Ok(RunOutcome::CannotStart(error));
        }

        let mut session = QuizSession::new();
        session.start(config.number_of_questions, self.question_factory(&config))?;
        tracing::info!("starting quiz of {} questions", config.number_of_questions);
        self.presentation.notify_quiz_display_start();

        let mut failures = 0;
        while !session.finished() {
            let turn = session
                .ask_question()
                .and_then(|question| -> Result<(String, String), QuizError> {
                    Ok((question.predicate_form()?, question.expected_answer()?))
                });

            let (predicate_form, expected) = match turn {
                Ok(turn) => turn,
                Err(error) if error.is_question_local() => {
                    failures += 1;
                    session.discard_question();
                    tracing::warn!(
                        "question failed ({}/{}): {}",
                        failures,
                        self.options.max_question_retries,
                        error
                    );
                    self.presentation.notify_question_error(&error);

                    if failures > self.options.max_question_retries {
                        return Ok(RunOutcome::Failed(error));
                    }
                    continue;
                }
                Err(error) => return Err(error),
            };
            failures = 0;

            let answer_rx = {
                let question =
                    session.current_question().ok_or(SessionStateError::NoPendingQuestion)?;
                let prompt = QuestionPrompt {
                    question,
                    predicate_form: &predicate_form,
                    number: session.asked() + 1,
                    total: session.length(),
                };
                let (answer_tx, answer_rx) = oneshot::channel();
                self.presentation.ask_question(&prompt, answer_tx);
                answer_rx
            };

            let Ok(raw_answer) = answer_rx.await else {
                tracing::info!("quiz abandoned after {} answers", session.asked());
                return Ok(RunOutcome::Abandoned);
            };

            let provided = raw_answer.trim();
            let correct = session.answer_question(provided)?;
            tracing::debug!("answered '{}', expected '{}': {}", provided, expected, correct);

            let feedback = AnswerFeedback { correct, expected, provided: provided.to_string() };
            let (ack_tx, ack_rx) = oneshot::channel();
            self.presentation.present_answer_feedback(&feedback, ack_tx);
            if ack_rx.await.is_err() {
                tracing::info!("quiz abandoned during feedback");
                return Ok(RunOutcome::Abandoned);
            }
        }

        let summary = session.summary()?;
        tracing::info!("quiz complete: {}", summary);
        self.presentation.notify_quiz_complete(&summary);
        Ok(RunOutcome::Completed(summary))
    }

    fn question_factory(&self, config: &QuizConfig) -> QuestionFactory {
        let vocabulary = Arc::clone(&self.vocabulary);
        let adjacency = config.inflections.clone();
        let filter = config.verb_filter();
        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Box::new(move || make_question(&adjacency, vocabulary.as_ref(), &filter, &mut rng))
    }
}
