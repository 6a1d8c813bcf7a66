use super::question::Question;
use crate::core::{
    QuizError,
    SessionStateError,
    SessionSummary,
};

pub type QuestionFactory = Box<dyn FnMut() -> Result<Question, QuizError> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Finished,
}

/// Score keeping for one quiz. At all times `correct <= asked <= length`.
#[derive(Default)]
pub struct QuizSession {
    length: usize,
    asked: usize,
    correct: usize,
    factory: Option<QuestionFactory>,
    current: Option<Question>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, length: usize, factory: QuestionFactory) -> Result<(), SessionStateError> {
        if self.factory.is_some() {
            return Err(SessionStateError::AlreadyStarted);
        }
        if length == 0 {
            return Err(SessionStateError::InvalidLength(length));
        }

        self.length = length;
        self.factory = Some(factory);
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        if self.factory.is_none() {
            SessionState::NotStarted
        } else if self.asked >= self.length {
            SessionState::Finished
        } else {
            SessionState::InProgress
        }
    }

    /// Returns the pending question, generating one if none is pending.
    /// Counters only move in [`QuizSession::answer_question`].
    pub fn ask_question(&mut self) -> Result<&Question, QuizError> {
        let factory = self.factory.as_mut().ok_or(SessionStateError::NotStarted)?;
        if self.asked >= self.length {
            return Err(SessionStateError::SessionAlreadyFinished.into());
        }

        let question = match self.current.take() {
            Some(question) => question,
            None => factory()?,
        };

        Ok(&*self.current.insert(question))
    }

    /// Drops the pending question without scoring it.
    pub fn discard_question(&mut self) -> Option<Question> {
        self.current.take()
    }

    /// Scores `provided` against the pending question by exact comparison.
    ///
    /// If the expected answer can't be produced the question stays pending and
    /// nothing is counted.
    pub fn answer_question(&mut self, provided: &str) -> Result<bool, QuizError> {
        let question = self.current.as_ref().ok_or(SessionStateError::NoPendingQuestion)?;
        let expected = question.expected_answer()?;
        let is_correct = expected == provided;

        self.asked += 1;
        if is_correct {
            self.correct += 1;
        }
        self.current = None;

        Ok(is_correct)
    }

    pub fn finished(&self) -> bool {
        self.state() == SessionState::Finished
    }

    pub fn summary(&self) -> Result<SessionSummary, SessionStateError> {
        if !self.finished() {
            return Err(SessionStateError::SessionNotFinished);
        }
        Ok(SessionSummary { total_questions: self.length, correct_answers: self.correct })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn asked(&self) -> usize {
        self.asked
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }
}
