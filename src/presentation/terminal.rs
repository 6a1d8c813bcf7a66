use std::io::{
    self,
    BufRead,
    Write,
};

use tokio::sync::oneshot;

use super::{
    AnswerFeedback,
    Presentation,
    QuestionPrompt,
};
use crate::{
    core::{
        ConfigurationError,
        QuizError,
        SessionSummary,
    },
    quiz::QuizConfig,
};

/// Line-oriented quiz on stdin/stdout.
pub struct TerminalPresentation {
    config: Option<QuizConfig>,
}

impl TerminalPresentation {
    pub fn new(config: QuizConfig) -> Self {
        Self { config: Some(config) }
    }
}

/// The lines shown for one question, without the trailing answer prompt.
pub fn format_question(prompt: &QuestionPrompt<'_>) -> String {
    let question = prompt.question;
    let mut text = format!("[{}/{}] {}", prompt.number, prompt.total, question.verb);
    if !question.verb.gloss().is_empty() {
        text.push_str(&format!("\n  {}", question.verb.gloss()));
    }
    text.push_str(&format!("\n  {}: {}", question.predicate_inflection, prompt.predicate_form));
    text
}

pub fn format_feedback(feedback: &AnswerFeedback) -> String {
    if feedback.correct {
        format!("  ✓ {}", feedback.expected)
    } else {
        format!("  ✗ {} (you wrote: {})", feedback.expected, feedback.provided)
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            tracing::warn!("failed to read answer: {}", e);
            None
        }
    }
}

fn flush() {
    if let Err(e) = io::stdout().flush() {
        tracing::debug!("stdout flush failed: {}", e);
    }
}

impl Presentation for TerminalPresentation {
    fn notify_start(&mut self) {
        println!("活用 - verb conjugation practice");
    }

    fn request_quiz_config(&mut self, on_config_ready: oneshot::Sender<QuizConfig>) {
        if let Some(config) = self.config.take() {
            println!("{} questions over {}", config.number_of_questions, config.inflections);
            let _ = on_config_ready.send(config);
        }
    }

    fn notify_cannot_start(&mut self, error: &ConfigurationError) {
        println!("Cannot start the quiz: {}", error);
    }

    fn notify_quiz_display_start(&mut self) {
        println!("Type each answer and press Enter. Ctrl-D quits.\n");
    }

    fn ask_question(&mut self, prompt: &QuestionPrompt<'_>, on_answered: oneshot::Sender<String>) {
        println!("{}", format_question(prompt));
        print!("  {}? ", prompt.question.asking_for);
        flush();

        tokio::task::spawn_blocking(move || {
            // EOF drops the sender and ends the session
            if let Some(line) = read_line() {
                let _ = on_answered.send(line);
            }
        });
    }

    fn present_answer_feedback(
        &mut self,
        feedback: &AnswerFeedback,
        on_acknowledged: oneshot::Sender<()>,
    ) {
        println!("{}\n", format_feedback(feedback));
        let _ = on_acknowledged.send(());
    }

    fn notify_question_error(&mut self, error: &QuizError) {
        println!("  Skipping a question: {}", error);
    }

    fn notify_quiz_complete(&mut self, summary: &SessionSummary) {
        println!("Finished: {}", summary);
    }
}
