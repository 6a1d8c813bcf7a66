use std::{
    path::PathBuf,
    process,
    sync::Arc,
};

use clap::{
    Parser,
    Subcommand,
};
use katsuyo::{
    conjugation::{
        conjugate,
        Inflection,
    },
    core::{
        KatsuyoError,
        VerbClass,
        VerbRecord,
    },
    presentation::TerminalPresentation,
    quiz::{
        history::{
            default_history_path,
            HistoryLog,
            SessionRecord,
        },
        parse_inflection_list,
        InflectionAdjacency,
        QuizConfig,
        RunOutcome,
        SessionController,
        StandardConfig,
    },
    vocabulary::{
        json_store::{
            default_vocabulary_path,
            install_starter_vocabulary,
            InstallOutcome,
        },
        JsonVocabulary,
        MemoryVocabulary,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "katsuyo", version, about = "Japanese verb conjugation quiz")]
struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz
    Quiz {
        /// Named inflection set (see `presets`)
        #[arg(long, conflicts_with_all = ["from", "to", "bidirectional"])]
        preset: Option<String>,

        /// Inflections shown as the question (comma-separated)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Inflections asked for (comma-separated)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Inflections quizzed in every direction (comma-separated)
        #[arg(long, conflicts_with_all = ["from", "to"])]
        bidirectional: Option<String>,

        #[arg(short = 'n', long, default_value = "10")]
        questions: usize,

        /// JLPT level to draw verbs from, 0 for any
        #[arg(long, default_value = "0")]
        jlpt: u8,

        /// Vocabulary JSON file
        #[arg(long)]
        vocab: Option<PathBuf>,
    },

    /// List the named inflection sets
    Presets,

    /// Print every inflection of one verb
    Conjugate {
        /// Dictionary form in kana
        kana: String,

        /// godan, ichidan, suru or kuru
        #[arg(long)]
        class: String,

        /// Romaji ending sound, e.g. "ku" or "ru"
        #[arg(long)]
        ending: String,

        #[arg(long)]
        kanji: Option<String>,
    },

    /// Write the starter vocabulary to disk
    Install {
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show past quiz results
    History,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "katsuyo=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Quiz { preset, from, to, bidirectional, questions, jlpt, vocab } => {
            let selection = InflectionSelection { preset, from, to, bidirectional };
            run_quiz(selection, questions, jlpt, vocab).await
        }
        Commands::Presets => {
            list_presets();
            Ok(())
        }
        Commands::Conjugate { kana, class, ending, kanji } => {
            print_conjugations(&kana, &class, &ending, kanji.as_deref())
        }
        Commands::Install { vocab, force } => install(vocab, force),
        Commands::History => show_history(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

struct InflectionSelection {
    preset: Option<String>,
    from: Option<String>,
    to: Option<String>,
    bidirectional: Option<String>,
}

impl InflectionSelection {
    /// Resolves to an adjacency plus the preset key it came from, if any.
    fn resolve(&self) -> Result<(InflectionAdjacency, Option<String>), KatsuyoError> {
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            let adjacency = InflectionAdjacency::monodirectional(
                &parse_inflection_list(from)?,
                &parse_inflection_list(to)?,
            );
            return Ok((adjacency, None));
        }

        if let Some(list) = &self.bidirectional {
            return Ok((InflectionAdjacency::bidirectional(&parse_inflection_list(list)?), None));
        }

        let preset = match &self.preset {
            Some(key) => StandardConfig::from_key(key)?,
            None => StandardConfig::PlainAndPolite,
        };
        Ok((preset.adjacency(), Some(preset.key().to_string())))
    }
}

fn load_vocabulary(vocab: Option<PathBuf>) -> Result<MemoryVocabulary, KatsuyoError> {
    let path = vocab.unwrap_or_else(default_vocabulary_path);
    if path.exists() {
        let vocabulary = JsonVocabulary::open(&path)?;
        return Ok(vocabulary.memory().clone());
    }

    tracing::info!("no vocabulary at {}", path.display());
    println!(
        "No vocabulary file at {}, using the built-in verbs. Run `katsuyo install` to create one.",
        path.display()
    );
    Ok(MemoryVocabulary::starter())
}

async fn run_quiz(
    selection: InflectionSelection,
    questions: usize,
    jlpt: u8,
    vocab: Option<PathBuf>,
) -> Result<(), KatsuyoError> {
    let (adjacency, preset) = selection.resolve()?;
    let config = QuizConfig::new(questions, adjacency).with_proficiency_level(jlpt);
    let vocabulary = Arc::new(load_vocabulary(vocab)?);

    let presentation = TerminalPresentation::new(config);
    let mut controller = SessionController::new(presentation, vocabulary);

    match controller.run().await? {
        RunOutcome::Completed(summary) => {
            let history_path = default_history_path();
            if let Err(e) = HistoryLog::append(&history_path, SessionRecord::now(preset, summary)) {
                tracing::warn!("could not record session in {}: {}", history_path.display(), e);
            }
            Ok(())
        }
        RunOutcome::CannotStart(error) => Err(error.into()),
        RunOutcome::Abandoned => {
            println!("\nQuiz abandoned.");
            Ok(())
        }
        RunOutcome::Failed(error) => Err(error.into()),
    }
}

fn list_presets() {
    for preset in StandardConfig::ALL {
        println!("{:<20} {}", preset.key(), preset);
        println!("{:<20} {}", "", preset.adjacency());
    }
}

fn print_conjugations(
    kana: &str,
    class: &str,
    ending: &str,
    kanji: Option<&str>,
) -> Result<(), KatsuyoError> {
    let class = VerbClass::from_key(class)
        .ok_or_else(|| KatsuyoError::Custom(format!("unknown verb class '{}'", class)))?;
    let verb = VerbRecord::new(kana, kanji, class, ending, "")?;

    println!("{} [{}]", verb, verb.class());
    for inflection in Inflection::ALL {
        let kana_form = conjugate(&verb, inflection, false, true)?;
        match verb.kanji() {
            Some(_) => {
                let kanji_form = conjugate(&verb, inflection, true, false)?;
                println!("{:<24} {:<12} {}", inflection.to_string(), kanji_form, kana_form);
            }
            None => println!("{:<24} {}", inflection.to_string(), kana_form),
        }
    }
    Ok(())
}

fn install(vocab: Option<PathBuf>, force: bool) -> Result<(), KatsuyoError> {
    let path = vocab.unwrap_or_else(default_vocabulary_path);
    match install_starter_vocabulary(&path, force)? {
        InstallOutcome::Installed(count) => {
            println!("Installed {} verbs to {}", count, path.display())
        }
        InstallOutcome::AlreadyPresent => {
            println!("{} already exists, use --force to overwrite", path.display())
        }
    }
    Ok(())
}

fn show_history() -> Result<(), KatsuyoError> {
    let log = HistoryLog::load_or_default(&default_history_path());
    if log.is_empty() {
        println!("No quizzes recorded yet.");
        return Ok(());
    }

    for record in log.sessions() {
        println!(
            "{}  {:<20} {}",
            record.finished_at.format("%Y-%m-%d %H:%M"),
            record.preset.as_deref().unwrap_or("custom"),
            record.summary
        );
    }
    println!("Overall: {}", log.totals());
    Ok(())
}
