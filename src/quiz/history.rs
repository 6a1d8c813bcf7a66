use std::path::{
    Path,
    PathBuf,
};

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        KatsuyoError,
        SessionSummary,
    },
    persistence::{
        get_data_file_path,
        load_json,
        load_json_or_default,
        save_json,
    },
};

pub const HISTORY_FILE: &str = "history.json";

pub fn default_history_path() -> PathBuf {
    get_data_file_path(HISTORY_FILE)
}

/// A completed quiz as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub finished_at: DateTime<Utc>,
    /// Preset key, `None` for hand-built adjacencies
    #[serde(default)]
    pub preset: Option<String>,
    pub summary: SessionSummary,
}

impl SessionRecord {
    pub fn now(preset: Option<String>, summary: SessionSummary) -> Self {
        Self { finished_at: Utc::now(), preset, summary }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    sessions: Vec<SessionRecord>,
}

impl HistoryLog {
    pub fn load(path: &Path) -> Result<Self, KatsuyoError> {
        load_json(path)
    }

    /// Unreadable logs come back empty, with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), KatsuyoError> {
        save_json(self, path)
    }

    pub fn push(&mut self, record: SessionRecord) {
        self.sessions.push(record);
    }

    /// Loads the log at `path`, appends `record` and writes it back.
    pub fn append(path: &Path, record: SessionRecord) -> Result<Self, KatsuyoError> {
        let mut log = Self::load(path)?;
        log.push(record);
        log.save(path)?;
        Ok(log)
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sums every stored session.
    pub fn totals(&self) -> SessionSummary {
        self.sessions.iter().fold(
            SessionSummary { total_questions: 0, correct_answers: 0 },
            |acc, record| SessionSummary {
                total_questions: acc.total_questions + record.summary.total_questions,
                correct_answers: acc.correct_answers + record.summary.correct_answers,
            },
        )
    }
}
