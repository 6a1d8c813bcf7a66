use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use super::{
    starter::starter_vocabulary,
    MemoryVocabulary,
    VerbFilter,
    VocabularyStore,
};
use crate::{
    core::{
        models::RawVerbRecord,
        VerbRecord,
        VocabularyError,
    },
    persistence::get_data_file_path,
};

pub const VOCABULARY_FILE: &str = "vocabulary.json";

pub fn default_vocabulary_path() -> PathBuf {
    get_data_file_path(VOCABULARY_FILE)
}

/// Vocabulary loaded from a JSON array of verb records.
#[derive(Debug, Clone)]
pub struct JsonVocabulary {
    path: PathBuf,
    verbs: MemoryVocabulary,
}

impl JsonVocabulary {
    /// Loads every record from `path`. Records that fail validation are
    /// skipped with a warning rather than failing the whole file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;
        let raw: Vec<RawVerbRecord> = serde_json::from_str(&content)?;
        let total = raw.len();

        let verbs: Vec<VerbRecord> = raw
            .into_iter()
            .filter_map(|record| {
                let kana = record.kana.clone();
                match VerbRecord::try_from(record) {
                    Ok(verb) => Some(verb),
                    Err(e) => {
                        tracing::warn!("skipping {}: {}", kana, e);
                        None
                    }
                }
            })
            .collect();

        tracing::info!("loaded {}/{} verbs from {}", verbs.len(), total, path.display());

        Ok(Self { path, verbs: MemoryVocabulary::new(verbs) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn memory(&self) -> &MemoryVocabulary {
        &self.verbs
    }
}

impl VocabularyStore for JsonVocabulary {
    fn get_verb(&self, filter: &VerbFilter) -> Result<VerbRecord, VocabularyError> {
        self.verbs.get_verb(filter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(usize),
    AlreadyPresent,
}

/// Writes the starter vocabulary to `path`. An existing file is left alone
/// unless `force` is set.
pub fn install_starter_vocabulary(
    path: impl AsRef<Path>,
    force: bool,
) -> Result<InstallOutcome, VocabularyError> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Ok(InstallOutcome::AlreadyPresent);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let records: Vec<RawVerbRecord> = starter_vocabulary().into_iter().map(Into::into).collect();
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json)?;
    tracing::info!("installed {} verbs to {}", records.len(), path.display());

    Ok(InstallOutcome::Installed(records.len()))
}
