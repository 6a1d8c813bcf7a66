pub mod json_store;
pub mod starter;

pub use json_store::JsonVocabulary;
use rand::seq::IndexedRandom;

use crate::core::{
    VerbClass,
    VerbRecord,
    VocabularyError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerbFilter {
    pub class: Option<VerbClass>,
    /// JLPT level the verb must be tagged with
    pub jlpt: Option<u8>,
}

impl VerbFilter {
    /// A proficiency level of 0 means unrestricted.
    pub fn from_proficiency(level: u8) -> Self {
        Self { class: None, jlpt: (level > 0).then_some(level) }
    }

    pub fn matches(&self, verb: &VerbRecord) -> bool {
        self.class.map_or(true, |class| class == verb.class())
            && self.jlpt.map_or(true, |level| level == verb.jlpt())
    }
}

/// Source of verbs for questions. Lookups are synchronous.
pub trait VocabularyStore: Send + Sync {
    fn get_verb(&self, filter: &VerbFilter) -> Result<VerbRecord, VocabularyError>;
}

/// Verbs held in memory, sampled uniformly among those matching a filter.
#[derive(Debug, Clone, Default)]
pub struct MemoryVocabulary {
    verbs: Vec<VerbRecord>,
}

impl MemoryVocabulary {
    pub fn new(verbs: Vec<VerbRecord>) -> Self {
        Self { verbs }
    }

    pub fn starter() -> Self {
        Self::new(starter::starter_vocabulary())
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn verbs(&self) -> &[VerbRecord] {
        &self.verbs
    }

    pub fn count_matching(&self, filter: &VerbFilter) -> usize {
        self.verbs.iter().filter(|verb| filter.matches(verb)).count()
    }
}

impl VocabularyStore for MemoryVocabulary {
    fn get_verb(&self, filter: &VerbFilter) -> Result<VerbRecord, VocabularyError> {
        let candidates: Vec<&VerbRecord> =
            self.verbs.iter().filter(|verb| filter.matches(verb)).collect();

        candidates
            .choose(&mut rand::rng())
            .map(|verb| (*verb).clone())
            .ok_or(VocabularyError::NoMatchingVerb)
    }
}
