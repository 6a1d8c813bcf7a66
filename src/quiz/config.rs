use std::collections::{
    BTreeMap,
    BTreeSet,
};

use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    conjugation::Inflection,
    core::ConfigurationError,
    vocabulary::VerbFilter,
};

type AdjacencyMap = BTreeMap<Inflection, BTreeSet<Inflection>>;

/// Which target inflections may be asked for when a given predicate
/// inflection is shown. A predicate never lists itself as a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AdjacencyMap", into = "AdjacencyMap")]
pub struct InflectionAdjacency {
    edges: AdjacencyMap,
}

impl InflectionAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        predicate: Inflection,
        targets: impl IntoIterator<Item = Inflection>,
    ) -> &mut Self {
        let entry = self.edges.entry(predicate).or_default();
        entry.extend(targets.into_iter().filter(|target| *target != predicate));
        self
    }

    /// Every inflection in `inflections` can be asked from every other one.
    pub fn bidirectional(inflections: &[Inflection]) -> Self {
        let mut adjacency = Self::new();
        for predicate in inflections {
            adjacency.insert(*predicate, inflections.iter().copied());
        }
        adjacency
    }

    /// Each of `from` asks for any of `to`.
    pub fn monodirectional(from: &[Inflection], to: &[Inflection]) -> Self {
        let mut adjacency = Self::new();
        for predicate in from {
            adjacency.insert(*predicate, to.iter().copied());
        }
        adjacency
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn predicates(&self) -> impl Iterator<Item = Inflection> + '_ {
        self.edges.keys().copied()
    }

    pub fn targets(&self, predicate: Inflection) -> impl Iterator<Item = Inflection> + '_ {
        self.edges.get(&predicate).into_iter().flatten().copied()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.edges.is_empty() {
            return Err(ConfigurationError::EmptyAdjacency);
        }

        if let Some((predicate, _)) = self.edges.iter().find(|(_, targets)| targets.is_empty()) {
            return Err(ConfigurationError::NoTargets(*predicate));
        }

        Ok(())
    }
}

impl From<AdjacencyMap> for InflectionAdjacency {
    fn from(map: AdjacencyMap) -> Self {
        let mut adjacency = Self::new();
        for (predicate, targets) in map {
            adjacency.insert(predicate, targets);
        }
        adjacency
    }
}

impl From<InflectionAdjacency> for AdjacencyMap {
    fn from(adjacency: InflectionAdjacency) -> Self {
        adjacency.edges
    }
}

impl fmt::Display for InflectionAdjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (predicate, targets)) in self.edges.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let targets: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
            write!(f, "{} -> {}", predicate, targets.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub number_of_questions: usize,
    pub inflections: InflectionAdjacency,
    /// JLPT level to draw verbs from, 0 for any
    #[serde(default, alias = "jlpt")]
    pub proficiency_level: u8,
}

impl QuizConfig {
    pub fn new(number_of_questions: usize, inflections: InflectionAdjacency) -> Self {
        Self { number_of_questions, inflections, proficiency_level: 0 }
    }

    pub fn with_proficiency_level(mut self, level: u8) -> Self {
        self.proficiency_level = level;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.number_of_questions == 0 {
            return Err(ConfigurationError::InvalidQuestionCount(self.number_of_questions));
        }
        self.inflections.validate()
    }

    pub fn verb_filter(&self) -> VerbFilter {
        VerbFilter::from_proficiency(self.proficiency_level)
    }
}

pub const ALL_PLAIN: [Inflection; 4] = [
    Inflection::Plain,
    Inflection::NegativePlain,
    Inflection::PastPlain,
    Inflection::NegativePastPlain,
];

pub const ALL_POLITE: [Inflection; 4] = [
    Inflection::Polite,
    Inflection::NegativePolite,
    Inflection::PastPolite,
    Inflection::NegativePastPolite,
];

pub const TE_FORM: [Inflection; 1] = [Inflection::TeForm];

/// Named inflection sets offered without custom configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardConfig {
    AllPlain,
    AllPolite,
    PlainAndPolite,
    PlainToTeForm,
    PoliteToTeForm,
}

impl StandardConfig {
    pub const ALL: [StandardConfig; 5] = [
        StandardConfig::AllPlain,
        StandardConfig::AllPolite,
        StandardConfig::PlainAndPolite,
        StandardConfig::PlainToTeForm,
        StandardConfig::PoliteToTeForm,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StandardConfig::AllPlain => "all-plain",
            StandardConfig::AllPolite => "all-polite",
            StandardConfig::PlainAndPolite => "plain-and-polite",
            StandardConfig::PlainToTeForm => "plain-to-te-form",
            StandardConfig::PoliteToTeForm => "polite-to-te-form",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, ConfigurationError> {
        let normalized = key.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        StandardConfig::ALL
            .into_iter()
            .find(|preset| preset.key() == normalized)
            .ok_or_else(|| ConfigurationError::UnknownPreset(key.to_string()))
    }

    pub fn adjacency(&self) -> InflectionAdjacency {
        match self {
            StandardConfig::AllPlain => InflectionAdjacency::bidirectional(&ALL_PLAIN),
            StandardConfig::AllPolite => InflectionAdjacency::bidirectional(&ALL_POLITE),
            StandardConfig::PlainAndPolite => {
                let all: Vec<Inflection> = ALL_PLAIN.iter().chain(ALL_POLITE.iter()).copied().collect();
                InflectionAdjacency::bidirectional(&all)
            }
            StandardConfig::PlainToTeForm => {
                InflectionAdjacency::monodirectional(&[Inflection::Plain], &TE_FORM)
            }
            StandardConfig::PoliteToTeForm => {
                InflectionAdjacency::monodirectional(&[Inflection::Polite], &TE_FORM)
            }
        }
    }
}

impl fmt::Display for StandardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            StandardConfig::AllPlain => "All Plain",
            StandardConfig::AllPolite => "All Polite",
            StandardConfig::PlainAndPolite => "Plain And Polite",
            StandardConfig::PlainToTeForm => "Plain To Te Form",
            StandardConfig::PoliteToTeForm => "Polite To Te Form",
        };
        write!(f, "{}", readable)
    }
}

/// Parses a comma separated list of inflection keys.
pub fn parse_inflection_list(list: &str) -> Result<Vec<Inflection>, ConfigurationError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            Inflection::from_key(item)
                .ok_or_else(|| ConfigurationError::UnknownInflection(item.to_string()))
        })
        .collect()
}
