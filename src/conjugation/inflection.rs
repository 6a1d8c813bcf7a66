use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inflection {
    Plain,
    NegativePlain,
    PastPlain,
    NegativePastPlain,
    Polite,
    NegativePolite,
    PastPolite,
    NegativePastPolite,
    TeForm,
}

impl Inflection {
    pub const ALL: [Inflection; 9] = [
        Inflection::Plain,
        Inflection::NegativePlain,
        Inflection::PastPlain,
        Inflection::NegativePastPlain,
        Inflection::Polite,
        Inflection::NegativePolite,
        Inflection::PastPolite,
        Inflection::NegativePastPolite,
        Inflection::TeForm,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Inflection::Plain => "plain",
            Inflection::NegativePlain => "negative_plain",
            Inflection::PastPlain => "past_plain",
            Inflection::NegativePastPlain => "negative_past_plain",
            Inflection::Polite => "polite",
            Inflection::NegativePolite => "negative_polite",
            Inflection::PastPolite => "past_polite",
            Inflection::NegativePastPolite => "negative_past_polite",
            Inflection::TeForm => "te_form",
        }
    }

    /// Accepts the snake_case key, with dashes or spaces in place of
    /// underscores.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Inflection::ALL.into_iter().find(|inflection| inflection.key() == normalized)
    }
}

impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            Inflection::Plain => "Plain",
            Inflection::NegativePlain => "Negative Plain",
            Inflection::PastPlain => "Past Plain",
            Inflection::NegativePastPlain => "Negative Past Plain",
            Inflection::Polite => "Polite",
            Inflection::NegativePolite => "Negative Polite",
            Inflection::PastPolite => "Past Polite",
            Inflection::NegativePastPolite => "Negative Past Polite",
            Inflection::TeForm => "Te-form",
        };
        write!(f, "{}", readable)
    }
}
