use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use wana_kana::IsJapaneseStr;

use super::{
    errors::VocabularyError,
    utils::StripEnding,
};
use crate::conjugation::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbClass {
    #[serde(alias = "type1", alias = "Type1")]
    Godan,
    #[serde(alias = "type2", alias = "Type2")]
    Ichidan,
    Suru,
    Kuru,
}

impl VerbClass {
    pub const ALL: [VerbClass; 4] =
        [VerbClass::Godan, VerbClass::Ichidan, VerbClass::Suru, VerbClass::Kuru];

    pub fn key(&self) -> &'static str {
        match self {
            VerbClass::Godan => "godan",
            VerbClass::Ichidan => "ichidan",
            VerbClass::Suru => "suru",
            VerbClass::Kuru => "kuru",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "godan" | "type1" => Some(VerbClass::Godan),
            "ichidan" | "type2" => Some(VerbClass::Ichidan),
            "suru" => Some(VerbClass::Suru),
            "kuru" => Some(VerbClass::Kuru),
            _ => None,
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            VerbClass::Godan => "Godan",
            VerbClass::Ichidan => "Ichidan",
            VerbClass::Suru => "Suru",
            VerbClass::Kuru => "Kuru",
        };
        write!(f, "{}", readable)
    }
}

/// On-disk shape of a verb. Converted into a [`VerbRecord`] only after
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVerbRecord {
    pub kana: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kanji: Option<String>,
    #[serde(alias = "type")]
    pub class: VerbClass,
    pub ending: String,
    #[serde(default, alias = "english")]
    pub gloss: String,
    #[serde(default)]
    pub jlpt: u8,
}

/// A dictionary verb. Immutable once built; every instance satisfies the
/// checks in [`RawVerbRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVerbRecord", into = "RawVerbRecord")]
pub struct VerbRecord {
    dictionary_kana: String,
    dictionary_kanji: Option<String>,
    class: VerbClass,
    ending_sound: String,
    gloss: String,
    jlpt: u8,
}

impl VerbRecord {
    pub fn new(
        kana: &str,
        kanji: Option<&str>,
        class: VerbClass,
        ending: &str,
        gloss: &str,
    ) -> Result<Self, VocabularyError> {
        RawVerbRecord {
            kana: kana.to_string(),
            kanji: kanji.map(str::to_string),
            class,
            ending: ending.to_string(),
            gloss: gloss.to_string(),
            jlpt: 0,
        }
        .try_into()
    }

    pub fn with_jlpt(mut self, jlpt: u8) -> Self {
        self.jlpt = jlpt;
        self
    }

    pub fn kana(&self) -> &str {
        &self.dictionary_kana
    }

    pub fn kanji(&self) -> Option<&str> {
        self.dictionary_kanji.as_deref()
    }

    pub fn class(&self) -> VerbClass {
        self.class
    }

    pub fn ending_sound(&self) -> &str {
        &self.ending_sound
    }

    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    pub fn jlpt(&self) -> u8 {
        self.jlpt
    }

    /// Kanji form when recorded, kana otherwise.
    pub fn headword(&self) -> &str {
        self.kanji().unwrap_or(self.kana())
    }
}

impl RawVerbRecord {
    /// Checks the invariants every [`VerbRecord`] holds.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        if self.kana.is_empty() {
            return Err(VocabularyError::InvalidVerb("kana must not be empty".to_string()));
        }

        if !self.kana.as_str().is_kana() {
            return Err(VocabularyError::InvalidVerb(format!("'{}' is not kana", self.kana)));
        }

        let Some(rule) = rules::ending_rule(self.class, &self.ending) else {
            return Err(VocabularyError::InvalidVerb(format!(
                "'{}' is not a {} ending ({}), expected one of {}",
                self.ending,
                self.class,
                self.kana,
                rules::known_endings(self.class).join(", ")
            )));
        };

        if self.kana.strip_ending(&rule.kana_ending).is_none() {
            return Err(VocabularyError::InvalidVerb(format!(
                "'{}' does not end in '{}'",
                self.kana, rule.kana_ending
            )));
        }

        // Kanji spellings may keep the ending in kana
        if let Some(kanji) = self.kanji.as_deref().filter(|k| !k.trim().is_empty()) {
            let kanji_ending = rule.written_ending(true);
            if kanji.strip_ending(kanji_ending).is_none()
                && kanji.strip_ending(&rule.kana_ending).is_none()
            {
                return Err(VocabularyError::InvalidVerb(format!(
                    "'{}' does not end in '{}'",
                    kanji, kanji_ending
                )));
            }
        }

        Ok(())
    }
}

impl TryFrom<RawVerbRecord> for VerbRecord {
    type Error = VocabularyError;

    fn try_from(raw: RawVerbRecord) -> Result<Self, Self::Error> {
        raw.validate()?;
        let kanji = raw.kanji.filter(|k| !k.trim().is_empty());

        Ok(VerbRecord {
            dictionary_kana: raw.kana,
            dictionary_kanji: kanji,
            class: raw.class,
            ending_sound: raw.ending,
            gloss: raw.gloss,
            jlpt: raw.jlpt,
        })
    }
}

impl From<VerbRecord> for RawVerbRecord {
    fn from(verb: VerbRecord) -> Self {
        RawVerbRecord {
            kana: verb.dictionary_kana,
            kanji: verb.dictionary_kanji,
            class: verb.class,
            ending: verb.ending_sound,
            gloss: verb.gloss,
            jlpt: verb.jlpt,
        }
    }
}

impl fmt::Display for VerbRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kanji() {
            Some(kanji) => write!(f, "{} ({})", kanji, self.dictionary_kana),
            None => write!(f, "{}", self.dictionary_kana),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_questions: usize,
    pub correct_answers: usize,
}

impl SessionSummary {
    pub fn score_ratio(&self) -> f32 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f32 / self.total_questions as f32
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} correct ({:.0}%)",
            self.correct_answers,
            self.total_questions,
            self.score_ratio() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_kana() {
        let result = VerbRecord::new("", None, VerbClass::Godan, "u", "");
        assert!(matches!(result, Err(VocabularyError::InvalidVerb(_))));
    }

    #[test]
    fn rejects_ending_from_another_class() {
        let result = VerbRecord::new("たべる", Some("食べる"), VerbClass::Ichidan, "ku", "to eat");
        assert!(matches!(result, Err(VocabularyError::InvalidVerb(_))));
    }

    #[test]
    fn rejects_spellings_without_their_ending() {
        let result = VerbRecord::new("たべる", Some("食べる"), VerbClass::Godan, "ku", "to eat");
        assert!(matches!(result, Err(VocabularyError::InvalidVerb(_))));

        let result = VerbRecord::new("たべる", Some("食べ"), VerbClass::Ichidan, "ru", "to eat");
        assert!(matches!(result, Err(VocabularyError::InvalidVerb(_))));

        let json = r#"{"kana": "のむ", "class": "ichidan", "ending": "ru"}"#;
        assert!(serde_json::from_str::<VerbRecord>(json).is_err());
    }

    #[test]
    fn kanji_may_keep_a_kana_ending() {
        assert!(VerbRecord::new("もってくる", Some("持ってくる"), VerbClass::Kuru, "kuru", "").is_ok());
        assert!(VerbRecord::new("もってくる", Some("持って来る"), VerbClass::Kuru, "kuru", "").is_ok());
        assert!(VerbRecord::new("くる", Some("来た"), VerbClass::Kuru, "kuru", "").is_err());
    }

    #[test]
    fn unknown_ending_lists_the_valid_ones() {
        let Err(VocabularyError::InvalidVerb(message)) =
            VerbRecord::new("たべる", None, VerbClass::Ichidan, "ku", "")
        else {
            panic!("expected an invalid verb");
        };
        assert!(message.ends_with("expected one of ru"), "{}", message);
    }

    #[test]
    fn blank_kanji_is_treated_as_missing() {
        let verb = VerbRecord::new("せがむ", Some(" "), VerbClass::Godan, "mu", "to pester").unwrap();
        assert_eq!(verb.kanji(), None);
        assert_eq!(verb.headword(), "せがむ");
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let json = r#"{"kana": "あう", "kanji": "会う", "type": "type1", "ending": "u", "english": "to meet"}"#;
        let verb: VerbRecord = serde_json::from_str(json).unwrap();
        assert_eq!(verb.class(), VerbClass::Godan);
        assert_eq!(verb.gloss(), "to meet");
        assert_eq!(verb.jlpt(), 0);
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"kana": "taberu", "class": "ichidan", "ending": "ru"}"#;
        assert!(serde_json::from_str::<VerbRecord>(json).is_err());
    }

    #[test]
    fn summary_ratio_handles_empty() {
        let summary = SessionSummary { total_questions: 0, correct_answers: 0 };
        assert_eq!(summary.score_ratio(), 0.0);

        let summary = SessionSummary { total_questions: 4, correct_answers: 3 };
        assert_eq!(summary.to_string(), "3/4 correct (75%)");
    }
}
