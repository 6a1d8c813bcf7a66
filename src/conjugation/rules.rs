//! Conjugation is table driven: an inflection picks a stem and a suffix, the
//! verb's class and ending pick how the dictionary ending mutates into that
//! stem, and a short list of irregular verbs overrides either step.

use std::sync::OnceLock;

use wana_kana::ConvertJapanese;

use super::Inflection;
use crate::core::VerbClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemKind {
    /// a-row stem, before ない
    Negative,
    /// i-row stem, before ます
    Continuative,
    Te,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflectionRule {
    pub stem: StemKind,
    pub suffix: &'static str,
}

/// `None` for the dictionary form, which is never rebuilt from a stem.
pub fn inflection_rule(inflection: Inflection) -> Option<InflectionRule> {
    let (stem, suffix) = match inflection {
        Inflection::Plain => return None,
        Inflection::NegativePlain => (StemKind::Negative, "ない"),
        Inflection::NegativePastPlain => (StemKind::Negative, "なかった"),
        Inflection::PastPlain => (StemKind::Past, ""),
        Inflection::TeForm => (StemKind::Te, ""),
        Inflection::Polite => (StemKind::Continuative, "ます"),
        Inflection::NegativePolite => (StemKind::Continuative, "ません"),
        Inflection::PastPolite => (StemKind::Continuative, "ました"),
        Inflection::NegativePastPolite => (StemKind::Continuative, "ませんでした"),
    };
    Some(InflectionRule { stem, suffix })
}

/// Polite suffixes, longest first so ませんでした wins over ません.
pub const POLITE_SUFFIXES: [&str; 4] = ["ませんでした", "ません", "ました", "ます"];

/// What the dictionary ending turns into. The kanji side only differs for
/// verbs whose ending is itself written in kanji (来る).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub kana: &'static str,
    pub kanji: &'static str,
}

impl Mutation {
    const fn same(text: &'static str) -> Self {
        Mutation { kana: text, kanji: text }
    }
}

#[derive(Debug, Clone)]
pub struct EndingRule {
    pub class: VerbClass,
    /// Romanised ending as stored on the verb record
    pub ending: &'static str,
    pub kana_ending: String,
    pub kanji_ending: Option<&'static str>,
    pub negative: Mutation,
    pub continuative: Mutation,
    pub te: Mutation,
    pub past: Mutation,
}

impl EndingRule {
    pub fn mutation(&self, kind: StemKind) -> Mutation {
        match kind {
            StemKind::Negative => self.negative,
            StemKind::Continuative => self.continuative,
            StemKind::Te => self.te,
            StemKind::Past => self.past,
        }
    }

    /// Ending to strip from the written form being conjugated.
    pub fn written_ending(&self, kanji: bool) -> &str {
        match (kanji, self.kanji_ending) {
            (true, Some(ending)) => ending,
            _ => &self.kana_ending,
        }
    }
}

fn godan(ending: &'static str, a: &'static str, i: &'static str, te: &'static str, ta: &'static str) -> EndingRule {
    EndingRule {
        class: VerbClass::Godan,
        ending,
        kana_ending: ending.to_hiragana(),
        kanji_ending: None,
        negative: Mutation::same(a),
        continuative: Mutation::same(i),
        te: Mutation::same(te),
        past: Mutation::same(ta),
    }
}

pub fn create_ending_rules() -> Vec<EndingRule> {
    vec![
        // う-verbs take わ, not あ, before ない
        godan("u", "わ", "い", "って", "った"),
        godan("ku", "か", "き", "いて", "いた"),
        godan("gu", "が", "ぎ", "いで", "いだ"),
        godan("su", "さ", "し", "して", "した"),
        godan("tsu", "た", "ち", "って", "った"),
        godan("nu", "な", "に", "んで", "んだ"),
        godan("bu", "ば", "び", "んで", "んだ"),
        godan("mu", "ま", "み", "んで", "んだ"),
        godan("ru", "ら", "り", "って", "った"),
        EndingRule {
            class: VerbClass::Ichidan,
            ending: "ru",
            kana_ending: "ru".to_hiragana(),
            kanji_ending: None,
            negative: Mutation::same(""),
            continuative: Mutation::same(""),
            te: Mutation::same("て"),
            past: Mutation::same("た"),
        },
        EndingRule {
            class: VerbClass::Suru,
            ending: "suru",
            kana_ending: "suru".to_hiragana(),
            kanji_ending: None,
            negative: Mutation::same("し"),
            continuative: Mutation::same("し"),
            te: Mutation::same("して"),
            past: Mutation::same("した"),
        },
        EndingRule {
            class: VerbClass::Kuru,
            ending: "kuru",
            kana_ending: "kuru".to_hiragana(),
            kanji_ending: Some("来る"),
            negative: Mutation { kana: "こ", kanji: "来" },
            continuative: Mutation { kana: "き", kanji: "来" },
            te: Mutation { kana: "きて", kanji: "来て" },
            past: Mutation { kana: "きた", kanji: "来た" },
        },
    ]
}

fn ending_rules() -> &'static [EndingRule] {
    static RULES: OnceLock<Vec<EndingRule>> = OnceLock::new();
    RULES.get_or_init(create_ending_rules)
}

pub fn ending_rule(class: VerbClass, ending: &str) -> Option<&'static EndingRule> {
    ending_rules().iter().find(|rule| rule.class == class && rule.ending == ending)
}

pub fn known_endings(class: VerbClass) -> Vec<&'static str> {
    ending_rules().iter().filter(|rule| rule.class == class).map(|rule| rule.ending).collect()
}

/// Verbs that break their class pattern. Keyed on the dictionary kana.
pub struct VerbException {
    pub class: VerbClass,
    pub kana: &'static str,
    /// Replaces the ending mutation for a stem
    pub stems: &'static [(StemKind, &'static str)],
    /// Replaces the entire conjugated word
    pub words: &'static [(Inflection, &'static str)],
}

pub const VERB_EXCEPTIONS: &[VerbException] = &[
    VerbException {
        class: VerbClass::Godan,
        kana: "いく",
        stems: &[(StemKind::Te, "って"), (StemKind::Past, "った")],
        words: &[],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "とう",
        stems: &[(StemKind::Te, "うて"), (StemKind::Past, "うた")],
        words: &[],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "こう",
        stems: &[(StemKind::Te, "うて"), (StemKind::Past, "うた")],
        words: &[],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "ある",
        stems: &[],
        words: &[(Inflection::NegativePlain, "ない"), (Inflection::NegativePastPlain, "なかった")],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "くださる",
        stems: &[(StemKind::Continuative, "い")],
        words: &[],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "いらっしゃる",
        stems: &[(StemKind::Continuative, "い")],
        words: &[],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "おっしゃる",
        stems: &[(StemKind::Continuative, "い")],
        words: &[],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "なさる",
        stems: &[(StemKind::Continuative, "い")],
        words: &[],
    },
    VerbException {
        class: VerbClass::Godan,
        kana: "ござる",
        stems: &[(StemKind::Continuative, "い")],
        words: &[],
    },
];

pub fn find_exception(class: VerbClass, kana: &str) -> Option<&'static VerbException> {
    VERB_EXCEPTIONS.iter().find(|exception| exception.class == class && exception.kana == kana)
}

impl VerbException {
    pub fn stem_override(&self, kind: StemKind) -> Option<&'static str> {
        self.stems.iter().find(|(k, _)| *k == kind).map(|(_, text)| *text)
    }

    pub fn word_override(&self, inflection: Inflection) -> Option<&'static str> {
        self.words.iter().find(|(i, _)| *i == inflection).map(|(_, text)| *text)
    }
}
