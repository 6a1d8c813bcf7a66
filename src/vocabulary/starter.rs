use crate::core::{
    VerbClass,
    VerbRecord,
};

/// Verbs written by `katsuyo install` when no vocabulary file exists yet.
/// (kana, kanji, class, ending, gloss, jlpt)
pub const STARTER_VERBS: &[(&str, &str, VerbClass, &str, &str, u8)] = &[
    ("あう", "会う", VerbClass::Godan, "u", "to meet", 5),
    ("かう", "買う", VerbClass::Godan, "u", "to buy", 5),
    ("いく", "行く", VerbClass::Godan, "ku", "to go", 5),
    ("かく", "書く", VerbClass::Godan, "ku", "to write", 5),
    ("きく", "聞く", VerbClass::Godan, "ku", "to listen", 5),
    ("およぐ", "泳ぐ", VerbClass::Godan, "gu", "to swim", 5),
    ("はなす", "話す", VerbClass::Godan, "su", "to speak", 5),
    ("まつ", "待つ", VerbClass::Godan, "tsu", "to wait", 5),
    ("しぬ", "死ぬ", VerbClass::Godan, "nu", "to die", 5),
    ("あそぶ", "遊ぶ", VerbClass::Godan, "bu", "to play", 5),
    ("よむ", "読む", VerbClass::Godan, "mu", "to read", 5),
    ("のむ", "飲む", VerbClass::Godan, "mu", "to drink", 5),
    ("かえる", "帰る", VerbClass::Godan, "ru", "to return home", 5),
    ("ある", "", VerbClass::Godan, "ru", "to exist (inanimate)", 5),
    ("わかる", "分かる", VerbClass::Godan, "ru", "to understand", 5),
    ("たべる", "食べる", VerbClass::Ichidan, "ru", "to eat", 5),
    ("みる", "見る", VerbClass::Ichidan, "ru", "to see", 5),
    ("ねる", "寝る", VerbClass::Ichidan, "ru", "to sleep", 5),
    ("おきる", "起きる", VerbClass::Ichidan, "ru", "to wake up", 5),
    ("する", "", VerbClass::Suru, "suru", "to do", 5),
    ("べんきょうする", "勉強する", VerbClass::Suru, "suru", "to study", 5),
    ("くる", "来る", VerbClass::Kuru, "kuru", "to come", 5),
    ("てつだう", "手伝う", VerbClass::Godan, "u", "to help", 4),
    ("はこぶ", "運ぶ", VerbClass::Godan, "bu", "to carry", 4),
    ("いそぐ", "急ぐ", VerbClass::Godan, "gu", "to hurry", 4),
    ("しらべる", "調べる", VerbClass::Ichidan, "ru", "to investigate", 4),
    ("くださる", "下さる", VerbClass::Godan, "ru", "to give (honorific)", 4),
    ("もってくる", "持って来る", VerbClass::Kuru, "kuru", "to bring", 4),
    ("とう", "問う", VerbClass::Godan, "u", "to ask", 2),
    ("せがむ", "", VerbClass::Godan, "mu", "to pester", 1),
];

pub fn starter_vocabulary() -> Vec<VerbRecord> {
    STARTER_VERBS
        .iter()
        .filter_map(|(kana, kanji, class, ending, gloss, jlpt)| {
            let kanji = (!kanji.is_empty()).then_some(*kanji);
            match VerbRecord::new(kana, kanji, *class, ending, gloss) {
                Ok(verb) => Some(verb.with_jlpt(*jlpt)),
                Err(e) => {
                    tracing::warn!("skipping starter verb {}: {}", kana, e);
                    None
                }
            }
        })
        .collect()
}
