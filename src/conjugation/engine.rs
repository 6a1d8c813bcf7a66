use super::{
    rules::{
        self,
        EndingRule,
        StemKind,
        POLITE_SUFFIXES,
    },
    Inflection,
};
use crate::core::{
    utils::StripEnding,
    ConjugationError,
    VerbRecord,
};

#[derive(Debug, Clone)]
pub struct ConjugationRequest<'a> {
    pub verb: &'a VerbRecord,
    pub target: Inflection,
    pub render_kanji: bool,
    pub render_kana: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Kana,
}

/// Conjugates `verb` into `target`.
///
/// `render_kanji` prefers the kanji spelling and falls back to kana when
/// `render_kana` is also set. Asking for kanji alone on a verb without one, or
/// for neither script, is a [`ConjugationError::MissingForm`].
pub fn conjugate(
    verb: &VerbRecord,
    target: Inflection,
    render_kanji: bool,
    render_kana: bool,
) -> Result<String, ConjugationError> {
    let (script, surface) = select_surface(verb, render_kanji, render_kana)?;
    let ending_rule = find_ending_rule(verb, target)?;

    let Some(rule) = rules::inflection_rule(target) else {
        return Ok(surface.to_string());
    };

    let exception = rules::find_exception(verb.class(), verb.kana());
    if let Some(word) = exception.and_then(|e| e.word_override(target)) {
        return Ok(word.to_string());
    }

    let stem = build_stem(verb, ending_rule, script, surface, rule.stem)?;
    Ok(format!("{}{}", stem, rule.suffix))
}

pub fn conjugate_request(request: &ConjugationRequest<'_>) -> Result<String, ConjugationError> {
    conjugate(request.verb, request.target, request.render_kanji, request.render_kana)
}

/// The stem `kind` of `verb`: dictionary form minus its class ending, plus the
/// ending mutation.
pub fn stem(
    verb: &VerbRecord,
    kind: StemKind,
    render_kanji: bool,
    render_kana: bool,
) -> Result<String, ConjugationError> {
    let (script, surface) = select_surface(verb, render_kanji, render_kana)?;
    let ending_rule = find_ending_rule(verb, Inflection::Plain)?;
    build_stem(verb, ending_rule, script, surface, kind)
}

/// Removes a polite suffix, giving back the continuative stem.
pub fn strip_polite_suffix(form: &str) -> Option<&str> {
    POLITE_SUFFIXES.iter().find_map(|suffix| form.strip_ending(suffix))
}

fn select_surface(
    verb: &VerbRecord,
    render_kanji: bool,
    render_kana: bool,
) -> Result<(Script, &str), ConjugationError> {
    match (render_kanji, verb.kanji(), render_kana) {
        (true, Some(kanji), _) => Ok((Script::Kanji, kanji)),
        (_, _, true) => Ok((Script::Kana, verb.kana())),
        (true, None, false) => {
            Err(ConjugationError::MissingForm { verb: verb.kana().to_string(), rendering: "kanji" })
        }
        (false, _, false) => Err(ConjugationError::MissingForm {
            verb: verb.headword().to_string(),
            rendering: "requested",
        }),
    }
}

fn find_ending_rule(
    verb: &VerbRecord,
    target: Inflection,
) -> Result<&'static EndingRule, ConjugationError> {
    rules::ending_rule(verb.class(), verb.ending_sound()).ok_or_else(|| {
        ConjugationError::UnsupportedInflection {
            class: verb.class(),
            ending: verb.ending_sound().to_string(),
            inflection: target,
        }
    })
}

fn build_stem(
    verb: &VerbRecord,
    ending_rule: &EndingRule,
    script: Script,
    surface: &str,
    kind: StemKind,
) -> Result<String, ConjugationError> {
    let ending = ending_rule.written_ending(script == Script::Kanji);
    // Kanji spellings may still end in kana (持ってくる), which mutates like kana
    let (base, script) = match surface.strip_ending(ending) {
        Some(base) => (base, script),
        None => match surface.strip_ending(&ending_rule.kana_ending) {
            Some(base) if script == Script::Kanji => (base, Script::Kana),
            _ => {
                return Err(ConjugationError::EndingMismatch {
                    word: surface.to_string(),
                    ending: ending.to_string(),
                })
            }
        },
    };

    let exception = rules::find_exception(verb.class(), verb.kana());
    let mutation = match exception.and_then(|e| e.stem_override(kind)) {
        Some(text) => text,
        None => {
            let mutation = ending_rule.mutation(kind);
            match script {
                Script::Kanji => mutation.kanji,
                Script::Kana => mutation.kana,
            }
        }
    };

    Ok(format!("{}{}", base, mutation))
}
