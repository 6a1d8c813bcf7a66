use core::fmt;

use rand::{
    seq::IndexedRandom,
    Rng,
};

use super::config::InflectionAdjacency;
use crate::{
    conjugation::{
        conjugate,
        Inflection,
    },
    core::{
        ConjugationError,
        QuizError,
        VerbRecord,
    },
    vocabulary::{
        VerbFilter,
        VocabularyStore,
    },
};

pub type FormFn = Box<dyn Fn(&VerbRecord) -> Result<String, ConjugationError> + Send + Sync>;

/// One quiz turn: show `verb` in `predicate_inflection`, expect it back in
/// `asking_for`.
pub struct Question {
    pub verb: VerbRecord,
    pub asking_for: Inflection,
    pub predicate_inflection: Inflection,
    pub answer_fn: FormFn,
    pub predicate_fn: FormFn,
}

impl Question {
    pub fn new(verb: VerbRecord, predicate_inflection: Inflection, asking_for: Inflection) -> Self {
        Self {
            verb,
            asking_for,
            predicate_inflection,
            answer_fn: inflection_fn(asking_for),
            predicate_fn: inflection_fn(predicate_inflection),
        }
    }

    pub fn expected_answer(&self) -> Result<String, ConjugationError> {
        (self.answer_fn)(&self.verb)
    }

    pub fn predicate_form(&self) -> Result<String, ConjugationError> {
        (self.predicate_fn)(&self.verb)
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("verb", &self.verb)
            .field("asking_for", &self.asking_for)
            .field("predicate_inflection", &self.predicate_inflection)
            .finish_non_exhaustive()
    }
}

fn inflection_fn(inflection: Inflection) -> FormFn {
    Box::new(move |verb: &VerbRecord| conjugate(verb, inflection, true, true))
}

/// Builds a question from a random edge of `adjacency` and one verb from
/// `vocabulary`. Lookup failures are returned as is.
pub fn make_question<V, R>(
    adjacency: &InflectionAdjacency,
    vocabulary: &V,
    filter: &VerbFilter,
    rng: &mut R,
) -> Result<Question, QuizError>
where
    V: VocabularyStore + ?Sized,
    R: Rng + ?Sized,
{
    let predicates: Vec<Inflection> = adjacency.predicates().collect();
    let predicate = *predicates.choose(&mut *rng).ok_or(QuizError::EmptyConfiguration)?;

    let targets: Vec<Inflection> =
        adjacency.targets(predicate).filter(|target| *target != predicate).collect();
    let asking_for = *targets.choose(&mut *rng).ok_or(QuizError::NoValidTarget(predicate))?;

    let verb = vocabulary.get_verb(filter)?;
    tracing::debug!("question: {} {} -> {}", verb, predicate, asking_for);

    Ok(Question::new(verb, predicate, asking_for))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{
        AtomicUsize,
        Ordering,
    };

    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::{
        core::{
            VerbClass,
            VocabularyError,
        },
        vocabulary::MemoryVocabulary,
    };

    struct CountingVocabulary {
        inner: MemoryVocabulary,
        calls: AtomicUsize,
    }

    impl VocabularyStore for CountingVocabulary {
        fn get_verb(&self, filter: &VerbFilter) -> Result<VerbRecord, VocabularyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_verb(filter)
        }
    }

    fn counting() -> CountingVocabulary {
        let taberu = VerbRecord::new("たべる", Some("食べる"), VerbClass::Ichidan, "ru", "to eat").unwrap();
        CountingVocabulary { inner: MemoryVocabulary::new(vec![taberu]), calls: AtomicUsize::new(0) }
    }

    fn plain_to_polite() -> InflectionAdjacency {
        let mut adjacency = InflectionAdjacency::new();
        adjacency.insert(Inflection::Plain, [Inflection::Polite, Inflection::NegativePolite]);
        adjacency
    }

    #[test]
    fn builds_question_from_adjacency() {
        let vocabulary = counting();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let question =
                make_question(&plain_to_polite(), &vocabulary, &VerbFilter::default(), &mut rng).unwrap();

            assert_eq!(question.predicate_inflection, Inflection::Plain);
            assert!(matches!(question.asking_for, Inflection::Polite | Inflection::NegativePolite));
            assert_eq!(
                question.expected_answer().unwrap(),
                conjugate(&question.verb, question.asking_for, true, true).unwrap()
            );
            assert_eq!(question.predicate_form().unwrap(), "食べる");
        }
    }

    #[test]
    fn one_lookup_per_question() {
        let vocabulary = counting();
        let mut rng = StdRng::seed_from_u64(1);
        make_question(&plain_to_polite(), &vocabulary, &VerbFilter::default(), &mut rng).unwrap();
        make_question(&plain_to_polite(), &vocabulary, &VerbFilter::default(), &mut rng).unwrap();
        assert_eq!(vocabulary.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn empty_adjacency_fails_before_lookup() {
        let vocabulary = counting();
        let mut rng = StdRng::seed_from_u64(1);
        let result =
            make_question(&InflectionAdjacency::new(), &vocabulary, &VerbFilter::default(), &mut rng);
        assert!(matches!(result, Err(QuizError::EmptyConfiguration)));
        assert_eq!(vocabulary.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn predicate_without_targets_fails() {
        let vocabulary = counting();
        let mut rng = StdRng::seed_from_u64(1);
        let adjacency = InflectionAdjacency::monodirectional(&[Inflection::TeForm], &[Inflection::TeForm]);
        let result = make_question(&adjacency, &vocabulary, &VerbFilter::default(), &mut rng);
        assert!(matches!(result, Err(QuizError::NoValidTarget(Inflection::TeForm))));
    }

    #[test]
    fn lookup_failure_propagates() {
        let vocabulary = counting();
        let mut rng = StdRng::seed_from_u64(1);
        let filter = VerbFilter { class: Some(VerbClass::Godan), jlpt: None };
        let result = make_question(&plain_to_polite(), &vocabulary, &filter, &mut rng);
        assert!(matches!(result, Err(QuizError::Vocabulary(VocabularyError::NoMatchingVerb))));
        assert_eq!(vocabulary.calls.load(Ordering::SeqCst), 1);
    }
}
