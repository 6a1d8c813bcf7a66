pub mod engine;

pub mod inflection;

pub mod rules;

pub use engine::{
    conjugate,
    conjugate_request,
    stem,
    strip_polite_suffix,
    ConjugationRequest,
};
pub use inflection::Inflection;
pub use rules::StemKind;

#[cfg(test)]
mod conjugation_tests;
