//! Rule-based negation classifier
//!
//! A closed signature table tuned to Japanese inflection. This is pattern
//! matching, not negation-scope analysis: double negation and scope
//! attachment are not modelled.

pub mod detector;
pub mod rules;

pub use detector::{is_negative, NegationDetector, NegationMatch};
pub use rules::{NegationRule, NEGATION_RULES};
