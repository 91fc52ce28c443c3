//! # rapid_depwalk
//!
//! Post-processing for Japanese dependency parses produced by GiNZA/spaCy.
//!
//! Given a parsed document (tokens with POS tags, dependency relations and
//! head pointers), this library selects tokens and relations by category,
//! walks ancestor chains, classifies sentences as negative, and extracts
//! the tokens that attach into each bunsetu phrase.
//!
//! ## Features
//!
//! - **Arena tree**: tokens live in one document-wide vector; heads are
//!   indices, roots point at themselves
//! - **Validated input**: unknown tags and out-of-sentence heads are rejected
//!   at construction
//! - **Bounded walks**: every traversal terminates, even on malformed trees
//! - **Python bindings**: JSON and spaCy-backed entry points via PyO3

pub mod document;
pub mod errors;
pub mod export;
pub mod json;
pub mod labels;
pub mod negation;
pub mod phrase;
pub mod provider;
pub mod report;
pub mod select;
pub mod types;
pub mod walk;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use document::Document;
pub use errors::{CategoryKind, DepWalkError, Result};
pub use types::{
    AnalysisConfig, DepRel, NamedEntity, NounChunk, PhraseChunk, PosTag, Sentence, SplitMode,
    Token,
};

// Re-export main functionality
pub use export::{
    dep_frequencies, pos_frequencies, pos_transitions, token_rows, TokenRow, TransitionHistogram,
};
pub use json::{document_from_json, documents_from_json, documents_from_jsonl};
pub use labels::{dep_label, pos_label, CategoryLabel};
pub use negation::{is_negative, NegationDetector};
pub use phrase::{bunsetu_attachments, BunsetuAttachment};
pub use provider::{annotate, AnnotationProvider, EntityPattern, EntityRule, TokenMatcher};
pub use report::{analyze, analyze_batch, DocumentReport};
pub use select::{
    select_meaningful, select_relation_group, select_relations, select_tokens,
    select_tokens_excluding, DepGroup, PosGroup,
};
pub use walk::AncestorWalker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
