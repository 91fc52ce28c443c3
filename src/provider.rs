//! Annotation provider boundary
//!
//! The linguistic annotation itself (tokenization, tagging, parsing, entity
//! recognition) happens outside this crate. This module fixes the shape of
//! that collaboration: a provider turns text into a [`Document`], and may
//! accept entity-ruler patterns that extend its entity recognition.

use crate::document::Document;
use crate::errors::Result;
use crate::types::{AnalysisConfig, PosTag, SplitMode};
use serde::{Deserialize, Serialize};

// ============================================================================
// Entity ruler patterns
// ============================================================================

/// Repetition operator of a token matcher (spaCy `OP`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOp {
    #[serde(rename = "!")]
    Negate,
    #[serde(rename = "?")]
    Optional,
    #[serde(rename = "+")]
    OneOrMore,
    #[serde(rename = "*")]
    ZeroOrMore,
}

/// One token constraint inside a token pattern.
///
/// Serializes to the spaCy matcher dictionary, e.g.
/// `{"POS": "NOUN", "OP": "+"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMatcher {
    #[serde(rename = "TEXT", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "LOWER", default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<String>,
    #[serde(rename = "LEMMA", default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(rename = "POS", default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PosTag>,
    #[serde(rename = "OP", default, skip_serializing_if = "Option::is_none")]
    pub op: Option<MatchOp>,
}

impl TokenMatcher {
    /// Match a token by exact surface text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Match a token by lemma
    pub fn lemma(lemma: impl Into<String>) -> Self {
        Self {
            lemma: Some(lemma.into()),
            ..Self::default()
        }
    }

    /// Match a token by part of speech
    pub fn pos(pos: PosTag) -> Self {
        Self {
            pos: Some(pos),
            ..Self::default()
        }
    }

    /// Builder method: set repetition operator
    pub fn with_op(mut self, op: MatchOp) -> Self {
        self.op = Some(op);
        self
    }
}

/// Either an exact phrase or a sequence of token constraints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityPattern {
    Phrase(String),
    Tokens(Vec<TokenMatcher>),
}

/// One entity-ruler rule, in spaCy's `{"label": ..., "pattern": ...}` shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRule {
    pub label: String,
    pub pattern: EntityPattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl EntityRule {
    /// A rule matching an exact phrase
    pub fn phrase(label: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: EntityPattern::Phrase(phrase.into()),
            id: None,
        }
    }

    /// A rule matching a token sequence
    pub fn tokens(label: impl Into<String>, matchers: Vec<TokenMatcher>) -> Self {
        Self {
            label: label.into(),
            pattern: EntityPattern::Tokens(matchers),
            id: None,
        }
    }
}

// ============================================================================
// Provider trait
// ============================================================================

/// Turns raw text into a parsed [`Document`].
///
/// # Contract
///
/// - **Input**: text and the Sudachi split mode to analyze it with.
/// - **Output**: a fully built document. Sentences, entities, noun chunks and
///   bunsetu are attached by the provider.
/// - **Blocking**: one synchronous call per text. Retry policy, if any,
///   belongs to the provider; callers never retry.
pub trait AnnotationProvider {
    /// Parse `text` into a document.
    fn parse(&self, text: &str, split_mode: SplitMode) -> Result<Document>;

    /// Register entity-ruler patterns applied to every later `parse`.
    fn add_entity_rules(&mut self, rules: &[EntityRule]) -> Result<()>;
}

/// Parse `text` with `provider` under `config`, checking the root invariant
/// when the config asks for it.
pub fn annotate<P>(provider: &P, text: &str, config: &AnalysisConfig) -> Result<Document>
where
    P: AnnotationProvider + ?Sized,
{
    config.validate()?;
    let doc = provider.parse(text, config.split_mode)?;
    if config.validate_roots {
        doc.validate_roots()?;
    }
    Ok(doc)
}
