//! Document-level negation detection

use crate::document::Document;
use crate::negation::rules::{NegationRule, NEGATION_RULES};
use crate::types::Token;
use serde::Serialize;

/// A token that matched a negation signature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NegationMatch {
    /// Index of the matching token
    pub token: usize,
    /// Position of the signature in the rule table
    pub rule: usize,
}

/// Scans a document against an ordered signature table
#[derive(Debug, Clone, Copy)]
pub struct NegationDetector {
    rules: &'static [NegationRule],
}

impl Default for NegationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl NegationDetector {
    /// Create a detector over the built-in table
    pub fn new() -> Self {
        Self {
            rules: NEGATION_RULES,
        }
    }

    /// Create a detector over a custom table
    pub fn with_rules(rules: &'static [NegationRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [NegationRule] {
        self.rules
    }

    /// Whether any token in the document expresses negation
    pub fn is_negative(&self, doc: &Document) -> bool {
        self.first_match(doc).is_some()
    }

    /// The first matching token in document order, if any
    pub fn first_match(&self, doc: &Document) -> Option<NegationMatch> {
        doc.iter_sentences()
            .flatten()
            .find_map(|token| self.match_token(doc, token))
    }

    /// Every matching token in document order
    pub fn matches(&self, doc: &Document) -> Vec<NegationMatch> {
        doc.iter_sentences()
            .flatten()
            .filter_map(|token| self.match_token(doc, token))
            .collect()
    }

    fn match_token(&self, doc: &Document, token: &Token) -> Option<NegationMatch> {
        let head = doc.head_of(token);
        self.rules
            .iter()
            .position(|rule| rule.matches(token, head))
            .map(|rule| NegationMatch {
                token: token.index,
                rule,
            })
    }
}

/// Check a document against the built-in table
pub fn is_negative(doc: &Document) -> bool {
    NegationDetector::new().is_negative(doc)
}
