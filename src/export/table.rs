//! One row per token for dataframe-style export

use crate::document::Document;
use crate::types::{DepRel, PosTag};
use serde::{Deserialize, Serialize};

/// A flat projection of one token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRow {
    pub index: usize,
    pub surface: String,
    pub reading: Option<String>,
    pub part_of_speech: PosTag,
    pub tag: String,
    pub lemma: String,
    pub inflection_info: Option<String>,
    pub frequency_rank: u64,
    pub normalized_form: String,
    pub is_oov: bool,
    pub is_stopword: bool,
    pub has_vector: bool,
    /// Indices of dependents that precede the token
    pub left_dependents: Vec<usize>,
    /// Indices of dependents that follow the token
    pub right_dependents: Vec<usize>,
    pub dependency_relation: DepRel,
    pub head_index: usize,
    pub head_surface: String,
}

/// Rows for every token, in document order
pub fn token_rows(doc: &Document) -> Vec<TokenRow> {
    doc.iter_sentences()
        .flatten()
        .map(|t| TokenRow {
            index: t.index,
            surface: t.text.clone(),
            reading: t.reading.clone(),
            part_of_speech: t.pos,
            tag: t.tag.clone(),
            lemma: t.lemma.clone(),
            inflection_info: t.inflection.clone(),
            frequency_rank: t.rank,
            normalized_form: t.norm.clone(),
            is_oov: t.is_oov,
            is_stopword: t.is_stopword,
            has_vector: t.has_vector,
            left_dependents: doc.lefts(t).map(|d| d.index).collect(),
            right_dependents: doc.rights(t).map(|d| d.index).collect(),
            dependency_relation: t.dep,
            head_index: t.head,
            head_surface: doc.head_of(t).map(|h| h.text.clone()).unwrap_or_default(),
        })
        .collect()
}
