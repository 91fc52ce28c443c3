//! Category counts for charts
//!
//! Bar charts of POS and dependency frequencies, and a 2-D histogram of
//! dependent POS against head POS. Counts are labelled with the display
//! names from [`crate::labels`].

use crate::document::Document;
use crate::labels::CategoryLabel;
use crate::types::{DepRel, PosTag, Token};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// How often one category occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<T> {
    pub category: T,
    pub label: &'static str,
    pub count: usize,
}

/// Counts of `key(token)` over the document, in table order. Categories
/// that never occur are omitted.
pub fn category_frequencies<T, F>(doc: &Document, key: F) -> Vec<CategoryCount<T>>
where
    T: CategoryLabel,
    F: Fn(&Token) -> T,
{
    let mut counts: FxHashMap<T, usize> = FxHashMap::default();
    for token in doc.iter_sentences().flatten() {
        *counts.entry(key(token)).or_insert(0) += 1;
    }
    T::all()
        .iter()
        .filter_map(|&category| {
            counts.get(&category).map(|&count| CategoryCount {
                category,
                label: category.label(),
                count,
            })
        })
        .collect()
}

/// Part-of-speech frequencies
pub fn pos_frequencies(doc: &Document) -> Vec<CategoryCount<PosTag>> {
    category_frequencies(doc, |t| t.pos)
}

/// Dependency relation frequencies
pub fn dep_frequencies(doc: &Document) -> Vec<CategoryCount<DepRel>> {
    category_frequencies(doc, |t| t.dep)
}

/// Dependent-POS × head-POS counts.
///
/// Axes hold the sorted display labels that actually occur; tags that share
/// a display name share a bin. `counts[i][j]` is the number of tokens whose
/// label is `dependent_labels[i]` and whose head's label is `head_labels[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TransitionHistogram {
    pub dependent_labels: Vec<&'static str>,
    pub head_labels: Vec<&'static str>,
    pub counts: Vec<Vec<usize>>,
}

impl TransitionHistogram {
    /// Count for one (dependent, head) label pair
    pub fn get(&self, dependent: &str, head: &str) -> usize {
        let row = self.dependent_labels.iter().position(|l| *l == dependent);
        let col = self.head_labels.iter().position(|l| *l == head);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    /// Total number of counted edges
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Build the POS transition histogram
pub fn pos_transitions(doc: &Document) -> TransitionHistogram {
    let pairs: Vec<(&'static str, &'static str)> = doc
        .iter_sentences()
        .flatten()
        .filter_map(|t| doc.head_of(t).map(|h| (t.pos.label(), h.pos.label())))
        .collect();

    let mut dependent_labels: Vec<&'static str> = pairs.iter().map(|p| p.0).collect();
    dependent_labels.sort_unstable();
    dependent_labels.dedup();
    let mut head_labels: Vec<&'static str> = pairs.iter().map(|p| p.1).collect();
    head_labels.sort_unstable();
    head_labels.dedup();

    let row_of: FxHashMap<&str, usize> = dependent_labels
        .iter()
        .enumerate()
        .map(|(i, l)| (*l, i))
        .collect();
    let col_of: FxHashMap<&str, usize> = head_labels
        .iter()
        .enumerate()
        .map(|(i, l)| (*l, i))
        .collect();

    let mut counts = vec![vec![0usize; head_labels.len()]; dependent_labels.len()];
    for (dep, head) in &pairs {
        counts[row_of[dep]][col_of[head]] += 1;
    }

    TransitionHistogram {
        dependent_labels,
        head_labels,
        counts,
    }
}
