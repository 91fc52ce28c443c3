//! Head-relation pair selection by dependency label

use crate::document::Document;
use crate::select::groups::DepGroup;
use crate::types::{DepRel, Token};

/// Flatten all sentences in document order, keeping `(token, token.head)`
/// pairs whose relation is in `relations`. `None` keeps every pair.
pub fn select_relations<'a>(
    doc: &'a Document,
    relations: Option<&[DepRel]>,
) -> Vec<(&'a Token, &'a Token)> {
    doc.iter_sentences()
        .flatten()
        .filter(|t| relations.map_or(true, |set| set.contains(&t.dep)))
        .filter_map(|t| doc.head_of(t).map(|head| (t, head)))
        .collect()
}

/// Pairs of a named relation group (predicate modifiers, compounds, ...)
pub fn select_relation_group(doc: &Document, group: DepGroup) -> Vec<(&Token, &Token)> {
    select_relations(doc, Some(group.relations()))
}
