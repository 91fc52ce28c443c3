//! Left-side attachments into bunsetu
//!
//! For each bunsetu, collect the tokens that precede it and whose head lies
//! inside it. Pairs are emitted chunk by chunk, and by token position within
//! a chunk.

use crate::document::Document;
use crate::types::{PhraseChunk, Token};

/// A token attaching into a later bunsetu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BunsetuAttachment<'a> {
    pub dependent: &'a Token,
    pub chunk: &'a PhraseChunk,
}

/// All left-side attachments, in chunk order
pub fn bunsetu_attachments(doc: &Document) -> Vec<BunsetuAttachment<'_>> {
    let mut out = Vec::new();
    for chunk in doc.bunsetu() {
        let Some(first) = doc.token(chunk.start_token) else {
            continue;
        };
        let Some(sentence) = doc.sentence_of(first) else {
            continue;
        };
        out.extend(
            doc.sentence_tokens(sentence)
                .iter()
                .take_while(|t| t.index < chunk.start_token)
                .filter(|t| chunk.contains(t.head))
                .map(|dependent| BunsetuAttachment { dependent, chunk }),
        );
    }
    out
}
