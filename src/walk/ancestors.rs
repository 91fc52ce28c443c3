//! Bounded ancestor walk
//!
//! Starting from a token's head, follow head pointers and record every
//! visited token until either `max_depth` tokens are recorded or a
//! self-headed root has been recorded. The self-loop at the root is the
//! termination signal; `max_depth` bounds the walk even when a malformed
//! tree has a cycle without a root.
//!
//! Entities and noun chunks use the same walk, starting from the head of
//! their root token.

use crate::document::Document;
use crate::errors::{DepWalkError, Result};
use crate::types::{NamedEntity, NounChunk, Token};

/// Ancestor chain of one token, closest ancestor first
#[derive(Debug, Clone, PartialEq)]
pub struct TokenChain<'a> {
    pub token: &'a Token,
    pub ancestors: Vec<&'a Token>,
}

/// Ancestor chain of a named entity's root
#[derive(Debug, Clone, PartialEq)]
pub struct EntityChain<'a> {
    pub entity: &'a NamedEntity,
    pub root: &'a Token,
    pub ancestors: Vec<&'a Token>,
}

/// Ancestor chain of a noun chunk's root
#[derive(Debug, Clone, PartialEq)]
pub struct NounChunkChain<'a> {
    pub chunk: &'a NounChunk,
    pub root: &'a Token,
    pub ancestors: Vec<&'a Token>,
}

/// Token indices of a chain
pub fn chain_indices(chain: &[&Token]) -> Vec<usize> {
    chain.iter().map(|t| t.index).collect()
}

/// Walks head pointers up to a fixed depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorWalker {
    max_depth: usize,
}

impl Default for AncestorWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl AncestorWalker {
    /// Create a walker with the default depth of 3
    pub fn new() -> Self {
        Self { max_depth: 3 }
    }

    /// Create a walker with the given depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// A walker deep enough to reach the root of any sentence in `doc`.
    /// No tree is deeper than the document is long.
    pub fn unbounded_for(doc: &Document) -> Self {
        Self {
            max_depth: doc.len(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Ancestors of `token`, closest first.
    ///
    /// The root is its own head, so asking for the root's ancestors yields
    /// `[root]` for any depth of at least one.
    pub fn ancestors<'a>(&self, doc: &'a Document, token: &Token) -> Vec<&'a Token> {
        walk(doc, token.head, self.max_depth).0
    }

    /// Ancestors of `token` all the way to the root.
    ///
    /// Fails with [`DepWalkError::MalformedTree`] when the walk runs out of
    /// steps (or off the document) without recording a root.
    pub fn full_ancestors<'a>(doc: &'a Document, token: &Token) -> Result<Vec<&'a Token>> {
        let (chain, reached_root) = walk(doc, token.head, doc.len());
        if !reached_root {
            #[cfg(feature = "tracing")]
            tracing::debug!(token = token.index, steps = chain.len(), "ancestor walk found no root");
            return Err(DepWalkError::malformed_tree(format!(
                "token {} ({:?}) does not reach a root within {} steps",
                token.index,
                token.text,
                doc.len()
            )));
        }
        Ok(chain)
    }

    /// Chains for every token, in document order
    pub fn token_chains<'a>(&self, doc: &'a Document) -> Vec<TokenChain<'a>> {
        doc.iter_sentences()
            .flatten()
            .map(|token| TokenChain {
                token,
                ancestors: self.ancestors(doc, token),
            })
            .collect()
    }

    /// Unbounded chains for every token, failing on the first token that
    /// cannot reach a root
    pub fn full_token_chains(doc: &Document) -> Result<Vec<TokenChain<'_>>> {
        doc.iter_sentences()
            .flatten()
            .map(|token| {
                Ok(TokenChain {
                    token,
                    ancestors: Self::full_ancestors(doc, token)?,
                })
            })
            .collect()
    }

    /// Chains for every named entity, starting from the entity root's head
    pub fn entity_chains<'a>(&self, doc: &'a Document) -> Vec<EntityChain<'a>> {
        doc.entities()
            .iter()
            .filter_map(|entity| {
                let root = doc.entity_root(entity)?;
                Some(EntityChain {
                    entity,
                    root,
                    ancestors: self.ancestors(doc, root),
                })
            })
            .collect()
    }

    /// Chains for every noun chunk, starting from the chunk root's head
    pub fn noun_chunk_chains<'a>(&self, doc: &'a Document) -> Vec<NounChunkChain<'a>> {
        doc.noun_chunks()
            .iter()
            .filter_map(|chunk| {
                let root = doc.noun_chunk_root(chunk)?;
                Some(NounChunkChain {
                    chunk,
                    root,
                    ancestors: self.ancestors(doc, root),
                })
            })
            .collect()
    }
}

/// Follow head pointers from `start`, recording at most `limit` tokens.
/// Returns the chain and whether it ended on a self-headed root.
fn walk(doc: &Document, start: usize, limit: usize) -> (Vec<&Token>, bool) {
    let mut chain = Vec::new();
    let mut next = start;
    while chain.len() < limit {
        let Some(current) = doc.token(next) else {
            break;
        };
        chain.push(current);
        if current.is_root() {
            return (chain, true);
        }
        next = current.head;
    }
    (chain, false)
}
