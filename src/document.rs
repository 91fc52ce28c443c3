//! Parsed document arena
//!
//! A [`Document`] owns every token of a parsed text in one arena. Sentences,
//! entities, noun chunks and bunsetu are index ranges into that arena, and
//! each token's `head` is an arena index as well. The root of a sentence is
//! the one token whose head is itself.
//!
//! Structural invariants are checked once, at construction; after that the
//! document is read-only.

use crate::errors::{DepWalkError, Result};
use crate::types::{NamedEntity, NounChunk, PhraseChunk, Sentence, Token};
use serde::Serialize;

/// A parsed, sentence-segmented document
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
    entities: Vec<NamedEntity>,
    noun_chunks: Vec<NounChunk>,
    bunsetu: Vec<PhraseChunk>,
    bunsetu_phrases: Vec<PhraseChunk>,
}

impl Document {
    /// Build a document from its token arena and sentence ranges.
    ///
    /// Fails with [`DepWalkError::MalformedTree`] when the sentences do not
    /// tile the arena in order, when a token's `index` or `sentence_idx`
    /// disagrees with its position, or when a head points outside the
    /// token's sentence.
    pub fn new(tokens: Vec<Token>, sentences: Vec<Sentence>) -> Result<Self> {
        let mut expected_start = 0;
        for (pos, sentence) in sentences.iter().enumerate() {
            if sentence.index != pos {
                return Err(DepWalkError::malformed_tree(format!(
                    "sentence at position {} has index {}",
                    pos, sentence.index
                )));
            }
            if sentence.start_token != expected_start || sentence.end_token < sentence.start_token {
                return Err(DepWalkError::malformed_tree(format!(
                    "sentence {} covers tokens {}..{}, expected to start at {}",
                    pos, sentence.start_token, sentence.end_token, expected_start
                )));
            }
            expected_start = sentence.end_token;
        }
        if expected_start != tokens.len() {
            return Err(DepWalkError::malformed_tree(format!(
                "sentences cover {} tokens but the document has {}",
                expected_start,
                tokens.len()
            )));
        }

        for sentence in &sentences {
            for pos in sentence.start_token..sentence.end_token {
                let token = &tokens[pos];
                if token.index != pos {
                    return Err(DepWalkError::malformed_tree(format!(
                        "token at position {} has index {}",
                        pos, token.index
                    )));
                }
                if token.sentence_idx != sentence.index {
                    return Err(DepWalkError::malformed_tree(format!(
                        "token {} claims sentence {} but lies in sentence {}",
                        pos, token.sentence_idx, sentence.index
                    )));
                }
                if !sentence.contains(token.head) {
                    return Err(DepWalkError::malformed_tree(format!(
                        "head {} of token {} lies outside sentence {} ({}..{})",
                        token.head, pos, sentence.index, sentence.start_token, sentence.end_token
                    )));
                }
            }
        }

        Ok(Self {
            tokens,
            sentences,
            entities: Vec::new(),
            noun_chunks: Vec::new(),
            bunsetu: Vec::new(),
            bunsetu_phrases: Vec::new(),
        })
    }

    /// Attach named entity spans
    pub fn with_entities(mut self, entities: Vec<NamedEntity>) -> Result<Self> {
        for ent in &entities {
            self.check_span("entity", ent.start_token, ent.end_token, false)?;
        }
        self.entities = entities;
        Ok(self)
    }

    /// Attach noun chunks. Each chunk must sit inside one sentence and
    /// contain its own root.
    pub fn with_noun_chunks(mut self, chunks: Vec<NounChunk>) -> Result<Self> {
        for chunk in &chunks {
            self.check_span("noun chunk", chunk.start_token, chunk.end_token, true)?;
            if !(chunk.start_token..chunk.end_token).contains(&chunk.root) {
                return Err(DepWalkError::malformed_tree(format!(
                    "noun chunk {}..{} has root {} outside the span",
                    chunk.start_token, chunk.end_token, chunk.root
                )));
            }
        }
        self.noun_chunks = chunks;
        Ok(self)
    }

    /// Attach externally segmented bunsetu. Each must sit inside one sentence.
    pub fn with_bunsetu(mut self, chunks: Vec<PhraseChunk>) -> Result<Self> {
        for chunk in &chunks {
            self.check_span("bunsetu", chunk.start_token, chunk.end_token, true)?;
        }
        self.bunsetu = chunks;
        Ok(self)
    }

    /// Attach bunsetu phrase spans (the content head of each bunsetu,
    /// without trailing function words). Each must sit inside one sentence.
    pub fn with_bunsetu_phrases(mut self, phrases: Vec<PhraseChunk>) -> Result<Self> {
        for phrase in &phrases {
            self.check_span("bunsetu phrase", phrase.start_token, phrase.end_token, true)?;
        }
        self.bunsetu_phrases = phrases;
        Ok(self)
    }

    fn check_span(&self, what: &str, start: usize, end: usize, one_sentence: bool) -> Result<()> {
        if start >= end || end > self.tokens.len() {
            return Err(DepWalkError::malformed_tree(format!(
                "{} span {}..{} is empty or outside the document ({} tokens)",
                what,
                start,
                end,
                self.tokens.len()
            )));
        }
        if one_sentence && self.tokens[start].sentence_idx != self.tokens[end - 1].sentence_idx {
            return Err(DepWalkError::malformed_tree(format!(
                "{} span {}..{} crosses a sentence boundary",
                what, start, end
            )));
        }
        Ok(())
    }

    /// Check that every sentence has exactly one self-headed root and that
    /// every token reaches it within `sentence.len()` steps.
    pub fn validate_roots(&self) -> Result<()> {
        for sentence in &self.sentences {
            if sentence.is_empty() {
                continue;
            }
            let roots = self
                .sentence_tokens(sentence)
                .iter()
                .filter(|t| t.is_root())
                .count();
            if roots != 1 {
                return Err(DepWalkError::malformed_tree(format!(
                    "sentence {} has {} self-headed roots, expected exactly one",
                    sentence.index, roots
                )));
            }
            for token in self.sentence_tokens(sentence) {
                if self.depth(token).is_none() {
                    return Err(DepWalkError::malformed_tree(format!(
                        "token {} ({:?}) does not reach a root within {} steps",
                        token.index,
                        token.text,
                        sentence.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of head steps from `token` to its sentence root, or `None`
    /// when no root is reached within the sentence length.
    pub fn depth(&self, token: &Token) -> Option<usize> {
        let limit = self
            .sentences
            .get(token.sentence_idx)
            .map_or(self.tokens.len(), Sentence::len);
        let mut current = token;
        for steps in 0..=limit {
            if current.is_root() {
                return Some(steps);
            }
            current = self.tokens.get(current.head)?;
        }
        None
    }

    /// All tokens in document order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// All sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Tokens of one sentence
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        self.tokens
            .get(sentence.start_token..sentence.end_token)
            .unwrap_or(&[])
    }

    /// Iterate sentences as token slices
    pub fn iter_sentences(&self) -> impl Iterator<Item = &[Token]> + '_ {
        self.sentences.iter().map(move |s| self.sentence_tokens(s))
    }

    /// Look up a token by index
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The head of `token`
    pub fn head_of(&self, token: &Token) -> Option<&Token> {
        self.tokens.get(token.head)
    }

    /// The sentence owning `token`
    pub fn sentence_of(&self, token: &Token) -> Option<&Sentence> {
        self.sentences.get(token.sentence_idx)
    }

    /// Self-headed tokens, in document order
    pub fn roots(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|t| t.is_root())
    }

    /// Direct dependents of `token` (the root's self-loop excluded)
    pub fn children<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        self.sentence_of(token)
            .map(|s| self.sentence_tokens(s))
            .unwrap_or(&[])
            .iter()
            .filter(move |t| t.head == token.index && t.index != token.index)
    }

    /// Dependents that precede `token`
    pub fn lefts<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        self.children(token).filter(move |t| t.index < token.index)
    }

    /// Dependents that follow `token`
    pub fn rights<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        self.children(token).filter(move |t| t.index > token.index)
    }

    /// The syntactic root of the span `start..end`: among tokens whose head
    /// lies outside the span (or who are their own head), the one closest to
    /// the sentence root; ties go to the earliest token.
    pub fn span_root(&self, start: usize, end: usize) -> Option<&Token> {
        let span = self.tokens.get(start..end)?;
        let inside = |i: usize| (start..end).contains(&i);
        span.iter()
            .filter(|t| t.is_root() || !inside(t.head))
            .min_by_key(|t| (self.depth(t).unwrap_or(usize::MAX), t.index))
            .or_else(|| span.last())
    }

    /// Root token of a named entity
    pub fn entity_root(&self, entity: &NamedEntity) -> Option<&Token> {
        self.span_root(entity.start_token, entity.end_token)
    }

    /// Root token of a noun chunk
    pub fn noun_chunk_root(&self, chunk: &NounChunk) -> Option<&Token> {
        self.tokens.get(chunk.root)
    }

    /// Named entity spans
    pub fn entities(&self) -> &[NamedEntity] {
        &self.entities
    }

    /// Noun chunks
    pub fn noun_chunks(&self) -> &[NounChunk] {
        &self.noun_chunks
    }

    /// Bunsetu supplied by the segmenter
    pub fn bunsetu(&self) -> &[PhraseChunk] {
        &self.bunsetu
    }

    /// Bunsetu phrase spans, in document order
    pub fn bunsetu_phrases(&self) -> &[PhraseChunk] {
        &self.bunsetu_phrases
    }

    /// Total number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the document holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Span text, joined from token surfaces
    pub fn span_text(&self, start: usize, end: usize) -> String {
        self.tokens
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|t| t.text.as_str())
            .collect()
    }
}
