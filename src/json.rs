//! JSON interchange for pre-parsed documents
//!
//! A provider running elsewhere (typically spaCy + GiNZA in Python) can dump
//! its output as JSON; this module turns it into a validated [`Document`].
//! Tag codes arrive as raw strings and are checked against the closed tag
//! sets here, at the boundary.

use crate::document::Document;
use crate::errors::{DepWalkError, Result};
use crate::types::{
    AnalysisConfig, DepRel, NamedEntity, NounChunk, PhraseChunk, PosTag, Sentence, Token,
};
use serde::Deserialize;

/// Input token from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonToken {
    #[serde(alias = "i")]
    pub index: usize,
    pub text: String,
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub norm: Option<String>,
    pub pos: String,
    #[serde(default)]
    pub tag: String,
    pub dep: String,
    pub head: usize,
    #[serde(default, alias = "is_stop")]
    pub is_stopword: bool,
    #[serde(default)]
    pub sentence_idx: usize,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
    #[serde(default)]
    pub reading: Option<String>,
    #[serde(default)]
    pub inflection: Option<String>,
    #[serde(default)]
    pub rank: u64,
    #[serde(default)]
    pub is_oov: bool,
    #[serde(default)]
    pub has_vector: bool,
}

impl TryFrom<JsonToken> for Token {
    type Error = DepWalkError;

    fn try_from(jt: JsonToken) -> Result<Self> {
        let lemma = jt.lemma.unwrap_or_else(|| jt.text.clone());
        let norm = jt.norm.unwrap_or_else(|| lemma.clone());
        Ok(Token {
            index: jt.index,
            pos: PosTag::from_code(&jt.pos)?,
            dep: DepRel::from_code(&jt.dep)?,
            text: jt.text,
            lemma,
            norm,
            tag: jt.tag,
            head: jt.head,
            is_stopword: jt.is_stopword,
            sentence_idx: jt.sentence_idx,
            start: jt.start,
            end: jt.end,
            reading: jt.reading,
            inflection: jt.inflection,
            rank: jt.rank,
            is_oov: jt.is_oov,
            has_vector: jt.has_vector,
        })
    }
}

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub tokens: Vec<JsonToken>,
    /// Sentence ranges; derived from `sentence_idx` runs when omitted, and
    /// overriding each token's `sentence_idx` when given
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub entities: Vec<NamedEntity>,
    #[serde(default)]
    pub noun_chunks: Vec<NounChunk>,
    #[serde(default)]
    pub bunsetu: Vec<PhraseChunk>,
    #[serde(default)]
    pub bunsetu_phrases: Vec<PhraseChunk>,
    #[serde(default)]
    pub config: Option<AnalysisConfig>,
}

impl JsonDocument {
    /// Convert into a document, checking every tag code and the tree
    /// structure. The root invariant is checked when `validate_roots` is set.
    pub fn into_document(self, validate_roots: bool) -> Result<Document> {
        let mut tokens: Vec<Token> = self
            .tokens
            .into_iter()
            .map(Token::try_from)
            .collect::<Result<_>>()?;
        let sentences = if self.sentences.is_empty() {
            sentences_from_tokens(&tokens)
        } else {
            assign_sentences(&mut tokens, &self.sentences);
            self.sentences
        };

        let doc = Document::new(tokens, sentences)?
            .with_entities(self.entities)?
            .with_noun_chunks(self.noun_chunks)?
            .with_bunsetu(self.bunsetu)?
            .with_bunsetu_phrases(self.bunsetu_phrases)?;
        if validate_roots {
            doc.validate_roots()?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = doc.len(),
            sentences = doc.sentences().len(),
            "loaded document from JSON"
        );
        Ok(doc)
    }

    /// Split off the embedded config (default when absent) and build the
    /// document under it
    pub fn into_parts(mut self) -> Result<(Document, AnalysisConfig)> {
        let config = self.config.take().unwrap_or_default();
        config.validate()?;
        let doc = self.into_document(config.validate_roots)?;
        Ok((doc, config))
    }
}

/// Group consecutive tokens with the same `sentence_idx` into sentences
fn sentences_from_tokens(tokens: &[Token]) -> Vec<Sentence> {
    let mut sentences: Vec<Sentence> = Vec::new();
    let mut current_idx = None;
    for (pos, token) in tokens.iter().enumerate() {
        if current_idx != Some(token.sentence_idx) {
            if let Some(last) = sentences.last_mut() {
                last.end_token = pos;
            }
            sentences.push(Sentence::new(sentences.len(), pos, pos));
            current_idx = Some(token.sentence_idx);
        }
    }
    if let Some(last) = sentences.last_mut() {
        last.end_token = tokens.len();
    }
    sentences
}

/// Explicit sentence ranges win over per-token `sentence_idx`. Ranges
/// outside the arena are left for `Document::new` to reject.
fn assign_sentences(tokens: &mut [Token], sentences: &[Sentence]) {
    for sentence in sentences {
        if let Some(span) = tokens.get_mut(sentence.start_token..sentence.end_token) {
            for token in span {
                token.sentence_idx = sentence.index;
            }
        }
    }
}

/// Parse one JSON document and its config
pub fn document_from_json(json_input: &str) -> Result<(Document, AnalysisConfig)> {
    let doc: JsonDocument = serde_json::from_str(json_input)?;
    doc.into_parts()
}

/// Parse a JSON array of documents
pub fn documents_from_json(json_input: &str) -> Result<Vec<(Document, AnalysisConfig)>> {
    let docs: Vec<JsonDocument> = serde_json::from_str(json_input)?;
    docs.into_iter().map(JsonDocument::into_parts).collect()
}

/// Parse JSON lines, one document per non-blank line
pub fn documents_from_jsonl(input: &str) -> Result<Vec<(Document, AnalysisConfig)>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(document_from_json)
        .collect()
}
