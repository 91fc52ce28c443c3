//! Core types for rapid_depwalk
//!
//! This module defines the closed tag sets, the token and span shapes that
//! make up a parsed document, and the analysis configuration.

use crate::errors::{CategoryKind, DepWalkError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Part-of-speech tags
// ============================================================================

/// Universal Dependencies coarse part-of-speech tags.
///
/// `Conj` is the UD v1 spelling of `CCONJ`; some models still emit it, so it
/// is kept as its own code rather than folded into `CoordinatingConjunction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADP")]
    Adposition,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "AUX")]
    Auxiliary,
    #[serde(rename = "CCONJ")]
    CoordinatingConjunction,
    #[serde(rename = "CONJ")]
    Conjunction,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "PUNCT")]
    Punctuation,
    #[serde(rename = "SCONJ")]
    SubordinatingConjunction,
    #[serde(rename = "SYM")]
    Symbol,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "X")]
    Other,
    #[serde(rename = "SPACE")]
    Space,
}

impl PosTag {
    /// Every tag, in table order
    pub const ALL: [PosTag; 19] = [
        PosTag::Adjective,
        PosTag::Adposition,
        PosTag::Adverb,
        PosTag::Auxiliary,
        PosTag::CoordinatingConjunction,
        PosTag::Conjunction,
        PosTag::Determiner,
        PosTag::Interjection,
        PosTag::Noun,
        PosTag::Numeral,
        PosTag::Particle,
        PosTag::Pronoun,
        PosTag::ProperNoun,
        PosTag::Punctuation,
        PosTag::SubordinatingConjunction,
        PosTag::Symbol,
        PosTag::Verb,
        PosTag::Other,
        PosTag::Space,
    ];

    /// Parse a raw spaCy `pos_` code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self> {
        let tag = match code.to_uppercase().as_str() {
            "ADJ" => PosTag::Adjective,
            "ADP" => PosTag::Adposition,
            "ADV" => PosTag::Adverb,
            "AUX" => PosTag::Auxiliary,
            "CCONJ" => PosTag::CoordinatingConjunction,
            "CONJ" => PosTag::Conjunction,
            "DET" => PosTag::Determiner,
            "INTJ" => PosTag::Interjection,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PRON" => PosTag::Pronoun,
            "PROPN" => PosTag::ProperNoun,
            "PUNCT" => PosTag::Punctuation,
            "SCONJ" => PosTag::SubordinatingConjunction,
            "SYM" => PosTag::Symbol,
            "VERB" => PosTag::Verb,
            "X" => PosTag::Other,
            "SPACE" => PosTag::Space,
            _ => {
                return Err(DepWalkError::unknown_category(
                    CategoryKind::PartOfSpeech,
                    code,
                ))
            }
        };
        Ok(tag)
    }

    /// The spaCy-style code for this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adjective => "ADJ",
            PosTag::Adposition => "ADP",
            PosTag::Adverb => "ADV",
            PosTag::Auxiliary => "AUX",
            PosTag::CoordinatingConjunction => "CCONJ",
            PosTag::Conjunction => "CONJ",
            PosTag::Determiner => "DET",
            PosTag::Interjection => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Pronoun => "PRON",
            PosTag::ProperNoun => "PROPN",
            PosTag::Punctuation => "PUNCT",
            PosTag::SubordinatingConjunction => "SCONJ",
            PosTag::Symbol => "SYM",
            PosTag::Verb => "VERB",
            PosTag::Other => "X",
            PosTag::Space => "SPACE",
        }
    }

    /// Nouns, proper nouns and pronouns
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun)
    }
}

impl std::str::FromStr for PosTag {
    type Err = DepWalkError;

    fn from_str(code: &str) -> Result<Self> {
        PosTag::from_code(code)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Dependency relations
// ============================================================================

/// Dependency relation labels.
///
/// Covers the UD v2 universal relations plus the UD v1 labels (`nsubjpass`,
/// `dobj`, `neg`, `name`, `mwe`, `foreign`) that the relation groups in
/// [`crate::select::groups`] still refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepRel {
    Acl,
    Advcl,
    Advmod,
    Amod,
    Appos,
    Aux,
    Case,
    Cc,
    Ccomp,
    Clf,
    Compound,
    Conj,
    Cop,
    Csubj,
    Dep,
    Det,
    Discourse,
    Dislocated,
    Dobj,
    Expl,
    Fixed,
    Flat,
    Foreign,
    Goeswith,
    Iobj,
    List,
    Mark,
    Mwe,
    Name,
    Neg,
    Nmod,
    Nsubj,
    Nsubjpass,
    Nummod,
    Obj,
    Obl,
    Orphan,
    Parataxis,
    Punct,
    Reparandum,
    Root,
    Vocative,
    Xcomp,
}

impl DepRel {
    /// Every relation, in table order
    pub const ALL: [DepRel; 43] = [
        DepRel::Acl,
        DepRel::Advcl,
        DepRel::Advmod,
        DepRel::Amod,
        DepRel::Appos,
        DepRel::Aux,
        DepRel::Case,
        DepRel::Cc,
        DepRel::Ccomp,
        DepRel::Clf,
        DepRel::Compound,
        DepRel::Conj,
        DepRel::Cop,
        DepRel::Csubj,
        DepRel::Dep,
        DepRel::Det,
        DepRel::Discourse,
        DepRel::Dislocated,
        DepRel::Dobj,
        DepRel::Expl,
        DepRel::Fixed,
        DepRel::Flat,
        DepRel::Foreign,
        DepRel::Goeswith,
        DepRel::Iobj,
        DepRel::List,
        DepRel::Mark,
        DepRel::Mwe,
        DepRel::Name,
        DepRel::Neg,
        DepRel::Nmod,
        DepRel::Nsubj,
        DepRel::Nsubjpass,
        DepRel::Nummod,
        DepRel::Obj,
        DepRel::Obl,
        DepRel::Orphan,
        DepRel::Parataxis,
        DepRel::Punct,
        DepRel::Reparandum,
        DepRel::Root,
        DepRel::Vocative,
        DepRel::Xcomp,
    ];

    /// Parse a raw spaCy `dep_` label (case-insensitive, so `ROOT` is `root`).
    pub fn from_code(code: &str) -> Result<Self> {
        let lower = code.to_lowercase();
        DepRel::ALL
            .iter()
            .copied()
            .find(|rel| rel.as_str() == lower)
            .ok_or_else(|| DepWalkError::unknown_category(CategoryKind::DependencyRelation, code))
    }

    /// The lowercase label for this relation
    pub fn as_str(&self) -> &'static str {
        match self {
            DepRel::Acl => "acl",
            DepRel::Advcl => "advcl",
            DepRel::Advmod => "advmod",
            DepRel::Amod => "amod",
            DepRel::Appos => "appos",
            DepRel::Aux => "aux",
            DepRel::Case => "case",
            DepRel::Cc => "cc",
            DepRel::Ccomp => "ccomp",
            DepRel::Clf => "clf",
            DepRel::Compound => "compound",
            DepRel::Conj => "conj",
            DepRel::Cop => "cop",
            DepRel::Csubj => "csubj",
            DepRel::Dep => "dep",
            DepRel::Det => "det",
            DepRel::Discourse => "discourse",
            DepRel::Dislocated => "dislocated",
            DepRel::Dobj => "dobj",
            DepRel::Expl => "expl",
            DepRel::Fixed => "fixed",
            DepRel::Flat => "flat",
            DepRel::Foreign => "foreign",
            DepRel::Goeswith => "goeswith",
            DepRel::Iobj => "iobj",
            DepRel::List => "list",
            DepRel::Mark => "mark",
            DepRel::Mwe => "mwe",
            DepRel::Name => "name",
            DepRel::Neg => "neg",
            DepRel::Nmod => "nmod",
            DepRel::Nsubj => "nsubj",
            DepRel::Nsubjpass => "nsubjpass",
            DepRel::Nummod => "nummod",
            DepRel::Obj => "obj",
            DepRel::Obl => "obl",
            DepRel::Orphan => "orphan",
            DepRel::Parataxis => "parataxis",
            DepRel::Punct => "punct",
            DepRel::Reparandum => "reparandum",
            DepRel::Root => "root",
            DepRel::Vocative => "vocative",
            DepRel::Xcomp => "xcomp",
        }
    }
}

impl std::str::FromStr for DepRel {
    type Err = DepWalkError;

    fn from_str(code: &str) -> Result<Self> {
        DepRel::from_code(code)
    }
}

impl std::fmt::Display for DepRel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Token
// ============================================================================

/// One morphologically analyzed unit of a parsed document.
///
/// `index` and `head` are positions in the document-wide token arena, so the
/// root of a sentence is simply the token with `head == index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Position within the document
    pub index: usize,
    /// The surface form (original text)
    pub text: String,
    /// The lemmatized form
    pub lemma: String,
    /// The normalized form
    pub norm: String,
    /// Coarse part-of-speech tag
    pub pos: PosTag,
    /// Fine-grained, model-specific tag (e.g. `助動詞`)
    pub tag: String,
    /// Relation to the head token
    pub dep: DepRel,
    /// Index of the head token
    pub head: usize,
    /// Whether the model flags this token as a stop word
    pub is_stopword: bool,
    /// Sentence index this token belongs to
    pub sentence_idx: usize,
    /// Character offset (start) in original text
    pub start: usize,
    /// Character offset (end) in original text
    pub end: usize,
    /// Katakana reading
    #[serde(default)]
    pub reading: Option<String>,
    /// Inflection information
    #[serde(default)]
    pub inflection: Option<String>,
    /// Lexeme frequency rank
    #[serde(default)]
    pub rank: u64,
    /// Out of vocabulary
    #[serde(default)]
    pub is_oov: bool,
    #[serde(default)]
    pub has_vector: bool,
}

impl Token {
    /// Create a new token. Lemma and norm default to the surface form.
    pub fn new(index: usize, text: impl Into<String>, pos: PosTag, dep: DepRel, head: usize) -> Self {
        let text = text.into();
        Self {
            index,
            lemma: text.clone(),
            norm: text.clone(),
            text,
            pos,
            tag: String::new(),
            dep,
            head,
            is_stopword: false,
            sentence_idx: 0,
            start: 0,
            end: 0,
            reading: None,
            inflection: None,
            rank: 0,
            is_oov: false,
            has_vector: false,
        }
    }

    /// Builder method: set lemma
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Builder method: set normalized form
    pub fn with_norm(mut self, norm: impl Into<String>) -> Self {
        self.norm = norm.into();
        self
    }

    /// Builder method: set fine-grained tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Builder method: set stop-word flag
    pub fn with_stopword(mut self, is_stopword: bool) -> Self {
        self.is_stopword = is_stopword;
        self
    }

    /// Builder method: set owning sentence
    pub fn with_sentence(mut self, sentence_idx: usize) -> Self {
        self.sentence_idx = sentence_idx;
        self
    }

    /// Builder method: set character offsets
    pub fn with_offsets(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Whether this token is its own head
    pub fn is_root(&self) -> bool {
        self.head == self.index
    }
}

// ============================================================================
// Sentence & Spans
// ============================================================================

/// A sentence: a contiguous range of the document's token arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence index within the document
    pub index: usize,
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
    /// The sentence text
    #[serde(default)]
    pub text: String,
    /// Start character offset in original text
    #[serde(default)]
    pub start: usize,
    /// End character offset in original text
    #[serde(default)]
    pub end: usize,
}

impl Sentence {
    /// Create a new sentence over `start_token..end_token`
    pub fn new(index: usize, start_token: usize, end_token: usize) -> Self {
        Self {
            index,
            start_token,
            end_token,
            text: String::new(),
            start: 0,
            end: 0,
        }
    }

    /// Number of tokens in this sentence
    pub fn len(&self) -> usize {
        self.end_token.saturating_sub(self.start_token)
    }

    /// Check if the sentence holds no tokens
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a token index falls inside this sentence
    pub fn contains(&self, token: usize) -> bool {
        (self.start_token..self.end_token).contains(&token)
    }
}

/// A named entity span (`doc.ents`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
    /// Entity label (e.g. `Person`, `Product`)
    pub label: String,
    /// The entity text
    #[serde(default)]
    pub text: String,
    /// Start character offset
    #[serde(default)]
    pub start_char: usize,
    /// End character offset
    #[serde(default)]
    pub end_char: usize,
}

impl NamedEntity {
    /// Create a new entity span
    pub fn new(start_token: usize, end_token: usize, label: impl Into<String>) -> Self {
        Self {
            start_token,
            end_token,
            label: label.into(),
            text: String::new(),
            start_char: 0,
            end_char: 0,
        }
    }
}

/// A noun chunk (`doc.noun_chunks`) with its designated root token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NounChunk {
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
    /// Index of the chunk's root token
    pub root: usize,
}

impl NounChunk {
    /// Create a new noun chunk
    pub fn new(start_token: usize, end_token: usize, root: usize) -> Self {
        Self {
            start_token,
            end_token,
            root,
        }
    }
}

/// A bunsetu: a minimal phrase unit supplied by an external segmenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseChunk {
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
}

impl PhraseChunk {
    /// Create a new phrase chunk
    pub fn new(start_token: usize, end_token: usize) -> Self {
        Self {
            start_token,
            end_token,
        }
    }

    /// Check if a token index falls inside this chunk
    pub fn contains(&self, token: usize) -> bool {
        (self.start_token..self.end_token).contains(&token)
    }

    /// Get the token length of this chunk
    pub fn token_len(&self) -> usize {
        self.end_token.saturating_sub(self.start_token)
    }
}

// ============================================================================
// Split Mode
// ============================================================================

/// Sudachi split granularity used by GiNZA (A = shortest units, C = longest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SplitMode {
    A,
    B,
    #[default]
    C,
}

impl SplitMode {
    /// The mode letter passed to `ginza.set_split_mode`
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::A => "A",
            SplitMode::B => "B",
            SplitMode::C => "C",
        }
    }
}

impl std::str::FromStr for SplitMode {
    type Err = DepWalkError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_uppercase().as_str() {
            "A" => Ok(SplitMode::A),
            "B" => Ok(SplitMode::B),
            "C" => Ok(SplitMode::C),
            other => Err(DepWalkError::invalid_config(format!(
                "split_mode must be one of A, B, C, got {:?}",
                other
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for document analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum ancestor chain length for bounded walks
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// spaCy model loaded by the annotation provider
    #[serde(default = "default_model")]
    pub model: String,
    /// Sudachi split mode handed to the provider
    #[serde(default)]
    pub split_mode: SplitMode,
    /// Reject documents in which some token cannot reach a root
    #[serde(default = "default_validate_roots")]
    pub validate_roots: bool,
    /// Also compute unbounded chains in reports
    #[serde(default)]
    pub include_full_chains: bool,
}

fn default_max_depth() -> usize {
    3
}

fn default_model() -> String {
    "ja_ginza_electra".to_string()
}

fn default_validate_roots() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            model: default_model(),
            split_mode: SplitMode::default(),
            validate_roots: default_validate_roots(),
            include_full_chains: false,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(DepWalkError::invalid_config("model must not be empty"));
        }
        Ok(())
    }

    /// Builder method: set maximum ancestor depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method: set model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder method: set split mode
    pub fn with_split_mode(mut self, split_mode: SplitMode) -> Self {
        self.split_mode = split_mode;
        self
    }

    /// Builder method: toggle root validation
    pub fn with_validate_roots(mut self, validate_roots: bool) -> Self {
        self.validate_roots = validate_roots;
        self
    }

    /// Builder method: toggle unbounded chains in reports
    pub fn with_full_chains(mut self, include: bool) -> Self {
        self.include_full_chains = include;
        self
    }
}
