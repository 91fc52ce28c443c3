//! spaCy + GiNZA annotation provider
//!
//! Loads a spaCy pipeline through the embedded Python interpreter and reads
//! the parse back into a [`Document`]. The model is loaded lazily on first
//! use and shared between clones. The GIL is the only lock taken.

use crate::document::Document;
use crate::errors::{DepWalkError, Result};
use crate::provider::{AnnotationProvider, EntityRule};
use crate::types::{
    DepRel, NamedEntity, NounChunk, PhraseChunk, PosTag, Sentence, SplitMode, Token,
};
use pyo3::prelude::*;
use pyo3::sync::GILOnceCell;
use std::sync::Arc;

/// Format a Python failure as a provider error message
macro_rules! py_err {
    ($operation:expr, $e:expr) => {
        DepWalkError::provider(format!("Failed to {}: {}", $operation, $e))
    };
}

/// Read one attribute and extract it
fn attr<'py, T>(obj: &Bound<'py, PyAny>, name: &str) -> Result<T>
where
    T: FromPyObject<'py>,
{
    obj.getattr(name)
        .map_err(|e| py_err!(format!("get {}", name), e))?
        .extract::<T>()
        .map_err(|e| py_err!(format!("extract {}", name), e))
}

/// `(start, end)` token bounds of a spaCy span
fn span_bounds(span: &Bound<'_, PyAny>) -> Result<(usize, usize)> {
    Ok((attr(span, "start")?, attr(span, "end")?))
}

/// Annotation provider backed by a spaCy pipeline with GiNZA installed
#[derive(Clone)]
pub struct SpacyProvider {
    model_name: String,
    nlp: Arc<GILOnceCell<Py<PyAny>>>,
}

impl SpacyProvider {
    /// Create a provider for `model_name` (e.g. `ja_ginza_electra`).
    ///
    /// The model must be installed in the interpreter's environment:
    /// ```bash
    /// pip install ginza ja_ginza_electra
    /// ```
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            nlp: Arc::new(GILOnceCell::new()),
        }
    }

    /// Name of the model this provider loads
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Initialize or get the spaCy pipeline.
    ///
    /// `spacy.load` may release the GIL; if two threads race here both load
    /// and the first stored pipeline wins.
    fn get_or_load_nlp(&self, py: Python<'_>) -> Result<&Py<PyAny>> {
        self.nlp.get_or_try_init(py, || {
            let spacy = py.import_bound("spacy").map_err(|e| {
                DepWalkError::provider(format!(
                    "Failed to import spacy: {}. Make sure spacy and ginza are installed",
                    e
                ))
            })?;
            let nlp = spacy
                .call_method1("load", (&self.model_name,))
                .map_err(|e| {
                    DepWalkError::provider(format!(
                        "Failed to load spaCy model '{}': {}",
                        self.model_name, e
                    ))
                })?;

            #[cfg(feature = "tracing")]
            tracing::info!(model = %self.model_name, "loaded spaCy model");

            Ok(nlp.unbind())
        })
    }

    /// Token bounds of the spans returned by `ginza.<function>(doc)`
    fn read_chunks(
        ginza: &Bound<'_, PyModule>,
        function: &str,
        doc: &Bound<'_, PyAny>,
    ) -> Result<Vec<PhraseChunk>> {
        let spans = ginza
            .call_method1(function, (doc,))
            .map_err(|e| py_err!(format!("call ginza.{}", function), e))?;
        let mut chunks = Vec::new();
        for span in spans.iter().map_err(|e| py_err!(format!("iterate {}", function), e))? {
            let span = span.map_err(|e| py_err!(format!("read {} span", function), e))?;
            let (start, end) = span_bounds(&span)?;
            chunks.push(PhraseChunk::new(start, end));
        }
        Ok(chunks)
    }

    fn read_token(token: &Bound<'_, PyAny>, ginza: &Bound<'_, PyModule>) -> Result<Token> {
        let pos: String = attr(token, "pos_")?;
        let dep: String = attr(token, "dep_")?;
        let head = token
            .getattr("head")
            .map_err(|e| py_err!("get head", e))?;
        let text: String = attr(token, "text")?;
        let start: usize = attr(token, "idx")?;
        let end = start + text.chars().count();

        let reading = ginza
            .call_method1("reading_form", (token,))
            .and_then(|r| r.extract::<String>())
            .ok();
        let inflection = ginza
            .call_method1("inflection", (token,))
            .and_then(|r| r.extract::<String>())
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Token {
            index: attr(token, "i")?,
            lemma: attr(token, "lemma_")?,
            norm: attr(token, "norm_")?,
            pos: PosTag::from_code(&pos)?,
            tag: attr(token, "tag_")?,
            dep: DepRel::from_code(&dep)?,
            head: attr(&head, "i")?,
            is_stopword: attr(token, "is_stop")?,
            sentence_idx: 0,
            start,
            end,
            text,
            reading,
            inflection,
            rank: attr(token, "rank")?,
            is_oov: attr(token, "is_oov")?,
            has_vector: attr(token, "has_vector")?,
        })
    }
}

impl AnnotationProvider for SpacyProvider {
    fn parse(&self, text: &str, split_mode: SplitMode) -> Result<Document> {
        Python::with_gil(|py| {
            let nlp = self.get_or_load_nlp(py)?.bind(py);
            let ginza = py
                .import_bound("ginza")
                .map_err(|e| py_err!("import ginza", e))?;
            ginza
                .call_method1("set_split_mode", (nlp, split_mode.as_str()))
                .map_err(|e| py_err!("set split mode", e))?;

            let doc = nlp.call1((text,)).map_err(|e| py_err!("process text", e))?;

            let mut tokens = Vec::new();
            for token in doc.iter().map_err(|e| py_err!("get iterator", e))? {
                let token = token.map_err(|e| py_err!("iterate token", e))?;
                tokens.push(Self::read_token(&token, &ginza)?);
            }

            let mut sentences = Vec::new();
            let sents = doc.getattr("sents").map_err(|e| py_err!("get sents", e))?;
            for (index, span) in sents
                .iter()
                .map_err(|e| py_err!("iterate sents", e))?
                .enumerate()
            {
                let span = span.map_err(|e| py_err!("iterate sentence", e))?;
                let (start, end) = span_bounds(&span)?;
                for token in tokens.iter_mut().take(end).skip(start) {
                    token.sentence_idx = index;
                }
                sentences.push(Sentence {
                    index,
                    start_token: start,
                    end_token: end,
                    text: attr(&span, "text")?,
                    start: attr(&span, "start_char")?,
                    end: attr(&span, "end_char")?,
                });
            }

            let mut entities = Vec::new();
            let ents = doc.getattr("ents").map_err(|e| py_err!("get ents", e))?;
            for span in ents.iter().map_err(|e| py_err!("iterate ents", e))? {
                let span = span.map_err(|e| py_err!("iterate entity", e))?;
                let (start, end) = span_bounds(&span)?;
                entities.push(NamedEntity {
                    start_token: start,
                    end_token: end,
                    label: attr(&span, "label_")?,
                    text: attr(&span, "text")?,
                    start_char: attr(&span, "start_char")?,
                    end_char: attr(&span, "end_char")?,
                });
            }

            let mut noun_chunks = Vec::new();
            let chunks = doc
                .getattr("noun_chunks")
                .map_err(|e| py_err!("get noun_chunks", e))?;
            for span in chunks.iter().map_err(|e| py_err!("iterate noun_chunks", e))? {
                let span = span.map_err(|e| py_err!("iterate noun chunk", e))?;
                let (start, end) = span_bounds(&span)?;
                let root = span.getattr("root").map_err(|e| py_err!("get root", e))?;
                noun_chunks.push(NounChunk::new(start, end, attr(&root, "i")?));
            }

            let bunsetu = Self::read_chunks(&ginza, "bunsetu_spans", &doc)?;
            let bunsetu_phrases = Self::read_chunks(&ginza, "bunsetu_phrase_spans", &doc)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                tokens = tokens.len(),
                sentences = sentences.len(),
                entities = entities.len(),
                "parsed text with spaCy"
            );

            Document::new(tokens, sentences)?
                .with_entities(entities)?
                .with_noun_chunks(noun_chunks)?
                .with_bunsetu(bunsetu)?
                .with_bunsetu_phrases(bunsetu_phrases)
        })
    }

    fn add_entity_rules(&mut self, rules: &[EntityRule]) -> Result<()> {
        let patterns = serde_json::to_string(rules)?;

        Python::with_gil(|py| {
            let nlp = self.get_or_load_nlp(py)?.bind(py);
            let has_ruler: bool = nlp
                .call_method1("has_pipe", ("entity_ruler",))
                .and_then(|r| r.extract())
                .map_err(|e| py_err!("check entity_ruler", e))?;
            let ruler = if has_ruler {
                nlp.call_method1("get_pipe", ("entity_ruler",))
            } else {
                nlp.call_method1("add_pipe", ("entity_ruler",))
            }
            .map_err(|e| py_err!("get entity_ruler", e))?;

            let patterns = py
                .import_bound("json")
                .and_then(|json| json.call_method1("loads", (patterns,)))
                .map_err(|e| py_err!("decode patterns", e))?;
            ruler
                .call_method1("add_patterns", (patterns,))
                .map_err(|e| py_err!("add patterns", e))?;

            #[cfg(feature = "tracing")]
            tracing::info!(rules = rules.len(), "registered entity rules");
            Ok(())
        })
    }
}
