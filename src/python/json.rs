//! JSON interface for pre-parsed documents and batch processing
//!
//! Documents parsed on the Python side are passed in as JSON (see
//! [`crate::json`]), which keeps Python↔Rust overhead to one string each
//! way.

use crate::errors::DepWalkError;
use crate::export::token_rows;
use crate::json::{document_from_json, documents_from_json};
use crate::labels::{self, CategoryLabel};
use crate::negation::is_negative;
use crate::report::{analyze, DocumentReport};
use crate::types::{DepRel, PosTag};
use crate::walk::{chain_indices, AncestorWalker};
use pyo3::prelude::*;
use rayon::prelude::*;

/// Analyze one document
///
/// Args:
///     json_input: JSON string containing tokens, spans and optional config
///
/// Returns:
///     JSON string with the document report
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn analyze_json(json_input: &str) -> PyResult<String> {
    let (doc, config) = document_from_json(json_input)?;
    let report = analyze(&doc, &config)?;
    Ok(report.to_json()?)
}

/// Analyze multiple documents in parallel
///
/// Args:
///     json_input: JSON string containing an array of documents
///
/// Returns:
///     JSON string with an array of reports, in input order
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn analyze_batch_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    let reports = py.allow_threads(|| {
        let docs = documents_from_json(json_input)?;
        docs.par_iter()
            .map(|(doc, config)| analyze(doc, config))
            .collect::<crate::errors::Result<Vec<DocumentReport>>>()
    })?;
    serde_json::to_string(&reports).map_err(|e| DepWalkError::from(e).into())
}

/// Whether the document contains a negation signature
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn is_negative_json(json_input: &str) -> PyResult<bool> {
    let (doc, _) = document_from_json(json_input)?;
    Ok(is_negative(&doc))
}

/// Ancestor chain of one token as token indices, closest first
///
/// Args:
///     json_input: JSON document
///     token_index: document-wide index of the start token
///     max_depth: walk bound; defaults to the document config's `max_depth`
#[pyfunction]
#[pyo3(signature = (json_input, token_index, max_depth=None))]
pub fn ancestors_json(
    json_input: &str,
    token_index: usize,
    max_depth: Option<usize>,
) -> PyResult<Vec<usize>> {
    let (doc, config) = document_from_json(json_input)?;
    let token = doc.token(token_index).ok_or_else(|| {
        pyo3::exceptions::PyIndexError::new_err(format!(
            "token index {} out of range for {} tokens",
            token_index,
            doc.len()
        ))
    })?;
    let walker = AncestorWalker::with_max_depth(max_depth.unwrap_or(config.max_depth));
    Ok(chain_indices(&walker.ancestors(&doc, token)))
}

/// One row per token, for building a dataframe
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn token_rows_json(json_input: &str) -> PyResult<String> {
    let (doc, _) = document_from_json(json_input)?;
    serde_json::to_string(&token_rows(&doc)).map_err(|e| DepWalkError::from(e).into())
}

/// Display name of a part-of-speech code
#[pyfunction]
pub fn pos_label(code: &str) -> PyResult<String> {
    Ok(labels::pos_label(code)?.to_string())
}

/// Display name of a dependency relation code
#[pyfunction]
pub fn dep_label(code: &str) -> PyResult<String> {
    Ok(labels::dep_label(code)?.to_string())
}

/// The part-of-speech table as `(code, display name)` pairs
#[pyfunction]
pub fn pos_labels() -> Vec<(&'static str, &'static str)> {
    code_table::<PosTag>()
}

/// The dependency relation table as `(code, display name)` pairs
#[pyfunction]
pub fn dep_labels() -> Vec<(&'static str, &'static str)> {
    code_table::<DepRel>()
}

fn code_table<T: CategoryLabel>() -> Vec<(&'static str, &'static str)> {
    labels::label_table::<T>()
        .into_iter()
        .map(|(c, label)| (c.code(), label))
        .collect()
}
