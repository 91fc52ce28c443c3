//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_depwalk.

pub mod json;
pub mod native;
pub mod spacy;

use crate::errors::DepWalkError;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

impl From<DepWalkError> for PyErr {
    fn from(err: DepWalkError) -> Self {
        match err {
            DepWalkError::Provider { .. } => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface classes
    m.add_class::<native::PyAnalysisConfig>()?;
    m.add_class::<native::PyGinzaAnalyzer>()?;

    // JSON interface functions
    m.add_function(wrap_pyfunction!(json::analyze_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::analyze_batch_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::is_negative_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::ancestors_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::token_rows_json, m)?)?;

    // Category tables
    m.add_function(wrap_pyfunction!(json::pos_label, m)?)?;
    m.add_function(wrap_pyfunction!(json::dep_label, m)?)?;
    m.add_function(wrap_pyfunction!(json::pos_labels, m)?)?;
    m.add_function(wrap_pyfunction!(json::dep_labels, m)?)?;

    Ok(())
}
