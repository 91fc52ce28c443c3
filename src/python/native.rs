//! Native Python interface
//!
//! Python classes that run the whole flow from raw text: a spaCy pipeline
//! parses the text, and the report is built on the Rust side.

use crate::provider::{annotate, AnnotationProvider, EntityRule};
use crate::python::spacy::SpacyProvider;
use crate::report::analyze;
use crate::types::{AnalysisConfig, SplitMode};
use pyo3::prelude::*;

/// Configuration for document analysis
#[pyclass(name = "AnalysisConfig")]
#[derive(Clone)]
pub struct PyAnalysisConfig {
    inner: AnalysisConfig,
}

#[pymethods]
impl PyAnalysisConfig {
    #[new]
    #[pyo3(signature = (
        max_depth=3,
        model="ja_ginza_electra",
        split_mode="C",
        validate_roots=true,
        include_full_chains=false
    ))]
    fn new(
        max_depth: usize,
        model: &str,
        split_mode: &str,
        validate_roots: bool,
        include_full_chains: bool,
    ) -> PyResult<Self> {
        let inner = AnalysisConfig::new()
            .with_max_depth(max_depth)
            .with_model(model)
            .with_split_mode(split_mode.parse::<SplitMode>()?)
            .with_validate_roots(validate_roots)
            .with_full_chains(include_full_chains);
        inner.validate()?;
        Ok(Self { inner })
    }

    #[getter]
    fn max_depth(&self) -> usize {
        self.inner.max_depth
    }

    #[getter]
    fn model(&self) -> String {
        self.inner.model.clone()
    }

    #[getter]
    fn split_mode(&self) -> &'static str {
        self.inner.split_mode.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalysisConfig(max_depth={}, model='{}', split_mode='{}')",
            self.inner.max_depth,
            self.inner.model,
            self.inner.split_mode.as_str()
        )
    }
}

/// Analyzer over a spaCy + GiNZA pipeline
#[pyclass(name = "GinzaAnalyzer")]
pub struct PyGinzaAnalyzer {
    provider: SpacyProvider,
    config: AnalysisConfig,
}

#[pymethods]
impl PyGinzaAnalyzer {
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<PyAnalysisConfig>) -> Self {
        let config = config.map(|c| c.inner).unwrap_or_default();
        Self {
            provider: SpacyProvider::new(config.model.clone()),
            config,
        }
    }

    /// Register entity-ruler patterns given as a JSON array of
    /// `{"label": ..., "pattern": ...}` objects
    fn add_entity_rules(&mut self, rules_json: &str) -> PyResult<()> {
        let rules: Vec<EntityRule> = serde_json::from_str(rules_json)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(format!("Invalid JSON: {}", e)))?;
        self.provider.add_entity_rules(&rules)?;
        Ok(())
    }

    /// Parse `text` and return the document report as JSON
    fn analyze(&self, text: &str) -> PyResult<String> {
        let doc = annotate(&self.provider, text, &self.config)?;
        let report = analyze(&doc, &self.config)?;
        Ok(report.to_json()?)
    }

    /// Parse `text` and return whether it contains a negation
    fn is_negative(&self, text: &str) -> PyResult<bool> {
        let doc = annotate(&self.provider, text, &self.config)?;
        Ok(crate::negation::is_negative(&doc))
    }

    fn __repr__(&self) -> String {
        format!("GinzaAnalyzer(model='{}')", self.provider.model_name())
    }
}
