//! Python wrapper for Vocabulary

use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

use super::errors::convert_error;
use crate::types::Vocabulary;

/// Word lists driving the line matchers
///
/// Lists left as None keep their default Spanish vocabulary.
#[pyclass(name = "Vocabulary", module = "labextract")]
#[derive(Clone, Debug)]
pub struct PyVocabulary {
    pub(crate) inner: Vocabulary,
}

impl From<Vocabulary> for PyVocabulary {
    fn from(inner: Vocabulary) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyVocabulary {
    #[new]
    #[pyo3(signature = (
        antibiotics=None,
        abbreviations=None,
        organism_prefixes=None,
        noise_terms=None,
        qualitative_values=None
    ))]
    fn new(
        antibiotics: Option<Vec<String>>,
        abbreviations: Option<HashMap<String, String>>,
        organism_prefixes: Option<Vec<String>>,
        noise_terms: Option<Vec<String>>,
        qualitative_values: Option<Vec<String>>,
    ) -> Self {
        let mut inner = Vocabulary::default();
        if let Some(antibiotics) = antibiotics {
            inner.antibiotics = antibiotics;
        }
        if let Some(abbreviations) = abbreviations {
            inner.abbreviations = abbreviations.into_iter().collect();
        }
        if let Some(prefixes) = organism_prefixes {
            inner.organism_prefixes = prefixes;
        }
        if let Some(terms) = noise_terms {
            inner.noise_terms = terms;
        }
        if let Some(values) = qualitative_values {
            inner.qualitative_values = values;
        }
        Self { inner }
    }

    #[staticmethod]
    fn default() -> Self {
        Vocabulary::default().into()
    }

    #[staticmethod]
    fn empty() -> Self {
        Vocabulary::empty().into()
    }

    /// Load a vocabulary from a JSON file (requires the `json` feature)
    #[staticmethod]
    fn from_json_file(path: PathBuf) -> PyResult<Self> {
        load_json(&path)
    }

    /// Display name of an antibiotic
    fn short_name(&self, antibiotic: &str) -> String {
        self.inner.short_name(antibiotic).to_string()
    }

    #[getter]
    fn antibiotics(&self) -> Vec<String> {
        self.inner.antibiotics.clone()
    }

    #[getter]
    fn abbreviations(&self) -> HashMap<String, String> {
        self.inner
            .abbreviations
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[getter]
    fn organism_prefixes(&self) -> Vec<String> {
        self.inner.organism_prefixes.clone()
    }

    #[getter]
    fn noise_terms(&self) -> Vec<String> {
        self.inner.noise_terms.clone()
    }

    #[getter]
    fn qualitative_values(&self) -> Vec<String> {
        self.inner.qualitative_values.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Vocabulary(antibiotics={}, organisms={}, noise_terms={})",
            self.inner.antibiotics.len(),
            self.inner.organism_prefixes.len(),
            self.inner.noise_terms.len()
        )
    }
}

#[cfg(feature = "json")]
fn load_json(path: &std::path::Path) -> PyResult<PyVocabulary> {
    Vocabulary::from_json_file(path)
        .map(PyVocabulary::from)
        .map_err(convert_error)
}

#[cfg(not(feature = "json"))]
fn load_json(_path: &std::path::Path) -> PyResult<PyVocabulary> {
    Err(convert_error(
        crate::error::LabExtractError::InvalidVocabulary(
            "JSON vocabularies require the 'json' feature".to_string(),
        ),
    ))
}
