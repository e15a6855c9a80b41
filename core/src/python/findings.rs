//! Python wrapper for LabFindings

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::types::LabFindings;

/// Findings accumulated over one report
#[pyclass(name = "LabFindings", module = "labextract")]
#[derive(Clone)]
pub struct PyLabFindings {
    pub(crate) inner: LabFindings,
}

impl From<LabFindings> for PyLabFindings {
    fn from(inner: LabFindings) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyLabFindings {
    /// Gram-stain descriptions (sorted)
    #[getter]
    fn gram(&self) -> Vec<String> {
        self.inner.gram.iter().cloned().collect()
    }

    /// Identified organisms (sorted)
    #[getter]
    fn organisms(&self) -> Vec<String> {
        self.inner.organisms.iter().cloned().collect()
    }

    /// Antibiogram results as (short name, code) pairs in report order
    #[getter]
    fn susceptibility(&self) -> Vec<(String, String)> {
        self.inner
            .susceptibility
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect()
    }

    /// Non-microbiology findings (sorted)
    #[getter]
    fn other(&self) -> Vec<String> {
        self.inner.other.iter().cloned().collect()
    }

    fn has_microbiology(&self) -> bool {
        self.inner.has_microbiology()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// One-line report; empty when nothing was found
    fn summary(&self) -> String {
        self.inner.summary()
    }

    /// Convert findings to dictionary
    pub fn to_dict(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("gram", self.gram())?;
        dict.set_item("organisms", self.organisms())?;
        dict.set_item("susceptibility", self.susceptibility())?;
        dict.set_item("other", self.other())?;
        dict.set_item("summary", self.summary())?;
        Ok(dict.unbind())
    }

    fn __repr__(&self) -> String {
        format!(
            "LabFindings(gram={}, organisms={}, susceptibility={}, other={})",
            self.inner.gram.len(),
            self.inner.organisms.len(),
            self.inner.susceptibility.len(),
            self.inner.other.len()
        )
    }

    fn __str__(&self) -> String {
        self.summary()
    }
}
