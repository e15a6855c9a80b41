//! Python wrapper for LabReportExtractor

use pyo3::prelude::*;
use std::path::PathBuf;

use super::errors::convert_error;
use super::findings::PyLabFindings;
use super::vocabulary::PyVocabulary;
use crate::api::LabReportExtractor;

/// Extracts culture report findings from page text
///
/// Example:
///     >>> from labextract import LabReportExtractor
///     >>> extractor = LabReportExtractor()
///     >>> extractor.summarize_pages(["1 Staphylococcus aureus", None])
///     'Germen: Staphylococcus aureus'
#[pyclass(name = "LabReportExtractor", module = "labextract")]
pub struct PyLabReportExtractor {
    inner: LabReportExtractor,
}

#[pymethods]
impl PyLabReportExtractor {
    /// Args:
    ///     vocabulary: Optional Vocabulary (defaults to the built-in one)
    ///
    /// Raises:
    ///     InvalidPatternError: If a vocabulary entry cannot be compiled
    #[new]
    #[pyo3(signature = (vocabulary=None))]
    fn new(vocabulary: Option<PyVocabulary>) -> PyResult<Self> {
        let vocabulary = vocabulary.map(|v| v.inner).unwrap_or_default();
        let inner = LabReportExtractor::new(vocabulary).map_err(convert_error)?;
        Ok(Self { inner })
    }

    /// Extract findings from per-page text (None for pages without text)
    fn extract_pages(&self, pages: Vec<Option<String>>) -> PyLabFindings {
        self.inner.extract_pages(pages).into()
    }

    /// Extract findings and return the one-line report
    fn summarize_pages(&self, pages: Vec<Option<String>>) -> String {
        self.inner.summarize_pages(pages)
    }

    /// Extract findings from a PDF or text file
    ///
    /// Raises:
    ///     DocumentError: If the file cannot be read or parsed
    fn extract_file(&self, path: PathBuf) -> PyResult<PyLabFindings> {
        let findings = self.inner.extract_file(&path).map_err(convert_error)?;
        Ok(findings.into())
    }

    /// Extract findings from PDF bytes
    fn extract_pdf(&self, data: &[u8]) -> PyResult<PyLabFindings> {
        let findings = self.inner.extract_pdf(data).map_err(convert_error)?;
        Ok(findings.into())
    }

    #[getter]
    fn vocabulary(&self) -> PyVocabulary {
        self.inner.vocabulary().clone().into()
    }
}

/// Summarize page text with the default vocabulary
///
/// Args:
///     pages: List of page strings (or None for pages without text)
///
/// Returns:
///     str: The one-line report, empty if nothing was found
#[pyfunction]
#[pyo3(name = "summarize_pages")]
pub fn py_summarize_pages(pages: Vec<Option<String>>) -> String {
    LabReportExtractor::default().summarize_pages(pages)
}
