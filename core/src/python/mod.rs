//! Python bindings for labextract
//!
//! This module provides PyO3 bindings so Python front ends can hand page
//! text (or a report file) to the Rust extractor and get the summary back.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod errors;
mod extractor;
mod findings;
mod vocabulary;

pub use errors::*;
pub use extractor::*;
pub use findings::*;
pub use vocabulary::*;

/// Python module definition
#[pymodule]
fn _labextract(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "LabExtractError",
        py.get_type_bound::<errors::PyLabExtractError>(),
    )?;
    m.add("DocumentError", py.get_type_bound::<errors::PyDocumentError>())?;
    m.add(
        "InvalidPatternError",
        py.get_type_bound::<errors::PyInvalidPatternError>(),
    )?;
    m.add(
        "InvalidVocabularyError",
        py.get_type_bound::<errors::PyInvalidVocabularyError>(),
    )?;

    // Register data structure classes
    m.add_class::<PyVocabulary>()?;
    m.add_class::<PyLabFindings>()?;

    // Register main API
    m.add_class::<PyLabReportExtractor>()?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_summarize_pages, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
