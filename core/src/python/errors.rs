//! Python exception types for labextract
//!
//! This module defines Python exception classes that map to Rust error types.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

// Base exception
create_exception!(
    labextract,
    PyLabExtractError,
    PyException,
    "Base exception for all labextract errors"
);

// Specific exceptions
create_exception!(
    labextract,
    PyDocumentError,
    PyLabExtractError,
    "Report document could not be read or parsed"
);

create_exception!(
    labextract,
    PyInvalidPatternError,
    PyLabExtractError,
    "Vocabulary entry could not be compiled into a pattern"
);

create_exception!(
    labextract,
    PyInvalidVocabularyError,
    PyLabExtractError,
    "Vocabulary file could not be parsed"
);

/// Convert Rust LabExtractError to appropriate Python exception
pub fn convert_error(err: crate::error::LabExtractError) -> PyErr {
    match err {
        crate::error::LabExtractError::Document(msg) => PyDocumentError::new_err(msg),
        crate::error::LabExtractError::InvalidPattern(msg) => PyInvalidPatternError::new_err(msg),
        crate::error::LabExtractError::InvalidVocabulary(msg) => {
            PyInvalidVocabularyError::new_err(msg)
        }
        crate::error::LabExtractError::IoError(e) => {
            PyDocumentError::new_err(format!("IO error: {}", e))
        }
    }
}
