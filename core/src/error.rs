use thiserror::Error;

/// Result type for labextract operations
pub type Result<T> = std::result::Result<T, LabExtractError>;

/// Error types for labextract operations
///
/// The line-level pipeline never fails; these errors only come from reading
/// an input document or from building matchers out of a custom vocabulary.
#[derive(Error, Debug)]
pub enum LabExtractError {
    /// Document could not be turned into page text
    #[error("Document error: {0}")]
    Document(String),

    /// A vocabulary entry produced an invalid pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Vocabulary file could not be parsed
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for LabExtractError {
    fn from(s: String) -> Self {
        LabExtractError::Document(s)
    }
}

impl From<&str> for LabExtractError {
    fn from(s: &str) -> Self {
        LabExtractError::Document(s.to_string())
    }
}

impl From<pdf_extract::OutputError> for LabExtractError {
    fn from(e: pdf_extract::OutputError) -> Self {
        LabExtractError::Document(format!("{}", e))
    }
}

impl From<regex::Error> for LabExtractError {
    fn from(e: regex::Error) -> Self {
        LabExtractError::InvalidPattern(format!("{}", e))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for LabExtractError {
    fn from(e: serde_json::Error) -> Self {
        LabExtractError::InvalidVocabulary(format!("{}", e))
    }
}
