use crate::error::Result;
use crate::types::Vocabulary;
use regex::Regex;

/// Recognizes generic "label value" results (urinalysis, biochemistry)
///
/// Pattern, anchored at the start of the line and case-insensitive:
///
/// ```text
/// <letters and spaces>  <whitespace>  <-?digits[.,]digits | literal value>
/// ```
///
/// The label is the shortest prefix that lets the value match. The caller
/// decides whether the fallback applies at all: it only runs while no
/// microbiology finding has been seen in the document.
#[derive(Debug, Clone)]
pub struct BiochemistryMatcher {
    pattern: Regex,
    min_label_chars: usize,
    excluded_label_terms: Vec<String>,
}

impl BiochemistryMatcher {
    /// Compiles the matcher from a vocabulary
    ///
    /// # Errors
    ///
    /// Returns an error if a qualitative value breaks the pattern
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let literals: String = vocabulary
            .qualitative_values
            .iter()
            .filter(|v| !v.is_empty())
            .map(|v| format!("|{}", regex::escape(v)))
            .collect();
        let pattern = Regex::new(&format!(
            r"(?i)^([A-Za-z\s]+?)\s+(-?\d+[.,]?\d*{})",
            literals
        ))?;

        Ok(Self {
            pattern,
            min_label_chars: vocabulary.min_label_chars,
            excluded_label_terms: vocabulary.excluded_label_terms.clone(),
        })
    }

    /// Extracts a `"label value"` finding from a line
    pub fn extract(&self, line: &str) -> Option<String> {
        let caps = self.pattern.captures(line)?;
        let label = caps.get(1)?.as_str().trim();
        let value = caps.get(2)?.as_str().trim();

        if label.chars().count() <= self.min_label_chars {
            return None;
        }
        if self
            .excluded_label_terms
            .iter()
            .any(|term| label.contains(term.as_str()))
        {
            return None;
        }

        Some(format!("{} {}", label, value))
    }
}
