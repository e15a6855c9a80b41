use crate::error::Result;
use crate::types::Vocabulary;
use regex::Regex;

use super::normalize::normalize_line;

/// Builds the alternation of phrases removed from a Gram line
///
/// Phrases are removed wherever they occur, except the bare marker token,
/// which must stand as a whole word so "Gramnegativos" survives. Earlier
/// phrases take precedence, so "Tincion de Gram" goes before "Gram".
pub(crate) fn strip_alternation(phrases: &[String], marker: &str) -> Option<String> {
    let alternatives: Vec<String> = phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|phrase| {
            if phrase != marker {
                return regex::escape(phrase);
            }
            let starts_word = phrase.chars().next().is_some_and(is_word_char);
            let ends_word = phrase.chars().last().is_some_and(is_word_char);
            format!(
                "{}{}{}",
                if starts_word { r"\b" } else { "" },
                regex::escape(phrase),
                if ends_word { r"\b" } else { "" },
            )
        })
        .collect();

    if alternatives.is_empty() {
        None
    } else {
        Some(format!("(?:{})", alternatives.join("|")))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Upper-cases the first character, leaving the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Recognizes Gram-stain result lines
///
/// # Algorithm
///
/// 1. Line must contain the marker ("Gram") and a result word
///    ("positivo"/"negativo"), both case-sensitive
/// 2. Remove known phrases ("Tincion de Gram", "Resultado", "Gram")
/// 3. Collapse leftover whitespace
/// 4. Keep the remnant only if longer than the minimum, first letter upper-cased
#[derive(Debug, Clone)]
pub struct GramMatcher {
    marker: String,
    results: Vec<String>,
    strip: Option<Regex>,
    min_chars: usize,
}

impl GramMatcher {
    /// Compiles the matcher from a vocabulary
    ///
    /// # Errors
    ///
    /// Returns an error if the strip phrases do not form a valid pattern
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let strip = match strip_alternation(
            &vocabulary.gram_strip_phrases,
            &vocabulary.gram_marker,
        ) {
            Some(pattern) => Some(Regex::new(&pattern)?),
            None => None,
        };

        Ok(Self {
            marker: vocabulary.gram_marker.clone(),
            results: vocabulary.gram_results.clone(),
            strip,
            min_chars: vocabulary.min_gram_chars,
        })
    }

    /// Checks whether a line reports a Gram stain
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.marker.as_str()) && self.results.iter().any(|r| line.contains(r.as_str()))
    }

    /// Extracts the Gram-stain description from a line
    ///
    /// Returns `None` when the line is not a Gram-stain line or only a
    /// fragment remains after stripping.
    pub fn extract(&self, line: &str) -> Option<String> {
        if !self.matches(line) {
            return None;
        }

        let stripped = match &self.strip {
            Some(re) => normalize_line(&re.replace_all(line, " ")),
            None => normalize_line(line),
        };

        if stripped.chars().count() > self.min_chars {
            Some(capitalize_first(&stripped))
        } else {
            None
        }
    }
}
