use crate::types::{Susceptibility, Vocabulary};
use regex::Regex;
use std::sync::OnceLock;

/// First isolated R, S or I in a line
fn susceptibility_letter() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\b(R|S|I)\b").expect("Failed to compile regex"))
}

/// Finds the susceptibility code of an antibiogram line
///
/// Only the first isolated letter counts; "Sensible" or "MIC" never match.
pub fn find_susceptibility(line: &str) -> Option<Susceptibility> {
    susceptibility_letter()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Susceptibility::from_code(m.as_str()))
}

/// Recognizes antibiogram rows
///
/// Every antibiotic named in a line receives the line's single code. A row
/// listing two substances with one letter therefore records that letter
/// for both.
#[derive(Debug, Clone)]
pub struct AntibiogramMatcher {
    /// (full name, short name), in vocabulary order
    antibiotics: Vec<(String, String)>,
}

impl AntibiogramMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            antibiotics: vocabulary
                .antibiotics
                .iter()
                .map(|name| (name.clone(), vocabulary.short_name(name).to_string()))
                .collect(),
        }
    }

    /// Extracts (short name, code) results from a line
    ///
    /// Empty when no known antibiotic is named or the line carries no
    /// isolated code letter.
    pub fn extract(&self, line: &str) -> Vec<(&str, Susceptibility)> {
        let named: Vec<&str> = self
            .antibiotics
            .iter()
            .filter(|(full, _)| line.contains(full.as_str()))
            .map(|(_, short)| short.as_str())
            .collect();

        if named.is_empty() {
            return Vec::new();
        }

        match find_susceptibility(line) {
            Some(code) => named.into_iter().map(|short| (short, code)).collect(),
            None => Vec::new(),
        }
    }
}
