use crate::types::Vocabulary;
use regex::Regex;
use std::sync::OnceLock;

/// Leading enumeration such as "1 " in "1 Staphylococcus aureus"
fn enumeration_prefix() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d+\s*").expect("Failed to compile regex"))
}

/// Recognizes identified-organism lines by genus name
#[derive(Debug, Clone)]
pub struct OrganismMatcher {
    prefixes: Vec<String>,
}

impl OrganismMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            prefixes: vocabulary.organism_prefixes.clone(),
        }
    }

    /// Checks whether a line names a known genus (case-sensitive)
    pub fn matches(&self, line: &str) -> bool {
        self.prefixes.iter().any(|p| line.contains(p.as_str()))
    }

    /// Extracts the organism name with its enumeration prefix removed
    ///
    /// The remainder is kept verbatim.
    pub fn extract(&self, line: &str) -> Option<String> {
        if !self.matches(line) {
            return None;
        }
        Some(enumeration_prefix().replace(line, "").into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1 Staphylococcus aureus", "Staphylococcus aureus")]
    #[case("12Escherichia coli", "Escherichia coli")]
    #[case("Klebsiella pneumoniae BLEE (+)", "Klebsiella pneumoniae BLEE (+)")]
    #[case("Germen: Enterococcus faecalis", "Germen: Enterococcus faecalis")]
    // Digits that are not at the start stay
    #[case("Pseudomonas aeruginosa 2", "Pseudomonas aeruginosa 2")]
    fn test_extract_organism(#[case] line: &str, #[case] expected: &str) {
        let matcher = OrganismMatcher::new(&Vocabulary::default());
        assert_eq!(matcher.extract(line).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("staphylococcus aureus")]
    #[case("Streptococcus pyogenes")]
    #[case("Sin desarrollo bacteriano")]
    fn test_unknown_organisms(#[case] line: &str) {
        let matcher = OrganismMatcher::new(&Vocabulary::default());
        assert_eq!(matcher.extract(line), None);
    }

    #[test]
    fn test_custom_prefix() {
        let vocabulary = Vocabulary::default().with_organism_prefix("Streptococcus");
        let matcher = OrganismMatcher::new(&vocabulary);
        assert_eq!(
            matcher.extract("2 Streptococcus pyogenes").as_deref(),
            Some("Streptococcus pyogenes")
        );
    }
}
