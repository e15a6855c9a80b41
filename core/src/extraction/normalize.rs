use crate::types::Vocabulary;

/// Collapses every whitespace run to a single space and trims the ends
///
/// The ASCII information separators (U+001C to U+001F) count as
/// whitespace, as they do in text dumps that use them between columns.
pub fn normalize_line(raw: &str) -> String {
    raw.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Discards report boilerplate before classification
///
/// A line is noise when it is too short or contains any denylisted
/// administrative term, compared case-insensitively. Noise wins over
/// every classifier: a header line mentioning an antibiotic is still
/// dropped.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    terms: Vec<String>,
    min_chars: usize,
}

impl NoiseFilter {
    /// Creates a filter from the vocabulary's denylist
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            terms: vocabulary
                .noise_terms
                .iter()
                .map(|t| t.to_uppercase())
                .collect(),
            min_chars: vocabulary.min_line_chars,
        }
    }

    /// Checks whether a normalized line should be discarded
    pub fn is_noise(&self, line: &str) -> bool {
        if line.chars().count() < self.min_chars {
            return true;
        }

        let upper = line.to_uppercase();
        self.terms.iter().any(|term| upper.contains(term.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(
            normalize_line("  Clindamicina \t <=0.25\n   R  "),
            "Clindamicina <=0.25 R"
        );
        assert_eq!(normalize_line("\u{a0}Oxacilina\u{a0}S"), "Oxacilina S");
    }

    #[rstest]
    #[case("Glucosuria\x1f100")]
    #[case("Glucosuria\x1c100")]
    #[case("Glucosuria \x1d\x1e 100")]
    fn test_normalize_information_separators(#[case] raw: &str) {
        assert_eq!(normalize_line(raw), "Glucosuria 100");
    }

    #[test]
    fn test_normalize_blank_line() {
        assert_eq!(normalize_line(""), "");
        assert_eq!(normalize_line(" \t \n"), "");
    }

    #[rstest]
    #[case("")]
    #[case("ab")]
    #[case("Hospital Barros Luco")]
    #[case("FECHA: 12/03/2024")]
    #[case("Página 1 de 2")]
    #[case("página 2 de 2")]
    #[case("Rut: 12.345.678-9")]
    #[case("Validado por T.M Gonzalez")]
    #[case("Firma Dra. Perez")]
    #[case("Tiempo de positividad 14 horas")]
    // Denylisted lines are dropped even when they carry lab tokens
    #[case("Fecha Clindamicina R")]
    fn test_noise_lines(#[case] line: &str) {
        let filter = NoiseFilter::new(&Vocabulary::default());
        assert!(filter.is_noise(line), "expected noise: {:?}", line);
    }

    #[rstest]
    #[case("abc")]
    #[case("Cocaceas Gram positivo en racimo")]
    #[case("1 Staphylococcus aureus")]
    #[case("Clindamicina <=0.25 R")]
    #[case("Glucosuria 100")]
    fn test_clinical_lines_pass(#[case] line: &str) {
        let filter = NoiseFilter::new(&Vocabulary::default());
        assert!(!filter.is_noise(line), "expected clinical: {:?}", line);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let filter = NoiseFilter::new(&Vocabulary::empty());
        // Two characters, four bytes
        assert!(filter.is_noise("ñá"));
        assert!(!filter.is_noise("ñáé"));
    }

    #[test]
    fn test_custom_noise_term() {
        let filter = NoiseFilter::new(&Vocabulary::empty().with_noise_term("Laboratorio"));
        assert!(filter.is_noise("LABORATORIO CENTRAL"));
        assert!(!filter.is_noise("Hospital Barros Luco"));
    }
}
