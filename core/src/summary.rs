use crate::types::LabFindings;
use std::fmt;

/// Separator between report segments (and between "other" findings)
pub const SEGMENT_SEPARATOR: &str = " // ";

/// One-line report formatter for lab findings
///
/// Segments appear in fixed order and only when their findings exist:
///
/// 1. `Gram: a y b`
/// 2. `Germen: a + b`
/// 3. `Sensibilidad: Clinda(R), Oxa(S)` (antibiotics in first-seen order)
/// 4. other findings, sorted
///
/// # Example
///
/// ```
/// use labextract_core::{LabFindings, Susceptibility, SummaryLine};
///
/// let mut findings = LabFindings::new();
/// findings.add_organism("Escherichia coli".to_string());
/// findings.record_susceptibility("Cipro", Susceptibility::Resistant);
///
/// assert_eq!(
///     SummaryLine::new(&findings).to_string(),
///     "Germen: Escherichia coli // Sensibilidad: Cipro(R)"
/// );
/// ```
pub struct SummaryLine<'a> {
    findings: &'a LabFindings,
}

impl<'a> SummaryLine<'a> {
    /// Creates a new summary line
    pub fn new(findings: &'a LabFindings) -> Self {
        Self { findings }
    }

    fn segments(&self) -> Vec<String> {
        let findings = self.findings;
        let mut segments = Vec::with_capacity(4);

        if !findings.gram.is_empty() {
            let gram: Vec<&str> = findings.gram.iter().map(String::as_str).collect();
            segments.push(format!("Gram: {}", gram.join(" y ")));
        }

        if !findings.organisms.is_empty() {
            let organisms: Vec<&str> = findings.organisms.iter().map(String::as_str).collect();
            segments.push(format!("Germen: {}", organisms.join(" + ")));
        }

        if !findings.susceptibility.is_empty() {
            let results: Vec<String> = findings
                .susceptibility
                .iter()
                .map(|(name, code)| format!("{}({})", name, code))
                .collect();
            segments.push(format!("Sensibilidad: {}", results.join(", ")));
        }

        // BTreeSet iterates in sorted order
        if !findings.other.is_empty() {
            let other: Vec<&str> = findings.other.iter().map(String::as_str).collect();
            segments.push(other.join(SEGMENT_SEPARATOR));
        }

        segments
    }
}

impl<'a> fmt::Display for SummaryLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join(SEGMENT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Susceptibility;

    #[test]
    fn test_empty_findings_render_empty() {
        let findings = LabFindings::new();
        assert_eq!(SummaryLine::new(&findings).to_string(), "");
    }

    #[test]
    fn test_all_segments_in_fixed_order() {
        let mut findings = LabFindings::new();
        // Other first, then microbiology, to show order is not insertion order
        findings.add_other("Nitritos Negativo".to_string());
        findings.add_other("Color Ambar".to_string());
        findings.record_susceptibility("Vanco", Susceptibility::Susceptible);
        findings.add_organism("Enterococcus faecalis".to_string());
        findings.add_gram("Cocaceas positivo en cadena".to_string());

        assert_eq!(
            SummaryLine::new(&findings).to_string(),
            "Gram: Cocaceas positivo en cadena // Germen: Enterococcus faecalis // \
             Sensibilidad: Vanco(S) // Color Ambar // Nitritos Negativo"
        );
    }

    #[test]
    fn test_multiple_entries_use_category_joiners() {
        let mut findings = LabFindings::new();
        findings.add_gram("Bacilos negativo".to_string());
        findings.add_gram("Cocaceas positivo en racimo".to_string());
        findings.add_organism("Klebsiella pneumoniae".to_string());
        findings.add_organism("Escherichia coli".to_string());

        assert_eq!(
            SummaryLine::new(&findings).to_string(),
            "Gram: Bacilos negativo y Cocaceas positivo en racimo // \
             Germen: Escherichia coli + Klebsiella pneumoniae"
        );
    }

    #[test]
    fn test_susceptibility_keeps_first_seen_order() {
        let mut findings = LabFindings::new();
        findings.record_susceptibility("Oxa", Susceptibility::Susceptible);
        findings.record_susceptibility("Clinda", Susceptibility::Resistant);
        findings.record_susceptibility("Oxa", Susceptibility::Intermediate);

        assert_eq!(
            SummaryLine::new(&findings).to_string(),
            "Sensibilidad: Oxa(I), Clinda(R)"
        );
    }
}
