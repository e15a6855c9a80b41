use crate::summary::SummaryLine;
use crate::types::LabFindings;
use std::fmt;

/// Text report formatter for lab findings
///
/// Lists each category on its own lines, then the one-line summary.
pub struct TextReport<'a> {
    findings: &'a LabFindings,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(findings: &'a LabFindings) -> Self {
        Self { findings }
    }
}

fn write_list<'s>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    items: impl Iterator<Item = &'s String>,
) -> fmt::Result {
    writeln!(f, "{}", title)?;
    let mut empty = true;
    for item in items {
        writeln!(f, "  - {}", item)?;
        empty = false;
    }
    if empty {
        writeln!(f, "  (none)")?;
    }
    Ok(())
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Culture Report Findings")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;

        write_list(f, "Gram stain:", self.findings.gram.iter())?;
        write_list(f, "Organisms:", self.findings.organisms.iter())?;

        writeln!(f, "Susceptibility:")?;
        if self.findings.susceptibility.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (name, code) in self.findings.susceptibility.iter() {
            writeln!(f, "  - {:<14} {} ({})", name, code, code.simple_name())?;
        }

        write_list(f, "Other findings:", self.findings.other.iter())?;
        writeln!(f)?;

        writeln!(f, "Summary")?;
        writeln!(f, "-------")?;
        writeln!(f, "{}", SummaryLine::new(self.findings))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Susceptibility;

    #[test]
    fn test_text_report_format() {
        let mut findings = LabFindings::new();
        findings.add_gram("Cocaceas positivo en racimo".to_string());
        findings.add_organism("Staphylococcus aureus".to_string());
        findings.record_susceptibility("Clinda", Susceptibility::Resistant);
        findings.record_susceptibility("Oxa", Susceptibility::Susceptible);

        let report = TextReport::new(&findings);
        let output = format!("{}", report);

        assert!(output.contains("Culture Report Findings"));
        assert!(output.contains("Gram stain:\n  - Cocaceas positivo en racimo"));
        assert!(output.contains("Organisms:\n  - Staphylococcus aureus"));
        assert!(output.contains("  - Clinda         R (resistant)"));
        assert!(output.contains("  - Oxa            S (susceptible)"));
        assert!(output.contains("Other findings:\n  (none)"));
        assert!(output.ends_with(
            "Gram: Cocaceas positivo en racimo // Germen: Staphylococcus aureus // \
             Sensibilidad: Clinda(R), Oxa(S)\n"
        ));
    }

    #[test]
    fn test_empty_report_lists_none() {
        let findings = LabFindings::new();
        let output = TextReport::new(&findings).to_string();
        assert_eq!(output.matches("(none)").count(), 4);
    }
}
