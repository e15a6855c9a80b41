use super::Susceptibility;
use crate::summary::SummaryLine;
use std::collections::BTreeSet;

/// Antibiotic short name to susceptibility code
///
/// Keeps first-insertion order of keys. Recording an existing key
/// overwrites its code in place: a report may restate an antibiotic on a
/// corrected line, and the later line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SusceptibilityMap {
    entries: Vec<(String, Susceptibility)>,
}

impl SusceptibilityMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a code, returning the one it replaced
    pub fn record(&mut self, short_name: &str, code: Susceptibility) -> Option<Susceptibility> {
        match self.entries.iter_mut().find(|(name, _)| name == short_name) {
            Some((_, existing)) => Some(std::mem::replace(existing, code)),
            None => {
                self.entries.push((short_name.to_string(), code));
                None
            }
        }
    }

    /// Returns the code recorded for an antibiotic
    pub fn get(&self, short_name: &str) -> Option<Susceptibility> {
        self.entries
            .iter()
            .find(|(name, _)| name == short_name)
            .map(|(_, code)| *code)
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Susceptibility)> {
        self.entries.iter().map(|(name, code)| (name.as_str(), *code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for SusceptibilityMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, code) in &self.entries {
            map.serialize_entry(name, code)?;
        }
        map.end()
    }
}

/// Findings accumulated over one document
///
/// The four containers only grow. Sets deduplicate exact strings; they do
/// not merge findings that differ only in spelling or spacing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct LabFindings {
    /// Gram-stain descriptions
    pub gram: BTreeSet<String>,

    /// Identified organisms, enumeration prefix removed
    pub organisms: BTreeSet<String>,

    /// Antibiogram results keyed by short name
    pub susceptibility: SusceptibilityMap,

    /// Non-microbiology "label value" results
    pub other: BTreeSet<String>,
}

impl LabFindings {
    /// Creates an empty set of findings
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a Gram-stain description, returning whether it was new
    pub fn add_gram(&mut self, description: String) -> bool {
        self.gram.insert(description)
    }

    /// Adds an organism, returning whether it was new
    pub fn add_organism(&mut self, organism: String) -> bool {
        self.organisms.insert(organism)
    }

    /// Records an antibiogram result, overwriting any earlier code
    pub fn record_susceptibility(
        &mut self,
        short_name: &str,
        code: Susceptibility,
    ) -> Option<Susceptibility> {
        self.susceptibility.record(short_name, code)
    }

    /// Adds a non-microbiology finding
    ///
    /// Refused once any Gram stain or organism has been recorded; entries
    /// added before that point are kept.
    pub fn add_other(&mut self, finding: String) -> bool {
        if self.has_microbiology() {
            return false;
        }
        self.other.insert(finding)
    }

    /// Whether a Gram stain or organism has been recorded
    pub fn has_microbiology(&self) -> bool {
        !self.gram.is_empty() || !self.organisms.is_empty()
    }

    /// Whether nothing at all has been recorded
    pub fn is_empty(&self) -> bool {
        !self.has_microbiology() && self.susceptibility.is_empty() && self.other.is_empty()
    }

    /// Renders the one-line report
    ///
    /// Returns an empty string when nothing was found.
    pub fn summary(&self) -> String {
        SummaryLine::new(self).to_string()
    }
}
