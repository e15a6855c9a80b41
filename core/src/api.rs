use crate::error::Result;
use crate::extraction::{
    normalize_line, pages_from_pdf, read_pages, AntibiogramMatcher, BiochemistryMatcher,
    GramMatcher, NoiseFilter, OrganismMatcher,
};
use crate::types::{LabFindings, Vocabulary};
use log::{debug, trace};
use std::path::Path;

/// Main extractor for culture report findings
///
/// Walks a document's pages in order, splits each page into lines and
/// offers every surviving line to the Gram, organism, antibiogram and (while
/// no microbiology has been seen) biochemistry matchers, in that order.
///
/// The extractor only holds compiled configuration. Every call starts from
/// empty findings, so one extractor can serve many documents.
///
/// # Example
///
/// ```
/// use labextract_core::LabReportExtractor;
///
/// let extractor = LabReportExtractor::default();
///
/// let page = "Cocaceas Gram positivo en racimo\n\
///             1 Staphylococcus aureus\n\
///             Clindamicina <=0.25 R\n\
///             Oxacilina <=0.25 S";
///
/// let summary = extractor.summarize_pages([Some(page)]);
/// assert_eq!(
///     summary,
///     "Gram: Cocaceas positivo en racimo // Germen: Staphylococcus aureus // \
///      Sensibilidad: Clinda(R), Oxa(S)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LabReportExtractor {
    vocabulary: Vocabulary,
    noise: NoiseFilter,
    gram: GramMatcher,
    organism: OrganismMatcher,
    antibiogram: AntibiogramMatcher,
    biochemistry: BiochemistryMatcher,
}

impl Default for LabReportExtractor {
    fn default() -> Self {
        Self::new(Vocabulary::default()).expect("Failed to compile default vocabulary")
    }
}

impl LabReportExtractor {
    /// Creates an extractor for a vocabulary
    ///
    /// # Errors
    ///
    /// Returns an error if a vocabulary entry cannot be compiled into a pattern
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        Ok(Self {
            noise: NoiseFilter::new(&vocabulary),
            gram: GramMatcher::new(&vocabulary)?,
            organism: OrganismMatcher::new(&vocabulary),
            antibiogram: AntibiogramMatcher::new(&vocabulary),
            biochemistry: BiochemistryMatcher::new(&vocabulary)?,
            vocabulary,
        })
    }

    /// Returns the vocabulary this extractor was built from
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Extracts findings from a document's pages
    ///
    /// Pages are visited in order; `None` stands for a page without
    /// extractable text and contributes nothing.
    pub fn extract_pages<I, S>(&self, pages: I) -> LabFindings
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut findings = LabFindings::new();
        for (index, page) in pages.into_iter().enumerate() {
            match page {
                Some(text) => self.process_page(text.as_ref(), &mut findings),
                None => trace!("Page {} has no text", index + 1),
            }
        }
        findings
    }

    /// Extracts findings from a document and renders the one-line report
    ///
    /// An empty string means nothing readable was found.
    pub fn summarize_pages<I, S>(&self, pages: I) -> String
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        self.extract_pages(pages).summary()
    }

    /// Extracts findings from a single block of text
    pub fn extract_text(&self, text: &str) -> LabFindings {
        self.extract_pages([Some(text)])
    }

    /// Extracts findings from PDF bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF cannot be parsed
    pub fn extract_pdf(&self, bytes: &[u8]) -> Result<LabFindings> {
        let pages = pages_from_pdf(bytes)?;
        Ok(self.extract_pages(pages.into_iter().map(Some)))
    }

    /// Extracts findings from a PDF or text file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn extract_file(&self, path: &Path) -> Result<LabFindings> {
        let pages = read_pages(path)?;
        Ok(self.extract_pages(pages.into_iter().map(Some)))
    }

    /// Feeds every line of one page through the matchers
    pub fn process_page(&self, text: &str, findings: &mut LabFindings) {
        for raw in text.split('\n') {
            self.process_line(raw, findings);
        }
    }

    /// Normalizes, filters and classifies a single raw line
    pub fn process_line(&self, raw: &str, findings: &mut LabFindings) {
        let line = normalize_line(raw);
        if self.noise.is_noise(&line) {
            trace!("Discarded line: {:?}", line);
            return;
        }

        if let Some(gram) = self.gram.extract(&line) {
            if findings.add_gram(gram) {
                debug!("Gram stain: {:?}", line);
            }
        }

        if let Some(organism) = self.organism.extract(&line) {
            if findings.add_organism(organism) {
                debug!("Organism: {:?}", line);
            }
        }

        for (short_name, code) in self.antibiogram.extract(&line) {
            if let Some(previous) = findings.record_susceptibility(short_name, code) {
                if previous != code {
                    debug!("{} overwritten: {} -> {}", short_name, previous, code);
                }
            } else {
                debug!("Susceptibility: {}({})", short_name, code);
            }
        }

        // Whole-document gate: checked against what has been found so far
        if !findings.has_microbiology() {
            if let Some(other) = self.biochemistry.extract(&line) {
                if findings.add_other(other) {
                    debug!("Other finding: {:?}", line);
                }
            }
        }
    }
}
