use std::collections::BTreeMap;

/// Administrative terms that mark a line as report boilerplate
const NOISE_TERMS: &[&str] = &[
    "Tiempo de positividad",
    "Hospital",
    "Barros",
    "Solicitud",
    "Procedencia",
    "Validado",
    "Fecha",
    "Hora",
    "Página",
    "Rut",
    "Nacimiento",
    "Edad",
    "Firma",
    "Dra.",
    "T.M",
];

const GRAM_RESULTS: &[&str] = &["positivo", "negativo"];

// Longest phrase first: "Gram" alone must not eat the tail of "Tincion de Gram"
const GRAM_STRIP_PHRASES: &[&str] = &["Tincion de Gram", "Resultado", "Gram"];

const ORGANISM_PREFIXES: &[&str] = &[
    "Staphylococcus",
    "Escherichia",
    "Klebsiella",
    "Enterococcus",
    "Pseudomonas",
];

const ANTIBIOTICS: &[&str] = &[
    "Clindamicina",
    "Eritromicina",
    "Oxacilina",
    "Rifampicina",
    "Trimetoprim",
    "Vancomicina",
    "Ciprofloxacino",
    "Gentamicina",
    "Cefazolina",
    "Ampicilina",
    "Ceftriaxona",
];

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Clindamicina", "Clinda"),
    ("Eritromicina", "Eritro"),
    ("Oxacilina", "Oxa"),
    ("Rifampicina", "Rifam"),
    ("Trimetoprim-Sulfametoxazol", "Cotrimoxazol"),
    ("Vancomicina", "Vanco"),
    ("Ciprofloxacino", "Cipro"),
    ("Gentamicina", "Genta"),
];

const QUALITATIVE_VALUES: &[&str] = &["Negativo", "Positivo", "Normal", "Ambar", "Claro"];

const EXCLUDED_LABEL_TERMS: &[&str] = &["Vial"];

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Word lists and thresholds driving the line matchers
///
/// A `Vocabulary` is immutable once handed to
/// [`LabReportExtractor`](crate::LabReportExtractor); build a custom one with
/// the `with_*` builders to extend or replace the fixed lists.
///
/// # Example
///
/// ```
/// use labextract_core::Vocabulary;
///
/// let vocabulary = Vocabulary::default()
///     .with_antibiotic("Meropenem", Some("Mero"))
///     .with_organism_prefix("Streptococcus");
///
/// assert_eq!(vocabulary.short_name("Meropenem"), "Mero");
/// assert_eq!(vocabulary.short_name("Cefazolina"), "Cefazolina");
/// assert!(vocabulary.organism_prefixes.iter().any(|p| p == "Streptococcus"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct Vocabulary {
    /// Case-insensitive substrings that discard a line before classification
    pub noise_terms: Vec<String>,

    /// Lines with fewer characters than this are discarded
    pub min_line_chars: usize,

    /// Case-sensitive token every Gram-stain line must contain
    pub gram_marker: String,

    /// Case-sensitive result words, at least one must be present
    pub gram_results: Vec<String>,

    /// Phrases removed (as whole words) from a Gram-stain line
    pub gram_strip_phrases: Vec<String>,

    /// A Gram description is kept only if longer than this
    pub min_gram_chars: usize,

    /// Genus names identifying an organism line
    pub organism_prefixes: Vec<String>,

    /// Antibiotic substances, tested in this order
    pub antibiotics: Vec<String>,

    /// Full antibiotic name to display short name
    pub abbreviations: BTreeMap<String, String>,

    /// Literal (case-insensitive) values accepted by the biochemistry matcher
    pub qualitative_values: Vec<String>,

    /// A biochemistry label is kept only if longer than this
    pub min_label_chars: usize,

    /// Case-sensitive substrings that reject a biochemistry label
    pub excluded_label_terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            noise_terms: to_strings(NOISE_TERMS),
            min_line_chars: 3,
            gram_marker: "Gram".to_string(),
            gram_results: to_strings(GRAM_RESULTS),
            gram_strip_phrases: to_strings(GRAM_STRIP_PHRASES),
            min_gram_chars: 5,
            organism_prefixes: to_strings(ORGANISM_PREFIXES),
            antibiotics: to_strings(ANTIBIOTICS),
            abbreviations: ABBREVIATIONS
                .iter()
                .map(|(full, short)| (full.to_string(), short.to_string()))
                .collect(),
            qualitative_values: to_strings(QUALITATIVE_VALUES),
            min_label_chars: 3,
            excluded_label_terms: to_strings(EXCLUDED_LABEL_TERMS),
        }
    }
}

impl Vocabulary {
    /// Creates a vocabulary with every list empty
    ///
    /// Thresholds and the Gram marker keep their default values. Nothing
    /// is filtered, and only numeric biochemistry values can match.
    ///
    /// # Example
    ///
    /// ```
    /// use labextract_core::Vocabulary;
    ///
    /// let empty = Vocabulary::empty();
    /// assert!(empty.antibiotics.is_empty());
    /// assert!(empty.noise_terms.is_empty());
    /// assert_eq!(empty.min_line_chars, 3);
    /// ```
    pub fn empty() -> Self {
        Self {
            noise_terms: Vec::new(),
            gram_results: Vec::new(),
            gram_strip_phrases: Vec::new(),
            organism_prefixes: Vec::new(),
            antibiotics: Vec::new(),
            abbreviations: BTreeMap::new(),
            qualitative_values: Vec::new(),
            excluded_label_terms: Vec::new(),
            ..Self::default()
        }
    }

    /// Resolves the display name of an antibiotic
    ///
    /// Falls back to the full name when no abbreviation is registered.
    pub fn short_name<'a>(&'a self, antibiotic: &'a str) -> &'a str {
        self.abbreviations
            .get(antibiotic)
            .map(String::as_str)
            .unwrap_or(antibiotic)
    }

    /// Builder: add an antibiotic, optionally with its short name
    pub fn with_antibiotic(mut self, name: &str, short_name: Option<&str>) -> Self {
        if !self.antibiotics.iter().any(|a| a == name) {
            self.antibiotics.push(name.to_string());
        }
        if let Some(short) = short_name {
            self.abbreviations
                .insert(name.to_string(), short.to_string());
        }
        self
    }

    /// Builder: add a genus name identifying organism lines
    pub fn with_organism_prefix(mut self, prefix: &str) -> Self {
        if !self.organism_prefixes.iter().any(|p| p == prefix) {
            self.organism_prefixes.push(prefix.to_string());
        }
        self
    }

    /// Builder: add an administrative term to the denylist
    pub fn with_noise_term(mut self, term: &str) -> Self {
        if !self.noise_terms.iter().any(|t| t == term) {
            self.noise_terms.push(term.to_string());
        }
        self
    }

    /// Builder: add a literal biochemistry value
    pub fn with_qualitative_value(mut self, value: &str) -> Self {
        if !self.qualitative_values.iter().any(|v| v == value) {
            self.qualitative_values.push(value.to_string());
        }
        self
    }

    /// Parses a vocabulary from JSON
    ///
    /// Missing fields keep their default values.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a vocabulary from a JSON file
    #[cfg(feature = "json")]
    pub fn from_json_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
