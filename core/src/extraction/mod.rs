pub mod antibiogram;
pub mod biochemistry;
pub mod document;
pub mod gram;
pub mod normalize;
pub mod organism;

pub use antibiogram::{find_susceptibility, AntibiogramMatcher};
pub use biochemistry::BiochemistryMatcher;
pub use document::{pages_from_pdf, pages_from_text, read_pages};
pub use gram::GramMatcher;
pub use normalize::{normalize_line, NoiseFilter};
pub use organism::OrganismMatcher;
