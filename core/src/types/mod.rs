//! Core type definitions for laboratory report extraction
//!
//! This module provides the fundamental types used throughout the labextract library:
//! - [`Vocabulary`]: Word lists and thresholds configuring the line matchers
//! - [`Susceptibility`]: Antibiogram result code (R, S, I)
//! - [`SusceptibilityMap`]: Insertion-ordered antibiotic results
//! - [`LabFindings`]: Deduplicated findings accumulated over one document

mod findings;
mod susceptibility;
mod vocabulary;

pub use findings::{LabFindings, SusceptibilityMap};
pub use susceptibility::Susceptibility;
pub use vocabulary::Vocabulary;
