pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod summary;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use api::LabReportExtractor;
pub use cli::report::TextReport;
pub use error::{LabExtractError, Result};
pub use summary::SummaryLine;
pub use types::*;
