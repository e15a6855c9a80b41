pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for labextract
#[derive(Parser, Debug)]
#[command(name = "labextract")]
#[command(about = "Summarize a microbiology culture report into a single line")]
#[command(version)]
pub struct Cli {
    /// Report file (PDF, or text with form-feed page breaks)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// JSON file overriding the built-in vocabulary (requires the json feature)
    #[arg(long, value_name = "FILE")]
    pub vocabulary: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// The one-line summary
    Text,
    /// Per-category breakdown followed by the summary
    Detailed,
    /// JSON format
    Json,
}
