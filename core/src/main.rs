use clap::Parser;
use labextract_core::cli::{Cli, OutputFormat};
use labextract_core::{LabFindings, LabReportExtractor, TextReport, Vocabulary};
use log::{error, info};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if !cli.file.is_file() {
        eprintln!("Error: {} is not a file", cli.file.display());
        process::exit(1);
    }

    let vocabulary = match load_vocabulary(cli.vocabulary.as_deref()) {
        Ok(vocabulary) => vocabulary,
        Err(e) => {
            error!("Failed to load vocabulary: {}", e);
            eprintln!("Error: Failed to load vocabulary: {}", e);
            process::exit(1);
        }
    };

    let extractor = match LabReportExtractor::new(vocabulary) {
        Ok(extractor) => extractor,
        Err(e) => {
            error!("Invalid vocabulary: {}", e);
            eprintln!("Error: Invalid vocabulary: {}", e);
            process::exit(1);
        }
    };

    info!("Processing report: {}", cli.file.display());

    let findings = match extractor.extract_file(&cli.file) {
        Ok(findings) => findings,
        Err(e) => {
            error!("Failed to read {}: {}", cli.file.display(), e);
            eprintln!("Error: Failed to read {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    if findings.is_empty() {
        eprintln!("No readable data found in {}", cli.file.display());
        process::exit(1);
    }

    info!(
        "Found {} gram, {} organism, {} susceptibility, {} other findings",
        findings.gram.len(),
        findings.organisms.len(),
        findings.susceptibility.len(),
        findings.other.len()
    );

    output_findings(&findings, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn load_vocabulary(path: Option<&Path>) -> labextract_core::Result<Vocabulary> {
    match path {
        None => Ok(Vocabulary::default()),
        Some(path) => read_vocabulary_file(path),
    }
}

#[cfg(feature = "json")]
fn read_vocabulary_file(path: &Path) -> labextract_core::Result<Vocabulary> {
    info!("Loading vocabulary from {}", path.display());
    Vocabulary::from_json_file(path)
}

#[cfg(not(feature = "json"))]
fn read_vocabulary_file(_path: &Path) -> labextract_core::Result<Vocabulary> {
    Err(labextract_core::LabExtractError::InvalidVocabulary(
        "vocabulary files require the 'json' feature (cargo build --features json)".to_string(),
    ))
}

fn output_findings(findings: &LabFindings, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", findings.summary());
        }
        OutputFormat::Detailed => {
            print!("{}", TextReport::new(findings));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(findings) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(findings: &LabFindings) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct ReportJson<'a> {
        summary: String,
        findings: &'a LabFindings,
    }

    serde_json::to_string_pretty(&ReportJson {
        summary: findings.summary(),
        findings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_without_file() {
        let vocabulary = load_vocabulary(None).unwrap();
        assert_eq!(vocabulary, Vocabulary::default());
    }

    #[cfg(not(feature = "json"))]
    #[test]
    fn test_vocabulary_file_requires_json_feature() {
        assert!(load_vocabulary(Some(Path::new("vocab.json"))).is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_vocabulary_file_is_loaded() {
        use std::io::Write;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("vocab.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(br#"{ "antibiotics": ["Meropenem"] }"#)
            .unwrap();

        let vocabulary = load_vocabulary(Some(path.as_path())).unwrap();
        assert_eq!(vocabulary.antibiotics, vec!["Meropenem".to_string()]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_output_shape() {
        let findings = LabReportExtractor::default()
            .extract_text("1 Escherichia coli\nCiprofloxacino R\nAmpicilina S");
        let output = output_json(&findings).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            json["summary"],
            "Germen: Escherichia coli // Sensibilidad: Cipro(R), Ampicilina(S)"
        );
        assert_eq!(json["findings"]["organisms"][0], "Escherichia coli");
        assert_eq!(json["findings"]["susceptibility"]["Cipro"], "R");
    }
}
