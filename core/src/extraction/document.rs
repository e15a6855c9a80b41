//! Upstream text extraction: document file to per-page text
//!
//! The pipeline itself only sees page strings. These helpers turn a PDF
//! (via `pdf-extract`) or a plain-text dump into that shape.

use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Page separator used by text dumps of multi-page reports
pub const PAGE_BREAK: char = '\x0c';

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts per-page text from PDF bytes
///
/// Pages without a text layer come back as empty strings; they contribute
/// nothing downstream.
///
/// # Errors
///
/// Returns an error if the bytes are not a readable PDF
pub fn pages_from_pdf(bytes: &[u8]) -> Result<Vec<String>> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    debug!("Extracted text from {} PDF pages", pages.len());
    Ok(pages)
}

/// Splits a text dump into pages on form-feed characters
pub fn pages_from_text(text: &str) -> Vec<String> {
    text.split(PAGE_BREAK).map(str::to_string).collect()
}

/// Reads a document from disk as per-page text
///
/// Files ending in `.pdf` (any case) or starting with the PDF header are
/// parsed as PDF; anything else is read as UTF-8 text.
pub fn read_pages(path: &Path) -> Result<Vec<String>> {
    if is_pdf_file(path) {
        debug!("Reading {} as PDF", path.display());
        let bytes = std::fs::read(path)?;
        pages_from_pdf(&bytes)
    } else {
        debug!("Reading {} as text", path.display());
        let text = std::fs::read_to_string(path)?;
        Ok(pages_from_text(&text))
    }
}

/// Checks the extension first, then the `%PDF-` header
fn is_pdf_file(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        if ext.eq_ignore_ascii_case("pdf") {
            return true;
        }
    }

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 5];
    match file.read_exact(&mut buffer) {
        Ok(()) => buffer == PDF_MAGIC,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Builds a one-page PDF with a line of Helvetica text
    fn make_test_pdf(text: &str) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let resources = dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        };

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources,
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        });

        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
            dict.set("Parent", pages_id);
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_pages_from_text_splits_on_form_feed() {
        let pages = pages_from_text("Cocaceas Gram positivo\n\x0c1 Staphylococcus aureus\n");
        assert_eq!(
            pages,
            vec![
                "Cocaceas Gram positivo\n".to_string(),
                "1 Staphylococcus aureus\n".to_string()
            ]
        );
    }

    #[test]
    fn test_pages_from_text_single_page() {
        assert_eq!(pages_from_text("Glucosuria 100"), vec!["Glucosuria 100"]);
        assert_eq!(pages_from_text(""), vec![""]);
    }

    #[test]
    fn test_pages_from_pdf() {
        let bytes = make_test_pdf("Staphylococcus aureus");
        let pages = pages_from_pdf(&bytes).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(
            pages[0].contains("Staphylococcus"),
            "unexpected page text: {:?}",
            pages[0]
        );
    }

    #[test]
    fn test_invalid_pdf_is_an_error() {
        assert!(pages_from_pdf(b"not a pdf").is_err());
    }

    #[test]
    fn test_read_pages_text_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"Oxacilina <=0.25 S\x0cVancomicina 1 S").unwrap();

        let pages = read_pages(&path).unwrap();
        assert_eq!(pages, vec!["Oxacilina <=0.25 S", "Vancomicina 1 S"]);
    }

    #[test]
    fn test_read_pages_detects_pdf_without_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report");
        File::create(&path)
            .unwrap()
            .write_all(&make_test_pdf("Klebsiella pneumoniae"))
            .unwrap();

        assert!(is_pdf_file(&path));
        let pages = read_pages(&path).unwrap();
        assert!(pages.iter().any(|p| p.contains("Klebsiella")));
    }

    #[test]
    fn test_is_pdf_file_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("REPORT.PDF");
        File::create(&path).unwrap();
        assert!(is_pdf_file(&path));
    }

    #[test]
    fn test_read_pages_missing_file() {
        let err = read_pages(Path::new("/nonexistent/report.txt")).unwrap_err();
        assert!(matches!(err, crate::error::LabExtractError::IoError(_)));
    }
}
