//! Text-based PDF extractor for résumés that were never scanned.

use std::path::Path;

use tracing::debug;

use crate::extraction::{ExtractionError, TextExtractor};

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| ExtractionError::Pdf(path.display().to_string(), e.to_string()))?;

        debug!(
            "PDF extraction produced {} characters from {}",
            text.len(),
            path.display()
        );

        Ok(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_a_pdf_error() {
        let err = PdfTextExtractor
            .extract_text(Path::new("/no/such/resume.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_, _)));
    }

    #[test]
    fn test_garbage_file_is_a_pdf_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();
        let err = PdfTextExtractor.extract_text(file.path()).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_, _)));
    }
}
