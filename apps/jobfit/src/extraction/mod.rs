//! Text extraction boundary — turns a résumé file into lowercase text.
//!
//! The analysis pipeline only ever sees the output of this module's single
//! contract: lowercase text on success, a distinct [`ExtractionError`] on
//! failure. Empty extracted text is a valid success (a résumé with no
//! recognizable text), never an error.

pub mod ocr;
pub mod pdf;

use std::path::Path;

use thiserror::Error;

use crate::config::Config;

/// Extraction failures, kept distinct from a successful zero-skill analysis.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to initialize OCR engine: {0}")]
    OcrInit(String),

    #[error("Failed to run OCR: {0}")]
    Ocr(String),

    #[error("Failed to decode image '{0}': {1}")]
    ImageDecode(String, String),

    #[error("Failed to extract PDF text from '{0}': {1}")]
    Pdf(String, String),

    #[error("Unsupported resume format '{0}' (expected an image or a PDF)")]
    UnsupportedFormat(String),
}

/// A text extractor backend. Synchronous; one call per analysis run.
/// Implementations return text already lowercased.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// Input kinds the dispatcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Image,
    Pdf,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

/// Classifies a résumé path by extension (case-insensitive).
pub fn classify(path: &Path) -> Result<InputKind, ExtractionError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| ExtractionError::UnsupportedFormat(path.display().to_string()))?;

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(InputKind::Image)
    } else if extension == "pdf" {
        Ok(InputKind::Pdf)
    } else {
        Err(ExtractionError::UnsupportedFormat(
            path.display().to_string(),
        ))
    }
}

/// Builds the extractor for a classified input.
pub fn extractor_for(
    kind: InputKind,
    config: &Config,
) -> Result<Box<dyn TextExtractor>, ExtractionError> {
    match kind {
        InputKind::Image => Ok(Box::new(ocr::TesseractExtractor::new(config)?)),
        InputKind::Pdf => Ok(Box::new(pdf::PdfTextExtractor)),
    }
}

/// Classifies, builds, and runs the matching extractor for `path`.
pub fn extract_resume_text(path: &Path, config: &Config) -> Result<String, ExtractionError> {
    let kind = classify(path)?;
    let extractor = extractor_for(kind, config)?;
    extractor.extract_text(path)
}
