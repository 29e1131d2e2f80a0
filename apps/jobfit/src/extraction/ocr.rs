//! Tesseract-backed extractor for scanned résumé images.

use std::io::Cursor;
use std::path::Path;

use image::RgbImage;
use leptess::{LepTess, Variable};
use tracing::debug;

use crate::config::Config;
use crate::extraction::{ExtractionError, TextExtractor};

/// OCR extractor using Tesseract via leptess. Language and page segmentation
/// mode come from [`Config`]; construction probes Tesseract so a missing
/// language pack fails fast instead of at first extraction.
pub struct TesseractExtractor {
    language: String,
    page_seg_mode: u32,
}

impl TesseractExtractor {
    pub fn new(config: &Config) -> Result<Self, ExtractionError> {
        let _probe = LepTess::new(None, &config.ocr_language).map_err(|e| {
            ExtractionError::OcrInit(format!(
                "language '{}': {e}. Make sure Tesseract and its language data are installed",
                config.ocr_language
            ))
        })?;

        Ok(Self {
            language: config.ocr_language.clone(),
            page_seg_mode: config.ocr_page_seg_mode,
        })
    }

    fn recognize(&self, image: &RgbImage) -> Result<String, ExtractionError> {
        let mut lt = LepTess::new(None, &self.language)
            .map_err(|e| ExtractionError::OcrInit(e.to_string()))?;

        lt.set_variable(
            Variable::TesseditPagesegMode,
            &self.page_seg_mode.to_string(),
        )
        .map_err(|e| ExtractionError::OcrInit(format!("failed to set PSM: {e}")))?;

        // leptess expects encoded image data, so re-encode the decoded image
        // as PNG in memory.
        let mut png_buf = Cursor::new(Vec::new());
        image
            .write_to(&mut png_buf, image::ImageFormat::Png)
            .map_err(|e| ExtractionError::Ocr(format!("failed to encode image: {e}")))?;

        lt.set_image_from_mem(png_buf.get_ref())
            .map_err(|e| ExtractionError::Ocr(format!("failed to set image: {e}")))?;

        lt.get_utf8_text()
            .map_err(|e| ExtractionError::Ocr(e.to_string()))
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let image = image::open(path)
            .map_err(|e| ExtractionError::ImageDecode(path.display().to_string(), e.to_string()))?
            .to_rgb8();

        let text = self.recognize(&image)?;
        debug!(
            "OCR extracted {} characters from {}",
            text.len(),
            path.display()
        );

        Ok(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Write;

    fn test_config() -> Config {
        Config {
            ocr_language: "eng".to_string(),
            ocr_page_seg_mode: 3,
            rust_log: "info".to_string(),
        }
    }

    /// Tesseract may be absent in some environments; skip instead of failing.
    fn extractor_or_skip() -> Option<TesseractExtractor> {
        match TesseractExtractor::new(&test_config()) {
            Ok(e) => Some(e),
            Err(e) => {
                eprintln!("Skipping OCR test: {e}");
                None
            }
        }
    }

    #[test]
    fn test_invalid_language_fails_init() {
        let config = Config {
            ocr_language: "no_such_language_xyz".to_string(),
            ..test_config()
        };
        // Only meaningful when Tesseract itself is present.
        if extractor_or_skip().is_none() {
            return;
        }
        let result = TesseractExtractor::new(&config);
        assert!(matches!(result, Err(ExtractionError::OcrInit(_))));
    }

    #[test]
    fn test_blank_image_yields_empty_or_whitespace_text() {
        let Some(extractor) = extractor_or_skip() else {
            return;
        };
        let blank = RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]));
        let text = extractor.recognize(&blank).unwrap_or_default();
        assert!(
            text.trim().len() < 5,
            "Blank image produced unexpected text: {text:?}"
        );
    }

    #[test]
    fn test_extracted_text_is_lowercased() {
        let Some(extractor) = extractor_or_skip() else {
            return;
        };
        // A solid image exercises the full path; whatever comes back must
        // already be lowercase.
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let blank = RgbImage::from_pixel(120, 60, Rgb([255, 255, 255]));
        let mut buf = Cursor::new(Vec::new());
        blank.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        file.write_all(buf.get_ref()).unwrap();

        let text = extractor.extract_text(file.path()).unwrap();
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn test_unreadable_image_is_a_decode_error() {
        let Some(extractor) = extractor_or_skip() else {
            return;
        };
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"not a real png").unwrap();
        let err = extractor.extract_text(file.path()).unwrap_err();
        assert!(matches!(err, ExtractionError::ImageDecode(_, _)));
    }
}
