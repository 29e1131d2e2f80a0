use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare invocation works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tesseract language code(s), e.g. "eng" or "eng+fra".
    pub ocr_language: String,
    /// Tesseract page segmentation mode; 3 = fully automatic.
    pub ocr_page_seg_mode: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ocr_language: std::env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
            ocr_page_seg_mode: std::env::var("OCR_PAGE_SEG_MODE")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("OCR_PAGE_SEG_MODE must be a number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
