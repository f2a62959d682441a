//! Language services for LensTrans
//!
//! Wraps the external OCR engine (Tesseract) and the translation web service.

mod ocr;
mod translate;

pub use ocr::TextRecognizer;
pub use translate::TranslationClient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("OCR engine error: {0}")]
    Engine(#[from] rusty_tesseract::TessError),
}

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed translation response: {0}")]
    Malformed(String),
}
