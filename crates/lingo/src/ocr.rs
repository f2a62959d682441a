//! Text recognition using Tesseract

use crate::RecognitionError;
use image::{DynamicImage, RgbImage};
use rusty_tesseract::{Args, Image as TessImage};

/// Recognizer fixed to a single Tesseract language for the whole run.
pub struct TextRecognizer {
    args: Args,
}

impl TextRecognizer {
    /// Create a recognizer for a Tesseract language code, e.g. `"eng"`.
    pub fn new(language: &str) -> Self {
        let args = Args {
            lang: language.to_string(),
            ..Args::default()
        };
        Self { args }
    }

    /// Run OCR on an RGB image, returning the raw recognized text.
    ///
    /// The text may be empty or whitespace-only; callers decide what counts
    /// as a usable result.
    pub fn recognize(&self, image: &RgbImage) -> Result<String, RecognitionError> {
        let tess_image = TessImage::from_dynamic_image(&DynamicImage::ImageRgb8(image.clone()))?;
        let text = rusty_tesseract::image_to_string(&tess_image, &self.args)?;
        log::debug!("recognized text: {:?}", text.trim());
        Ok(text)
    }
}
