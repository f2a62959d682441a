//! Runtime configuration
//!
//! An optional JSON file next to the binary; every field has a default, so a
//! partial file only overrides what it names. A missing or malformed file
//! means the defaults.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "lenstrans.json";
/// Persisted box geometry, written at shutdown
pub const LAYOUT_FILE: &str = "lenstrans-layout.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause between pipeline iterations, in milliseconds
    pub interval_ms: u64,
    /// Tesseract language code for recognition
    pub ocr_language: String,
    /// Source language for translation
    pub source_lang: String,
    /// Target language for translation
    pub target_lang: String,
    /// Timeout for a single translation request, in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            ocr_language: "eng".to_string(),
            source_lang: "en".to_string(),
            target_lang: "zh-CN".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
