//! Translation via the Google translate web endpoint

use crate::TranslationError;
use serde_json::Value;
use std::time::Duration;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Blocking translation client with fixed source and target languages.
///
/// The request timeout bounds a single pipeline iteration's worst-case
/// latency, which in turn bounds shutdown latency.
pub struct TranslationClient {
    http: reqwest::blocking::Client,
    source: String,
    target: String,
}

impl TranslationClient {
    pub fn new(
        source: &str,
        target: &str,
        timeout: Duration,
    ) -> Result<Self, TranslationError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    /// Translate `text` from the configured source to the target language.
    pub fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let response = self
            .http
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source.as_str()),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status));
        }

        let body: Value = response.json()?;
        join_segments(&body)
    }
}

/// The endpoint answers with nested arrays; the translated sentence pieces
/// sit at `body[0][i][0]`.
fn join_segments(body: &Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Malformed("missing segment list".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(piece);
        }
    }

    if translated.is_empty() {
        return Err(TranslationError::Malformed(
            "no translated segments".to_string(),
        ));
    }
    Ok(translated)
}
