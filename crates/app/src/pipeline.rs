//! Capture pipeline worker
//!
//! Runs capture -> recognize -> translate cycles on its own thread for as
//! long as the running flag stays set. Every external call in an iteration
//! may block; none of them ever runs on the UI thread. A failed iteration is
//! logged and skipped, the loop itself only stops when the flag is cleared.

use crate::config::Config;
use capture_xcap::{CaptureError, Rect, ScreenGrabber};
use crossbeam_channel::Sender;
use image::RgbImage;
use lingo::{RecognitionError, TextRecognizer, TranslationClient, TranslationError};
use overlay::SharedRegion;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

/// Slot for the egui context used as the wake signal; filled in once the
/// window exists.
pub type WakeSlot = Arc<Mutex<Option<egui::Context>>>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Screen capture collaborator seam
pub trait Grabber {
    fn grab(&mut self, region: Rect) -> Result<RgbImage, CaptureError>;
}

/// Text recognition collaborator seam
pub trait Recognizer {
    fn recognize(&mut self, image: &RgbImage) -> Result<String, RecognitionError>;
}

/// Translation collaborator seam
pub trait Translator {
    fn translate(&mut self, text: &str) -> Result<String, TranslationError>;
}

impl Grabber for ScreenGrabber {
    fn grab(&mut self, region: Rect) -> Result<RgbImage, CaptureError> {
        ScreenGrabber::grab(self, region)
    }
}

impl Recognizer for TextRecognizer {
    fn recognize(&mut self, image: &RgbImage) -> Result<String, RecognitionError> {
        TextRecognizer::recognize(self, image)
    }
}

impl Translator for TranslationClient {
    fn translate(&mut self, text: &str) -> Result<String, TranslationError> {
        TranslationClient::translate(self, text)
    }
}

/// One full capture -> recognize -> translate cycle over a region snapshot.
///
/// `Ok(None)` means the recognized text was empty after trimming: translation
/// is skipped and the previously displayed text stays as it is.
pub fn run_iteration<G, R, T>(
    region: Rect,
    grabber: &mut G,
    recognizer: &mut R,
    translator: &mut T,
) -> Result<Option<String>, PipelineError>
where
    G: Grabber,
    R: Recognizer,
    T: Translator,
{
    let image = grabber.grab(region)?;
    let text = recognizer.recognize(&image)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let translated = translator.translate(trimmed)?;
    Ok(Some(translated))
}

/// The pipeline loop. Observes `running` once per iteration; when the flag
/// goes false the current iteration still completes, so shutdown latency is
/// bounded by one iteration's worst-case external-call latency.
fn run_loop<G, R, T, W>(
    running: &AtomicBool,
    region: &SharedRegion,
    interval: Duration,
    grabber: &mut G,
    recognizer: &mut R,
    translator: &mut T,
    results: &Sender<String>,
    wake: &W,
) where
    G: Grabber,
    R: Recognizer,
    T: Translator,
    W: Fn(),
{
    while running.load(Ordering::SeqCst) {
        let rect = region.snapshot();
        match run_iteration(rect, grabber, recognizer, translator) {
            Ok(Some(text)) => {
                // fire-and-forget: a full queue drops this result, the UI
                // only ever needs the latest value
                if results.try_send(text).is_ok() {
                    wake();
                }
            }
            Ok(None) => log::debug!("nothing recognized, keeping previous result"),
            Err(e) => log::warn!("pipeline iteration failed: {}", e),
        }
        thread::sleep(interval);
    }
}

/// Handle to the running pipeline thread.
pub struct PipelineHandle {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl PipelineHandle {
    /// Clear the running flag and wait for the thread to finish its current
    /// iteration and exit.
    pub fn stop(mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Start the pipeline on its own thread. The collaborators are constructed
/// on that thread; if one of them cannot be set up the pipeline logs the
/// error and stays dormant rather than taking the process down.
pub fn spawn(
    config: &Config,
    region: SharedRegion,
    results: Sender<String>,
    wake_slot: WakeSlot,
) -> PipelineHandle {
    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    let interval = config.interval();
    let ocr_language = config.ocr_language.clone();
    let source = config.source_lang.clone();
    let target = config.target_lang.clone();
    let timeout = config.request_timeout();

    let thread = thread::spawn(move || {
        let mut grabber = match ScreenGrabber::primary() {
            Ok(grabber) => grabber,
            Err(e) => {
                log::error!("capture unavailable, pipeline disabled: {}", e);
                return;
            }
        };
        let mut recognizer = TextRecognizer::new(&ocr_language);
        let mut translator = match TranslationClient::new(&source, &target, timeout) {
            Ok(client) => client,
            Err(e) => {
                log::error!("translation client setup failed, pipeline disabled: {}", e);
                return;
            }
        };

        let wake = move || {
            if let Some(ctx) = wake_slot.lock().as_ref() {
                ctx.request_repaint();
            }
        };

        log::info!(
            "capture pipeline started ({} -> {}, every {}ms)",
            source,
            target,
            interval.as_millis()
        );
        run_loop(
            &flag,
            &region,
            interval,
            &mut grabber,
            &mut recognizer,
            &mut translator,
            &results,
            &wake,
        );
        log::info!("capture pipeline stopped");
    });

    PipelineHandle {
        running,
        thread: Some(thread),
    }
}
