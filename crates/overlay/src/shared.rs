//! Shared selection-region snapshot

use capture_xcap::Rect;
use parking_lot::Mutex;
use std::sync::Arc;

/// The selection rectangle shared between the UI thread (writer) and the
/// capture pipeline (reader).
///
/// Every publish swaps in a complete `Rect` value and every snapshot copies
/// the whole value under the lock, so the pipeline never observes a torn
/// rectangle (a new x paired with an old width).
#[derive(Clone)]
pub struct SharedRegion {
    inner: Arc<Mutex<Rect>>,
}

impl SharedRegion {
    pub fn new(rect: Rect) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rect)),
        }
    }

    pub fn publish(&self, rect: Rect) {
        *self.inner.lock() = rect;
    }

    pub fn snapshot(&self) -> Rect {
        *self.inner.lock()
    }
}
