//! Screen capture module for LensTrans
//!
//! Provides primary-screen region capture using the xcap backend.

pub mod screen;

pub use screen::{primary_dimensions, ScreenGrabber};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("capture backend error: {0}")]
    Backend(#[from] xcap::XCapError),

    #[error("no primary monitor found")]
    NoPrimaryMonitor,

    #[error("degenerate capture region {width}x{height}")]
    EmptyRegion { width: u32, height: u32 },

    #[error("region ({x}, {y}) {width}x{height} outside screen bounds")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Rectangle in physical screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
