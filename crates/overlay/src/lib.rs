//! Overlay module for LensTrans
//!
//! Provides the two draggable screen boxes (selection and translation), the
//! shared selection-region snapshot, geometry persistence and box painting.

pub mod boxes;
pub mod layout;
pub mod render;
pub mod shared;

pub use boxes::{BoxKind, BoxMode, OverlayBox};
pub use layout::BoxLayout;
pub use shared::SharedRegion;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored geometry: {0}")]
    Malformed(#[from] serde_json::Error),
}
