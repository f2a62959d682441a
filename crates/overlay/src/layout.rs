//! Box geometry persistence
//!
//! Two rectangles, each stored as four integers (left, top, width, height),
//! written at shutdown and read back at startup. Anything wrong with the
//! stored file falls back to the defaults; persistence problems are never
//! fatal and never surfaced to the user.

use crate::PersistenceError;
use capture_xcap::Rect;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default selection box geometry
pub const DEFAULT_SELECTION: Rect = Rect {
    x: 100,
    y: 100,
    width: 300,
    height: 200,
};

/// Default translation box geometry
pub const DEFAULT_TRANSLATION: Rect = Rect {
    x: 420,
    y: 100,
    width: 300,
    height: 200,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StoredRect {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
}

impl From<Rect> for StoredRect {
    fn from(r: Rect) -> Self {
        Self {
            left: r.x,
            top: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl From<StoredRect> for Rect {
    fn from(s: StoredRect) -> Self {
        Rect::new(s.left, s.top, s.width, s.height)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredLayout {
    selection: StoredRect,
    translation: StoredRect,
}

/// Geometry of both boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    pub selection: Rect,
    pub translation: Rect,
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self {
            selection: DEFAULT_SELECTION,
            translation: DEFAULT_TRANSLATION,
        }
    }
}

/// Load the layout, substituting the defaults when the file is absent or
/// unreadable.
pub fn load(path: &Path) -> BoxLayout {
    if !path.exists() {
        return BoxLayout::default();
    }
    match try_load(path) {
        Ok(layout) => layout,
        Err(e) => {
            log::warn!("ignoring stored layout {}: {}", path.display(), e);
            BoxLayout::default()
        }
    }
}

fn try_load(path: &Path) -> Result<BoxLayout, PersistenceError> {
    let content = std::fs::read_to_string(path)?;
    let stored: StoredLayout = serde_json::from_str(&content)?;
    Ok(BoxLayout {
        selection: stored.selection.into(),
        translation: stored.translation.into(),
    })
}

/// Write the layout for the next run.
pub fn save(path: &Path, layout: &BoxLayout) -> Result<(), PersistenceError> {
    let stored = StoredLayout {
        selection: layout.selection.into(),
        translation: layout.translation.into(),
    };
    let content = serde_json::to_string_pretty(&stored)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_both_rectangles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        let layout = BoxLayout {
            selection: Rect::new(10, 20, 320, 240),
            translation: Rect::new(700, 80, 400, 160),
        };
        save(&path, &layout).unwrap();
        assert_eq!(load(&path), layout);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let layout = load(&dir.path().join("nope.json"));
        assert_eq!(layout, BoxLayout::default());
        assert_eq!(layout.selection, DEFAULT_SELECTION);
        assert_eq!(layout.translation, DEFAULT_TRANSLATION);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert_eq!(load(&path), BoxLayout::default());
    }

    #[test]
    fn truncated_json_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{"selection":{"left":1,"top":2"#).unwrap();
        assert_eq!(load(&path), BoxLayout::default());
    }
}
