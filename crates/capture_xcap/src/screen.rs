//! Primary-screen region grabbing via xcap

use crate::{CaptureError, CaptureResult, Rect};
use image::RgbImage;
use xcap::Monitor;

/// Grabber bound to the primary monitor.
///
/// Construct it on whichever thread does the capturing; the backend handle is
/// not shared across threads.
pub struct ScreenGrabber {
    monitor: Monitor,
    width: u32,
    height: u32,
}

impl ScreenGrabber {
    /// Bind to the primary monitor (first monitor if none is marked primary).
    pub fn primary() -> CaptureResult<Self> {
        let monitor = find_primary()?;
        let width = monitor.width()?;
        let height = monitor.height()?;
        log::debug!("bound to primary monitor {}x{}", width, height);
        Ok(Self {
            monitor,
            width,
            height,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Grab the pixels of `region` into an RGB image.
    ///
    /// The region is clipped to the screen before capture. A region with zero
    /// width or height, or one entirely off-screen, is an error.
    pub fn grab(&self, region: Rect) -> CaptureResult<RgbImage> {
        if region.is_degenerate() {
            return Err(CaptureError::EmptyRegion {
                width: region.width,
                height: region.height,
            });
        }

        let clipped = clip_to_screen(region, self.width, self.height).ok_or(
            CaptureError::OutOfBounds {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            },
        )?;

        let rgba = self.monitor.capture_region(
            clipped.x as u32,
            clipped.y as u32,
            clipped.width,
            clipped.height,
        )?;
        Ok(image::DynamicImage::ImageRgba8(rgba).to_rgb8())
    }
}

/// Primary screen dimensions, without keeping a grabber around.
pub fn primary_dimensions() -> CaptureResult<(u32, u32)> {
    let monitor = find_primary()?;
    Ok((monitor.width()?, monitor.height()?))
}

fn find_primary() -> CaptureResult<Monitor> {
    let monitors = Monitor::all()?;
    let mut fallback = None;
    for monitor in monitors {
        if monitor.is_primary().unwrap_or(false) {
            return Ok(monitor);
        }
        if fallback.is_none() {
            fallback = Some(monitor);
        }
    }
    fallback.ok_or(CaptureError::NoPrimaryMonitor)
}

/// Intersect `region` with the screen rectangle. None if the intersection is
/// empty.
fn clip_to_screen(region: Rect, screen_w: u32, screen_h: u32) -> Option<Rect> {
    let left = region.x.max(0);
    let top = region.y.max(0);
    let right = region.right().min(screen_w as i32);
    let bottom = region.bottom().min(screen_h as i32);

    if left >= right || top >= bottom {
        return None;
    }

    Some(Rect::new(
        left,
        top,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_fully_on_screen_region() {
        let r = Rect::new(100, 100, 300, 200);
        assert_eq!(clip_to_screen(r, 1920, 1080), Some(r));
    }

    #[test]
    fn clip_trims_negative_origin() {
        let r = Rect::new(-50, -20, 300, 200);
        assert_eq!(clip_to_screen(r, 1920, 1080), Some(Rect::new(0, 0, 250, 180)));
    }

    #[test]
    fn clip_trims_overflow_past_screen_edge() {
        let r = Rect::new(1800, 1000, 300, 200);
        assert_eq!(
            clip_to_screen(r, 1920, 1080),
            Some(Rect::new(1800, 1000, 120, 80))
        );
    }

    #[test]
    fn clip_rejects_fully_off_screen_region() {
        assert_eq!(clip_to_screen(Rect::new(2000, 0, 100, 100), 1920, 1080), None);
        assert_eq!(clip_to_screen(Rect::new(-200, 0, 100, 100), 1920, 1080), None);
    }
}
