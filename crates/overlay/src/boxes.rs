//! Drag/resize interaction state for the two overlay boxes

use capture_xcap::Rect;
use egui::Color32;

/// Minimum box width in pixels
pub const MIN_BOX_WIDTH: u32 = 100;
/// Minimum box height in pixels
pub const MIN_BOX_HEIGHT: u32 = 50;
/// Pointer distance from the bottom-right corner that starts a resize
pub const RESIZE_MARGIN: i32 = 10;

/// Which of the two boxes this is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    /// Defines the screen region to capture
    Selection,
    /// Displays the most recent translated text
    Translation,
}

/// Interaction state. The anchor is the last pointer position, so each move
/// applies only the delta since the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxMode {
    Idle,
    Dragging { anchor: (i32, i32) },
    Resizing { anchor: (i32, i32) },
}

/// A movable, resizable screen-space rectangle.
pub struct OverlayBox {
    pub rect: Rect,
    pub color: Color32,
    pub kind: BoxKind,
    mode: BoxMode,
}

impl OverlayBox {
    pub fn new(rect: Rect, color: Color32, kind: BoxKind) -> Self {
        Self {
            rect,
            color,
            kind,
            mode: BoxMode::Idle,
        }
    }

    pub fn mode(&self) -> BoxMode {
        self.mode
    }

    /// True while the box is being dragged or resized.
    pub fn is_active(&self) -> bool {
        self.mode != BoxMode::Idle
    }

    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x, y)
    }

    /// Start a manipulation. The corner test runs before the drag test, so a
    /// press near the bottom-right corner always resizes. A press outside the
    /// rectangle is a no-op.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        if !self.rect.contains(x, y) {
            return;
        }
        let near_corner = (x - self.rect.right()).abs() < RESIZE_MARGIN
            && (y - self.rect.bottom()).abs() < RESIZE_MARGIN;
        self.mode = if near_corner {
            BoxMode::Resizing { anchor: (x, y) }
        } else {
            BoxMode::Dragging { anchor: (x, y) }
        };
    }

    /// Apply a pointer move. Returns true when the move was consumed and the
    /// caller should repaint.
    pub fn pointer_move(&mut self, x: i32, y: i32, screen_w: u32, screen_h: u32) -> bool {
        match self.mode {
            BoxMode::Dragging { anchor } => {
                let dx = x - anchor.0;
                let dy = y - anchor.1;
                let max_x = (screen_w as i32 - self.rect.width as i32).max(0);
                let max_y = (screen_h as i32 - self.rect.height as i32).max(0);
                self.rect.x = (self.rect.x + dx).clamp(0, max_x);
                self.rect.y = (self.rect.y + dy).clamp(0, max_y);
                self.mode = BoxMode::Dragging { anchor: (x, y) };
                true
            }
            BoxMode::Resizing { anchor } => {
                let dx = x - anchor.0;
                let dy = y - anchor.1;
                let new_w = (self.rect.width as i32 + dx).max(MIN_BOX_WIDTH as i32);
                let new_h = (self.rect.height as i32 + dy).max(MIN_BOX_HEIGHT as i32);
                self.rect.width = new_w.min(screen_w as i32 - self.rect.x) as u32;
                self.rect.height = new_h.min(screen_h as i32 - self.rect.y) as u32;
                self.mode = BoxMode::Resizing { anchor: (x, y) };
                true
            }
            BoxMode::Idle => false,
        }
    }

    /// End any manipulation. Safe to call when already idle.
    pub fn pointer_up(&mut self) {
        self.mode = BoxMode::Idle;
    }
}

/// Force a rectangle to respect the minimum size and stay within the screen.
/// Used on geometry loaded from disk, which may come from a different screen.
pub fn sanitize_rect(rect: Rect, screen_w: u32, screen_h: u32) -> Rect {
    let width = rect.width.clamp(MIN_BOX_WIDTH, screen_w.max(MIN_BOX_WIDTH));
    let height = rect.height.clamp(MIN_BOX_HEIGHT, screen_h.max(MIN_BOX_HEIGHT));
    let x = rect.x.clamp(0, (screen_w as i32 - width as i32).max(0));
    let y = rect.y.clamp(0, (screen_h as i32 - height as i32).max(0));
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN_W: u32 = 1920;
    const SCREEN_H: u32 = 1080;

    fn selection_box() -> OverlayBox {
        OverlayBox::new(
            Rect::new(100, 100, 300, 200),
            Color32::GREEN,
            BoxKind::Selection,
        )
    }

    #[test]
    fn press_near_corner_starts_resizing() {
        let mut bx = selection_box();
        // bottom-right corner is (400, 300)
        bx.pointer_down(395, 295);
        assert!(matches!(bx.mode(), BoxMode::Resizing { anchor: (395, 295) }));
    }

    #[test]
    fn press_inside_away_from_corner_starts_dragging() {
        let mut bx = selection_box();
        bx.pointer_down(150, 150);
        assert!(matches!(bx.mode(), BoxMode::Dragging { anchor: (150, 150) }));
    }

    #[test]
    fn press_outside_is_a_no_op() {
        let mut bx = selection_box();
        bx.pointer_down(50, 50);
        assert_eq!(bx.mode(), BoxMode::Idle);
        bx.pointer_down(500, 400);
        assert_eq!(bx.mode(), BoxMode::Idle);
    }

    #[test]
    fn corner_test_wins_over_drag_test() {
        let mut bx = selection_box();
        // just inside the margin on both axes, also inside the rectangle
        bx.pointer_down(391, 291);
        assert!(matches!(bx.mode(), BoxMode::Resizing { .. }));
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let mut bx = selection_box();
        bx.pointer_down(150, 150);
        assert!(bx.pointer_move(180, 170, SCREEN_W, SCREEN_H));
        assert_eq!(bx.rect, Rect::new(130, 120, 300, 200));
    }

    #[test]
    fn drag_far_past_origin_clamps_to_zero() {
        // the spec scenario: drag from (150,150) by (-400,-400) on 1920x1080
        let mut bx = selection_box();
        bx.pointer_down(150, 150);
        assert!(bx.pointer_move(-250, -250, SCREEN_W, SCREEN_H));
        assert_eq!((bx.rect.x, bx.rect.y), (0, 0));
        assert_eq!((bx.rect.width, bx.rect.height), (300, 200));
    }

    #[test]
    fn drag_far_past_bottom_right_clamps_to_screen_edge() {
        let mut bx = selection_box();
        bx.pointer_down(150, 150);
        assert!(bx.pointer_move(5000, 5000, SCREEN_W, SCREEN_H));
        assert_eq!(bx.rect.x, (SCREEN_W - bx.rect.width) as i32);
        assert_eq!(bx.rect.y, (SCREEN_H - bx.rect.height) as i32);
    }

    #[test]
    fn drag_keeps_position_in_bounds_across_a_sequence() {
        let mut bx = selection_box();
        bx.pointer_down(150, 150);
        for &(x, y) in &[(0, 900), (-300, 2000), (2500, -100), (960, 540)] {
            bx.pointer_move(x, y, SCREEN_W, SCREEN_H);
            assert!(bx.rect.x >= 0 && bx.rect.y >= 0);
            assert!(bx.rect.right() <= SCREEN_W as i32);
            assert!(bx.rect.bottom() <= SCREEN_H as i32);
        }
    }

    #[test]
    fn resize_grows_by_pointer_delta() {
        let mut bx = selection_box();
        bx.pointer_down(395, 295);
        assert!(bx.pointer_move(445, 345, SCREEN_W, SCREEN_H));
        assert_eq!(bx.rect, Rect::new(100, 100, 350, 250));
    }

    #[test]
    fn resize_floors_at_minimum_size() {
        let mut bx = selection_box();
        bx.pointer_down(395, 295);
        bx.pointer_move(-2000, -2000, SCREEN_W, SCREEN_H);
        assert_eq!(bx.rect.width, MIN_BOX_WIDTH);
        assert_eq!(bx.rect.height, MIN_BOX_HEIGHT);
    }

    #[test]
    fn resize_caps_at_screen_edge() {
        let mut bx = selection_box();
        bx.pointer_down(395, 295);
        bx.pointer_move(5000, 5000, SCREEN_W, SCREEN_H);
        assert_eq!(bx.rect.right(), SCREEN_W as i32);
        assert_eq!(bx.rect.bottom(), SCREEN_H as i32);
    }

    #[test]
    fn resize_invariants_hold_across_a_sequence() {
        let mut bx = selection_box();
        bx.pointer_down(395, 295);
        for &(x, y) in &[(500, 100), (-100, 3000), (4000, 4000), (0, 0)] {
            bx.pointer_move(x, y, SCREEN_W, SCREEN_H);
            assert!(bx.rect.width >= MIN_BOX_WIDTH);
            assert!(bx.rect.height >= MIN_BOX_HEIGHT);
            assert!(bx.rect.right() <= SCREEN_W as i32);
            assert!(bx.rect.bottom() <= SCREEN_H as i32);
        }
    }

    #[test]
    fn move_while_idle_is_not_consumed() {
        let mut bx = selection_box();
        assert!(!bx.pointer_move(150, 150, SCREEN_W, SCREEN_H));
        assert_eq!(bx.rect, Rect::new(100, 100, 300, 200));
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let mut bx = selection_box();
        bx.pointer_down(150, 150);
        bx.pointer_up();
        assert_eq!(bx.mode(), BoxMode::Idle);
        let before = bx.rect;
        bx.pointer_up();
        assert_eq!(bx.mode(), BoxMode::Idle);
        assert_eq!(bx.rect, before);
    }

    #[test]
    fn sanitize_restores_minimum_size_and_bounds() {
        let r = sanitize_rect(Rect::new(-50, 2000, 10, 5), SCREEN_W, SCREEN_H);
        assert_eq!(r.width, MIN_BOX_WIDTH);
        assert_eq!(r.height, MIN_BOX_HEIGHT);
        assert!(r.x >= 0 && r.bottom() <= SCREEN_H as i32);
    }

    #[test]
    fn sanitize_shrinks_oversized_rect_to_screen() {
        let r = sanitize_rect(Rect::new(0, 0, 4000, 3000), SCREEN_W, SCREEN_H);
        assert_eq!((r.width, r.height), (SCREEN_W, SCREEN_H));
        assert_eq!((r.x, r.y), (0, 0));
    }

    #[test]
    fn sanitize_keeps_a_valid_rect_unchanged() {
        let r = Rect::new(100, 100, 300, 200);
        assert_eq!(sanitize_rect(r, SCREEN_W, SCREEN_H), r);
    }
}
