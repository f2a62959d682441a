//! Box painting with egui

use crate::boxes::{BoxKind, OverlayBox};
use capture_xcap::Rect;
use egui::{Color32, FontId, Painter, Pos2, Shape, Stroke};

/// Inset between the translation box border and its text
pub const TEXT_PADDING: f32 = 10.0;
/// Translated text is drawn larger than the default UI font
pub const TRANSLATION_FONT_SIZE: f32 = 20.0;

const BORDER_WIDTH: f32 = 2.0;
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;
const SELECTION_FILL_ALPHA: u8 = 50;

fn to_egui(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        Pos2::new(rect.x as f32, rect.y as f32),
        egui::Vec2::new(rect.width as f32, rect.height as f32),
    )
}

/// Paint one box: dashed border, kind-dependent fill, and for the translation
/// box the current translated text word-wrapped inside the padded interior.
pub fn draw_box(painter: &Painter, bx: &OverlayBox, translated: Option<&str>) {
    let rect = to_egui(bx.rect);

    let fill = match bx.kind {
        BoxKind::Selection => Color32::from_rgba_unmultiplied(
            bx.color.r(),
            bx.color.g(),
            bx.color.b(),
            SELECTION_FILL_ALPHA,
        ),
        BoxKind::Translation => Color32::BLACK,
    };
    painter.rect_filled(rect, 0.0, fill);
    draw_dashed_border(painter, rect, Stroke::new(BORDER_WIDTH, bx.color));

    if bx.kind == BoxKind::Translation {
        if let Some(text) = translated.filter(|t| !t.is_empty()) {
            let inner = rect.shrink(TEXT_PADDING);
            let galley = painter.layout(
                text.to_string(),
                FontId::proportional(TRANSLATION_FONT_SIZE),
                Color32::WHITE,
                inner.width(),
            );
            painter
                .with_clip_rect(inner)
                .galley(inner.min, galley, Color32::WHITE);
        }
    }
}

fn draw_dashed_border(painter: &Painter, rect: egui::Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    for i in 0..4 {
        let edge = [corners[i], corners[(i + 1) % 4]];
        painter.extend(Shape::dashed_line(&edge, stroke, DASH_LENGTH, GAP_LENGTH));
    }
}
