//! Overlay window: input routing, result drain, box painting

use crossbeam_channel::Receiver;
use eframe::egui;
use overlay::boxes::{sanitize_rect, BoxKind, OverlayBox};
use overlay::{layout, render, BoxLayout, SharedRegion};
use std::path::PathBuf;

const SELECTION_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const TRANSLATION_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 0, 0);

pub struct OverlayApp {
    selection: OverlayBox,
    translation: OverlayBox,
    region: SharedRegion,
    results: Receiver<String>,
    translated: String,
    visible: bool,
    screen: (u32, u32),
    layout_path: PathBuf,
}

impl OverlayApp {
    pub fn new(
        stored: BoxLayout,
        region: SharedRegion,
        results: Receiver<String>,
        screen: (u32, u32),
        layout_path: PathBuf,
    ) -> Self {
        let selection = OverlayBox::new(
            sanitize_rect(stored.selection, screen.0, screen.1),
            SELECTION_COLOR,
            BoxKind::Selection,
        );
        let translation = OverlayBox::new(
            sanitize_rect(stored.translation, screen.0, screen.1),
            TRANSLATION_COLOR,
            BoxKind::Translation,
        );
        // the pipeline reads the sanitized rect, not the raw stored one
        region.publish(selection.rect);

        Self {
            selection,
            translation,
            region,
            results,
            translated: String::new(),
            visible: true,
            screen,
            layout_path,
        }
    }

    /// Keep only the newest queued result; older ones are superseded.
    fn drain_results(&mut self) {
        while let Ok(text) = self.results.try_recv() {
            self.translated = text;
        }
    }

    fn route_pointer(&mut self, ctx: &egui::Context) {
        let (pos, pressed, down, released) = ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
            )
        });

        if let Some(pos) = pos {
            let x = pos.x.round() as i32;
            let y = pos.y.round() as i32;

            if pressed {
                // the translation box is tested first: it is drawn with a
                // payload and may overlap the selection box
                if self.translation.hit_test(x, y) {
                    self.translation.pointer_down(x, y);
                } else if self.selection.hit_test(x, y) {
                    self.selection.pointer_down(x, y);
                }
            } else if down {
                // only one box can be active; moves go to it exclusively
                let consumed = if self.translation.is_active() {
                    self.translation
                        .pointer_move(x, y, self.screen.0, self.screen.1)
                } else if self.selection.is_active() {
                    let moved = self
                        .selection
                        .pointer_move(x, y, self.screen.0, self.screen.1);
                    if moved {
                        self.region.publish(self.selection.rect);
                    }
                    moved
                } else {
                    false
                };
                if consumed {
                    ctx.request_repaint();
                }
            }
        }

        if released {
            self.selection.pointer_up();
            self.translation.pointer_up();
        }
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // near-zero alpha: invisible, but the window keeps receiving input
        [0.0, 0.0, 0.0, 0.02]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_results();

        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::T)) {
            self.visible = !self.visible;
            log::info!(
                "overlay {} (capture keeps running)",
                if self.visible { "shown" } else { "hidden" }
            );
        }

        if self.visible {
            self.route_pointer(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if !self.visible {
                    return;
                }
                let painter = ui.painter();
                render::draw_box(painter, &self.selection, None);
                render::draw_box(painter, &self.translation, Some(self.translated.as_str()));
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let current = BoxLayout {
            selection: self.selection.rect,
            translation: self.translation.rect,
        };
        if let Err(e) = layout::save(&self.layout_path, &current) {
            log::warn!("failed to persist box layout: {}", e);
        }
    }
}
