//! LensTrans - live screen region translator
//!
//! A transparent always-on-top overlay with two boxes: drag the selection
//! box over the text you want translated, the translation box shows the
//! result. Ctrl+T hides and shows the overlay; capture keeps running.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod pipeline;

use crate::app::OverlayApp;
use crate::config::Config;
use anyhow::Context as _;
use crossbeam_channel::bounded;
use eframe::egui;
use overlay::{layout, SharedRegion};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load(&PathBuf::from(config::CONFIG_FILE));

    // the only fatal startup condition: no display to put the overlay on
    let (screen_w, screen_h) =
        capture_xcap::primary_dimensions().context("failed to probe the primary screen")?;
    log::info!("primary screen {}x{}", screen_w, screen_h);

    let layout_path = PathBuf::from(config::LAYOUT_FILE);
    let stored = layout::load(&layout_path);

    let region = SharedRegion::new(stored.selection);
    let (result_tx, result_rx) = bounded(4);
    let wake_slot: pipeline::WakeSlot = Arc::new(Mutex::new(None));

    let handle = pipeline::spawn(&config, region.clone(), result_tx, wake_slot.clone());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_position([0.0, 0.0])
            .with_inner_size([screen_w as f32, screen_h as f32])
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_taskbar(false),
        ..Default::default()
    };

    let run_result = eframe::run_native(
        "LensTrans",
        native_options,
        Box::new(move |cc| {
            *wake_slot.lock() = Some(cc.egui_ctx.clone());
            Ok(Box::new(OverlayApp::new(
                stored,
                region,
                result_rx,
                (screen_w, screen_h),
                layout_path,
            )))
        }),
    );

    // let the in-flight iteration finish before the process goes away
    handle.stop();

    run_result.map_err(|e| anyhow::anyhow!("failed to initialize overlay window: {}", e))
}
