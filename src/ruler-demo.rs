//! Time Ruler Demo Application
//!
//! Hosts the zoomable time ruler in an eframe window next to the static demo
//! media catalog. The ruler's layout constants can be supplied as a JSON file
//! in the first command-line argument.
//!
//! - `app/` - Demo state and preference persistence
//! - `ui/` - Header, media list, timeline panel and status bar

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use timeruler::{demo_media, media, RulerConfig};

mod app;
mod ui;

use app::{AppState, SettingsCoordinator, PALETTE_KEY, SCALE_KEY};

/// Main application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RulerConfig::from_json_file(&path).unwrap_or_else(|e| {
            log::error!("{:#}; using default ruler config", e);
            RulerConfig::default()
        }),
        None => RulerConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 400.0])
            .with_title("Time Ruler Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Time Ruler Demo",
        options,
        Box::new(move |cc| Ok(Box::new(RulerDemoApp::new(cc, config)))),
    )
}

/// The demo application; panels do the work.
struct RulerDemoApp {
    state: AppState,
}

impl RulerDemoApp {
    /// Creates the demo with scale and palette restored from persistent storage.
    fn new(cc: &eframe::CreationContext, config: RulerConfig) -> Self {
        let scale = SettingsCoordinator::load_scale(cc.storage);
        let palette: String = SettingsCoordinator::load_setting_or(cc.storage, PALETTE_KEY, "Dark".to_string());
        log::info!(
            "Loaded {} demo clips ({} ms total)",
            demo_media().len(),
            media::catalog_duration_ms()
        );
        match media::catalog_json() {
            Ok(json) => log::debug!("Demo catalog: {}", json),
            Err(err) => log::warn!("Failed to serialize demo catalog: {:#}", err),
        }

        Self {
            state: AppState::new(config, scale, &palette, media::catalog_duration_ms()),
        }
    }
}

impl eframe::App for RulerDemoApp {
    /// Persists the ruler scale and palette.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, SCALE_KEY, self.state.ruler.scale());
        SettingsCoordinator::save_setting(storage, PALETTE_KEY, &self.state.palettes.current_palette().name);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::header::render_header(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::status_bar::render_status_bar(ui, &self.state);
        });

        egui::SidePanel::left("media_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui::media_panel::render_media_panel(ui, &mut self.state, demo_media());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::timeline_panel::render_timeline_panel(ui, ctx, &mut self.state);
        });
    }
}
