//! Side panel listing the demo media catalog.

use eframe::egui;
use timeruler::{format_timestamp, MediaAsset};

use crate::app::AppState;

/// Renders the clip list; clicking a clip moves the playhead to its start.
pub fn render_media_panel(ui: &mut egui::Ui, state: &mut AppState, catalog: &[MediaAsset]) {
    ui.heading("Media");
    ui.separator();

    let mut clicked = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, asset) in catalog.iter().enumerate() {
            let selected = state.selected_media() == Some(index);
            let text = format!("{}  ({})", asset.title, format_timestamp(asset.duration_ms as f64));
            if ui.selectable_label(selected, text).on_hover_text(asset.src).clicked() {
                clicked = Some(index);
            }
        }
    });

    if let Some(index) = clicked {
        state.select_media(index, catalog);
    }
}
