//! Header panel UI rendering
//!
//! Handles the top bar with zoom buttons, subdivision control, label mode and palette selector.

use eframe::egui;
use timeruler::ScaleConfig;

use crate::app::{AppState, LabelMode};

/// Renders the demo header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let center = state.ruler.viewport().width() as f32 / 2.0;
        if ui.button("🔍+").clicked() {
            state.zoom_around(1.5, center);
        }
        if ui.button("🔍-").clicked() {
            state.zoom_around(1.0 / 1.5, center);
        }
        ui.label(format!("Zoom: {:.3}", state.ruler.scale().zoom()));

        ui.separator();

        let scale = *state.ruler.scale();
        let mut segments = scale.segments();
        ui.label("Segments:");
        if ui.add(egui::DragValue::new(&mut segments).range(1..=20)).changed() {
            match ScaleConfig::new(scale.zoom(), scale.unit(), segments) {
                Ok(scale) => state.ruler.set_scale(scale),
                Err(e) => log::warn!("{}", e),
            }
        }

        ui.separator();

        let mut mode = state.label_mode();
        ui.selectable_value(&mut mode, LabelMode::Timestamp, "Time");
        ui.selectable_value(&mut mode, LabelMode::Frames, "Frames");
        if mode != state.label_mode() {
            state.set_label_mode(mode);
        }

        ui.separator();

        let current = state.palettes.current_palette().name.clone();
        let mut selected = current.clone();
        egui::ComboBox::from_label("Palette")
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for name in state.palettes.list_palettes() {
                    ui.selectable_value(&mut selected, name.to_string(), name);
                }
            });
        if selected != current {
            state.select_palette(&selected);
        }
    });
}
