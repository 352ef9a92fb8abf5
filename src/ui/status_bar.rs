//! Status bar UI rendering
//!
//! Shows playhead time, timeline length, zoom and scroll offset.

use eframe::egui;
use egui::RichText;
use timeruler::format_timestamp;

use crate::app::AppState;

/// Renders the status bar at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "Playhead: {} / {}",
                format_timestamp(state.playhead_ms()),
                format_timestamp(state.duration_ms() as f64)
            ))
            .strong(),
        );
        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Zoom: {:.3} | Scroll: {:.0}px | Dragging: {}",
            state.ruler.scale().zoom(),
            state.ruler.viewport().scroll_offset(),
            state.ruler.is_dragging()
        ));
    });
}
