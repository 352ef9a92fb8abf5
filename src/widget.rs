//! egui frontend for the ruler.
//!
//! [`show_time_ruler`] allocates the strip, keeps the ruler sized to it,
//! routes egui pointer events into the ruler and paints the ruler's
//! [`Canvas`]. Presses only count over the strip. Moves and releases are
//! dispatched on the ruler's document, so they count anywhere while a drag
//! is active.

use eframe::egui;

use crate::rendering::{Canvas, DrawCommand, SurfaceSize};
use crate::ruler::TimeRuler;

/// Replays a canvas display list onto an egui painter.
///
/// # Arguments
/// * `painter` - Target painter, usually clipped to the strip
/// * `origin` - Screen position of the canvas's top-left corner
/// * `canvas` - Recorded draw commands
pub fn paint_canvas(painter: &egui::Painter, origin: egui::Pos2, canvas: &Canvas) {
    for command in canvas.commands() {
        match command {
            DrawCommand::Text {
                text,
                x,
                y,
                font_size,
                color,
            } => {
                // Monospace keeps egui's glyph advances close to the canvas's fixed-advance metrics.
                painter.text(
                    origin + egui::vec2(*x, *y),
                    egui::Align2::LEFT_TOP,
                    text,
                    egui::FontId::monospace(*font_size),
                    *color,
                );
            }
            DrawCommand::Line { from, to, width, color } => {
                painter.line_segment(
                    [
                        origin + egui::vec2(from[0], from[1]),
                        origin + egui::vec2(to[0], to[1]),
                    ],
                    egui::Stroke::new(*width, *color),
                );
            }
        }
    }
}

/// Shows the ruler across the available width and handles its pointer input.
pub fn show_time_ruler(ui: &mut egui::Ui, ruler: &mut TimeRuler<Canvas>) -> egui::Response {
    let height = ruler.viewport().height() as f32;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::click_and_drag());

    if SurfaceSize::from_container(rect.width(), ruler.viewport().height()) != ruler.surface_size() {
        ruler.set_container_width(rect.width());
    }
    ruler.set_region_left(rect.left());

    // Replay this frame's pointer events in arrival order so every move
    // seeks exactly once and in the frame it happened.
    let events = ui.input(|i| i.events.clone());
    for event in &events {
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } => {
                if rect.contains(*pos) {
                    ruler.pointer_pressed(pos.x);
                }
            }
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => {
                ruler.pointer_released();
            }
            egui::Event::PointerMoved(pos) => {
                ruler.pointer_moved(pos.x);
            }
            _ => {}
        }
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ruler.palette().background);
    paint_canvas(&painter, rect.min, ruler.surface());

    response
}
