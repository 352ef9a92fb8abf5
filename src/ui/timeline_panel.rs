//! Timeline panel UI rendering
//!
//! Shows the ruler with a playhead overlay and handles wheel input:
//! - Scroll wheel pans horizontally
//! - Ctrl + wheel zooms around the pointer

use eframe::egui;
use timeruler::{widget, with_alpha};

use crate::app::AppState;

/// Renders the ruler strip, playhead and scroll bar.
pub fn render_timeline_panel(ui: &mut egui::Ui, ctx: &egui::Context, state: &mut AppState) {
    let response = widget::show_time_ruler(ui, &mut state.ruler);
    let rect = response.rect;

    if state.apply_pending_seek() {
        ctx.request_repaint();
    }

    if response.hovered() {
        let (ctrl, scroll_y, hover_x) = ctx.input(|i| {
            let scroll_y = if i.raw_scroll_delta.y != 0.0 {
                i.raw_scroll_delta.y
            } else {
                i.smooth_scroll_delta.y
            };
            (i.modifiers.ctrl, scroll_y, i.pointer.hover_pos().map(|p| p.x))
        });

        if scroll_y != 0.0 {
            if ctrl {
                let focus_x = hover_x.unwrap_or(rect.center().x) - rect.left();
                state.zoom_around(1.0 + scroll_y * 0.002, focus_x);
            } else {
                state.pan_by(-scroll_y);
            }
        }
    }

    // Playhead
    let x = rect.left() + state.playhead_x();
    if rect.x_range().contains(x) {
        let color = state.palettes.current_palette().major_tick;
        let painter = ui.painter_at(rect);
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(2.0, with_alpha(color, 200)),
        );
    }

    ui.add_space(4.0);

    let max_scroll = state.max_scroll();
    let mut scroll = state.ruler.viewport().scroll_offset();
    let slider = egui::Slider::new(&mut scroll, 0.0..=max_scroll.max(1.0)).show_value(false);
    if ui.add_sized([rect.width(), 16.0], slider).changed() {
        state.ruler.set_scroll_offset(scroll.min(max_scroll));
    }
}
