//! Tick and label rendering for the ruler strip.
//!
//! Rendering is split into a pure layout pass ([`layout_ticks`]) and a paint
//! pass ([`draw`]) that always clears the surface first. The paint pass draws
//! every label before any mark so strokes are never covered by text.
//!
//! When zoomed far out, tick indices are thinned so the work per redraw is
//! bounded by the strip width: marks keep at least `min_tick_spacing` pixels
//! apart, minor marks are dropped once they would be denser than that, and
//! labels only go on indices spaced wider than the widest label plus
//! `label_gap`.

use crate::config::RulerConfig;
use crate::domain::ruler_geometry;
use crate::scale::ScaleConfig;
use crate::state::ViewportState;
use crate::theme::RulerPalette;

use super::surface::Surface;

/// Major marks start each tick index; minor marks subdivide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Major,
    Minor,
}

/// A positioned label for one tick index.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub index: u64,
    /// Value handed to the label formatter
    pub time_value: f64,
    pub text: String,
    /// Strip-relative position of the tick, before the left margin
    pub position: f32,
    /// Drawn x of the tick the label is centred on
    pub x: f32,
    /// Left edge of the rendered text
    pub left: f32,
    pub top: f32,
    pub width: f32,
}

/// A positioned tick mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub index: u64,
    pub sub_index: u32,
    pub kind: TickKind,
    /// Drawn x of the mark
    pub x: f32,
}

/// Everything one redraw puts on the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickLayout {
    pub zoom_unit: f32,
    pub labels: Vec<TickLabel>,
    pub marks: Vec<TickMark>,
}

impl TickLayout {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.marks.is_empty()
    }
}

/// Computes labels and marks for the visible part of the timeline.
///
/// # Arguments
/// * `surface` - Used only to measure label widths
/// * `viewport` - Scroll offset and visible width
/// * `scale` - Zoom, unit and segment configuration
/// * `config` - Margins, tick lengths and font metrics
/// * `label_format` - Converts a tick time value into label text
pub fn layout_ticks<S: Surface + ?Sized>(
    surface: &S,
    viewport: &ViewportState,
    scale: &ScaleConfig,
    config: &RulerConfig,
    label_format: &dyn Fn(f64) -> String,
) -> TickLayout {
    let zoom_unit = ruler_geometry::zoom_unit(scale, config.base_pixels_per_frame);
    let scroll_offset = viewport.scroll_offset();
    let width = viewport.width();
    let mut layout = TickLayout {
        zoom_unit,
        ..Default::default()
    };

    let range = ruler_geometry::visible_index_range(scroll_offset, width, zoom_unit);
    if range.is_empty() {
        return layout;
    }
    let format_index = |index: u64| label_format(ruler_geometry::tick_time_value(index, zoom_unit, scale.zoom()));

    let min_spacing = config.min_tick_spacing.max(1.0);
    let mark_stride = ruler_geometry::index_stride(zoom_unit, min_spacing);
    let widest_label = [range.start, range.end - 1]
        .iter()
        .map(|&index| surface.measure_text(&format_index(index), config.font_size))
        .fold(0.0f32, f32::max);
    let label_stride = ruler_geometry::index_stride(zoom_unit, widest_label + config.label_gap.max(0.0))
        .div_ceil(mark_stride)
        * mark_stride;
    let segments = if mark_stride == 1 && zoom_unit / scale.segments() as f32 >= min_spacing {
        scale.segments()
    } else {
        1
    };

    let first = range.start / mark_stride * mark_stride;
    let mut last_label_right = f32::NEG_INFINITY;
    for index in (first..range.end).step_by(mark_stride as usize) {
        let position = ruler_geometry::tick_screen_position(index, zoom_unit, scroll_offset);
        if !ruler_geometry::within_slack(position, width, zoom_unit) {
            continue;
        }
        let x = config.left_offset + position;

        if index % label_stride == 0 {
            let time_value = ruler_geometry::tick_time_value(index, zoom_unit, scale.zoom());
            let text = label_format(time_value);
            let text_width = surface.measure_text(&text, config.font_size);
            let left = x - text_width / 2.0;
            // Labels wider than the estimate would collide with the previous one.
            if left >= last_label_right + config.label_gap.max(0.0) || layout.labels.is_empty() {
                last_label_right = left + text_width;
                layout.labels.push(TickLabel {
                    index,
                    time_value,
                    text,
                    position,
                    x,
                    left,
                    top: config.label_top,
                    width: text_width,
                });
            }
        }

        for sub_index in 0..segments {
            let sub_x = x + ruler_geometry::sub_tick_offset(sub_index, scale.segments(), zoom_unit);
            if sub_x < 0.0 || sub_x >= width as f32 {
                continue;
            }
            let kind = if sub_index == 0 { TickKind::Major } else { TickKind::Minor };
            layout.marks.push(TickMark {
                index,
                sub_index,
                kind,
                x: sub_x,
            });
        }
    }

    layout
}

/// Clears the surface and redraws the ruler. Returns the layout that was drawn.
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &ViewportState,
    scale: &ScaleConfig,
    config: &RulerConfig,
    palette: &RulerPalette,
    label_format: &dyn Fn(f64) -> String,
) -> TickLayout {
    surface.clear();
    let layout = layout_ticks(surface, viewport, scale, config, label_format);

    for label in &layout.labels {
        surface.fill_text(&label.text, label.left, label.top, config.font_size, palette.label);
    }

    let bottom = viewport.height() as f32;
    for mark in &layout.marks {
        let (length, stroke, color) = match mark.kind {
            TickKind::Major => (config.long_tick, config.major_stroke, palette.major_tick),
            TickKind::Minor => (config.short_tick, config.minor_stroke, palette.minor_tick),
        };
        surface.stroke_line([mark.x, bottom - length], [mark.x, bottom], stroke, color);
    }

    log::trace!(
        "Drew {} labels and {} marks (scroll {}, width {})",
        layout.labels.len(),
        layout.marks.len(),
        viewport.scroll_offset(),
        viewport.width()
    );
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::surface::{Canvas, DrawCommand};
    use crate::utils::format_timestamp;

    fn no_margin() -> RulerConfig {
        RulerConfig {
            left_offset: 0.0,
            ..Default::default()
        }
    }

    fn canvas(width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::default();
        canvas.resize(width, height);
        canvas
    }

    #[test]
    fn test_major_and_minor_layout() {
        let scale = ScaleConfig::new(1.0, 100.0, 4).unwrap();
        let viewport = ViewportState::new(500, 30);
        let layout = layout_ticks(&canvas(500, 30), &viewport, &scale, &no_margin(), &format_timestamp);

        assert_eq!(layout.zoom_unit, 100.0);
        let first: Vec<(f32, TickKind)> = layout.marks.iter().take(5).map(|m| (m.x, m.kind)).collect();
        assert_eq!(
            first,
            vec![
                (0.0, TickKind::Major),
                (25.0, TickKind::Minor),
                (50.0, TickKind::Minor),
                (75.0, TickKind::Minor),
                (100.0, TickKind::Major),
            ]
        );
        assert_eq!(layout.labels[0].text, "00:00");
        assert_eq!(layout.labels[1].time_value, 100.0);
    }

    #[test]
    fn test_marks_stay_inside_viewport() {
        let scale = ScaleConfig::new(1.0, 100.0, 4).unwrap();
        let mut viewport = ViewportState::new(500, 30);
        viewport.set_scroll_offset(130.0);
        let layout = layout_ticks(&canvas(500, 30), &viewport, &scale, &RulerConfig::default(), &format_timestamp);

        assert!(!layout.marks.is_empty());
        for mark in &layout.marks {
            assert!(mark.x >= 0.0 && mark.x < 500.0, "mark at {}", mark.x);
        }
        for label in &layout.labels {
            assert!(label.position >= -layout.zoom_unit && label.position <= 500.0 + layout.zoom_unit);
        }
    }

    #[test]
    fn test_labels_are_centred_on_major_marks() {
        let scale = ScaleConfig::new(0.37, 1000.0, 5).unwrap();
        let mut viewport = ViewportState::new(800, 30);
        viewport.set_scroll_offset(1234.5);
        let layout = layout_ticks(&canvas(800, 30), &viewport, &scale, &RulerConfig::default(), &format_timestamp);

        for mark in layout.marks.iter().filter(|m| m.kind == TickKind::Major) {
            let label = layout.labels.iter().find(|l| l.index == mark.index).unwrap();
            assert_eq!(label.x, mark.x);
            assert!((label.left + label.width / 2.0 - mark.x).abs() < 1e-3);
        }
    }

    #[test]
    fn test_zero_width_draws_nothing() {
        let scale = ScaleConfig::default();
        let viewport = ViewportState::new(0, 30);
        let mut surface = canvas(0, 30);
        let layout = draw(&mut surface, &viewport, &scale, &RulerConfig::default(), &RulerPalette::default(), &format_timestamp);
        assert!(layout.is_empty());
        assert!(surface.is_empty());
    }

    #[test]
    fn test_draw_puts_labels_before_marks() {
        let scale = ScaleConfig::new(1.0, 100.0, 4).unwrap();
        let viewport = ViewportState::new(500, 30);
        let mut surface = canvas(500, 30);
        draw(&mut surface, &viewport, &scale, &no_margin(), &RulerPalette::default(), &format_timestamp);

        let first_line = surface
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::Line { .. }))
            .unwrap();
        assert!(surface.commands()[..first_line].iter().all(|c| matches!(c, DrawCommand::Text { .. })));
        assert!(surface.commands()[first_line..].iter().all(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_major_marks_are_longer() {
        let scale = ScaleConfig::new(1.0, 100.0, 2).unwrap();
        let viewport = ViewportState::new(100, 30);
        let config = no_margin();
        let palette = RulerPalette::default();
        let mut surface = canvas(100, 30);
        draw(&mut surface, &viewport, &scale, &config, &palette, &format_timestamp);

        let lines: Vec<_> = surface.lines().cloned().collect();
        assert_eq!(
            lines[0],
            DrawCommand::Line {
                from: [0.0, 30.0 - config.long_tick],
                to: [0.0, 30.0],
                width: config.major_stroke,
                color: palette.major_tick,
            }
        );
        assert_eq!(
            lines[1],
            DrawCommand::Line {
                from: [50.0, 30.0 - config.short_tick],
                to: [50.0, 30.0],
                width: config.minor_stroke,
                color: palette.minor_tick,
            }
        );
    }

    #[test]
    fn test_far_zoom_out_is_thinned_to_strip_width() {
        // One tick index spans 0.0001 px: five million indices are visible.
        let scale = ScaleConfig::new(0.01, 0.01, 1).unwrap();
        let viewport = ViewportState::new(500, 30);
        let config = no_margin();
        let layout = layout_ticks(&canvas(500, 30), &viewport, &scale, &config, &format_timestamp);

        assert!(!layout.marks.is_empty());
        assert!(layout.marks.len() <= 252, "{} marks", layout.marks.len());
        for pair in layout.marks.windows(2) {
            assert!(pair[1].x - pair[0].x >= config.min_tick_spacing - 1e-3);
        }

        assert!(!layout.labels.is_empty());
        for pair in layout.labels.windows(2) {
            assert!(pair[1].left >= pair[0].left + pair[0].width, "{} overlaps {}", pair[1].text, pair[0].text);
        }
        for label in &layout.labels {
            assert!(layout.marks.iter().any(|m| m.index == label.index) || label.x < 0.0 || label.x >= 500.0);
        }
    }

    #[test]
    fn test_dense_minor_marks_are_dropped() {
        // 10 px per index split into 10 segments would put minors 1 px apart.
        let scale = ScaleConfig::new(1.0, 10.0, 10).unwrap();
        let viewport = ViewportState::new(100, 30);
        let layout = layout_ticks(&canvas(100, 30), &viewport, &scale, &no_margin(), &format_timestamp);
        assert!(layout.marks.iter().all(|m| m.kind == TickKind::Major));
        assert_eq!(layout.marks.len(), 10);
        // "00:00.010" is 54 px wide, so labels land every seventh index.
        assert!(layout.labels.iter().all(|l| l.index % 7 == 0));
    }

    #[test]
    fn test_single_segment_has_only_majors() {
        let scale = ScaleConfig::new(1.0, 50.0, 1).unwrap();
        let viewport = ViewportState::new(200, 30);
        let layout = layout_ticks(&canvas(200, 30), &viewport, &scale, &no_margin(), &format_timestamp);
        assert!(layout.marks.iter().all(|m| m.kind == TickKind::Major));
        assert_eq!(layout.marks.len(), 4);
    }
}
