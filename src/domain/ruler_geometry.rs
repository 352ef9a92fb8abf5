//! Coordinate mapping between timeline time, timeline pixels and screen pixels.
//!
//! This module provides pure functions for:
//! - Computing the pixel span of one base unit at the current zoom
//! - Determining which tick indices intersect the visible strip
//! - Converting tick indices to time values and strip positions
//! - Converting a pointer x coordinate back to an absolute timeline offset
//!
//! Labels and marks share [`tick_screen_position`], so a label is always
//! centred exactly over its major mark.

use std::ops::Range;

use crate::scale::ScaleConfig;

/// Returns the pixel span of one base tick unit at the current zoom.
///
/// # Arguments
/// * `scale` - Zoom, unit and segment configuration
/// * `base_pixels_per_frame` - Pixels per base unit at zoom 1.0
pub fn zoom_unit(scale: &ScaleConfig, base_pixels_per_frame: f32) -> f32 {
    scale.unit() * scale.zoom() * base_pixels_per_frame
}

/// Returns the half-open range of tick indices that can appear in the strip.
///
/// The lower bound is clamped to zero because timeline time starts at zero.
/// A zero-width viewport or a degenerate `zoom_unit` yields an empty range.
///
/// # Arguments
/// * `scroll_offset` - Pixels scrolled
/// * `viewport_width` - Visible width in pixels
/// * `zoom_unit` - Pixel span of one tick index
pub fn visible_index_range(scroll_offset: f32, viewport_width: u32, zoom_unit: f32) -> Range<u64> {
    if viewport_width == 0 || !zoom_unit.is_finite() || zoom_unit <= 0.0 {
        return 0..0;
    }
    let min_index = (scroll_offset / zoom_unit).floor().max(0.0);
    let max_index = ((scroll_offset + viewport_width as f32) / zoom_unit).ceil();
    if max_index < min_index {
        return 0..0;
    }
    min_index as u64..max_index as u64 + 1
}

/// Returns how many tick indices to advance so consecutive drawn ticks are
/// at least `min_spacing` pixels apart. Always at least 1.
pub fn index_stride(zoom_unit: f32, min_spacing: f32) -> u64 {
    if !zoom_unit.is_finite() || zoom_unit <= 0.0 || !(zoom_unit < min_spacing) {
        return 1;
    }
    ((min_spacing as f64 / zoom_unit as f64).ceil() as u64).max(1)
}

/// Returns the time value represented by a tick index.
///
/// This is `index * zoom_unit / zoom`, i.e. `index * unit * base_pixels_per_frame`.
pub fn tick_time_value(index: u64, zoom_unit: f32, zoom: f32) -> f64 {
    index as f64 * zoom_unit as f64 / zoom as f64
}

/// Returns the strip-relative x of a tick index, before the left margin is applied.
pub fn tick_screen_position(index: u64, zoom_unit: f32, scroll_offset: f32) -> f32 {
    (index as f64 * zoom_unit as f64 - scroll_offset as f64) as f32
}

/// Returns the offset of a sub-tick from its major tick.
pub fn sub_tick_offset(sub_index: u32, segments: u32, zoom_unit: f32) -> f32 {
    if segments == 0 {
        return 0.0;
    }
    sub_index as f32 * zoom_unit / segments as f32
}

/// Checks whether a tick position is within one tick-width of the strip.
pub fn within_slack(position: f32, viewport_width: u32, zoom_unit: f32) -> bool {
    position >= -zoom_unit && position <= viewport_width as f32 + zoom_unit
}

/// Converts a pointer x coordinate into an absolute timeline-pixel offset.
///
/// Returns `None` if the pointer is left of the timeline origin.
///
/// # Arguments
/// * `client_x` - Pointer x in the same space as `region_left`
/// * `region_left` - Left edge of the interactive region
/// * `leading_offset` - Visual start margin of the ruler
/// * `scroll_offset` - Pixels scrolled
pub fn screen_to_timeline(
    client_x: f32,
    region_left: f32,
    leading_offset: f32,
    scroll_offset: f32,
) -> Option<f32> {
    let relative_position = client_x - region_left - leading_offset;
    if relative_position < 0.0 || !relative_position.is_finite() {
        return None;
    }
    Some(relative_position + scroll_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(zoom: f32, unit: f32, segments: u32) -> ScaleConfig {
        ScaleConfig::new(zoom, unit, segments).unwrap()
    }

    #[test]
    fn test_zoom_unit() {
        assert_eq!(zoom_unit(&scale(1.0, 1000.0, 4), 1.0), 1000.0);
        assert_eq!(zoom_unit(&scale(0.1, 1000.0, 4), 1.0), 100.0);
        assert_eq!(zoom_unit(&scale(2.0, 50.0, 4), 0.5), 50.0);
    }

    #[test]
    fn test_visible_index_range() {
        assert_eq!(visible_index_range(0.0, 500, 100.0), 0..6);
        assert_eq!(visible_index_range(250.0, 500, 100.0), 2..9);
        assert_eq!(visible_index_range(0.0, 0, 100.0), 0..0);
        assert_eq!(visible_index_range(0.0, 500, 0.0), 0..0);
        assert_eq!(visible_index_range(0.0, 500, f32::NAN), 0..0);
    }

    #[test]
    fn test_index_stride() {
        assert_eq!(index_stride(100.0, 2.0), 1);
        assert_eq!(index_stride(2.0, 2.0), 1);
        assert_eq!(index_stride(0.5, 2.0), 4);
        assert_eq!(index_stride(0.3, 2.0), 7);
        assert_eq!(index_stride(0.0001, 2.0), 20_000);
        assert_eq!(index_stride(0.0, 2.0), 1);
        assert_eq!(index_stride(1.0, f32::NAN), 1);
    }

    #[test]
    fn test_time_value_and_position() {
        assert_eq!(tick_time_value(3, 100.0, 0.1), 3000.0);
        assert_eq!(tick_screen_position(3, 100.0, 0.0), 300.0);
        assert_eq!(tick_screen_position(3, 100.0, 250.0), 50.0);
        assert_eq!(sub_tick_offset(2, 4, 100.0), 50.0);
        assert_eq!(sub_tick_offset(2, 0, 100.0), 0.0);
    }

    #[test]
    fn test_within_slack() {
        assert!(within_slack(-100.0, 500, 100.0));
        assert!(!within_slack(-100.5, 500, 100.0));
        assert!(within_slack(600.0, 500, 100.0));
        assert!(!within_slack(600.5, 500, 100.0));
    }

    #[test]
    fn test_screen_to_timeline() {
        assert_eq!(screen_to_timeline(50.0, 0.0, 10.0, 0.0), Some(40.0));
        assert_eq!(screen_to_timeline(50.0, 0.0, 10.0, 200.0), Some(240.0));
        assert_eq!(screen_to_timeline(10.0, 0.0, 10.0, 0.0), Some(0.0));
        assert_eq!(screen_to_timeline(9.0, 0.0, 10.0, 500.0), None);
        assert_eq!(screen_to_timeline(105.0, 100.0, 10.0, 0.0), None);
    }

    #[test]
    fn test_round_trip_tick_to_timeline() {
        let zu = 123.4;
        let scroll = 517.0;
        let region_left = 40.0;
        let offset = 20.0;
        for index in 5..12u64 {
            let screen = tick_screen_position(index, zu, scroll);
            let mapped = screen_to_timeline(screen + region_left + offset, region_left, offset, scroll)
                .unwrap();
            assert!((mapped - index as f32 * zu).abs() < 0.01, "index {}", index);
        }
    }
}
