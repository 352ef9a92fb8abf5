//! Numeric layout constants for the ruler strip.
//!
//! All values are externally configurable; every field falls back to its
//! default when absent, so a partial JSON document is a valid config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and font metrics of the ruler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Fixed strip height in pixels
    pub height: u32,
    /// Length of a major tick mark, measured up from the bottom edge
    pub long_tick: f32,
    /// Length of a minor tick mark
    pub short_tick: f32,
    /// Visual start margin of the timeline; also the leading offset gestures subtract
    pub left_offset: f32,
    /// Distance from the top edge to the label baseline box
    pub label_top: f32,
    /// Label font size in pixels
    pub font_size: f32,
    /// Average glyph advance as a fraction of the font size (label measurement)
    pub glyph_width_ratio: f32,
    /// Pixels spanned by one base time unit at zoom 1.0
    pub base_pixels_per_frame: f32,
    /// Stroke width of major marks
    pub major_stroke: f32,
    /// Stroke width of minor marks
    pub minor_stroke: f32,
    /// Closest two marks may be drawn; denser ticks are thinned out
    pub min_tick_spacing: f32,
    /// Minimum horizontal space between neighbouring labels
    pub label_gap: f32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            height: 30,
            long_tick: 12.0,
            short_tick: 6.0,
            left_offset: 20.0,
            label_top: 2.0,
            font_size: 10.0,
            glyph_width_ratio: 0.6,
            base_pixels_per_frame: 1.0,
            major_stroke: 1.0,
            minor_stroke: 1.0,
            min_tick_spacing: 2.0,
            label_gap: 8.0,
        }
    }
}

impl RulerConfig {
    /// Parses a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid ruler config JSON")?;
        config.check()
    }

    /// Loads a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read ruler config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("In {}", path.display()))
    }

    fn check(self) -> Result<Self> {
        anyhow::ensure!(
            self.base_pixels_per_frame.is_finite() && self.base_pixels_per_frame > 0.0,
            "base_pixels_per_frame must be positive, got {}",
            self.base_pixels_per_frame
        );
        anyhow::ensure!(
            self.font_size > 0.0 && self.glyph_width_ratio > 0.0,
            "font metrics must be positive"
        );
        anyhow::ensure!(self.left_offset.is_finite(), "left_offset must be finite");
        anyhow::ensure!(
            self.min_tick_spacing.is_finite() && self.min_tick_spacing >= 1.0,
            "min_tick_spacing must be at least 1 pixel, got {}",
            self.min_tick_spacing
        );
        anyhow::ensure!(self.label_gap.is_finite(), "label_gap must be finite");
        Ok(self)
    }
}
