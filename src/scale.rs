//! Zoom/unit/subdivision configuration read by the ruler on every redraw.
//!
//! The host application's state container owns the scale; the ruler only
//! reads it. Construction through [`ScaleConfig::new`] enforces the
//! invariants the tick math relies on (a strictly positive pixel span per unit).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Zoom factor, base time unit and number of sub-ticks per major tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Pixels-per-unit multiplier
    zoom: f32,
    /// Base time per tick step, in the host's time unit (milliseconds by default)
    unit: f32,
    /// Sub-ticks drawn per major tick (the major one included)
    segments: u32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            zoom: 0.1,
            unit: 1000.0,
            segments: 10,
        }
    }
}

impl ScaleConfig {
    /// Creates a validated scale.
    ///
    /// # Errors
    /// Fails if `zoom` or `unit` is not a finite positive number, or if
    /// `segments` is zero.
    pub fn new(zoom: f32, unit: f32, segments: u32) -> Result<Self> {
        if !zoom.is_finite() || zoom <= 0.0 {
            bail!("zoom must be a finite positive number, got {}", zoom);
        }
        if !unit.is_finite() || unit <= 0.0 {
            bail!("unit must be a finite positive number, got {}", unit);
        }
        if segments == 0 {
            bail!("segments must be at least 1");
        }
        Ok(Self { zoom, unit, segments })
    }

    /// Re-checks the invariants, e.g. after deserializing from storage.
    pub fn validated(self) -> Result<Self> {
        Self::new(self.zoom, self.unit, self.segments)
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn unit(&self) -> f32 {
        self.unit
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Returns a copy with a different zoom, keeping the old one if the new
    /// value would break the invariants.
    pub fn with_zoom(self, zoom: f32) -> Self {
        Self::new(zoom, self.unit, self.segments).unwrap_or(self)
    }
}
