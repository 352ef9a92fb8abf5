//! Color palettes for the ruler strip.
//!
//! Built-in palettes (Light, Dark, Dracula) are looked up by name through
//! [`PaletteManager`].
//!
//! # Examples
//!
//! ```
//! use timeruler::theme::PaletteManager;
//!
//! let manager = PaletteManager::new();
//! let dracula = manager.get_palette("Dracula").unwrap();
//! println!("Dracula major tick: {:?}", dracula.major_tick);
//! ```

use anyhow::{anyhow, Result};
use egui::Color32;
use std::collections::HashMap;

/// Colors used by the tick renderer and the strip background.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerPalette {
    pub name: String,
    pub background: Color32,
    pub label: Color32,
    /// Prominent stroke for the first sub-tick of each index
    pub major_tick: Color32,
    /// Muted stroke for the remaining sub-ticks
    pub minor_tick: Color32,
}

impl Default for RulerPalette {
    fn default() -> Self {
        dark_palette()
    }
}

/// Registry of the built-in palettes with a current selection.
pub struct PaletteManager {
    palettes: HashMap<String, RulerPalette>,
    current: RulerPalette,
}

impl PaletteManager {
    /// Creates a manager with all built-in palettes; "Dark" is current.
    pub fn new() -> Self {
        let mut palettes = HashMap::new();
        for palette in [light_palette(), dark_palette(), dracula_palette()] {
            palettes.insert(palette.name.clone(), palette);
        }

        Self {
            palettes,
            current: dark_palette(),
        }
    }

    /// Retrieves a palette by name
    pub fn get_palette(&self, name: &str) -> Option<&RulerPalette> {
        self.palettes.get(name)
    }

    /// Returns all palette names, sorted
    pub fn list_palettes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.palettes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_palette(&self) -> &RulerPalette {
        &self.current
    }

    /// Selects the current palette by name
    pub fn set_current_palette(&mut self, name: &str) -> Result<()> {
        let palette = self
            .palettes
            .get(name)
            .ok_or_else(|| anyhow!("Palette '{}' not found", name))?;
        self.current = palette.clone();
        Ok(())
    }
}

impl Default for PaletteManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_palette() -> RulerPalette {
    RulerPalette {
        name: "Light".to_string(),
        background: Color32::from_rgb(248, 248, 248),
        label: Color32::from_rgb(60, 60, 60),
        major_tick: Color32::from_rgb(40, 40, 40),
        minor_tick: Color32::from_rgb(170, 170, 170),
    }
}

fn dark_palette() -> RulerPalette {
    RulerPalette {
        name: "Dark".to_string(),
        background: Color32::from_rgb(16, 16, 16),
        label: Color32::from_rgb(160, 160, 160),
        major_tick: Color32::from_rgb(220, 220, 220),
        minor_tick: Color32::from_rgb(90, 90, 90),
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_palette() -> RulerPalette {
    RulerPalette {
        name: "Dracula".to_string(),
        background: hex_to_color32("#21222c"),
        label: hex_to_color32("#f8f8f2"),
        major_tick: hex_to_color32("#bd93f9"),
        minor_tick: hex_to_color32("#6272a4"),
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    };

    if hex.len() == 6 && hex.is_ascii() {
        Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
