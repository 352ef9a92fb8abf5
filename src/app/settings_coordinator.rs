//! Demo preference persistence.
//!
//! Stores serializable settings as JSON strings in eframe's persistent
//! storage. Stored scales are re-validated on load so a corrupted entry
//! falls back to the default instead of breaking the ruler.

use serde::{Deserialize, Serialize};
use timeruler::ScaleConfig;

pub const SCALE_KEY: &str = "ruler_scale";
pub const PALETTE_KEY: &str = "ruler_palette";

/// Coordinates loading and saving of demo preferences.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `default` if it is missing or invalid.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    /// Saves a setting as JSON.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => log::warn!("Failed to save setting {}: {}", key, e),
        }
    }

    /// Loads the stored scale, or the default if it is missing or breaks the scale invariants.
    pub fn load_scale(storage: Option<&dyn eframe::Storage>) -> ScaleConfig {
        Self::try_load_setting::<ScaleConfig>(storage, SCALE_KEY)
            .and_then(|scale| match scale.validated() {
                Ok(scale) => Some(scale),
                Err(e) => {
                    log::warn!("Ignoring stored ruler scale: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    }
}
