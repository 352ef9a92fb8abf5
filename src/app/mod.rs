//! Application-level modules for the ruler demo.

mod app_state;
mod settings_coordinator;

pub use app_state::{AppState, LabelMode};
pub use settings_coordinator::{SettingsCoordinator, PALETTE_KEY, SCALE_KEY};
