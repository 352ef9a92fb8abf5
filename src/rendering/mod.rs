//! Rendering subsystem for the ruler strip.
//!
//! - Surface abstraction and the display-list canvas
//! - Surface manager (keeps the backing buffer sized to the container)
//! - Tick renderer (labels, major and minor marks)

pub mod surface;
pub mod surface_manager;
pub mod tick_renderer;

pub use surface::{Canvas, DrawCommand, Surface};
pub use surface_manager::{SurfaceManager, SurfaceSize};
pub use tick_renderer::{TickKind, TickLabel, TickLayout, TickMark};
