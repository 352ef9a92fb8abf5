pub mod config;
pub mod domain;
pub mod input;
pub mod media;
pub mod rendering;
pub mod ruler;
pub mod scale;
pub mod state;
pub mod theme;
pub mod utils;
pub mod widget;

// Export the component and its inputs
pub use ruler::{LabelFormat, SeekCallback, TimeRuler};
pub use config::RulerConfig;
pub use scale::ScaleConfig;
pub use state::ViewportState;

// Export rendering types
pub use rendering::{Canvas, DrawCommand, Surface, SurfaceManager, SurfaceSize};
pub use rendering::{TickKind, TickLabel, TickLayout, TickMark};

// Export gesture handling
pub use input::{DocumentEvent, DocumentListeners, DragState, GestureInterpreter, GestureOutcome, ListenerKind};

// Export palettes and formatters
pub use theme::{PaletteManager, RulerPalette, hex_to_color32, with_alpha};
pub use utils::{format_frame_count, format_timestamp};

// Export demo media catalog
pub use media::{MediaAsset, demo_media, find_media};
