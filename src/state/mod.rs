//! State owned by the ruler between redraws.
//!
//! - Viewport state (scroll offset, visible width, strip height)

mod viewport;

pub use viewport::ViewportState;
