//! Input handling subsystem for the ruler.
//!
//! - Document-scope listener table with dispatch and RAII registrations
//! - Gesture interpreter (click-to-seek, drag-to-scrub)

pub mod document;
pub mod gesture;

pub use document::{DocumentEvent, DocumentListeners, ListenerId, ListenerKind, ListenerRegistration};
pub use gesture::{DragSession, DragState, GestureInterpreter, GestureOutcome};
