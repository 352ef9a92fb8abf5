//! Pointer gesture handling for click-to-seek and drag-to-scrub.
//!
//! The interpreter is a two-state machine:
//! - `Idle`: only a press over the ruler's interactive region does anything
//! - `Dragging`: move and release handlers are registered with the document;
//!   they queue what the document dispatches, every queued move maps to a
//!   seek, and the first queued release returns to `Idle`
//!
//! Leaving `Dragging` drops the [`DragSession`], which drops its listener
//! registrations. Dropping the interpreter does the same.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::domain::ruler_geometry;

use super::document::{DocumentEvent, DocumentListeners, ListenerKind, ListenerRegistration};

type Inbox = Rc<RefCell<VecDeque<DocumentEvent>>>;

/// Listeners held for the lifetime of one press-to-release gesture.
#[derive(Debug)]
pub struct DragSession {
    _move_listener: ListenerRegistration,
    _release_listener: ListenerRegistration,
    /// Events delivered by the document, in dispatch order
    inbox: Inbox,
    /// Pointer x of the press that opened the session
    press_x: f32,
}

impl DragSession {
    fn begin(document: &DocumentListeners, press_x: f32) -> Self {
        let inbox: Inbox = Rc::default();
        let move_inbox = inbox.clone();
        let release_inbox = inbox.clone();
        Self {
            _move_listener: document.register(ListenerKind::PointerMove, move |event| {
                move_inbox.borrow_mut().push_back(*event)
            }),
            _release_listener: document.register(ListenerKind::PointerRelease, move |event| {
                release_inbox.borrow_mut().push_back(*event)
            }),
            inbox,
            press_x,
        }
    }

    pub fn press_x(&self) -> f32 {
        self.press_x
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What the queued document events amounted to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureOutcome {
    /// Absolute timeline-pixel offsets, one per move past the origin
    pub seeks: Vec<f32>,
    /// True if a release ended the session
    pub released: bool,
}

/// Converts pointer events into absolute timeline-pixel positions.
#[derive(Debug)]
pub struct GestureInterpreter {
    document: DocumentListeners,
    /// Visual start margin subtracted from every pointer x
    leading_offset: f32,
    state: DragState,
}

impl GestureInterpreter {
    pub fn new(document: DocumentListeners, leading_offset: f32) -> Self {
        Self {
            document,
            leading_offset,
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The document this interpreter registers its drag listeners with.
    pub fn document(&self) -> &DocumentListeners {
        &self.document
    }

    pub fn set_leading_offset(&mut self, leading_offset: f32) {
        self.leading_offset = leading_offset;
    }

    /// Maps a pointer x to an absolute timeline-pixel offset.
    ///
    /// Returns `None` when the pointer is left of the timeline origin.
    pub fn map_screen_to_timeline(&self, client_x: f32, region_left: f32, scroll_offset: f32) -> Option<f32> {
        ruler_geometry::screen_to_timeline(client_x, region_left, self.leading_offset, scroll_offset)
    }

    /// Handles a press over the interactive region.
    ///
    /// Opens a drag session (replacing any stale one) and maps the press
    /// position. The caller routes only presses that land on the region.
    pub fn press(&mut self, client_x: f32, region_left: f32, scroll_offset: f32) -> Option<f32> {
        // Dropping the old session first keeps at most one listener pair alive.
        self.state = DragState::Idle;
        self.state = DragState::Dragging(DragSession::begin(&self.document, client_x));
        log::debug!("Ruler drag started at x={}", client_x);
        self.map_screen_to_timeline(client_x, region_left, scroll_offset)
    }

    /// Consumes the events the document delivered to this session.
    ///
    /// Moves map to seeks in order; the first release ends the session and
    /// anything queued after it is discarded.
    pub fn process_document_events(&mut self, region_left: f32, scroll_offset: f32) -> GestureOutcome {
        let events: Vec<DocumentEvent> = match &self.state {
            DragState::Dragging(session) => session.inbox.borrow_mut().drain(..).collect(),
            DragState::Idle => return GestureOutcome::default(),
        };

        let mut outcome = GestureOutcome::default();
        for event in events {
            match event {
                DocumentEvent::PointerMove { x } => {
                    if let Some(position) = self.map_screen_to_timeline(x, region_left, scroll_offset) {
                        outcome.seeks.push(position);
                    }
                }
                DocumentEvent::PointerRelease => {
                    outcome.released = true;
                    break;
                }
            }
        }
        if outcome.released {
            self.end_session();
        }
        outcome
    }

    /// Ends any active session without waiting for a release.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.end_session();
        }
    }

    fn end_session(&mut self) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.state) {
            log::debug!("Ruler drag ended (started at x={})", session.press_x());
        }
    }
}
