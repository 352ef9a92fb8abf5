//! Document-scope pointer listener table.
//!
//! Pointer moves and releases that happen anywhere in the window are sent
//! through [`DocumentListeners::dispatch`], which delivers each event only to
//! the handlers currently registered for its kind. A handler stays registered
//! while its [`ListenerRegistration`] lives; dropping the registration removes
//! it, so no handler can outlive the session or component that owns it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Pointer events delivered at document scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerRelease,
}

/// A document-scope pointer event, in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentEvent {
    PointerMove { x: f32 },
    PointerRelease,
}

impl DocumentEvent {
    pub fn kind(&self) -> ListenerKind {
        match self {
            DocumentEvent::PointerMove { .. } => ListenerKind::PointerMove,
            DocumentEvent::PointerRelease => ListenerKind::PointerRelease,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Handler = Box<dyn FnMut(&DocumentEvent)>;

struct Listener {
    kind: ListenerKind,
    handler: Handler,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    registered: BTreeMap<ListenerId, Listener>,
}

/// Shared handle to the document's listener table.
///
/// Cloning shares the same table. Single-threaded: the UI event loop is the
/// only caller. Handlers must not register or dispatch from inside a dispatch.
#[derive(Clone, Default)]
pub struct DocumentListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl fmt::Debug for DocumentListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentListeners")
            .field("registered", &self.total())
            .finish()
    }
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler; it receives events until the returned guard is dropped.
    pub fn register(&self, kind: ListenerKind, handler: impl FnMut(&DocumentEvent) + 'static) -> ListenerRegistration {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.registered.insert(
            id,
            Listener {
                kind,
                handler: Box::new(handler),
            },
        );

        ListenerRegistration {
            id,
            kind,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Delivers `event` to every handler registered for its kind, in
    /// registration order. Returns the number of handlers reached.
    pub fn dispatch(&self, event: DocumentEvent) -> usize {
        let kind = event.kind();
        let mut table = self.table.borrow_mut();
        let mut delivered = 0;
        for listener in table.registered.values_mut().filter(|l| l.kind == kind) {
            (listener.handler)(&event);
            delivered += 1;
        }
        delivered
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.table.borrow().registered.contains_key(&id)
    }

    /// Returns the number of live listeners of one kind.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.table.borrow().registered.values().filter(|l| l.kind == kind).count()
    }

    /// Returns the number of live listeners of any kind.
    pub fn total(&self) -> usize {
        self.table.borrow().registered.len()
    }
}

/// RAII guard for one registered document listener.
#[derive(Debug)]
pub struct ListenerRegistration {
    id: ListenerId,
    kind: ListenerKind,
    table: Weak<RefCell<ListenerTable>>,
}

impl ListenerRegistration {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            // Take the handler out before it is dropped so its captures never
            // drop while the table is borrowed.
            let removed = table.borrow_mut().registered.remove(&self.id);
            drop(removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter(document: &DocumentListeners, kind: ListenerKind) -> (ListenerRegistration, Rc<Cell<usize>>) {
        let hits = Rc::new(Cell::new(0));
        let sink = hits.clone();
        let registration = document.register(kind, move |_| sink.set(sink.get() + 1));
        (registration, hits)
    }

    #[test]
    fn test_dispatch_reaches_only_matching_kind() {
        let document = DocumentListeners::new();
        let (_moves, move_hits) = counter(&document, ListenerKind::PointerMove);
        let (_releases, release_hits) = counter(&document, ListenerKind::PointerRelease);

        assert_eq!(document.dispatch(DocumentEvent::PointerMove { x: 3.0 }), 1);
        assert_eq!(document.dispatch(DocumentEvent::PointerMove { x: 4.0 }), 1);
        assert_eq!(document.dispatch(DocumentEvent::PointerRelease), 1);
        assert_eq!(move_hits.get(), 2);
        assert_eq!(release_hits.get(), 1);
    }

    #[test]
    fn test_dropped_registration_receives_nothing() {
        let document = DocumentListeners::new();
        let (registration, hits) = counter(&document, ListenerKind::PointerMove);
        let id = registration.id();
        assert!(document.is_registered(id));
        assert_eq!(document.count(ListenerKind::PointerMove), 1);
        assert_eq!(document.count(ListenerKind::PointerRelease), 0);

        drop(registration);
        assert!(!document.is_registered(id));
        assert_eq!(document.total(), 0);
        assert_eq!(document.dispatch(DocumentEvent::PointerMove { x: 1.0 }), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let document = DocumentListeners::new();
        let a = document.register(ListenerKind::PointerMove, |_| {});
        let b = document.register(ListenerKind::PointerMove, |_| {});
        assert_ne!(a.id(), b.id());
        assert_eq!(document.count(ListenerKind::PointerMove), 2);
    }

    #[test]
    fn test_registration_outliving_document() {
        let document = DocumentListeners::new();
        let registration = document.register(ListenerKind::PointerRelease, |_| {});
        drop(document);
        drop(registration);
    }

    #[test]
    fn test_clones_share_the_table() {
        let document = DocumentListeners::new();
        let view = document.clone();
        let (_registration, hits) = counter(&document, ListenerKind::PointerRelease);
        assert_eq!(view.count(ListenerKind::PointerRelease), 1);
        view.dispatch(DocumentEvent::PointerRelease);
        assert_eq!(hits.get(), 1);
    }
}
