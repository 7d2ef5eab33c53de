// File: crates/chart-core/src/events.rs
// Summary: Change notification for renderers and annotations.

use std::cell::{Cell, RefCell};
use std::fmt;

/// Handle returned by [`ChangeNotifier::add`]; pass it back to detach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Fired when a renderer property changes in a way that needs a redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RendererChangeEvent {
    /// Set when series visibility changed, so data bounds may need recomputing.
    pub series_visibility_changed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnnotationChangeEvent;

/// Listener registry. Listeners must not register or remove listeners on the
/// same notifier from inside a callback.
pub struct ChangeNotifier<E> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Box<dyn Fn(&E)>)>>,
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self { next_id: Cell::new(0), listeners: RefCell::new(Vec::new()) }
    }
}

impl<E> fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier").field("listeners", &self.len()).finish()
    }
}

impl<E> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: impl Fn(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    /// Detach a listener. Returns false when `id` was not registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn fire(&self, event: &E) {
        for (_, listener) in self.listeners.borrow().iter() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
