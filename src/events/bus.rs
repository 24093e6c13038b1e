//! Listener registry.
//!
//! Listeners are plain callbacks. Delivery is synchronous and follows
//! registration order; there is no queue.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::event::GameEvent;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Listener<T> = Box<dyn FnMut(&GameEvent<T>)>;

/// Ordered list of event listeners.
pub struct EventBus<T> {
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_id: u32,
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> EventBus<T> {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It receives every later event.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent<T>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener in registration order.
    pub fn emit(&mut self, event: GameEvent<T>) {
        trace!(kind = ?event.kind(), listeners = self.listeners.len(), "emit");
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.listeners.iter().map(|(id, _)| *id).collect();
        f.debug_struct("EventBus").field("listeners", &ids).finish()
    }
}
