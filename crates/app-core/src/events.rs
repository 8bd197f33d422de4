//! Publish/subscribe channel for cross-component notifications.
//!
//! The bus is constructed exactly once during bootstrap and passed explicitly
//! to every consumer; there is no global accessor. Single-threaded by design
//! (the wasm main thread), so interior mutability is `RefCell`, sharing is
//! `Rc`.

use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};

/// Events published on the application bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// The root view finished attaching to the mount anchor.
    ViewMounted { marker_count: usize },
    /// A marker row was clicked; `index` is the position in the deviations
    /// fixture.
    MarkerSelected { index: usize },
}

/// Opaque subscription handle returned by [`EventBus::on`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

type Handler = Box<dyn FnMut(&AppEvent)>;

#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<FnvHashMap<u64, Handler>>,
    next_id: Cell<u64>,
    // Id of the handler currently being called, and whether `off` targeted
    // it mid-delivery. Lets a handler unsubscribe itself without the bus
    // re-inserting it afterwards.
    in_flight: Cell<Option<u64>>,
    dropped_in_flight: Cell<bool>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Ids are never reused for the life of the bus.
    pub fn on(&self, handler: impl FnMut(&AppEvent) + 'static) -> HandlerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().insert(id, Box::new(handler));
        HandlerId(id)
    }

    /// Removes a handler; returns false if it was already gone.
    pub fn off(&self, id: HandlerId) -> bool {
        if self.in_flight.get() == Some(id.0) {
            self.dropped_in_flight.set(true);
            return true;
        }
        self.handlers.borrow_mut().remove(&id.0).is_some()
    }

    /// Synchronously delivers `event` to every handler registered at the
    /// time of the call, in subscription order. Handlers may call `on` and
    /// `off` during delivery; a handler subscribed mid-emit first hears the
    /// next event.
    pub fn emit(&self, event: &AppEvent) {
        let mut ids: Vec<u64> = self.handlers.borrow().keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            // Check the handler out of the map so it can re-enter the bus
            // without hitting an outstanding borrow.
            let checked_out = self.handlers.borrow_mut().remove(&id);
            let Some(mut handler) = checked_out else {
                continue;
            };
            self.in_flight.set(Some(id));
            self.dropped_in_flight.set(false);
            handler(event);
            self.in_flight.set(None);
            if !self.dropped_in_flight.get() {
                self.handlers.borrow_mut().entry(id).or_insert(handler);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}
