//! Event store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative list of committed events for one session.
//! - Provide total insert/replace/remove operations keyed by `EventId`.
//!
//! # Invariants
//! - `list()` returns insertion order; `replace` keeps the slot position.
//! - Unknown ids never fail: replace/remove report `false` and leave state as is.
//! - Ids are unique within the store.

use crate::model::event::{CalendarEvent, EventId};
use log::debug;

/// Store interface for committed calendar events.
pub trait EventRepository {
    /// All events in insertion order.
    fn list(&self) -> Vec<CalendarEvent>;
    /// Looks up one event by id.
    fn get(&self, id: EventId) -> Option<CalendarEvent>;
    /// Appends a new event.
    fn insert(&mut self, event: CalendarEvent);
    /// Substitutes the event stored under `id` with `event`, in place.
    ///
    /// Returns `false` when `id` is unknown.
    fn replace(&mut self, id: EventId, event: CalendarEvent) -> bool;
    /// Deletes the event stored under `id`.
    ///
    /// Returns `false` when `id` is unknown.
    fn remove(&mut self, id: EventId) -> bool;
    /// Number of stored events.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events intersecting the half-open window `[from, to)`, in store order.
    fn list_in_range(&self, from: i64, to: i64) -> Vec<CalendarEvent> {
        self.list()
            .into_iter()
            .filter(|event| event.overlaps(from, to))
            .collect()
    }
}

/// Session-scoped event store backed by a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryEventRepository {
    events: Vec<CalendarEvent>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }
}

impl EventRepository for InMemoryEventRepository {
    fn list(&self) -> Vec<CalendarEvent> {
        self.events.clone()
    }

    fn get(&self, id: EventId) -> Option<CalendarEvent> {
        self.events.iter().find(|event| event.id == id).cloned()
    }

    fn insert(&mut self, event: CalendarEvent) {
        debug!("event=store_insert module=store status=ok id={}", event.id);
        self.events.push(event);
    }

    fn replace(&mut self, id: EventId, event: CalendarEvent) -> bool {
        match self.position(id) {
            Some(index) => {
                debug!("event=store_replace module=store status=ok id={id}");
                self.events[index] = event;
                true
            }
            None => {
                debug!("event=store_replace module=store status=miss id={id}");
                false
            }
        }
    }

    fn remove(&mut self, id: EventId) -> bool {
        match self.position(id) {
            Some(index) => {
                debug!("event=store_remove module=store status=ok id={id}");
                self.events.remove(index);
                true
            }
            None => {
                debug!("event=store_remove module=store status=miss id={id}");
                false
            }
        }
    }

    fn len(&self) -> usize {
        self.events.len()
    }
}
