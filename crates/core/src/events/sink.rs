//! Game event sink trait and implementations.

use std::sync::{Arc, Mutex, PoisonError};

use super::GameEvent;

/// Trait for receiving game events.
///
/// The savings engine emits through this trait after every successful
/// mutation. `emit()` must return quickly and must never call back into
/// the engine; adapters queue events and render them afterwards.
pub trait GameEventSink: Send + Sync {
    /// Emit a single game event.
    fn emit(&self, event: GameEvent);

    /// Emit multiple game events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<GameEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpGameEventSink;

impl GameEventSink for NoOpGameEventSink {
    fn emit(&self, _event: GameEvent) {}
}

/// Collects emitted events in memory until drained.
///
/// Used by tests and by adapters that render events after each operation.
#[derive(Clone, Default)]
pub struct CollectingGameEventSink {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl CollectingGameEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all collected events.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GameEventSink for CollectingGameEventSink {
    fn emit(&self, event: GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
