//! Console game event sink implementation.

use std::sync::{Mutex, PoisonError};

use piggybank_core::events::{GameEvent, GameEventSink};
use tokio::sync::mpsc;

/// Queues engine events for the console renderer.
///
/// Events emitted before the receiver is taken are buffered in the channel.
pub struct ConsoleEventSink {
    tx: mpsc::UnboundedSender<GameEvent>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<GameEvent>>>,
}

impl ConsoleEventSink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Hands out the receiving end. Returns `None` after the first call.
    pub fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<GameEvent>> {
        self.rx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Default for ConsoleEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventSink for ConsoleEventSink {
    fn emit(&self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("Console event receiver dropped; event discarded");
        }
    }
}
