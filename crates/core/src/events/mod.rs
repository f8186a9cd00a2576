//! Game events module.
//!
//! Provides the event types emitted by the savings engine and the sink trait
//! presentation adapters implement to receive them (toasts, modals, console
//! lines, ceremony screens).

mod game_event;
mod sink;

pub use game_event::*;
pub use sink::*;
