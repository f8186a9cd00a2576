//! Game events bridge for the console runner.
//!
//! The engine emits events synchronously while the day loop holds the engine
//! lock; the loop drains them after each step and renders them in order.

mod sink;

pub use sink::ConsoleEventSink;
