//! Piggy Bank Race Core - savings rules, catalog data, and the daily simulation.
//!
//! This crate owns every money-affecting rule of the game. It is storage-agnostic
//! and defines the `StateRepositoryTrait` that is implemented by the
//! `storage-sqlite` crate, and the `GameEventSink` trait implemented by
//! presentation adapters.

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod events;
pub mod minigames;
pub mod savings;
pub mod settings;
pub mod simulation;
pub mod state;
pub mod utils;

// Re-export the engine surface
pub use catalog::Catalog;
pub use savings::SavingsEngine;
pub use settings::GameSettings;
pub use state::GameState;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
