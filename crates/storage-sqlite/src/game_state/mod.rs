//! SQLite storage implementation for the persisted game state.

mod model;
mod repository;

pub use model::GameStateDB;
pub use repository::GameStateRepository;

// Re-export trait from core for convenience
pub use piggybank_core::state::StateRepositoryTrait;
