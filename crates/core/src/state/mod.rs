//! State module - the persisted game aggregate and its storage seam.

mod memory_repository;
mod persistence;
mod state_model;
mod state_traits;

pub use memory_repository::InMemoryStateRepository;
pub use persistence::{load, serialize};
pub use state_model::{AiRacer, CompletedGoal, GamePhase, GameState};
pub use state_traits::StateRepositoryTrait;
