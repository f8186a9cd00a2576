//! SQLite storage implementation for the Piggy Bank Race game.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the `StateRepositoryTrait` defined in `piggybank-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The game state repository and its Diesel model
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with the repository trait.
//!
//! ```text
//!    core (rules engine)
//!          │
//!          ▼
//!  storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod game_state;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export the repository
pub use game_state::GameStateRepository;

// Re-export from piggybank-core for convenience
pub use piggybank_core::errors::{DatabaseError, Error, Result};
