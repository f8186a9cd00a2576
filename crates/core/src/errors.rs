//! Core error types for the Piggy Bank Race game.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::MiniGameKind;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the game core.
///
/// Engine rejections live in [`SavingsError`]; none of them is fatal and
/// none of them mutates the game state.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Savings operation rejected: {0}")]
    Savings(#[from] SavingsError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns the engine rejection carried by this error, if any.
    pub fn as_savings(&self) -> Option<&SavingsError> {
        match self {
            Error::Savings(e) => Some(e),
            _ => None,
        }
    }
}

/// Recoverable rejections reported by the savings engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SavingsError {
    #[error("Goal '{0}' is not in the catalog")]
    InvalidGoal(String),

    #[error("Allowance already collected on {0}")]
    AlreadyCollected(NaiveDate),

    #[error("Interest is not due yet: {days_elapsed} of {days_required} days elapsed")]
    TooSoon {
        days_elapsed: i64,
        days_required: u32,
    },

    #[error("Insufficient funds: need ${required}, have ${available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Temptation '{0}' is not in the catalog")]
    UnknownTemptation(String),

    #[error("Mini-game '{0}' is not in the catalog")]
    UnknownMiniGame(MiniGameKind),
}

/// Storage-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for persisted data and user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),

    #[error("Malformed game state: {0}")]
    MalformedState(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::MalformedState(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Database(DatabaseError::Internal(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
