//! Savings module - the engine that owns every money-state transition.

mod savings_model;
mod savings_service;


pub use savings_model::{
    Credited, GameStatus, MiniGameOutcome, ProgressUpdate, TemptationChoice, TemptationOutcome,
};
pub use savings_service::SavingsEngine;
