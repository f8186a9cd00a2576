//! Daily simulation driver.
//!
//! The only place where randomness decides which events happen. Player
//! choices come from a [`DayDecisions`] implementation: an interactive
//! adapter, or [`BatchDecisions`] for unattended runs.

mod batch_decisions;
mod simulation_model;
mod simulation_service;
mod simulation_traits;

#[cfg(test)]
mod simulation_service_tests;

pub use batch_decisions::BatchDecisions;
pub use simulation_model::{DayReport, MiniGameReport, TemptationReport};
pub use simulation_service::{sample_racer_factor, DailySimulationDriver};
pub use simulation_traits::DayDecisions;
