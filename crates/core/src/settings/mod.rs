//! Settings module - tunable game rules and simulation parameters.

mod settings_model;

pub use settings_model::{BatchDecisionSettings, GameSettings, SimulationSettings};
