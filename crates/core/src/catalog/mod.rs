//! Catalog module - static goal, racer, temptation and mini-game definitions.

mod catalog_data;
mod catalog_model;

pub use catalog_data::Catalog;
pub use catalog_model::{AiRacerProfile, Goal, MiniGame, MiniGameKind, Temptation};
