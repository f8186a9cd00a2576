use std::sync::Arc;

use piggybank_core::events::GameEventSink;
use piggybank_core::simulation::{BatchDecisions, DailySimulationDriver};
use piggybank_core::state::StateRepositoryTrait;
use piggybank_core::utils::time_utils::local_today;
use piggybank_core::{Catalog, SavingsEngine};
use piggybank_storage_sqlite::{db, GameStateRepository};
use tokio::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::game_events::ConsoleEventSink;

pub struct AppState {
    pub engine: Arc<Mutex<SavingsEngine>>,
    pub event_sink: Arc<ConsoleEventSink>,
    pub driver: DailySimulationDriver,
    pub decisions: BatchDecisions,
    pub seed: u64,
}

pub fn init_tracing() {
    let log_format = std::env::var("PB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    tracing::info!("Using game database at {}", db_path);

    let repository: Arc<dyn StateRepositoryTrait> = Arc::new(GameStateRepository::new(pool));
    let event_sink = Arc::new(ConsoleEventSink::new());
    let sink: Arc<dyn GameEventSink> = event_sink.clone();

    let today = config.start_date.unwrap_or_else(local_today);
    let engine = SavingsEngine::open(
        Arc::new(Catalog::builtin()),
        config.game.clone(),
        repository,
        sink,
        today,
    )?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Simulation seed: {}", seed);
    let driver = DailySimulationDriver::from_seed(config.simulation.clone(), seed)?;
    let decisions = BatchDecisions::from_seed(config.batch.clone(), seed.wrapping_add(1))?;

    Ok(AppState {
        engine: Arc::new(Mutex::new(engine)),
        event_sink,
        driver,
        decisions,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use piggybank_core::state::GamePhase;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn test_config(db_path: &str) -> Config {
        let db_path = db_path.to_string();
        Config::from_lookup(move |key| match key {
            "PB_DB_PATH" => Some(db_path.clone()),
            "PB_SEED" => Some("7".to_string()),
            "PB_START_DATE" => Some("2024-03-01".to_string()),
            _ => None,
        })
    }

    #[tokio::test]
    async fn test_build_state_restores_saved_game() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("nested").join("game.db");
        let config = test_config(&db_path.to_string_lossy());
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let state = build_state(&config).expect("Failed to build app state");
        assert_eq!(state.seed, 7);
        {
            let mut engine = state.engine.lock().await;
            assert_eq!(engine.state().game_phase, GamePhase::GoalSelection);
            assert_eq!(engine.state().last_interest_date, Some(today));
            engine.select_goal("book").unwrap();
            engine.credit_allowance(today).unwrap();
            engine.complete_chore();
        }
        drop(state);

        let reopened = build_state(&config).expect("Failed to reopen app state");
        let engine = reopened.engine.lock().await;
        assert_eq!(engine.state().current_goal.as_ref().unwrap().id, "book");
        assert_eq!(engine.state().current_savings, dec!(3));
        assert_eq!(engine.state().last_allowance_date, Some(today));
        assert!(db_path.exists());
    }
}
