use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::GameStateDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::game_state::dsl::*;
use piggybank_core::errors::Result;
use piggybank_core::state::StateRepositoryTrait;

pub struct GameStateRepository {
    pool: Arc<DbPool>,
}

impl GameStateRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        GameStateRepository { pool }
    }
}

impl StateRepositoryTrait for GameStateRepository {
    fn load_state(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        game_state
            .find(key)
            .select(state_json)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn save_state(&self, key: &str, blob: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(game_state)
            .values(&GameStateDB {
                storage_key: key.to_string(),
                state_json: blob.to_string(),
                updated_at: Utc::now().naive_utc(),
            })
            .execute(&mut conn)
            .into_core()?;
        debug!("Saved game state under '{}' ({} bytes)", key, blob.len());
        Ok(())
    }

    fn delete_state(&self, key: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(game_state.find(key))
            .execute(&mut conn)
            .into_core()?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations};
    use chrono::NaiveDate;
    use piggybank_core::constants::STORAGE_KEY;
    use piggybank_core::events::NoOpGameEventSink;
    use piggybank_core::{Catalog, GameSettings, SavingsEngine};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    /// Creates a repository over a fresh temp database.
    /// Returns the temp dir too so it outlives the pool.
    fn create_test_repository() -> (GameStateRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = init(&db_path.to_string_lossy()).expect("Failed to init database");

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        (GameStateRepository::new(pool), temp_dir)
    }

    #[test]
    fn test_load_missing_key_returns_none() {
        let (repo, _dir) = create_test_repository();
        assert_eq!(repo.load_state(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_save_replaces_previous_blob() {
        let (repo, _dir) = create_test_repository();
        repo.save_state(STORAGE_KEY, r#"{"currentSavings":1}"#).unwrap();
        repo.save_state(STORAGE_KEY, r#"{"currentSavings":2}"#).unwrap();

        assert_eq!(
            repo.load_state(STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"currentSavings":2}"#)
        );
    }

    #[test]
    fn test_delete_state() {
        let (repo, _dir) = create_test_repository();
        repo.save_state(STORAGE_KEY, "{}").unwrap();

        assert!(repo.delete_state(STORAGE_KEY).unwrap());
        assert!(!repo.delete_state(STORAGE_KEY).unwrap());
        assert_eq!(repo.load_state(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_engine_progress_survives_reopen() {
        let (repo, _dir) = create_test_repository();
        let repo = Arc::new(repo);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let mut engine = SavingsEngine::open(
            Arc::new(Catalog::builtin()),
            GameSettings::default(),
            repo.clone(),
            Arc::new(NoOpGameEventSink),
            today,
        )
        .unwrap();
        engine.select_goal("headphones").unwrap();
        engine.credit_allowance(today).unwrap();
        engine.complete_chore();
        drop(engine);

        let reopened = SavingsEngine::open(
            Arc::new(Catalog::builtin()),
            GameSettings::default(),
            repo,
            Arc::new(NoOpGameEventSink),
            today,
        )
        .unwrap();
        assert_eq!(reopened.state().current_savings, dec!(3));
        assert_eq!(reopened.state().target_amount, dec!(75));
        assert_eq!(reopened.state().last_allowance_date, Some(today));
    }
}
