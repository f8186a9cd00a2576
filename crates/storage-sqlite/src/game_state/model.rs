//! Database model for the persisted game state.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// One serialized `GameState` blob per storage key
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::game_state)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GameStateDB {
    pub storage_key: String,
    pub state_json: String,
    pub updated_at: NaiveDateTime,
}
