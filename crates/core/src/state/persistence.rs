//! Conversion between `GameState` and its persisted JSON blob.

use super::GameState;
use crate::errors::Result;

/// Parses a persisted blob. Missing fields take their defaults and money
/// invariants are re-established.
pub fn load(blob: &str) -> Result<GameState> {
    let mut state: GameState = serde_json::from_str(blob)?;
    state.normalize();
    Ok(state)
}

/// Serializes the state into the blob format read by [`load`].
pub fn serialize(state: &GameState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}
