use crate::catalog::{MiniGame, Temptation};
use crate::minigames::{MiniGameAnswer, MiniGamePuzzle};
use crate::savings::TemptationChoice;
use crate::state::GameState;

/// Player choices requested by the daily simulation driver.
pub trait DayDecisions {
    /// Whether the offered chore gets done today.
    fn accept_chore(&mut self, state: &GameState) -> bool;

    fn temptation_choice(&mut self, temptation: &Temptation, state: &GameState)
        -> TemptationChoice;

    /// The player's answer to a surfaced mini-game. Correctness is checked by
    /// the driver, never by the implementation.
    fn answer_mini_game(&mut self, game: &MiniGame, puzzle: &MiniGamePuzzle) -> MiniGameAnswer;
}
