use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::simulation_traits::DayDecisions;
use crate::catalog::{MiniGame, Temptation};
use crate::errors::Result;
use crate::minigames::{MiniGameAnswer, MiniGamePuzzle};
use crate::savings::TemptationChoice;
use crate::settings::BatchDecisionSettings;
use crate::state::GameState;

/// Simulated player for unattended runs.
///
/// Owns its own random stream so player behaviour never shifts which events
/// the driver surfaces. Mini-games are answered correctly with each game's
/// catalog success rate.
pub struct BatchDecisions<R: Rng = StdRng> {
    settings: BatchDecisionSettings,
    rng: R,
}

impl BatchDecisions<StdRng> {
    pub fn from_seed(settings: BatchDecisionSettings, seed: u64) -> Result<Self> {
        Self::new(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BatchDecisions<R> {
    pub fn new(settings: BatchDecisionSettings, rng: R) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings, rng })
    }
}

impl<R: Rng> DayDecisions for BatchDecisions<R> {
    fn accept_chore(&mut self, _state: &GameState) -> bool {
        self.rng.gen_bool(self.settings.chore_acceptance)
    }

    fn temptation_choice(
        &mut self,
        temptation: &Temptation,
        _state: &GameState,
    ) -> TemptationChoice {
        let choice = if self.rng.gen_bool(self.settings.save_probability) {
            TemptationChoice::Save
        } else {
            TemptationChoice::Spend
        };
        debug!("Simulated player chose {:?} for {}", choice, temptation.item);
        choice
    }

    fn answer_mini_game(&mut self, game: &MiniGame, puzzle: &MiniGamePuzzle) -> MiniGameAnswer {
        let success_rate = if game.success_rate.is_finite() {
            game.success_rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if self.rng.gen_bool(success_rate) {
            puzzle.solution()
        } else {
            puzzle.wrong_answer()
        }
    }
}
