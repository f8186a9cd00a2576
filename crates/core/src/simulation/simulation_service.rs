use chrono::NaiveDate;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use super::simulation_model::{DayReport, MiniGameReport, TemptationReport};
use super::simulation_traits::DayDecisions;
use crate::constants::{RACER_FACTOR_MAX, RACER_FACTOR_MIN, RACER_FACTOR_PRECISION};
use crate::errors::{Error, Result, SavingsError};
use crate::minigames::generate_puzzle;
use crate::savings::{Credited, SavingsEngine};
use crate::settings::SimulationSettings;
use crate::utils::money::decimal_from_f64;
use crate::utils::time_utils::consecutive_days;

/// Sequences one simulated day of engine calls.
///
/// `event_rng` decides which temptation or mini-game shows up and generates
/// puzzles. `racer_rng` only feeds the cosmetic AI racer noise, so changing
/// how often racers tick never changes which events the player sees.
pub struct DailySimulationDriver<R: Rng = StdRng> {
    settings: SimulationSettings,
    event_rng: R,
    racer_rng: R,
}

impl DailySimulationDriver<StdRng> {
    /// Derives both random streams from a single seed.
    pub fn from_seed(settings: SimulationSettings, seed: u64) -> Result<Self> {
        let mut master = StdRng::seed_from_u64(seed);
        let event_rng = StdRng::seed_from_u64(master.gen());
        let racer_rng = StdRng::seed_from_u64(master.gen());
        Self::new(settings, event_rng, racer_rng)
    }
}

impl<R: Rng> DailySimulationDriver<R> {
    pub fn new(settings: SimulationSettings, event_rng: R, racer_rng: R) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            event_rng,
            racer_rng,
        })
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Runs the daily protocol for `today`.
    ///
    /// An allowance already collected today and interest that is not due yet
    /// are reported as `None`; any other engine error is returned.
    pub fn step(
        &mut self,
        engine: &mut SavingsEngine,
        today: NaiveDate,
        decisions: &mut dyn DayDecisions,
    ) -> Result<DayReport> {
        let allowance = if engine.state().last_allowance_date == Some(today) {
            None
        } else {
            skip_rejection(engine.credit_allowance(today))?
        };

        let interest = skip_rejection(engine.credit_weekly_interest(today))?;

        let chore = if decisions.accept_chore(engine.state()) {
            Some(engine.complete_chore())
        } else {
            None
        };

        let temptation = if self.event_rng.gen_bool(self.settings.temptation_probability) {
            self.surface_temptation(engine, decisions)?
        } else {
            None
        };

        let mini_game = if self.event_rng.gen_bool(self.settings.mini_game_probability) {
            self.surface_mini_game(engine, decisions)?
        } else {
            None
        };

        let racer_rng = &mut self.racer_rng;
        let racers = engine
            .advance_ai_racers(|| sample_racer_factor(racer_rng))
            .to_vec();

        let report = DayReport {
            date: today,
            allowance,
            interest,
            chore,
            temptation,
            mini_game,
            racers,
            status: engine.status(),
        };
        debug!(
            "Simulated {}: savings ${} ({}%)",
            today, report.status.savings, report.status.progress_percent
        );
        Ok(report)
    }

    /// Steps `days` consecutive dates from `start`, stopping after the day a
    /// goal is completed.
    pub fn run(
        &mut self,
        engine: &mut SavingsEngine,
        start: NaiveDate,
        days: u32,
        decisions: &mut dyn DayDecisions,
    ) -> Result<Vec<DayReport>> {
        let mut reports = Vec::new();
        for today in consecutive_days(start, days) {
            let report = self.step(engine, today, decisions)?;
            let completed = report.completed_goal().is_some();
            reports.push(report);
            if completed {
                info!("Goal completed on {}, stopping simulation", today);
                break;
            }
        }
        Ok(reports)
    }

    fn surface_temptation(
        &mut self,
        engine: &mut SavingsEngine,
        decisions: &mut dyn DayDecisions,
    ) -> Result<Option<TemptationReport>> {
        let Some(temptation) = engine.catalog().temptations.choose(&mut self.event_rng).cloned()
        else {
            return Ok(None);
        };
        let choice = decisions.temptation_choice(&temptation, engine.state());

        match engine.resolve_temptation(&temptation.id, choice) {
            Ok(outcome) => Ok(Some(TemptationReport::Resolved { outcome })),
            Err(Error::Savings(SavingsError::InsufficientFunds {
                required,
                available,
            })) => {
                debug!("Could not afford {} (${})", temptation.item, required);
                Ok(Some(TemptationReport::Unaffordable {
                    temptation,
                    choice,
                    required,
                    available,
                }))
            }
            Err(e) => Err(e),
        }
    }

    fn surface_mini_game(
        &mut self,
        engine: &mut SavingsEngine,
        decisions: &mut dyn DayDecisions,
    ) -> Result<Option<MiniGameReport>> {
        let Some(game) = engine.catalog().mini_games.choose(&mut self.event_rng).cloned() else {
            return Ok(None);
        };
        let puzzle = generate_puzzle(game.kind, &mut self.event_rng);
        let answer = decisions.answer_mini_game(&game, &puzzle);
        let outcome = engine.resolve_mini_game(game.kind, puzzle.check(&answer))?;

        Ok(Some(MiniGameReport {
            puzzle,
            answer,
            outcome,
        }))
    }
}

/// Maps the two expected daily rejections to `None`.
fn skip_rejection(result: Result<Credited>) -> Result<Option<Credited>> {
    match result {
        Ok(credited) => Ok(Some(credited)),
        Err(Error::Savings(SavingsError::AlreadyCollected(_) | SavingsError::TooSoon { .. })) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Uniform AI racer progress multiplier in `[0.75, 1.25)`.
pub fn sample_racer_factor<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let unit = decimal_from_f64(rng.gen::<f64>(), RACER_FACTOR_PRECISION).unwrap_or_default();
    RACER_FACTOR_MIN + (RACER_FACTOR_MAX - RACER_FACTOR_MIN) * unit
}
