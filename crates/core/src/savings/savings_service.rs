use chrono::{NaiveDate, Utc};
use log::{debug, error, info, warn};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

use super::savings_model::{
    Credited, GameStatus, MiniGameOutcome, ProgressUpdate, TemptationChoice, TemptationOutcome,
};
use crate::catalog::{Catalog, Goal, MiniGameKind, Temptation};
use crate::constants::{
    GOAL_COMPLETE_PERCENT, RACER_FACTOR_MAX, RACER_FACTOR_MIN, STORAGE_KEY,
};
use crate::errors::{Result, SavingsError};
use crate::events::{CreditSource, GameEvent, GameEventSink};
use crate::settings::GameSettings;
use crate::state::{self, AiRacer, CompletedGoal, GamePhase, GameState, StateRepositoryTrait};
use crate::utils::money::{ceil_days, round_money};
use crate::utils::time_utils::days_between;

/// The sole mutator of the player's savings.
///
/// Owns the `GameState` exclusively. Every operation is synchronous and
/// completes its persistence side effect before returning; rejected
/// operations leave the state untouched.
pub struct SavingsEngine {
    catalog: Arc<Catalog>,
    settings: GameSettings,
    state: GameState,
    repository: Arc<dyn StateRepositoryTrait>,
    event_sink: Arc<dyn GameEventSink>,
}

impl SavingsEngine {
    /// Creates an engine over an existing state.
    ///
    /// Seeds AI racers from the catalog when the state has none, and starts
    /// the interest clock at `today` when it was never started.
    pub fn new(
        catalog: Arc<Catalog>,
        settings: GameSettings,
        mut state: GameState,
        repository: Arc<dyn StateRepositoryTrait>,
        event_sink: Arc<dyn GameEventSink>,
        today: NaiveDate,
    ) -> Result<Self> {
        settings.validate()?;
        state.normalize();

        let mut engine = Self {
            catalog,
            settings,
            state,
            repository,
            event_sink,
        };
        engine.prepare_session(today);
        Ok(engine)
    }

    /// Loads the saved game from `repository`, or starts a fresh one.
    ///
    /// An unreadable blob is discarded with a warning rather than failing
    /// the session; repository errors are returned.
    pub fn open(
        catalog: Arc<Catalog>,
        settings: GameSettings,
        repository: Arc<dyn StateRepositoryTrait>,
        event_sink: Arc<dyn GameEventSink>,
        today: NaiveDate,
    ) -> Result<Self> {
        let state = match repository.load_state(STORAGE_KEY)? {
            Some(blob) => match state::load(&blob) {
                Ok(state) => {
                    info!(
                        "Loaded saved game: goal={:?}, savings={}",
                        state.current_goal.as_ref().map(|g| g.id.as_str()),
                        state.current_savings
                    );
                    state
                }
                Err(e) => {
                    warn!("Discarding unreadable saved game: {}", e);
                    GameState::default()
                }
            },
            None => {
                info!("No saved game found, starting fresh");
                GameState::default()
            }
        };

        Self::new(catalog, settings, state, repository, event_sink, today)
    }

    fn prepare_session(&mut self, today: NaiveDate) {
        if self.state.ai_racers.is_empty() {
            self.state.ai_racers = self
                .catalog
                .racers
                .iter()
                .map(AiRacer::from_profile)
                .collect();
        }
        if self.state.last_interest_date.is_none() {
            self.state.last_interest_date = Some(today);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn ai_racers(&self) -> &[AiRacer] {
        &self.state.ai_racers
    }

    /// Completed goals in the order they were reached.
    pub fn gallery(&self) -> &[CompletedGoal] {
        &self.state.completed_goals
    }

    /// Starts a fresh savings session for `goal_id`.
    ///
    /// Completed goals and AI racers are preserved.
    pub fn select_goal(&mut self, goal_id: &str) -> Result<Goal> {
        let goal = self
            .catalog
            .goal(goal_id)
            .cloned()
            .ok_or_else(|| SavingsError::InvalidGoal(goal_id.to_string()))?;

        self.state.current_goal = Some(goal.clone());
        self.state.target_amount = round_money(goal.price);
        self.state.current_savings = Decimal::ZERO;
        self.state.milestones_reached.clear();
        self.state.goal_completed = false;
        self.state.game_phase = GamePhase::Dashboard;

        info!("Goal selected: {} - target ${}", goal.name, goal.price);
        self.event_sink.emit(GameEvent::GoalSelected { goal: goal.clone() });
        self.persist();
        Ok(goal)
    }

    /// Credits the daily allowance at most once per calendar date.
    pub fn credit_allowance(&mut self, today: NaiveDate) -> Result<Credited> {
        if self.state.last_allowance_date == Some(today) {
            return Err(SavingsError::AlreadyCollected(today).into());
        }
        self.state.last_allowance_date = Some(today);
        Ok(self.credit(CreditSource::Allowance, self.settings.daily_allowance))
    }

    /// Credits the chore reward. Chores have no daily limit.
    pub fn complete_chore(&mut self) -> Credited {
        self.credit(CreditSource::Chore, self.settings.chore_reward)
    }

    pub fn resolve_temptation(
        &mut self,
        temptation_id: &str,
        choice: TemptationChoice,
    ) -> Result<TemptationOutcome> {
        let temptation = self
            .catalog
            .temptation(temptation_id)
            .cloned()
            .ok_or_else(|| SavingsError::UnknownTemptation(temptation_id.to_string()))?;

        match choice {
            TemptationChoice::Save => {
                debug!("Resisted {} (${})", temptation.item, temptation.price);
                let bonus = self.credit(CreditSource::SaveBonus, self.settings.temptation_save_bonus);
                Ok(TemptationOutcome::Saved { temptation, bonus })
            }
            TemptationChoice::Spend => self.spend(temptation),
        }
    }

    fn spend(&mut self, temptation: Temptation) -> Result<TemptationOutcome> {
        let price = round_money(temptation.price);
        let available = self.state.current_savings;
        if available < price {
            return Err(SavingsError::InsufficientFunds {
                required: price,
                available,
            }
            .into());
        }

        self.state.current_savings = round_money(available - price);
        let new_total = self.state.current_savings;
        let days_delayed = self.opportunity_cost_days(price);
        debug!(
            "Spent ${} on {} (total {}, delays goal by {} days)",
            price, temptation.item, new_total, days_delayed
        );
        self.event_sink.emit(GameEvent::debited(
            temptation.id.clone(),
            price,
            new_total,
            days_delayed,
        ));

        let progress = self.check_milestones_and_completion();
        self.persist();
        Ok(TemptationOutcome::Spent {
            temptation,
            price,
            new_total,
            days_delayed,
            progress,
        })
    }

    /// Extra days needed to earn `price` back at the average daily earning rate.
    pub fn opportunity_cost_days(&self, price: Decimal) -> u32 {
        ceil_days(price, self.settings.average_daily_earning_rate()).unwrap_or(0)
    }

    /// Applies a mini-game result. A wrong answer changes nothing.
    pub fn resolve_mini_game(
        &mut self,
        kind: MiniGameKind,
        answer_correct: bool,
    ) -> Result<MiniGameOutcome> {
        let game = self
            .catalog
            .mini_game(kind)
            .cloned()
            .ok_or(SavingsError::UnknownMiniGame(kind))?;

        if !answer_correct {
            debug!("Mini-game {} answered incorrectly", kind);
            return Ok(MiniGameOutcome::TryAgain { game });
        }

        let credited = self.credit(CreditSource::MiniGame, game.reward);
        Ok(MiniGameOutcome::Rewarded { game, credited })
    }

    /// Credits interest once the configured interval has fully elapsed.
    pub fn credit_weekly_interest(&mut self, today: NaiveDate) -> Result<Credited> {
        let days_required = self.settings.interest_interval_days;
        let days_elapsed = match self.state.last_interest_date {
            Some(last) => days_between(last, today),
            None => 0,
        };
        if self.state.last_interest_date.is_none() || days_elapsed < i64::from(days_required) {
            return Err(SavingsError::TooSoon {
                days_elapsed,
                days_required,
            }
            .into());
        }

        self.state.last_interest_date = Some(today);
        Ok(self.credit(CreditSource::Interest, self.settings.weekly_interest))
    }

    /// Advances every racer by its daily progress scaled by a sampled factor.
    ///
    /// Factors are clamped to `[0.75, 1.25]` and racer savings never exceed
    /// their target. Player state is not touched.
    pub fn advance_ai_racers<F>(&mut self, mut sample_factor: F) -> &[AiRacer]
    where
        F: FnMut() -> Decimal,
    {
        for racer in &mut self.state.ai_racers {
            let factor = sample_factor().clamp(RACER_FACTOR_MIN, RACER_FACTOR_MAX);
            let advanced = (racer.savings + racer.daily_progress * factor).min(racer.target);
            racer.savings = round_money(advanced);
        }
        self.persist();
        &self.state.ai_racers
    }

    /// Clears the current goal and returns to goal selection.
    pub fn reset_for_new_goal(&mut self) {
        self.state.current_goal = None;
        self.state.target_amount = Decimal::ZERO;
        self.state.current_savings = Decimal::ZERO;
        self.state.milestones_reached.clear();
        self.state.goal_completed = false;
        self.state.game_phase = GamePhase::GoalSelection;
        info!("Ready for a new savings goal");
        self.persist();
    }

    /// Discards all progress, including the gallery and AI racers.
    pub fn start_new_game(&mut self, today: NaiveDate) {
        self.state = GameState::default();
        self.prepare_session(today);
        info!("Started a new game");
        self.persist();
    }

    pub fn status(&self) -> GameStatus {
        let progress_percent = self
            .state
            .progress_percent()
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0);
        let estimated_days_remaining = if self.state.has_active_goal() {
            ceil_days(
                self.state.remaining(),
                self.settings.average_daily_earning_rate(),
            )
        } else {
            None
        };

        GameStatus {
            phase: self.state.game_phase,
            current_goal: self.state.current_goal.clone(),
            savings: self.state.current_savings,
            target: self.state.target_amount,
            progress_percent,
            completed_goals: self.state.completed_goals.len(),
            goal_completed: self.state.goal_completed,
            estimated_days_remaining,
        }
    }

    fn credit(&mut self, source: CreditSource, amount: Decimal) -> Credited {
        let amount = round_money(amount);
        self.state.current_savings = round_money(self.state.current_savings + amount);
        let new_total = self.state.current_savings;
        debug!("{}: +${} (total ${})", source.label(), amount, new_total);
        self.event_sink
            .emit(GameEvent::credited(source, amount, new_total));

        let progress = self.check_milestones_and_completion();
        self.persist();
        Credited {
            source,
            amount,
            new_total,
            progress,
        }
    }

    /// Celebrates newly crossed thresholds and archives the goal once reached.
    fn check_milestones_and_completion(&mut self) -> ProgressUpdate {
        let mut update = ProgressUpdate::default();
        let Some(goal) = self.state.current_goal.clone() else {
            return update;
        };
        if self.state.target_amount <= Decimal::ZERO {
            return update;
        }

        let progress = self.state.progress_percent();
        let mut thresholds = self.settings.milestone_thresholds.clone();
        thresholds.sort_unstable();
        thresholds.dedup();

        for threshold in thresholds {
            if progress >= Decimal::from(threshold)
                && self.state.milestones_reached.insert(threshold)
            {
                info!("Milestone reached: {}%", threshold);
                self.event_sink.emit(GameEvent::milestone_reached(threshold));
                update.milestones.push(threshold);
            }
        }

        if progress >= GOAL_COMPLETE_PERCENT && !self.state.goal_completed {
            let entry = CompletedGoal {
                goal: goal.clone(),
                completed_date: Utc::now(),
                final_amount: self.state.current_savings,
            };
            self.state.completed_goals.push(entry.clone());
            self.state.goal_completed = true;
            self.state.game_phase = GamePhase::GoalSelection;

            info!(
                "Goal completed: {} with ${}",
                goal.name, entry.final_amount
            );
            self.event_sink.emit(GameEvent::GoalCompleted {
                goal,
                final_amount: entry.final_amount,
                completed_date: entry.completed_date,
            });
            update.completed_goal = Some(entry);
        }

        update
    }

    /// Saves the state. A failure is reported but never rolls back memory.
    fn persist(&self) {
        let result = state::serialize(&self.state)
            .and_then(|blob| self.repository.save_state(STORAGE_KEY, &blob));
        if let Err(e) = result {
            error!("Failed to save game state: {}", e);
            self.event_sink
                .emit(GameEvent::persistence_failed(e.to_string()));
        }
    }
}
