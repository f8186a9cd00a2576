//! Game state domain models.

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{AiRacerProfile, Goal};
use crate::utils::money::round_money;

/// Which screen the player is on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    #[serde(rename = "goal-selection")]
    GoalSelection,
    #[serde(rename = "main-dashboard")]
    Dashboard,
}

/// Gallery entry for a goal whose price was reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGoal {
    #[serde(flatten)]
    pub goal: Goal,
    pub completed_date: DateTime<Utc>,
    pub final_amount: Decimal,
}

/// A simulated competing saver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiRacer {
    pub name: String,
    pub emoji: String,
    pub target: Decimal,
    pub savings: Decimal,
    pub daily_progress: Decimal,
}

impl AiRacer {
    pub fn from_profile(profile: &AiRacerProfile) -> Self {
        Self {
            name: profile.name.clone(),
            emoji: profile.emoji.clone(),
            target: profile.target,
            savings: profile.starting_savings.min(profile.target),
            daily_progress: profile.daily_progress,
        }
    }

    pub fn progress_percent(&self) -> Decimal {
        percent_of(self.savings, self.target)
    }

    pub fn is_finished(&self) -> bool {
        self.savings >= self.target
    }
}

/// The single mutable aggregate owned by the savings engine.
///
/// Every collection is always initialized; `null` or missing fields in a
/// persisted blob load as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub current_goal: Option<Goal>,
    pub target_amount: Decimal,
    pub current_savings: Decimal,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub last_allowance_date: Option<NaiveDate>,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub last_interest_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub milestones_reached: BTreeSet<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub completed_goals: Vec<CompletedGoal>,
    pub game_phase: GamePhase,
    /// Set once the current goal has been archived in `completed_goals`.
    pub goal_completed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ai_racers: Vec<AiRacer>,
}

impl GameState {
    /// `current_savings / target_amount * 100`, or zero when there is no target.
    pub fn progress_percent(&self) -> Decimal {
        percent_of(self.current_savings, self.target_amount)
    }

    /// Amount still missing to reach the target, never negative.
    pub fn remaining(&self) -> Decimal {
        (self.target_amount - self.current_savings).max(Decimal::ZERO)
    }

    pub fn has_active_goal(&self) -> bool {
        self.current_goal.is_some() && !self.goal_completed
    }

    /// Re-establishes the money invariants on a freshly deserialized state.
    pub(crate) fn normalize(&mut self) {
        self.current_savings = round_money(self.current_savings).max(Decimal::ZERO);
        self.target_amount = match &self.current_goal {
            Some(goal) => round_money(goal.price),
            None => Decimal::ZERO,
        };
        if self.current_goal.is_none() {
            self.game_phase = GamePhase::GoalSelection;
            self.goal_completed = false;
        }
        for entry in &mut self.completed_goals {
            entry.final_amount = round_money(entry.final_amount);
        }
        for racer in &mut self.ai_racers {
            racer.target = round_money(racer.target).max(Decimal::ZERO);
            racer.savings = round_money(racer.savings).clamp(Decimal::ZERO, racer.target);
        }
    }
}

fn percent_of(amount: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount / target * dec!(100)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts ISO dates (`2024-03-09`) and the browser `toDateString` form
/// (`Sat Mar 09 2024`). Anything else is treated as unset.
fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&value, "%a %b %d %Y"));
        match parsed {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("Ignoring unparseable calendar date '{}'", value);
                None
            }
        }
    }))
}
