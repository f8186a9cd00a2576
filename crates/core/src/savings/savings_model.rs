//! Savings engine result models.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Goal, MiniGame, Temptation};
use crate::events::CreditSource;
use crate::state::{CompletedGoal, GamePhase};

/// Milestones and completion triggered by a single operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub milestones: Vec<u32>,
    pub completed_goal: Option<CompletedGoal>,
}

impl ProgressUpdate {
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty() && self.completed_goal.is_none()
    }
}

/// Result of any operation that added money.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credited {
    pub source: CreditSource,
    pub amount: Decimal,
    pub new_total: Decimal,
    pub progress: ProgressUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemptationChoice {
    Save,
    Spend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum TemptationOutcome {
    /// The player resisted and earned the smart-choice bonus.
    Saved {
        temptation: Temptation,
        bonus: Credited,
    },
    /// The player bought the item.
    #[serde(rename_all = "camelCase")]
    Spent {
        temptation: Temptation,
        price: Decimal,
        new_total: Decimal,
        /// Extra days to the goal at the average earning rate.
        days_delayed: u32,
        progress: ProgressUpdate,
    },
}

impl TemptationOutcome {
    pub fn temptation(&self) -> &Temptation {
        match self {
            TemptationOutcome::Saved { temptation, .. } => temptation,
            TemptationOutcome::Spent { temptation, .. } => temptation,
        }
    }

    pub fn progress(&self) -> &ProgressUpdate {
        match self {
            TemptationOutcome::Saved { bonus, .. } => &bonus.progress,
            TemptationOutcome::Spent { progress, .. } => progress,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum MiniGameOutcome {
    Rewarded { game: MiniGame, credited: Credited },
    TryAgain { game: MiniGame },
}

impl MiniGameOutcome {
    pub fn game(&self) -> &MiniGame {
        match self {
            MiniGameOutcome::Rewarded { game, .. } => game,
            MiniGameOutcome::TryAgain { game } => game,
        }
    }

    pub fn credited(&self) -> Option<&Credited> {
        match self {
            MiniGameOutcome::Rewarded { credited, .. } => Some(credited),
            MiniGameOutcome::TryAgain { .. } => None,
        }
    }
}

/// Read-only projection of the game state for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub phase: GamePhase,
    pub current_goal: Option<Goal>,
    pub savings: Decimal,
    pub target: Decimal,
    /// Rounded to the nearest whole percent, not capped at 100.
    pub progress_percent: u32,
    pub completed_goals: usize,
    pub goal_completed: bool,
    pub estimated_days_remaining: Option<u32>,
}

impl GameStatus {
    pub fn estimated_completion_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.estimated_days_remaining
            .and_then(|days| today.checked_add_days(Days::new(u64::from(days))))
    }
}
