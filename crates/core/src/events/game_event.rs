//! Game event types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Goal;

/// Where a credit came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditSource {
    Allowance,
    Chore,
    SaveBonus,
    MiniGame,
    Interest,
}

impl CreditSource {
    pub fn label(&self) -> &'static str {
        match self {
            CreditSource::Allowance => "Daily Allowance",
            CreditSource::Chore => "Chore Completed",
            CreditSource::SaveBonus => "Smart Choice Bonus",
            CreditSource::MiniGame => "Mini-Game Reward",
            CreditSource::Interest => "Weekly Interest",
        }
    }
}

/// Facts emitted by the savings engine after a successful mutation.
///
/// Presentation adapters translate these into celebrations and messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new savings goal was selected.
    GoalSelected { goal: Goal },

    /// Money was added to the piggy bank.
    Credited {
        source: CreditSource,
        amount: Decimal,
        new_total: Decimal,
    },

    /// Money was spent on a temptation.
    Debited {
        temptation_id: String,
        amount: Decimal,
        new_total: Decimal,
        days_delayed: u32,
    },

    /// A progress threshold was crossed for the first time this goal.
    MilestoneReached { threshold: u32 },

    /// The goal amount was reached and the goal was archived in the gallery.
    GoalCompleted {
        goal: Goal,
        final_amount: Decimal,
        completed_date: DateTime<Utc>,
    },

    /// Saving the state failed; the in-memory state is still authoritative.
    PersistenceFailed { message: String },
}

impl GameEvent {
    /// Creates a Credited event.
    pub fn credited(source: CreditSource, amount: Decimal, new_total: Decimal) -> Self {
        Self::Credited {
            source,
            amount,
            new_total,
        }
    }

    /// Creates a Debited event.
    pub fn debited(
        temptation_id: String,
        amount: Decimal,
        new_total: Decimal,
        days_delayed: u32,
    ) -> Self {
        Self::Debited {
            temptation_id,
            amount,
            new_total,
            days_delayed,
        }
    }

    /// Creates a MilestoneReached event.
    pub fn milestone_reached(threshold: u32) -> Self {
        Self::MilestoneReached { threshold }
    }

    /// Creates a PersistenceFailed event.
    pub fn persistence_failed(message: impl Into<String>) -> Self {
        Self::PersistenceFailed {
            message: message.into(),
        }
    }
}
