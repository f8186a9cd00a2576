//! Simulation report models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Temptation;
use crate::minigames::{MiniGameAnswer, MiniGamePuzzle};
use crate::savings::{
    Credited, GameStatus, MiniGameOutcome, ProgressUpdate, TemptationChoice, TemptationOutcome,
};
use crate::state::{AiRacer, CompletedGoal};

/// What happened when a temptation was surfaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum TemptationReport {
    Resolved { outcome: TemptationOutcome },
    /// The player chose to spend but could not afford the item.
    #[serde(rename_all = "camelCase")]
    Unaffordable {
        temptation: Temptation,
        choice: TemptationChoice,
        required: Decimal,
        available: Decimal,
    },
}

impl TemptationReport {
    pub fn temptation(&self) -> &Temptation {
        match self {
            TemptationReport::Resolved { outcome } => outcome.temptation(),
            TemptationReport::Unaffordable { temptation, .. } => temptation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniGameReport {
    pub puzzle: MiniGamePuzzle,
    pub answer: MiniGameAnswer,
    pub outcome: MiniGameOutcome,
}

/// Everything one simulated day did, in protocol order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub date: NaiveDate,
    pub allowance: Option<Credited>,
    pub interest: Option<Credited>,
    pub chore: Option<Credited>,
    pub temptation: Option<TemptationReport>,
    pub mini_game: Option<MiniGameReport>,
    pub racers: Vec<AiRacer>,
    pub status: GameStatus,
}

impl DayReport {
    fn progress_updates(&self) -> impl Iterator<Item = &ProgressUpdate> {
        let temptation = match &self.temptation {
            Some(TemptationReport::Resolved { outcome }) => Some(outcome.progress()),
            _ => None,
        };
        let mini_game = self
            .mini_game
            .as_ref()
            .and_then(|report| report.outcome.credited())
            .map(|credited| &credited.progress);

        self.allowance
            .iter()
            .chain(self.interest.iter())
            .chain(self.chore.iter())
            .map(|credited| &credited.progress)
            .chain(temptation)
            .chain(mini_game)
    }

    /// Milestones celebrated during the day, in the order they fired.
    pub fn milestones(&self) -> Vec<u32> {
        self.progress_updates()
            .flat_map(|update| update.milestones.iter().copied())
            .collect()
    }

    pub fn completed_goal(&self) -> Option<&CompletedGoal> {
        self.progress_updates()
            .find_map(|update| update.completed_goal.as_ref())
    }
}
