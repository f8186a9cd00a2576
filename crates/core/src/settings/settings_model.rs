use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Money rules applied by the savings engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    pub daily_allowance: Decimal,
    pub chore_reward: Decimal,
    pub temptation_save_bonus: Decimal,
    pub weekly_interest: Decimal,
    pub interest_interval_days: u32,
    pub milestone_thresholds: Vec<u32>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            daily_allowance: dec!(1.00),
            chore_reward: dec!(2.00),
            temptation_save_bonus: dec!(0.50),
            weekly_interest: dec!(0.50),
            interest_interval_days: 7,
            milestone_thresholds: vec![25, 50, 75, 100],
        }
    }
}

impl GameSettings {
    /// Expected earnings per day, assuming every other chore gets done.
    pub fn average_daily_earning_rate(&self) -> Decimal {
        self.daily_allowance + self.chore_reward / dec!(2)
    }

    pub fn validate(&self) -> Result<()> {
        let amounts = [
            ("daily_allowance", self.daily_allowance),
            ("chore_reward", self.chore_reward),
            ("temptation_save_bonus", self.temptation_save_bonus),
            ("weekly_interest", self.weekly_interest),
        ];
        for (name, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must not be negative, got {}",
                    name, amount
                )));
            }
        }
        if self.average_daily_earning_rate() <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(
                "daily_allowance and chore_reward cannot both be zero".to_string(),
            ));
        }
        if self.interest_interval_days == 0 {
            return Err(Error::InvalidConfigValue(
                "interest_interval_days must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = self
            .milestone_thresholds
            .iter()
            .find(|t| **t == 0 || **t > 100)
        {
            return Err(Error::InvalidConfigValue(format!(
                "milestone threshold {} is outside 1..=100",
                bad
            )));
        }
        Ok(())
    }
}

/// Event probabilities used by the daily simulation driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    pub temptation_probability: f64,
    pub mini_game_probability: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            temptation_probability: 0.3,
            mini_game_probability: 0.2,
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<()> {
        validate_probability("temptation_probability", self.temptation_probability)?;
        validate_probability("mini_game_probability", self.mini_game_probability)
    }
}

/// Player behaviour sampled by the standalone (batch) simulation mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchDecisionSettings {
    pub chore_acceptance: f64,
    pub save_probability: f64,
}

impl Default for BatchDecisionSettings {
    fn default() -> Self {
        Self {
            chore_acceptance: 0.7,
            save_probability: 0.6,
        }
    }
}

impl BatchDecisionSettings {
    pub fn validate(&self) -> Result<()> {
        validate_probability("chore_acceptance", self.chore_acceptance)?;
        validate_probability("save_probability", self.save_probability)
    }
}

fn validate_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfigValue(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )))
    }
}
