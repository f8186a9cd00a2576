use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use piggybank_core::settings::{BatchDecisionSettings, GameSettings, SimulationSettings};

pub struct Config {
    pub db_path: String,
    pub goal: String,
    pub days: u32,
    pub seed: Option<u64>,
    pub tick: Duration,
    /// Zero disables the background racer ticker.
    pub racer_tick: Duration,
    pub repeat_on_complete: bool,
    pub start_date: Option<NaiveDate>,
    pub game: GameSettings,
    pub simulation: SimulationSettings,
    pub batch: BatchDecisionSettings,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Invalid values warn and keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameSettings::default();
        let game = GameSettings {
            daily_allowance: env_or(&lookup, "PB_DAILY_ALLOWANCE", defaults.daily_allowance),
            chore_reward: env_or(&lookup, "PB_CHORE_REWARD", defaults.chore_reward),
            temptation_save_bonus: env_or(
                &lookup,
                "PB_SAVE_BONUS",
                defaults.temptation_save_bonus,
            ),
            weekly_interest: env_or(&lookup, "PB_WEEKLY_INTEREST", defaults.weekly_interest),
            interest_interval_days: env_or(
                &lookup,
                "PB_INTEREST_INTERVAL_DAYS",
                defaults.interest_interval_days,
            ),
            milestone_thresholds: env_list_or(
                &lookup,
                "PB_MILESTONE_THRESHOLDS",
                defaults.milestone_thresholds,
            ),
        };

        let defaults = SimulationSettings::default();
        let simulation = SimulationSettings {
            temptation_probability: env_or(
                &lookup,
                "PB_TEMPTATION_PROBABILITY",
                defaults.temptation_probability,
            ),
            mini_game_probability: env_or(
                &lookup,
                "PB_MINI_GAME_PROBABILITY",
                defaults.mini_game_probability,
            ),
        };

        let defaults = BatchDecisionSettings::default();
        let batch = BatchDecisionSettings {
            chore_acceptance: env_or(&lookup, "PB_CHORE_ACCEPTANCE", defaults.chore_acceptance),
            save_probability: env_or(&lookup, "PB_SAVE_PROBABILITY", defaults.save_probability),
        };

        Self {
            db_path: lookup("PB_DB_PATH").unwrap_or_else(|| "./db/piggybank.db".into()),
            goal: lookup("PB_GOAL").unwrap_or_else(|| "basketball".into()),
            days: env_or(&lookup, "PB_DAYS", 365),
            seed: env_opt(&lookup, "PB_SEED"),
            tick: Duration::from_millis(env_or(&lookup, "PB_TICK_MS", 0)),
            racer_tick: Duration::from_millis(env_or(&lookup, "PB_RACER_TICK_MS", 0)),
            repeat_on_complete: env_or(&lookup, "PB_REPEAT_ON_COMPLETE", false),
            start_date: env_opt(&lookup, "PB_START_DATE"),
            game,
            simulation,
            batch,
        }
    }
}

fn env_opt<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring invalid {}={:?}: {}", key, raw, e);
            None
        }
    }
}

fn env_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    env_opt(lookup, key).unwrap_or(default)
}

/// Comma-separated list, e.g. `25,50,75,100`. An empty or invalid list keeps the default.
fn env_list_or<T, F>(lookup: &F, key: &str, default: Vec<T>) -> Vec<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match parse_list(&raw) {
        Ok(values) if !values.is_empty() => values,
        Ok(_) => default,
        Err(e) => {
            tracing::warn!("Ignoring invalid {}={:?}: {}", key, raw, e);
            default
        }
    }
}

fn parse_list<T: FromStr>(raw: &str) -> Result<Vec<T>, T::Err> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list::<u32>("25, 50,75 ,100"), Ok(vec![25, 50, 75, 100]));
        assert_eq!(parse_list::<u32>(""), Ok(vec![]));
        assert!(parse_list::<u32>("25,half").is_err());
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.db_path, "./db/piggybank.db");
        assert_eq!(config.goal, "basketball");
        assert_eq!(config.days, 365);
        assert_eq!(config.seed, None);
        assert!(config.racer_tick.is_zero());
        assert_eq!(config.game, GameSettings::default());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PB_DAYS", "forever"),
            ("PB_MILESTONE_THRESHOLDS", "25,half"),
            ("PB_DAILY_ALLOWANCE", "lots"),
            ("PB_START_DATE", "yesterday"),
        ]);
        assert_eq!(config.days, 365);
        assert_eq!(config.game.milestone_thresholds, vec![25, 50, 75, 100]);
        assert_eq!(config.game.daily_allowance, dec!(1.00));
        assert_eq!(config.start_date, None);
    }

    #[test]
    fn test_empty_threshold_list_keeps_default() {
        let config = config_from(&[("PB_MILESTONE_THRESHOLDS", " , ")]);
        assert_eq!(config.game.milestone_thresholds, vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_valid_overrides_are_applied() {
        let config = config_from(&[
            ("PB_DAYS", " 30 "),
            ("PB_MILESTONE_THRESHOLDS", "10,90"),
            ("PB_CHORE_REWARD", "3.25"),
            ("PB_SEED", "42"),
            ("PB_TICK_MS", "250"),
            ("PB_REPEAT_ON_COMPLETE", "true"),
            ("PB_START_DATE", "2024-03-01"),
            ("PB_TEMPTATION_PROBABILITY", "0.5"),
        ]);
        assert_eq!(config.days, 30);
        assert_eq!(config.game.milestone_thresholds, vec![10, 90]);
        assert_eq!(config.game.chore_reward, dec!(3.25));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick, Duration::from_millis(250));
        assert!(config.repeat_on_complete);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(config.simulation.temptation_probability, 0.5);
    }
}
