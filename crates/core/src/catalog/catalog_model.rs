//! Catalog domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchase target the player can save for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(alias = "image")]
    pub icon: String,
}

/// Starting profile of a simulated competing saver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiRacerProfile {
    pub name: String,
    pub emoji: String,
    pub target: Decimal,
    pub starting_savings: Decimal,
    pub daily_progress: Decimal,
}

/// A small discretionary purchase offered to the player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Temptation {
    pub id: String,
    pub item: String,
    pub price: Decimal,
    pub emoji: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum MiniGameKind {
    CoinCounting,
    PriceComparison,
}

impl MiniGameKind {
    pub const ALL: [MiniGameKind; 2] = [MiniGameKind::CoinCounting, MiniGameKind::PriceComparison];

    pub fn as_str(&self) -> &'static str {
        match self {
            MiniGameKind::CoinCounting => "coinCounting",
            MiniGameKind::PriceComparison => "priceComparison",
        }
    }
}

impl fmt::Display for MiniGameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An educational mini-game with a fixed reward for a correct answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MiniGame {
    pub kind: MiniGameKind,
    pub name: String,
    pub emoji: String,
    pub reward: Decimal,
    pub difficulty: u8,
    /// Probability that a simulated player answers correctly in batch mode
    pub success_rate: f64,
}
