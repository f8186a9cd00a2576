use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::MiniGameKind;
use crate::constants::COIN_ANSWER_TOLERANCE;
use crate::utils::money::round_money;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoinKind {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl CoinKind {
    pub fn value(&self) -> Decimal {
        match self {
            CoinKind::Penny => dec!(0.01),
            CoinKind::Nickel => dec!(0.05),
            CoinKind::Dime => dec!(0.10),
            CoinKind::Quarter => dec!(0.25),
        }
    }

    pub fn label(&self, count: u32) -> String {
        let name = match self {
            CoinKind::Penny if count > 1 => "pennies",
            CoinKind::Penny => "penny",
            CoinKind::Nickel => "nickel",
            CoinKind::Dime => "dime",
            CoinKind::Quarter => "quarter",
        };
        if count > 1 && *self != CoinKind::Penny {
            format!("{}s", name)
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinStack {
    pub coin: CoinKind,
    pub count: u32,
}

impl CoinStack {
    pub fn value(&self) -> Decimal {
        self.coin.value() * Decimal::from(self.count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinCountingPuzzle {
    pub stacks: Vec<CoinStack>,
}

impl CoinCountingPuzzle {
    pub fn total(&self) -> Decimal {
        round_money(self.stacks.iter().map(CoinStack::value).sum())
    }

    /// An answer counts when it is less than one cent away from the total.
    pub fn is_correct(&self, answer: Decimal) -> bool {
        (answer - self.total()).abs() < COIN_ANSWER_TOLERANCE
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceChoice {
    A,
    B,
}

impl PriceChoice {
    pub fn other(&self) -> PriceChoice {
        match self {
            PriceChoice::A => PriceChoice::B,
            PriceChoice::B => PriceChoice::A,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparisonPuzzle {
    pub item: String,
    pub price_a: Decimal,
    pub price_b: Decimal,
}

impl PriceComparisonPuzzle {
    pub fn cheaper(&self) -> PriceChoice {
        if self.price_a < self.price_b {
            PriceChoice::A
        } else {
            PriceChoice::B
        }
    }

    pub fn is_correct(&self, choice: PriceChoice) -> bool {
        choice == self.cheaper()
    }
}

/// A generated round of one mini-game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MiniGamePuzzle {
    CoinCounting(CoinCountingPuzzle),
    PriceComparison(PriceComparisonPuzzle),
}

/// What the player submitted. `None` means no option was picked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum MiniGameAnswer {
    Amount(Decimal),
    Choice(PriceChoice),
    None,
}

impl MiniGamePuzzle {
    pub fn kind(&self) -> MiniGameKind {
        match self {
            MiniGamePuzzle::CoinCounting(_) => MiniGameKind::CoinCounting,
            MiniGamePuzzle::PriceComparison(_) => MiniGameKind::PriceComparison,
        }
    }

    /// Checks an answer; an answer of the wrong shape is never correct.
    pub fn check(&self, answer: &MiniGameAnswer) -> bool {
        match (self, answer) {
            (MiniGamePuzzle::CoinCounting(p), MiniGameAnswer::Amount(amount)) => {
                p.is_correct(*amount)
            }
            (MiniGamePuzzle::PriceComparison(p), MiniGameAnswer::Choice(choice)) => {
                p.is_correct(*choice)
            }
            _ => false,
        }
    }

    pub fn solution(&self) -> MiniGameAnswer {
        match self {
            MiniGamePuzzle::CoinCounting(p) => MiniGameAnswer::Amount(p.total()),
            MiniGamePuzzle::PriceComparison(p) => MiniGameAnswer::Choice(p.cheaper()),
        }
    }

    /// A plausible but wrong answer, used by simulated players who miss.
    pub fn wrong_answer(&self) -> MiniGameAnswer {
        match self {
            MiniGamePuzzle::CoinCounting(p) => MiniGameAnswer::Amount(p.total() + dec!(0.05)),
            MiniGamePuzzle::PriceComparison(p) => MiniGameAnswer::Choice(p.cheaper().other()),
        }
    }
}
