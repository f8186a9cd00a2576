//! Built-in catalog content.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog_model::{AiRacerProfile, Goal, MiniGame, MiniGameKind, Temptation};

/// Read-only configuration consumed by the savings engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub goals: Vec<Goal>,
    pub racers: Vec<AiRacerProfile>,
    pub temptations: Vec<Temptation>,
    pub mini_games: Vec<MiniGame>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            goals: vec![
                goal("basketball", "Basketball", dec!(25), "🏀"),
                goal("videogame", "Video Game", dec!(50), "🎮"),
                goal("bike", "Bike", dec!(100), "🚲"),
                goal("toy", "Toy", dec!(10), "🧸"),
                goal("book", "Book", dec!(15), "📚"),
                goal("headphones", "Headphones", dec!(75), "🎧"),
            ],
            racers: vec![
                racer("Mia", "🐭", dec!(25), dec!(8), dec!(0.5)),
                racer("Max", "🐶", dec!(50), dec!(15), dec!(1.2)),
                racer("Ruby", "🐰", dec!(10), dec!(5), dec!(0.3)),
            ],
            temptations: vec![
                temptation("candy", "candy", dec!(2), "🍭"),
                temptation("soda", "soda", dec!(3), "🥤"),
                temptation("chips", "chips", dec!(2), "🍿"),
                temptation("toy", "toy", dec!(5), "🪀"),
                temptation("comic-book", "comic book", dec!(4), "📖"),
            ],
            mini_games: vec![
                MiniGame {
                    kind: MiniGameKind::CoinCounting,
                    name: "Coin Counting".to_string(),
                    emoji: "🪙".to_string(),
                    reward: dec!(0.50),
                    difficulty: 1,
                    success_rate: 0.80,
                },
                MiniGame {
                    kind: MiniGameKind::PriceComparison,
                    name: "Price Comparison".to_string(),
                    emoji: "💰".to_string(),
                    reward: dec!(1.00),
                    difficulty: 2,
                    success_rate: 0.85,
                },
            ],
        }
    }

    pub fn goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    pub fn temptation(&self, temptation_id: &str) -> Option<&Temptation> {
        self.temptations.iter().find(|t| t.id == temptation_id)
    }

    pub fn mini_game(&self, kind: MiniGameKind) -> Option<&MiniGame> {
        self.mini_games.iter().find(|m| m.kind == kind)
    }

    /// Encouragement shown when a milestone threshold is crossed.
    pub fn milestone_message(threshold: u32) -> &'static str {
        match threshold {
            25 => "Great start! You're a quarter of the way there!",
            50 => "Halfway there! You're doing amazing!",
            75 => "So close! You're three-quarters done!",
            100 => "Congratulations! You've reached your goal!",
            _ => "Amazing progress! Keep going!",
        }
    }
}

fn goal(id: &str, name: &str, price: Decimal, icon: &str) -> Goal {
    Goal {
        id: id.to_string(),
        name: name.to_string(),
        price,
        icon: icon.to_string(),
    }
}

fn racer(
    name: &str,
    emoji: &str,
    target: Decimal,
    starting_savings: Decimal,
    daily_progress: Decimal,
) -> AiRacerProfile {
    AiRacerProfile {
        name: name.to_string(),
        emoji: emoji.to_string(),
        target,
        starting_savings,
        daily_progress,
    }
}

fn temptation(id: &str, item: &str, price: Decimal, emoji: &str) -> Temptation {
    Temptation {
        id: id.to_string(),
        item: item.to_string(),
        price,
        emoji: emoji.to_string(),
    }
}
