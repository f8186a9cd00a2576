use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::puzzle_model::{
    CoinCountingPuzzle, CoinKind, CoinStack, MiniGamePuzzle, PriceComparisonPuzzle,
};
use crate::catalog::MiniGameKind;

/// Items offered by the price comparison game: name, option A price, option B price.
pub const PRICE_COMPARISON_ITEMS: [(&str, Decimal, Decimal); 5] = [
    ("Apple", dec!(1.50), dec!(1.25)),
    ("Notebook", dec!(3.00), dec!(2.75)),
    ("Pencil", dec!(0.50), dec!(0.75)),
    ("Juice Box", dec!(1.25), dec!(1.50)),
    ("Stickers", dec!(2.00), dec!(1.75)),
];

/// Maximum count per coin stack.
const COIN_LIMITS: [(CoinKind, u32); 4] = [
    (CoinKind::Penny, 10),
    (CoinKind::Nickel, 5),
    (CoinKind::Dime, 8),
    (CoinKind::Quarter, 4),
];

pub fn generate_puzzle<R: Rng + ?Sized>(kind: MiniGameKind, rng: &mut R) -> MiniGamePuzzle {
    match kind {
        MiniGameKind::CoinCounting => MiniGamePuzzle::CoinCounting(coin_counting(rng)),
        MiniGameKind::PriceComparison => MiniGamePuzzle::PriceComparison(price_comparison(rng)),
    }
}

fn coin_counting<R: Rng + ?Sized>(rng: &mut R) -> CoinCountingPuzzle {
    let stacks = COIN_LIMITS
        .iter()
        .map(|(coin, max)| CoinStack {
            coin: *coin,
            count: rng.gen_range(1..=*max),
        })
        .collect();
    CoinCountingPuzzle { stacks }
}

fn price_comparison<R: Rng + ?Sized>(rng: &mut R) -> PriceComparisonPuzzle {
    let (item, price_a, price_b) = PRICE_COMPARISON_ITEMS
        .choose(rng)
        .copied()
        .unwrap_or(PRICE_COMPARISON_ITEMS[0]);
    PriceComparisonPuzzle {
        item: item.to_string(),
        price_a,
        price_b,
    }
}
