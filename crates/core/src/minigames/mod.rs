//! Mini-game puzzles - generation from an injected RNG and pure answer checking.
//!
//! The savings engine never sees a puzzle; it only receives whether the
//! submitted answer was correct.

mod puzzle_generator;
mod puzzle_model;

pub use puzzle_generator::{generate_puzzle, PRICE_COMPARISON_ITEMS};
pub use puzzle_model::{
    CoinKind, CoinStack, CoinCountingPuzzle, MiniGameAnswer, MiniGamePuzzle, PriceChoice,
    PriceComparisonPuzzle,
};
