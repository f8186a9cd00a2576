use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Key under which the serialized game state is stored
pub const STORAGE_KEY: &str = "piggyBankRaceState";

/// Decimal precision for all money amounts
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for AI racer progress multipliers
pub const RACER_FACTOR_PRECISION: u32 = 4;

/// Bounds of the AI racer daily progress multiplier
pub const RACER_FACTOR_MIN: Decimal = dec!(0.75);
pub const RACER_FACTOR_MAX: Decimal = dec!(1.25);

/// Progress percentage at which a goal counts as reached
pub const GOAL_COMPLETE_PERCENT: Decimal = dec!(100);

/// A coin counting answer must be strictly closer than this to the total
pub const COIN_ANSWER_TOLERANCE: Decimal = dec!(0.01);
