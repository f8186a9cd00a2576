use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_DECIMAL_PRECISION;

/// Rounds an amount to cents, half away from zero (matches `Math.round(x * 100) / 100`
/// for the positive amounts the game deals with).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a sampled float into a decimal with the given precision.
/// Non-finite input yields `None`.
pub fn decimal_from_f64(value: f64, precision: u32) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| d.round_dp(precision))
}

/// `amount / rate` rounded up to whole days. Returns `None` for a non-positive rate.
pub fn ceil_days(amount: Decimal, rate: Decimal) -> Option<u32> {
    if rate <= Decimal::ZERO {
        return None;
    }
    if amount <= Decimal::ZERO {
        return Some(0);
    }
    (amount / rate).ceil().to_u32()
}

/// Formats an amount as dollars with two decimals, e.g. `$7.50`.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", round_money(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(12.3456)), dec!(12.35));
    }

    #[test]
    fn test_ceil_days() {
        assert_eq!(ceil_days(dec!(5), dec!(2)), Some(3));
        assert_eq!(ceil_days(dec!(4), dec!(2)), Some(2));
        assert_eq!(ceil_days(dec!(0.5), dec!(2)), Some(1));
        assert_eq!(ceil_days(dec!(0), dec!(2)), Some(0));
        assert_eq!(ceil_days(dec!(3), dec!(0)), None);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(7)), "$7.00");
        assert_eq!(format_money(dec!(0.5)), "$0.50");
    }

    #[test]
    fn test_decimal_from_f64() {
        assert_eq!(decimal_from_f64(0.81234567, 4), Some(dec!(0.8123)));
        assert_eq!(decimal_from_f64(f64::NAN, 4), None);
    }
}
