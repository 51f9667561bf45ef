//! The rounding-mode enum and the pure decision function that applies it.
//!
//! This module knows nothing about big integers: it takes the sign of the
//! true (unrounded) result, whether the discarded remainder is more than,
//! equal to, or less than half a unit in the last place, and the parity of
//! the truncated quotient, and decides whether the magnitude of the
//! truncated quotient should be left alone or incremented by one. Every
//! caller (integer division, decimal division, decimal scaling, integer and
//! decimal square root) reduces its own problem to these three inputs.

use core::cmp::Ordering;

use crate::error::{ArithmeticError, RoundingNecessaryReason};
use crate::sign::Sign;

/// A rounding policy for resolving an inexact quotient.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RoundingMode {
    /// Fail instead of rounding.
    Unnecessary,
    /// Round away from zero.
    Up,
    /// Truncate toward zero.
    Down,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Round to the nearest value; ties round away from zero.
    HalfUp,
    /// Round to the nearest value; ties truncate toward zero.
    HalfDown,
    /// Round to the nearest value; ties round toward positive infinity.
    HalfCeiling,
    /// Round to the nearest value; ties round toward negative infinity.
    HalfFloor,
    /// Round to the nearest value; ties round to the adjacent even digit.
    HalfEven,
}

/// Whether the truncated quotient's magnitude should be adjusted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Adjustment {
    /// Keep the truncated quotient as-is.
    Truncate,
    /// Increment the magnitude of the truncated quotient by one (the sign
    /// is then reapplied by the caller).
    AwayFromZero,
}

/// Decide how to round a quotient whose discarded fractional part is known
/// to be non-zero.
///
/// * `sign` is the sign of the true, unrounded result.
/// * `half_cmp` compares twice the discarded remainder's magnitude to the
///   divisor's magnitude: [`Ordering::Less`] means the discarded part is
///   less than one half, [`Ordering::Equal`] means exactly one half, and
///   [`Ordering::Greater`] means more than one half.
/// * `quotient_is_odd` is the parity of the truncated quotient's last
///   digit, used only by [`HalfEven`][RoundingMode::HalfEven].
///
/// Callers must not invoke this function when the discarded part is zero:
/// in that case the division is exact and no mode (including
/// `Unnecessary`) can fail.
pub fn decide(
    mode: RoundingMode,
    sign: Sign,
    half_cmp: Ordering,
    quotient_is_odd: bool,
) -> Result<Adjustment, ArithmeticError> {
    use Adjustment::*;
    use RoundingMode::*;

    let away = |cond: bool| if cond { AwayFromZero } else { Truncate };

    Ok(match mode {
        Unnecessary => {
            return Err(ArithmeticError::RoundingNecessary(
                RoundingNecessaryReason::Inexact,
            ))
        }
        Up => AwayFromZero,
        Down => Truncate,
        Ceiling => away(sign.is_positive()),
        Floor => away(sign.is_negative()),
        HalfUp => away(half_cmp != Ordering::Less),
        HalfDown => away(half_cmp == Ordering::Greater),
        HalfCeiling => away(half_cmp == Ordering::Greater || (half_cmp == Ordering::Equal && sign.is_positive())),
        HalfFloor => away(half_cmp == Ordering::Greater || (half_cmp == Ordering::Equal && sign.is_negative())),
        HalfEven => away(half_cmp == Ordering::Greater || (half_cmp == Ordering::Equal && quotient_is_odd)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnecessary_always_fails_on_inexact() {
        assert!(decide(RoundingMode::Unnecessary, Sign::Positive, Ordering::Less, false).is_err());
    }

    #[test]
    fn half_even_ties_to_even() {
        // quotient ...2 (even): tie truncates
        assert_eq!(
            decide(RoundingMode::HalfEven, Sign::Positive, Ordering::Equal, false).unwrap(),
            Adjustment::Truncate
        );
        // quotient ...3 (odd): tie rounds away
        assert_eq!(
            decide(RoundingMode::HalfEven, Sign::Positive, Ordering::Equal, true).unwrap(),
            Adjustment::AwayFromZero
        );
    }

    #[test]
    fn ceiling_and_floor_depend_on_sign() {
        assert_eq!(
            decide(RoundingMode::Ceiling, Sign::Positive, Ordering::Less, false).unwrap(),
            Adjustment::AwayFromZero
        );
        assert_eq!(
            decide(RoundingMode::Ceiling, Sign::Negative, Ordering::Less, false).unwrap(),
            Adjustment::Truncate
        );
        assert_eq!(
            decide(RoundingMode::Floor, Sign::Negative, Ordering::Less, false).unwrap(),
            Adjustment::AwayFromZero
        );
    }

    #[test]
    fn half_up_vs_half_down() {
        assert_eq!(
            decide(RoundingMode::HalfUp, Sign::Positive, Ordering::Equal, false).unwrap(),
            Adjustment::AwayFromZero
        );
        assert_eq!(
            decide(RoundingMode::HalfDown, Sign::Positive, Ordering::Equal, false).unwrap(),
            Adjustment::Truncate
        );
    }
}
