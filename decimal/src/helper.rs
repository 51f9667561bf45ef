//! Scale adjustment, zero-padding and exactness checks shared by
//! `BigDecimal` and `BigRational`'s decimal conversions (§4.3 of the
//! numeric model).
//!
//! Nothing here knows about the `(unscaled, scale)` pair as a type: every
//! function takes the unscaled integer and scale(s) as plain arguments, so
//! `BigRational` can reuse the same scale arithmetic without depending on
//! `BigDecimal`'s public surface.

use exactnum_base::{ArithmeticError, RoundingMode};
use exactnum_int::BigInteger;

fn pow10(exp: u64) -> BigInteger {
    BigInteger::ten().pow(exp)
}

/// Adjust `value` (at `cur_scale`) to `target_scale`, rounding under `mode`
/// when narrowing. Widening (`target_scale >= cur_scale`) is always exact:
/// it just appends zeros. Fails iff `mode` is `Unnecessary` and narrowing
/// would discard a non-zero remainder.
pub fn rescale(
    value: &BigInteger,
    cur_scale: u64,
    target_scale: u64,
    mode: RoundingMode,
) -> Result<BigInteger, ArithmeticError> {
    if target_scale >= cur_scale {
        Ok(value * &pow10(target_scale - cur_scale))
    } else {
        value.divided_by(&pow10(cur_scale - target_scale), mode)
    }
}

/// The adjusted unscaled value iff moving from `cur_scale` to
/// `target_scale` needs no rounding, otherwise `None`.
pub fn try_rescale_exactly(value: &BigInteger, cur_scale: u64, target_scale: u64) -> Option<BigInteger> {
    rescale(value, cur_scale, target_scale, RoundingMode::Unnecessary).ok()
}

/// For a reduced fraction denominator `d > 0`, the minimum non-negative
/// scale `s` such that `d | 10^s`, found by stripping factors of 2 and 5
/// and checking the residue is 1. `None` iff `d` has any other prime
/// factor, i.e. the fraction's decimal expansion never terminates.
pub fn scale_from_reduced_denominator(d: &BigInteger) -> Option<u64> {
    debug_assert!(d.is_positive());
    let two = BigInteger::from(2u32);
    let five = BigInteger::from(5u32);
    let mut residue = d.clone();
    let mut twos = 0u64;
    let mut fives = 0u64;
    loop {
        let (q, r) = residue.quotient_and_remainder(&two);
        if !r.is_zero() {
            break;
        }
        residue = q;
        twos += 1;
    }
    loop {
        let (q, r) = residue.quotient_and_remainder(&five);
        if !r.is_zero() {
            break;
        }
        residue = q;
        fives += 1;
    }
    if residue == BigInteger::one() {
        Some(twos.max(fives))
    } else {
        None
    }
}

/// Render the absolute value of `unscaled` left-padded with zeros so the
/// digit string has at least `scale + 1` significant positions: enough to
/// split unambiguously into an integral part (possibly just `"0"`) and a
/// `scale`-digit fractional part.
pub fn pad_unscaled_digits(unscaled: &BigInteger, scale: u64) -> String {
    let digits = unscaled.abs().as_canonical_str().to_string();
    let min_len = scale as usize + 1;
    if digits.len() >= min_len {
        digits
    } else {
        let mut padded = "0".repeat(min_len - digits.len());
        padded.push_str(&digits);
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_widens_with_zeros() {
        let v = BigInteger::from(125u32);
        assert_eq!(
            rescale(&v, 1, 4, RoundingMode::Unnecessary).unwrap(),
            BigInteger::from(125000u32)
        );
    }

    #[test]
    fn rescale_narrows_exactly_or_fails() {
        let v = BigInteger::from(1250u32);
        assert_eq!(rescale(&v, 3, 1, RoundingMode::Unnecessary).unwrap(), BigInteger::from(125u32));
        let odd = BigInteger::from(1251u32);
        assert!(rescale(&odd, 3, 1, RoundingMode::Unnecessary).is_err());
        assert_eq!(rescale(&odd, 3, 1, RoundingMode::Down).unwrap(), BigInteger::from(125u32));
    }

    #[test]
    fn denominator_scale_detects_non_terminating() {
        assert_eq!(scale_from_reduced_denominator(&BigInteger::from(8u32)), Some(3));
        assert_eq!(scale_from_reduced_denominator(&BigInteger::from(20u32)), Some(2));
        assert_eq!(scale_from_reduced_denominator(&BigInteger::from(3u32)), None);
        assert_eq!(scale_from_reduced_denominator(&BigInteger::one()), Some(0));
    }

    #[test]
    fn padding_reserves_scale_plus_one_digits() {
        assert_eq!(pad_unscaled_digits(&BigInteger::from(5u32), 3), "0005");
        assert_eq!(pad_unscaled_digits(&BigInteger::from(12345u32), 2), "12345");
    }
}
