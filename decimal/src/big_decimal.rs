//! The fixed-scale exact decimal type.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use exactnum_base::{ArithmeticError, ParseError, RoundingMode, RoundingNecessaryReason};
use exactnum_int::BigInteger;

use crate::error::panic_divide_by_0;
use crate::helper;

/// A pair `(unscaled, scale)` representing `unscaled · 10^(-scale)`.
///
/// Scale is part of identity: `BigDecimal::new(1.into(), 0)` and
/// `BigDecimal::new(10.into(), 1)` are numerically equal but not
/// structurally identical. [`PartialEq`]/[`Eq`] compare the pair
/// structurally (so round-tripping through a string preserves scale);
/// [`PartialOrd`]/[`Ord`] compare the numeric value, lifting both operands
/// to their common scale first. This mirrors the well-known split between
/// `equals` and `compareTo` in fixed-scale decimal libraries: two values
/// can compare equal (`cmp() == Equal`) while `==` reports them distinct.
#[derive(Clone, Debug)]
pub struct BigDecimal {
    unscaled: BigInteger,
    scale: u64,
}

impl BigDecimal {
    /// Build a decimal from an unscaled integer and a scale. The scale is
    /// always non-negative because it is typed `u64`.
    pub fn new(unscaled: BigInteger, scale: u64) -> Self {
        Self { unscaled, scale }
    }

    pub fn zero() -> Self {
        Self::new(BigInteger::zero(), 0)
    }

    pub fn one() -> Self {
        Self::new(BigInteger::one(), 0)
    }

    pub fn ten() -> Self {
        Self::new(BigInteger::ten(), 0)
    }

    pub fn unscaled_value(&self) -> &BigInteger {
        &self.unscaled
    }

    pub fn scale(&self) -> u64 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    pub fn signum(&self) -> i32 {
        self.unscaled.signum()
    }

    fn aligned_pair(&self, other: &Self) -> (BigInteger, BigInteger, u64) {
        let common = self.scale.max(other.scale);
        let a = helper::rescale(&self.unscaled, self.scale, common, RoundingMode::Unnecessary)
            .expect("widening rescale is always exact");
        let b = helper::rescale(&other.unscaled, other.scale, common, RoundingMode::Unnecessary)
            .expect("widening rescale is always exact");
        (a, b, common)
    }

    pub fn plus(&self, other: &Self) -> Self {
        let (a, b, common) = self.aligned_pair(other);
        Self::new(a + b, common)
    }

    pub fn minus(&self, other: &Self) -> Self {
        let (a, b, common) = self.aligned_pair(other);
        Self::new(a - b, common)
    }

    pub fn times(&self, other: &Self) -> Self {
        Self::new(&self.unscaled * &other.unscaled, self.scale + other.scale)
    }

    /// `self / other`, rounded to `target_scale` under `mode`. Always
    /// honors `target_scale`, even when `other` is numerically `1` — there
    /// is deliberately no short-circuit on the divisor, since a naive
    /// "divisor is 1, return self" shortcut would skip rescaling to
    /// `target_scale` whenever `self`'s own scale differs from it.
    pub fn divided_by(
        &self,
        other: &Self,
        target_scale: u64,
        mode: RoundingMode,
    ) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        // self/other at target_scale == (self.unscaled * 10^k) / other.unscaled
        // where k = target_scale + other.scale - self.scale; when k < 0 we
        // instead scale the divisor up, to keep every intermediate an exact
        // integer.
        let k = target_scale as i128 + other.scale as i128 - self.scale as i128;
        let (numerator, denominator) = if k >= 0 {
            (&self.unscaled * &BigInteger::ten().pow(k as u64), other.unscaled.clone())
        } else {
            (self.unscaled.clone(), &other.unscaled * &BigInteger::ten().pow((-k) as u64))
        };
        let unscaled = numerator.divided_by(&denominator, mode)?;
        Ok(Self::new(unscaled, target_scale))
    }

    /// `self / other`, succeeding only when the result terminates: the
    /// reduced fraction's denominator has no prime factor besides 2 or 5.
    /// The result scale is the minimal terminating scale, with trailing
    /// zeros stripped.
    pub fn divided_by_exact(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        // self/other == (self.unscaled * 10^other.scale) / (other.unscaled * 10^self.scale)
        let raw_num = &self.unscaled * &BigInteger::ten().pow(other.scale);
        let raw_den = &other.unscaled * &BigInteger::ten().pow(self.scale);
        let g = raw_num.gcd(&raw_den);
        let (mut reduced_num, mut reduced_den) = (raw_num.quotient(&g), raw_den.quotient(&g));
        if reduced_den.is_negative() {
            reduced_num = -reduced_num;
            reduced_den = -reduced_den;
        }
        let scale = helper::scale_from_reduced_denominator(&reduced_den)
            .ok_or(ArithmeticError::RoundingNecessary(RoundingNecessaryReason::NonTerminating))?;
        let factor = BigInteger::ten().pow(scale).quotient(&reduced_den);
        let unscaled = reduced_num * factor;
        Ok(Self::new(unscaled, scale).stripped_of_trailing_zeros())
    }

    /// Truncated integer quotient (scale 0) and remainder (scale
    /// `max(self.scale, other.scale)`, same sign as `self`) of the two
    /// *values*, not the unscaled integers.
    pub fn checked_quotient_and_remainder(&self, other: &Self) -> Option<(Self, Self)> {
        if other.is_zero() {
            return None;
        }
        let (a, b, common) = self.aligned_pair(other);
        let (q, r) = a.quotient_and_remainder(&b);
        Some((Self::new(q, 0), Self::new(r, common)))
    }

    pub fn quotient_and_remainder(&self, other: &Self) -> (Self, Self) {
        self.checked_quotient_and_remainder(other).unwrap_or_else(|| panic_divide_by_0())
    }

    pub fn quotient(&self, other: &Self) -> Self {
        self.quotient_and_remainder(other).0
    }

    pub fn remainder(&self, other: &Self) -> Self {
        self.quotient_and_remainder(other).1
    }

    /// Square root to `target_scale` under `mode`. `self` must be
    /// non-negative.
    ///
    /// Computed at one extra digit of intermediate precision
    /// (`k = target_scale + 1`, or more if needed to keep every
    /// intermediate an exact integer) and then rounded down to
    /// `target_scale`. When that intermediate root is exact, the final
    /// rescale is an ordinary decimal rounding. When it is inexact, the
    /// true root is strictly between the floor and ceiling of the
    /// intermediate value, which makes the apparent "exact half" case at
    /// the dropped digit always actually lean away from zero — so every
    /// `Half*` mode resolves it the same way `HalfUp` would.
    pub fn sqrt(&self, target_scale: u64, mode: RoundingMode) -> Result<Self, ArithmeticError> {
        if self.is_negative() {
            return Err(ArithmeticError::NegativeNumber);
        }
        let k = (target_scale + 1).max((self.scale + 1) / 2);
        let exponent = 2 * k - self.scale;
        let numerator = &self.unscaled * &BigInteger::ten().pow(exponent);
        let floor_root = numerator.sqrt(RoundingMode::Down)?;
        let exact = &floor_root * &floor_root == numerator;
        let m = k - target_scale;

        if exact {
            return helper::rescale(&floor_root, k, target_scale, mode).map(|u| Self::new(u, target_scale));
        }

        if mode == RoundingMode::Unnecessary {
            return Err(ArithmeticError::RoundingNecessary(RoundingNecessaryReason::Inexact));
        }
        let divisor = BigInteger::ten().pow(m);
        let (q, r) = floor_root.quotient_and_remainder(&divisor);
        let two_r = &r * &BigInteger::from(2u32);
        // Never Equal: the true root lies strictly inside the open
        // interval (floor_root, floor_root + 1) at scale k, so an apparent
        // tie at the dropped digit always means the discarded fraction is
        // in fact strictly greater than half.
        let half_cmp = if two_r.cmp_value(&divisor) == Ordering::Less {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        let adjustment = exactnum_base::rounding::decide(
            mode,
            exactnum_base::Sign::Positive,
            half_cmp,
            q.is_odd(),
        )?;
        let unscaled = match adjustment {
            exactnum_base::Adjustment::Truncate => q,
            exactnum_base::Adjustment::AwayFromZero => q + BigInteger::one(),
        };
        Ok(Self::new(unscaled, target_scale))
    }

    /// Rescale to `target_scale` under `mode`.
    pub fn to_scale(&self, target_scale: u64, mode: RoundingMode) -> Result<Self, ArithmeticError> {
        helper::rescale(&self.unscaled, self.scale, target_scale, mode).map(|u| Self::new(u, target_scale))
    }

    /// Move the decimal point `places` positions to the left (equivalently,
    /// increase the scale). A negative effective scale cannot occur because
    /// scale is unsigned, so this never needs normalization.
    pub fn with_point_moved_left(&self, places: u64) -> Self {
        Self::new(self.unscaled.clone(), self.scale + places)
    }

    /// Move the decimal point `places` positions to the right (decrease the
    /// scale). If `places` exceeds the current scale the result would have
    /// negative scale; that is normalized by appending zeros to the
    /// unscaled value instead and clamping the scale to `0`.
    pub fn with_point_moved_right(&self, places: u64) -> Self {
        if places <= self.scale {
            Self::new(self.unscaled.clone(), self.scale - places)
        } else {
            let extra = places - self.scale;
            Self::new(&self.unscaled * &BigInteger::ten().pow(extra), 0)
        }
    }

    /// Remove trailing `0` digits from the unscaled value, reducing the
    /// scale accordingly. The scale is never reduced below `0`, and a zero
    /// value is normalized to scale `0`.
    pub fn stripped_of_trailing_zeros(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let ten = BigInteger::ten();
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (q, r) = unscaled.quotient_and_remainder(&ten);
            if !r.is_zero() {
                break;
            }
            unscaled = q;
            scale -= 1;
        }
        Self::new(unscaled, scale)
    }

    /// Succeeds iff the fractional part is zero.
    pub fn to_big_integer(&self) -> Result<BigInteger, ArithmeticError> {
        if self.scale == 0 {
            return Ok(self.unscaled.clone());
        }
        let (q, r) = self.unscaled.quotient_and_remainder(&BigInteger::ten().pow(self.scale));
        if r.is_zero() {
            Ok(q)
        } else {
            Err(ArithmeticError::RoundingNecessary(RoundingNecessaryReason::Inexact))
        }
    }

    /// Numeric comparison: lift both operands to the larger scale and
    /// compare unscaled integers.
    pub fn compare_value(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned_pair(other);
        a.cmp_value(&b)
    }

    pub fn negated(&self) -> Self {
        Self::new(-&self.unscaled, self.scale)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.unscaled == other.unscaled && self.scale == other.scale
    }
}
impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_value(other)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $owned:ident) => {
        impl core::ops::$trait<&BigDecimal> for &BigDecimal {
            type Output = BigDecimal;
            fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                self.$owned(rhs)
            }
        }
        impl core::ops::$trait<BigDecimal> for BigDecimal {
            type Output = BigDecimal;
            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                self.$owned(&rhs)
            }
        }
        impl core::ops::$trait<&BigDecimal> for BigDecimal {
            type Output = BigDecimal;
            fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                self.$owned(rhs)
            }
        }
        impl core::ops::$trait<BigDecimal> for &BigDecimal {
            type Output = BigDecimal;
            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                self.$owned(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, plus);
forward_binop!(Sub, sub, minus);
forward_binop!(Mul, mul, times);

impl core::ops::Neg for &BigDecimal {
    type Output = BigDecimal;
    fn neg(self) -> BigDecimal {
        self.negated()
    }
}
impl core::ops::Neg for BigDecimal {
    type Output = BigDecimal;
    fn neg(self) -> BigDecimal {
        self.negated()
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        if self.scale == 0 {
            return write!(f, "{sign}{}", self.unscaled.abs());
        }
        let digits = helper::pad_unscaled_digits(&self.unscaled, self.scale);
        let split_at = digits.len() - self.scale as usize;
        let (integral, fractional) = digits.split_at(split_at);
        write!(f, "{sign}{integral}.{fractional}")
    }
}

impl FromStr for BigDecimal {
    type Err = ParseError;

    /// The decimal grammar: `[+-]? (digits)? (.(digits)?)? ([eE][+-]?digits)?`,
    /// with at least one digit in the integral or fractional part. The
    /// resulting scale is `len(fractional) - exponent`; a negative result
    /// is normalized by appending zeros and using scale `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s.strip_prefix('+').unwrap_or(s)),
        };

        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(idx) => (&rest[..idx], &rest[idx + 1..]),
            None => (rest, ""),
        };

        let (integral, fractional) = match mantissa.find('.') {
            Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
            None => (mantissa, ""),
        };

        if integral.is_empty() && fractional.is_empty() {
            return Err(ParseError::NoDigits);
        }
        if !integral.bytes().all(|b| b.is_ascii_digit()) || !fractional.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit);
        }

        let exp_value: i128 = if exponent.is_empty() {
            0
        } else {
            exponent.parse().map_err(|_| ParseError::InvalidDigit)?
        };

        let digits = format!("{integral}{fractional}");
        let unscaled_str = format!("{sign}{digits}");
        let mut unscaled: BigInteger = unscaled_str.parse()?;

        let raw_scale = fractional.len() as i128 - exp_value;
        let scale = if raw_scale >= 0 {
            raw_scale as u64
        } else {
            unscaled = unscaled * BigInteger::ten().pow((-raw_scale) as u64);
            0
        };
        Ok(Self::new(unscaled, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_roundtrip() {
        let cases = ["0", "1.0", "-3.14", "1e5", "1.25e-2", "100", "0.001"];
        for case in cases {
            let d: BigDecimal = case.parse().unwrap();
            let rendered = d.to_string();
            let reparsed: BigDecimal = rendered.parse().unwrap();
            assert_eq!(d, reparsed, "case {case} rendered as {rendered}");
        }
    }

    #[test]
    fn plus_minus_scale_is_max() {
        let a: BigDecimal = "1.25".parse().unwrap();
        let b: BigDecimal = "2.5".parse().unwrap();
        assert_eq!((&a + &b).scale(), 2);
        assert_eq!((&a + &b).to_string(), "3.75");
        assert_eq!((&a - &b).to_string(), "-1.25");
    }

    #[test]
    fn times_scale_is_sum() {
        let a: BigDecimal = "1.2".parse().unwrap();
        let b: BigDecimal = "3.45".parse().unwrap();
        let p = &a * &b;
        assert_eq!(p.scale(), 3);
        assert_eq!(p.to_string(), "4.140");
    }

    #[test]
    fn divided_by_honors_target_scale_even_with_divisor_one() {
        let a: BigDecimal = "7".parse().unwrap();
        let one_with_scale: BigDecimal = "1.00".parse().unwrap();
        let r = a.divided_by(&one_with_scale, 3, RoundingMode::Unnecessary).unwrap();
        assert_eq!(r.scale(), 3);
        assert_eq!(r.to_string(), "7.000");
    }

    #[test]
    fn one_third_scale_30() {
        let one: BigDecimal = "1".parse().unwrap();
        let three: BigDecimal = "3".parse().unwrap();
        let half_up = one.divided_by(&three, 30, RoundingMode::HalfUp).unwrap();
        assert_eq!(half_up.to_string(), "0.333333333333333333333333333333");
        let up = one.divided_by(&three, 30, RoundingMode::Up).unwrap();
        assert_eq!(up.to_string(), "0.333333333333333333333333333334");
        assert!(one.divided_by(&three, 30, RoundingMode::Unnecessary).is_err());
    }

    #[test]
    fn divided_by_exact_strips_trailing_zeros() {
        let one: BigDecimal = "1".parse().unwrap();
        let eight: BigDecimal = "8".parse().unwrap();
        let r = one.divided_by_exact(&eight).unwrap();
        assert_eq!(r.to_string(), "0.125");

        let three: BigDecimal = "3".parse().unwrap();
        assert!(one.divided_by_exact(&three).is_err());
    }

    #[test]
    fn sqrt_matches_known_values() {
        let two: BigDecimal = "2".parse().unwrap();
        let root = two.sqrt(10, RoundingMode::Down).unwrap();
        assert_eq!(root.to_string(), "1.4142135623");

        let four: BigDecimal = "4".parse().unwrap();
        assert_eq!(four.sqrt(5, RoundingMode::Unnecessary).unwrap().to_string(), "2.00000");
    }

    #[test]
    fn quotient_and_remainder_follow_dividend_sign() {
        let a: BigDecimal = "-7.5".parse().unwrap();
        let b: BigDecimal = "2".parse().unwrap();
        let (q, r) = a.quotient_and_remainder(&b);
        assert_eq!(q.to_string(), "-3");
        assert_eq!(r.scale(), 1);
        assert_eq!(r.to_string(), "-1.5");
    }

    #[test]
    fn structural_vs_numeric_equality() {
        let a: BigDecimal = "1".parse().unwrap();
        let b: BigDecimal = "1.0".parse().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn stripped_of_trailing_zeros_reduces_scale() {
        let a: BigDecimal = "1.2300".parse().unwrap();
        let stripped = a.stripped_of_trailing_zeros();
        assert_eq!(stripped.to_string(), "1.23");
        let z: BigDecimal = "0.000".parse().unwrap();
        assert_eq!(z.stripped_of_trailing_zeros().scale(), 0);
    }

    #[test]
    fn with_point_moved() {
        let a: BigDecimal = "123.45".parse().unwrap();
        assert_eq!(a.with_point_moved_left(2).to_string(), "1.2345");
        assert_eq!(a.with_point_moved_right(1).to_string(), "1234.5");
        assert_eq!(a.with_point_moved_right(3).to_string(), "123450");
    }

    #[test]
    fn to_big_integer_requires_zero_fraction() {
        let a: BigDecimal = "4.00".parse().unwrap();
        assert_eq!(a.to_big_integer().unwrap(), BigInteger::from(4u32));
        let b: BigDecimal = "4.01".parse().unwrap();
        assert!(b.to_big_integer().is_err());
    }
}
