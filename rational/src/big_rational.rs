//! The exact reduced-fraction rational type.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;

use exactnum_base::{ArithmeticError, RoundingMode};
use exactnum_decimal::BigDecimal;
use exactnum_int::BigInteger;

use crate::error::{panic_divide_by_0, RationalParseError};

/// A reduced fraction `numerator / denominator`, with `denominator >= 1`
/// and the sign carried entirely by `numerator`. Every constructor and
/// arithmetic operation returns an already-reduced value: `gcd(|numerator|,
/// denominator) == 1` always holds, so unlike the source model's
/// deferred-reduction flag, there is no lazily-unreduced state to observe
/// from outside this crate.
#[derive(Clone, Debug)]
pub struct BigRational {
    numerator: BigInteger,
    denominator: BigInteger,
}

fn reduce(numerator: BigInteger, denominator: BigInteger) -> (BigInteger, BigInteger) {
    let (mut n, mut d) = (numerator, denominator);
    if d.is_negative() {
        n = -n;
        d = -d;
    }
    if n.is_zero() {
        return (BigInteger::zero(), BigInteger::one());
    }
    let g = n.gcd(&d);
    (n.quotient(&g), d.quotient(&g))
}

impl BigRational {
    /// Build a reduced fraction. Fails with `DivisionByZero` iff
    /// `denominator` is zero.
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (numerator, denominator) = reduce(numerator, denominator);
        Ok(Self { numerator, denominator })
    }

    pub fn zero() -> Self {
        Self { numerator: BigInteger::zero(), denominator: BigInteger::one() }
    }

    pub fn one() -> Self {
        Self { numerator: BigInteger::one(), denominator: BigInteger::one() }
    }

    pub fn ten() -> Self {
        Self { numerator: BigInteger::ten(), denominator: BigInteger::one() }
    }

    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn signum(&self) -> i32 {
        self.numerator.signum()
    }

    pub fn from_integer(value: BigInteger) -> Self {
        Self { numerator: value, denominator: BigInteger::one() }
    }

    pub fn plus(&self, other: &Self) -> Self {
        let n = &(&self.numerator * &other.denominator) + &(&other.numerator * &self.denominator);
        let d = &self.denominator * &other.denominator;
        let (n, d) = reduce(n, d);
        Self { numerator: n, denominator: d }
    }

    pub fn minus(&self, other: &Self) -> Self {
        self.plus(&other.negated())
    }

    pub fn times(&self, other: &Self) -> Self {
        let n = &self.numerator * &other.numerator;
        let d = &self.denominator * &other.denominator;
        let (n, d) = reduce(n, d);
        Self { numerator: n, denominator: d }
    }

    /// Fails with `DivisionByZero` iff `other` is zero.
    pub fn divided_by(&self, other: &Self) -> Result<Self, ArithmeticError> {
        Ok(self.times(&other.reciprocal()?))
    }

    /// Fails with `DivisionByZero` iff `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, ArithmeticError> {
        if self.numerator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (n, d) = if self.numerator.is_negative() {
            (-self.denominator.clone(), -self.numerator.clone())
        } else {
            (self.denominator.clone(), self.numerator.clone())
        };
        Ok(Self { numerator: n, denominator: d })
    }

    pub fn negated(&self) -> Self {
        Self { numerator: -&self.numerator, denominator: self.denominator.clone() }
    }

    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.clone() }
    }

    /// `self^exp`, including negative exponents when `self` is non-zero.
    /// Fails with `DivisionByZero` iff `exp < 0` and `self` is zero — the
    /// reciprocal of zero, not `1`.
    pub fn power(&self, exp: i64) -> Result<Self, ArithmeticError> {
        if exp >= 0 {
            let e = exp as u64;
            Ok(Self { numerator: self.numerator.pow(e), denominator: self.denominator.pow(e) })
        } else {
            let recip = self.reciprocal()?;
            let e = exp.unsigned_abs();
            Ok(Self { numerator: recip.numerator.pow(e), denominator: recip.denominator.pow(e) })
        }
    }

    /// `numerator quotient denominator`, truncated toward zero.
    pub fn get_integral_part(&self) -> BigInteger {
        self.numerator.quotient(&self.denominator)
    }

    /// `(numerator remainder denominator) / denominator`. Carries the same
    /// sign as `numerator`, so `integral_part + fractional_part` always
    /// round-trips to the original value.
    pub fn get_fractional_part(&self) -> Self {
        let r = self.numerator.remainder(&self.denominator);
        let (n, d) = reduce(r, self.denominator.clone());
        Self { numerator: n, denominator: d }
    }

    /// Succeeds iff the reduced denominator's only prime factors are 2 and
    /// 5 (the decimal expansion terminates).
    pub fn to_big_decimal(&self) -> Result<BigDecimal, ArithmeticError> {
        let scale = exactnum_decimal::scale_from_reduced_denominator(&self.denominator)
            .ok_or(ArithmeticError::RoundingNecessary(
                exactnum_base::RoundingNecessaryReason::NonTerminating,
            ))?;
        let factor = BigInteger::ten().pow(scale).quotient(&self.denominator);
        Ok(BigDecimal::new(&self.numerator * &factor, scale))
    }

    /// `numerator.toBigDecimal() / denominator.toBigDecimal()`, rounded to
    /// `scale` under `mode`.
    pub fn to_scale(&self, scale: u64, mode: RoundingMode) -> Result<BigDecimal, ArithmeticError> {
        let n = BigDecimal::new(self.numerator.clone(), 0);
        let d = BigDecimal::new(self.denominator.clone(), 0);
        n.divided_by(&d, scale, mode)
    }

    /// The exact decimal expansion as `integral.fractional` or
    /// `integral.prefix(repeating)`, long-dividing digit by digit and
    /// recording the position of each remainder so a recurring remainder
    /// can be enclosed in parentheses.
    pub fn to_repeating_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs_num = self.numerator.abs();
        let integral = abs_num.quotient(&self.denominator);
        let mut remainder = abs_num.remainder(&self.denominator);
        if remainder.is_zero() {
            return format!("{sign}{integral}");
        }

        let mut seen: HashMap<BigInteger, usize> = HashMap::new();
        let mut digits = String::new();
        let mut repeat_start = None;
        let ten = BigInteger::ten();
        loop {
            if remainder.is_zero() {
                break;
            }
            if let Some(&pos) = seen.get(&remainder) {
                repeat_start = Some(pos);
                break;
            }
            seen.insert(remainder.clone(), digits.len());
            let scaled = &remainder * &ten;
            let (digit, next_remainder) = scaled.quotient_and_remainder(&self.denominator);
            digits.push_str(&digit.to_string());
            remainder = next_remainder;
        }

        match repeat_start {
            Some(pos) => {
                let (terminating, repeating) = digits.split_at(pos);
                format!("{sign}{integral}.{terminating}({repeating})")
            }
            None => format!("{sign}{integral}.{digits}"),
        }
    }

    /// Sign-aware cross multiplication: safe because both denominators are
    /// positive.
    pub fn compare_value(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp_value(&(&other.numerator * &self.denominator))
    }
}

impl PartialEq for BigRational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}
impl Eq for BigRational {}

impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigRational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_value(other)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $owned:ident) => {
        impl core::ops::$trait<&BigRational> for &BigRational {
            type Output = BigRational;
            fn $method(self, rhs: &BigRational) -> BigRational {
                self.$owned(rhs)
            }
        }
        impl core::ops::$trait<BigRational> for BigRational {
            type Output = BigRational;
            fn $method(self, rhs: BigRational) -> BigRational {
                self.$owned(&rhs)
            }
        }
        impl core::ops::$trait<&BigRational> for BigRational {
            type Output = BigRational;
            fn $method(self, rhs: &BigRational) -> BigRational {
                self.$owned(rhs)
            }
        }
        impl core::ops::$trait<BigRational> for &BigRational {
            type Output = BigRational;
            fn $method(self, rhs: BigRational) -> BigRational {
                self.$owned(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, plus);
forward_binop!(Sub, sub, minus);
forward_binop!(Mul, mul, times);

impl core::ops::Div<&BigRational> for &BigRational {
    type Output = BigRational;
    fn div(self, rhs: &BigRational) -> BigRational {
        self.divided_by(rhs).unwrap_or_else(|_| panic_divide_by_0())
    }
}
impl core::ops::Div<BigRational> for BigRational {
    type Output = BigRational;
    fn div(self, rhs: BigRational) -> BigRational {
        &self / &rhs
    }
}

impl core::ops::Neg for &BigRational {
    type Output = BigRational;
    fn neg(self) -> BigRational {
        self.negated()
    }
}
impl core::ops::Neg for BigRational {
    type Output = BigRational;
    fn neg(self) -> BigRational {
        self.negated()
    }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == BigInteger::one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for BigRational {
    type Err = RationalParseError;

    /// The rational grammar: `[+-]? digits / digits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slash = s.find('/').ok_or(exactnum_base::ParseError::InvalidLiteral)?;
        let (num_part, rest) = s.split_at(slash);
        let den_part = &rest[1..];
        if den_part.contains('/') {
            return Err(exactnum_base::ParseError::InvalidLiteral.into());
        }
        let numerator: BigInteger = num_part.parse().map_err(RationalParseError::from)?;
        let denominator: BigInteger = den_part.parse().map_err(RationalParseError::from)?;
        if denominator.is_zero() {
            return Err(RationalParseError::ZeroDenominator);
        }
        let (n, d) = reduce(numerator, denominator);
        Ok(Self { numerator: n, denominator: d })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reduces() {
        let r: BigRational = "4/8".parse().unwrap();
        assert_eq!(r.to_string(), "1/2");
    }

    #[test]
    fn parse_rejects_zero_denominator() {
        let err = "1/0".parse::<BigRational>().unwrap_err();
        assert_eq!(err, RationalParseError::ZeroDenominator);
    }

    #[test]
    fn arithmetic_reduces_results() {
        let a: BigRational = "1/2".parse().unwrap();
        let b: BigRational = "1/3".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "5/6");
        assert_eq!((&a * &b).to_string(), "1/6");
        assert_eq!((&a / &b).to_string(), "3/2");
        assert_eq!((&a - &b).to_string(), "1/6");
    }

    #[test]
    fn integral_and_fractional_round_trip() {
        let r: BigRational = "-7/3".parse().unwrap();
        let integral = r.get_integral_part();
        let fractional = r.get_fractional_part();
        assert_eq!(integral, BigInteger::from(-2i32));
        assert_eq!(fractional.to_string(), "-1/3");
        let rebuilt = &BigRational::from_integer(integral) + &fractional;
        assert_eq!(rebuilt, r);
    }

    #[test]
    fn repeating_decimal_strings() {
        let a: BigRational = "22/7".parse().unwrap();
        assert_eq!(a.to_repeating_decimal_string(), "3.(142857)");
        let b: BigRational = "7/6".parse().unwrap();
        assert_eq!(b.to_repeating_decimal_string(), "1.1(6)");
        let c: BigRational = "1/4".parse().unwrap();
        assert_eq!(c.to_repeating_decimal_string(), "0.25");
    }

    #[test]
    fn to_big_decimal_terminates_only_for_2_and_5() {
        let half: BigRational = "1/2".parse().unwrap();
        assert_eq!(half.to_big_decimal().unwrap().to_string(), "0.5");
        let third: BigRational = "1/3".parse().unwrap();
        assert!(third.to_big_decimal().is_err());
    }

    #[test]
    fn power_negative_exponent_on_zero_is_division_by_zero() {
        let zero = BigRational::zero();
        assert_eq!(zero.power(-1).unwrap_err(), ArithmeticError::DivisionByZero);
        assert_eq!(zero.power(0).unwrap().to_string(), "1");
    }

    #[test]
    fn compare_cross_multiplies() {
        let a: BigRational = "1/2".parse().unwrap();
        let b: BigRational = "2/3".parse().unwrap();
        assert!(a < b);
        assert!(-&a > -&b);
    }
}
