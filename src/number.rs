//! The abstract numeric kind (§4.7/§9 "kind polymorphism") and the
//! textual-literal parser/factory (§4.7, component C8).

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use exactnum_base::{ArithmeticError, ParseError, RoundingNecessaryReason};
use exactnum_decimal::BigDecimal;
use exactnum_int::BigInteger;
use exactnum_rational::{BigRational, RationalParseError};

/// One of the three number kinds, tagged so call sites that accept
/// heterogeneous input (the parser, `sum`/`min`/`max`) can dispatch on the
/// concrete representation without knowing it up front. Ordering follows
/// the widening order `Integer < Decimal < Rational`: a kind can always be
/// embedded exactly into any kind to its right.
#[derive(Clone, Debug)]
pub enum Number {
    Integer(BigInteger),
    Decimal(BigDecimal),
    Rational(BigRational),
}

impl Number {
    /// The widening rank: `0` for integer, `1` for decimal, `2` for
    /// rational. Higher ranks can exactly represent every value of a lower
    /// rank.
    fn rank(&self) -> u8 {
        match self {
            Number::Integer(_) => 0,
            Number::Decimal(_) => 1,
            Number::Rational(_) => 2,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
    pub fn is_decimal(&self) -> bool {
        matches!(self, Number::Decimal(_))
    }
    pub fn is_rational(&self) -> bool {
        matches!(self, Number::Rational(_))
    }

    /// Exact embedding into `BigRational`; always succeeds, since rational
    /// is the broadest kind.
    pub fn as_rational(&self) -> BigRational {
        match self {
            Number::Integer(i) => BigRational::from_integer(i.clone()),
            Number::Decimal(d) => {
                let denom = BigInteger::ten().pow(d.scale());
                BigRational::new(d.unscaled_value().clone(), denom)
                    .expect("a power of ten is never zero")
            }
            Number::Rational(r) => r.clone(),
        }
    }

    /// Coerce to `BigInteger`, the narrowest kind. Fails with
    /// `RoundingNecessary` iff the value has a non-zero fractional part.
    pub fn to_integer(&self) -> Result<BigInteger, ArithmeticError> {
        match self {
            Number::Integer(i) => Ok(i.clone()),
            Number::Decimal(d) => d.to_big_integer(),
            Number::Rational(r) => {
                if r.denominator() == &BigInteger::one() {
                    Ok(r.numerator().clone())
                } else {
                    Err(ArithmeticError::RoundingNecessary(RoundingNecessaryReason::Inexact))
                }
            }
        }
    }

    /// Coerce to `BigDecimal`. Fails with `RoundingNecessary` iff `self` is
    /// a rational whose reduced denominator has a prime factor other than
    /// 2 or 5 (the expansion never terminates).
    pub fn to_decimal(&self) -> Result<BigDecimal, ArithmeticError> {
        match self {
            Number::Integer(i) => Ok(BigDecimal::new(i.clone(), 0)),
            Number::Decimal(d) => Ok(d.clone()),
            Number::Rational(r) => r.to_big_decimal(),
        }
    }

    /// Exact embedding into `BigRational`, the library's universal
    /// accumulator: summation reorders through here so a rational
    /// accumulator absorbs integers and decimals losslessly regardless of
    /// input order.
    fn as_decimal_no_rational(&self) -> BigDecimal {
        match self {
            Number::Integer(i) => BigDecimal::new(i.clone(), 0),
            Number::Decimal(d) => d.clone(),
            Number::Rational(_) => unreachable!("caller guarantees no rational is present"),
        }
    }

    fn as_integer_no_wider(&self) -> BigInteger {
        match self {
            Number::Integer(i) => i.clone(),
            _ => unreachable!("caller guarantees no decimal or rational is present"),
        }
    }

    pub fn negated(&self) -> Self {
        match self {
            Number::Integer(i) => Number::Integer(i.negated()),
            Number::Decimal(d) => Number::Decimal(d.negated()),
            Number::Rational(r) => Number::Rational(r.negated()),
        }
    }

    pub fn compare_value(&self, other: &Self) -> Ordering {
        self.as_rational().compare_value(&other.as_rational())
    }

    /// Sum a heterogeneous collection, widening to the broadest kind
    /// present. Reorders so a rational (or decimal) accumulator absorbs
    /// the narrower kinds losslessly, rather than summing each kind
    /// separately and converting only the final total.
    pub fn sum(values: impl IntoIterator<Item = Number>) -> Number {
        let values: Vec<Number> = values.into_iter().collect();
        let max_rank = values.iter().map(Number::rank).max().unwrap_or(0);
        match max_rank {
            2 => Number::Rational(
                values.iter().fold(BigRational::zero(), |acc, v| &acc + &v.as_rational()),
            ),
            1 => Number::Decimal(
                values
                    .iter()
                    .fold(BigDecimal::zero(), |acc, v| &acc + &v.as_decimal_no_rational()),
            ),
            _ => Number::Integer(
                values.iter().fold(BigInteger::zero(), |acc, v| &acc + v.as_integer_no_wider()),
            ),
        }
    }

    pub fn min(values: impl IntoIterator<Item = Number>) -> Option<Number> {
        values.into_iter().min_by(Number::compare_value)
    }

    pub fn max(values: impl IntoIterator<Item = Number>) -> Option<Number> {
        values.into_iter().max_by(Number::compare_value)
    }
}

impl From<BigInteger> for Number {
    fn from(v: BigInteger) -> Self {
        Number::Integer(v)
    }
}
impl From<BigDecimal> for Number {
    fn from(v: BigDecimal) -> Self {
        Number::Decimal(v)
    }
}
impl From<BigRational> for Number {
    fn from(v: BigRational) -> Self {
        Number::Rational(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => fmt::Display::fmt(i, f),
            Number::Decimal(d) => fmt::Display::fmt(d, f),
            Number::Rational(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare_value(other) == Ordering::Equal
    }
}
impl Eq for Number {}
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_value(other)
    }
}

/// Parsing a textual literal into the dispatched [`Number`] can fail either
/// because the grammar didn't match (a [`ParseError`]) or because it
/// matched a rational literal with a zero denominator (an arithmetic
/// error, not a grammar error).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumberParseError {
    Malformed(ParseError),
    ZeroDenominator,
}

impl fmt::Display for NumberParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberParseError::Malformed(e) => fmt::Display::fmt(e, f),
            NumberParseError::ZeroDenominator => f.write_str("rational literal has a zero denominator"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NumberParseError {}

impl From<ParseError> for NumberParseError {
    fn from(e: ParseError) -> Self {
        NumberParseError::Malformed(e)
    }
}
impl From<RationalParseError> for NumberParseError {
    fn from(e: RationalParseError) -> Self {
        match e {
            RationalParseError::Malformed(e) => NumberParseError::Malformed(e),
            RationalParseError::ZeroDenominator => NumberParseError::ZeroDenominator,
        }
    }
}
impl From<NumberParseError> for ArithmeticError {
    fn from(e: NumberParseError) -> Self {
        match e {
            NumberParseError::Malformed(_) => ArithmeticError::InvalidArgument,
            NumberParseError::ZeroDenominator => ArithmeticError::DivisionByZero,
        }
    }
}

impl FromStr for Number {
    type Err = NumberParseError;

    /// Dispatches on the literal's shape: a `/` means the rational
    /// grammar, a `.` or `e`/`E` means the decimal grammar, otherwise the
    /// integer grammar (§4.7).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            Ok(Number::Rational(s.parse()?))
        } else if s.contains(['.', 'e', 'E']) {
            Ok(Number::Decimal(s.parse()?))
        } else {
            Ok(Number::Integer(s.parse()?))
        }
    }
}

/// Failure of a cross-kind `of` coercion (§4.7): either the literal's own
/// grammar didn't match, or it parsed fine but didn't coerce losslessly
/// into the requested target kind (for example `"1/2"` into `BigInteger`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OfError {
    Parse(NumberParseError),
    Coerce(ArithmeticError),
}

impl fmt::Display for OfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfError::Parse(e) => fmt::Display::fmt(e, f),
            OfError::Coerce(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OfError {}

impl From<NumberParseError> for OfError {
    fn from(e: NumberParseError) -> Self {
        OfError::Parse(e)
    }
}
impl From<ArithmeticError> for OfError {
    fn from(e: ArithmeticError) -> Self {
        OfError::Coerce(e)
    }
}

/// Parse `s` under whichever grammar its shape selects (§4.7), then coerce
/// the result into `BigInteger` via [`Number::to_integer`]. A literal that
/// reads naturally as a decimal or rational (e.g. `"1.125"`) is accepted as
/// long as it is integral; `"1.5"` fails with `RoundingNecessary`.
pub fn parse_as_integer(s: &str) -> Result<BigInteger, OfError> {
    Ok(s.parse::<Number>()?.to_integer()?)
}

/// Parse `s` and coerce into `BigDecimal`. Fails with `RoundingNecessary`
/// iff `s` parses as a rational whose reduced denominator has a prime
/// factor other than 2 or 5.
pub fn parse_as_decimal(s: &str) -> Result<BigDecimal, OfError> {
    Ok(s.parse::<Number>()?.to_decimal()?)
}

/// Parse `s` and coerce into `BigRational`. Always succeeds once `s`
/// parses, since rational is the broadest of the three kinds: this is how
/// `"1.125"` reads as the reduced fraction `9/8`.
pub fn parse_as_rational(s: &str) -> Result<BigRational, OfError> {
    Ok(s.parse::<Number>()?.as_rational())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_shape() {
        assert!(matches!("42".parse::<Number>().unwrap(), Number::Integer(_)));
        assert!(matches!("4.2".parse::<Number>().unwrap(), Number::Decimal(_)));
        assert!(matches!("1e3".parse::<Number>().unwrap(), Number::Decimal(_)));
        assert!(matches!("1/2".parse::<Number>().unwrap(), Number::Rational(_)));
    }

    #[test]
    fn sum_widens_to_broadest_kind() {
        let values = vec![
            Number::Integer(BigInteger::from(1u32)),
            Number::Decimal("0.5".parse().unwrap()),
            Number::Rational("1/4".parse().unwrap()),
        ];
        let total = Number::sum(values);
        assert!(total.is_rational());
        assert_eq!(total.to_string(), "7/4");
    }

    #[test]
    fn sum_widening_is_order_independent() {
        let a = vec![
            Number::Integer(BigInteger::from(2u32)),
            Number::Decimal("1.5".parse().unwrap()),
        ];
        let b = vec![
            Number::Decimal("1.5".parse().unwrap()),
            Number::Integer(BigInteger::from(2u32)),
        ];
        assert_eq!(Number::sum(a), Number::sum(b));
    }

    #[test]
    fn min_max_cross_kind() {
        let values = vec![
            Number::Integer(BigInteger::from(3u32)),
            Number::Decimal("2.5".parse().unwrap()),
            Number::Rational("10/4".parse().unwrap()),
        ];
        let min = Number::min(values.clone()).unwrap();
        let max = Number::max(values).unwrap();
        assert_eq!(min.to_string(), "2.5");
        assert_eq!(max.to_string(), "3");
    }

    #[test]
    fn widening_coercion_can_fail() {
        let half = Number::Rational("1/2".parse().unwrap());
        assert!(half.to_integer().is_err());
        let third = Number::Rational("1/3".parse().unwrap());
        assert!(third.to_decimal().is_err());
    }

    #[test]
    fn zero_denominator_is_arithmetic_not_grammar() {
        let err = "1/0".parse::<Number>().unwrap_err();
        assert_eq!(err, NumberParseError::ZeroDenominator);
    }

    #[test]
    fn of_rational_coerces_decimal_literal() {
        assert_eq!(parse_as_rational("1.125").unwrap().to_string(), "9/8");
    }

    #[test]
    fn of_integer_rejects_non_integral_rational() {
        assert!(parse_as_integer("1/2").is_err());
        assert_eq!(parse_as_integer("4/2").unwrap(), BigInteger::from(2u32));
    }
}
