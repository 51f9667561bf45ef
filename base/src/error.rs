//! Error kinds returned by fallible operations across the three number kinds.
//!
//! Every error surfaces synchronously at the call site: there are no partial
//! results, and nothing here is ever retried or silently rounded.

use core::fmt::{self, Display, Formatter};

/// A malformed textual literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input had no digits where at least one was required.
    NoDigits,
    /// A character could not be interpreted as a digit in the given base.
    InvalidDigit,
    /// The literal's grammar did not match any of the integer, decimal or
    /// rational forms (for example more than one `/`, or digits on both
    /// sides of two decimal points).
    InvalidLiteral,
    /// The requested base is outside `2..=36`.
    UnsupportedRadix,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoDigits => f.write_str("no digits in numeric literal"),
            ParseError::InvalidDigit => f.write_str("invalid digit for the given base"),
            ParseError::InvalidLiteral => f.write_str("literal does not match any supported grammar"),
            ParseError::UnsupportedRadix => f.write_str("unsupported radix, expected 2..=36"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// An error raised by an arithmetic operation.
///
/// The variants correspond to the error kinds of the specification rather
/// than to Rust types: callers match on the kind, not on a type hierarchy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArithmeticError {
    /// An argument was out of its valid range: a base outside `2..=36`, a
    /// negative scale/exponent/bit-count/modulus, `min > max` in a random
    /// range, or an alphabet that is too short or has duplicate bytes.
    InvalidArgument,
    /// Division by zero, modulo zero, a zero denominator, or the reciprocal
    /// of zero.
    DivisionByZero,
    /// Rounding was required but the mode was [`Unnecessary`][crate::RoundingMode::Unnecessary].
    RoundingNecessary(RoundingNecessaryReason),
    /// The square root of a negative number was requested, or a negative
    /// value was exported as unsigned bytes or to an arbitrary-base digit
    /// string.
    NegativeNumber,
    /// The value does not fit in the requested native integer type.
    IntegerOverflow,
    /// No modular inverse exists because the operands are not coprime.
    NoInverse,
    /// The injected random byte source failed, or returned the wrong number
    /// of bytes.
    RandomSource,
}

/// Distinguishes the three ways rounding can be "necessary" but refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundingNecessaryReason {
    /// The division (or root) is inexact.
    Inexact,
    /// The target scale is smaller than the number of significant
    /// fractional digits.
    ScaleTooSmall,
    /// The decimal expansion never terminates (the reduced denominator has
    /// a prime factor other than 2 or 5).
    NonTerminating,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::InvalidArgument => f.write_str("invalid argument"),
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
            ArithmeticError::RoundingNecessary(reason) => {
                let msg = match reason {
                    RoundingNecessaryReason::Inexact => "rounding is necessary but mode is Unnecessary",
                    RoundingNecessaryReason::ScaleTooSmall => {
                        "target scale is too small to hold the value without rounding"
                    }
                    RoundingNecessaryReason::NonTerminating => {
                        "the decimal expansion does not terminate"
                    }
                };
                f.write_str(msg)
            }
            ArithmeticError::NegativeNumber => f.write_str("operation is undefined for a negative number"),
            ArithmeticError::IntegerOverflow => f.write_str("value does not fit the target integer type"),
            ArithmeticError::NoInverse => f.write_str("no modular inverse exists"),
            ArithmeticError::RandomSource => f.write_str("random source failed or returned malformed bytes"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}

impl From<ParseError> for ArithmeticError {
    /// Parsing failures that surface through an arithmetic entry point (for
    /// example base-string parsing) are reported as `InvalidArgument`.
    fn from(_: ParseError) -> Self {
        ArithmeticError::InvalidArgument
    }
}
