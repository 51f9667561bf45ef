//! Error types specific to this crate.

use core::fmt::{self, Display, Formatter};

use exactnum_base::{ArithmeticError, ParseError};

/// Parsing a rational literal can fail two different ways: the grammar
/// doesn't match (a [`ParseError`]) or it matches but names a zero
/// denominator, which is an arithmetic error rather than a grammar error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RationalParseError {
    Malformed(ParseError),
    ZeroDenominator,
}

impl Display for RationalParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RationalParseError::Malformed(e) => Display::fmt(e, f),
            RationalParseError::ZeroDenominator => f.write_str("rational literal has a zero denominator"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RationalParseError {}

impl From<ParseError> for RationalParseError {
    fn from(e: ParseError) -> Self {
        RationalParseError::Malformed(e)
    }
}

impl From<RationalParseError> for ArithmeticError {
    fn from(e: RationalParseError) -> Self {
        match e {
            RationalParseError::Malformed(_) => ArithmeticError::InvalidArgument,
            RationalParseError::ZeroDenominator => ArithmeticError::DivisionByZero,
        }
    }
}

pub(crate) fn panic_divide_by_0() -> ! {
    panic!("denominator must not be 0")
}
