//! `exactnum`: arbitrary-precision integers, exact fixed-scale decimals and
//! exact rationals sharing one pluggable big-integer backend.
//!
//! The three number kinds live in their own crates and are re-exported
//! here under short module names, along with [`Number`], the tagged sum
//! that lets the parser and `sum`/`min`/`max` operate across kinds without
//! the caller picking one up front.

#![cfg_attr(not(feature = "std"), no_std)]

mod number;

/// Shared traits, the sign type, error kinds and the rounding-mode
/// decision table.
pub mod base {
    pub use exactnum_base::*;
}

/// The pluggable calculator kernel and its process-wide registry.
pub mod calc {
    pub use exactnum_calc::*;
}

/// The arbitrary-precision signed integer.
pub mod integer {
    pub use exactnum_int::*;
}

/// The fixed-scale exact decimal.
pub mod decimal {
    pub use exactnum_decimal::*;
}

/// The exact rational.
pub mod rational {
    pub use exactnum_rational::*;
}

pub use exactnum_decimal::BigDecimal;
pub use exactnum_int::BigInteger;
pub use exactnum_rational::BigRational;

pub use number::{parse_as_decimal, parse_as_integer, parse_as_rational, Number, NumberParseError, OfError};
