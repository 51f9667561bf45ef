//! This crate contains the trait definitions, sign type, error kinds and the
//! rounding-mode decision table shared by the `exactnum-*` crates.

pub mod error;
pub mod rounding;
pub mod sign;

pub use error::{ArithmeticError, ParseError, RoundingNecessaryReason};
pub use rounding::{Adjustment, RoundingMode};
pub use sign::Sign;
