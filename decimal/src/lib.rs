//! The fixed-scale exact decimal type `BigDecimal`, built on `BigInteger`.
//!
//! A `BigDecimal` is a pair `(unscaled, scale)` with `unscaled` a canonical
//! `BigInteger` and `scale` non-negative, denoting `unscaled · 10^(-scale)`.
//! This crate owns the value type (§4.5) and the scale-arithmetic helper
//! (§4.3); all digit-level work is still delegated to `exactnum-calc`
//! through `BigInteger`.

mod big_decimal;
mod error;
mod helper;

pub use big_decimal::BigDecimal;
pub use helper::{pad_unscaled_digits, rescale, scale_from_reduced_denominator, try_rescale_exactly};
