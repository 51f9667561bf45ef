//! The arbitrary-precision signed integer type `BigInteger`, built on top of
//! the [`exactnum_calc`] calculator kernel.
//!
//! This crate owns only the `BigInteger` value type and its operations
//! (§4.4 of the numeric model); digit-level arithmetic itself lives in
//! `exactnum-calc`, and the rounding-mode decision table lives in
//! `exactnum-base`.

mod big_integer;
mod convert;
mod error;
mod helper_macros;
#[cfg(feature = "rand")]
mod random;

pub use big_integer::BigInteger;

#[cfg(feature = "rand")]
pub use random::{thread_rng_source, RandomSource};
