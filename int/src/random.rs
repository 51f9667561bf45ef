//! Random `BigInteger` generation from an injectable byte source.
//!
//! The library never reaches for a global RNG directly: every random
//! operation goes through a [`RandomSource`], so callers can substitute a
//! deterministic source in tests (a closure that starts from a fixed seed,
//! recorded byte fixtures, ...) exactly as the spec's injectable callback
//! `(byteCount) -> bytes` requires. [`thread_rng_source`] is the convenience
//! default backed by `rand`'s thread-local CSPRNG.

use exactnum_base::ArithmeticError;
use rand::RngCore;

use crate::big_integer::BigInteger;

/// A source of random bytes. Implementations may fail (`RandomSource`
/// errors surface through [`ArithmeticError::RandomSource`]); a source
/// that never fails can simply use [`core::convert::Infallible`]-style
/// `Ok` returns.
pub trait RandomSource {
    /// Return exactly `byte_count` random bytes, or fail.
    fn next_bytes(&mut self, byte_count: usize) -> Result<Vec<u8>, ArithmeticError>;
}

impl<F> RandomSource for F
where
    F: FnMut(usize) -> Result<Vec<u8>, ArithmeticError>,
{
    fn next_bytes(&mut self, byte_count: usize) -> Result<Vec<u8>, ArithmeticError> {
        self(byte_count)
    }
}

/// A [`RandomSource`] backed by `rand`'s thread-local cryptographic RNG.
/// This is the library's default when no source is injected explicitly.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_bytes(&mut self, byte_count: usize) -> Result<Vec<u8>, ArithmeticError> {
        let mut buf = vec![0u8; byte_count];
        rand::thread_rng().try_fill_bytes(&mut buf).map_err(|_| ArithmeticError::RandomSource)?;
        Ok(buf)
    }
}

/// A fresh [`ThreadRngSource`], for callers that don't need a custom source.
pub fn thread_rng_source() -> ThreadRngSource {
    ThreadRngSource
}

impl BigInteger {
    /// `n` uniformly random bits, interpreted as an unsigned integer in
    /// `[0, 2^n)`. Draws `⌈n/8⌉` bytes from `source` and masks the excess
    /// high bits of the top byte so the value never exceeds `n` bits.
    pub fn random_bits(n: u64, source: &mut impl RandomSource) -> Result<Self, ArithmeticError> {
        if n == 0 {
            return Ok(BigInteger::zero());
        }
        let byte_count = ((n + 7) / 8) as usize;
        let mut bytes = source.next_bytes(byte_count)?;
        if bytes.len() != byte_count {
            return Err(ArithmeticError::RandomSource);
        }
        let excess_bits = (byte_count as u64) * 8 - n;
        if excess_bits > 0 {
            bytes[0] &= 0xFFu8 >> excess_bits;
        }
        BigInteger::from_unsigned_bytes_be(&bytes)
    }

    /// A uniformly random value in `[min, max)`, by rejection sampling over
    /// [`random_bits`][Self::random_bits] at the bit length of `max - min`.
    /// Fails with `InvalidArgument` iff `min >= max`.
    pub fn random_range(
        min: &Self,
        max: &Self,
        source: &mut impl RandomSource,
    ) -> Result<Self, ArithmeticError> {
        if min.cmp_value(max) != core::cmp::Ordering::Less {
            return Err(ArithmeticError::InvalidArgument);
        }
        let span = max - min;
        let bit_len = span.get_bit_length();
        loop {
            let candidate = BigInteger::random_bits(bit_len, source)?;
            if candidate.cmp_value(&span) == core::cmp::Ordering::Less {
                return Ok(min + &candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_source(bytes: Vec<u8>) -> impl FnMut(usize) -> Result<Vec<u8>, ArithmeticError> {
        move |count| {
            assert_eq!(count, bytes.len());
            Ok(bytes.clone())
        }
    }

    #[test]
    fn random_bits_masks_excess_bits() {
        let mut source = fixed_source(vec![0xFF]);
        let n = BigInteger::random_bits(5, &mut source).unwrap();
        // 5 bits of a 0xFF byte, masked to the low 5 bits: 0b00011111 = 31
        assert_eq!(n, BigInteger::from(31u32));
    }

    #[test]
    fn random_bits_zero_is_zero() {
        let mut source = fixed_source(vec![]);
        assert_eq!(BigInteger::random_bits(0, &mut source).unwrap(), BigInteger::zero());
    }

    #[test]
    fn random_range_rejects_bad_bounds() {
        let mut source = thread_rng_source();
        let five = BigInteger::from(5u32);
        let three = BigInteger::from(3u32);
        assert!(BigInteger::random_range(&five, &three, &mut source).is_err());
        assert!(BigInteger::random_range(&five, &five, &mut source).is_err());
    }

    #[test]
    fn random_range_stays_in_bounds() {
        let mut source = thread_rng_source();
        let min = BigInteger::from(10u32);
        let max = BigInteger::from(20u32);
        for _ in 0..50 {
            let v = BigInteger::random_range(&min, &max, &mut source).unwrap();
            assert!(v >= min && v < max);
        }
    }

    #[test]
    fn random_source_surfaces_wrong_length() {
        let mut source = |_: usize| Ok(vec![0u8; 2]);
        assert!(BigInteger::random_bits(32, &mut source).is_err());
    }
}
