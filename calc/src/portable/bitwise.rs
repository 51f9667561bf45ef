//! Bitwise AND/OR/XOR on the infinite-precision two's-complement
//! representation of signed magnitudes.
//!
//! A negative value's two's-complement bit at position `i` is the
//! complement of `(|n| - 1)`'s bit at position `i`; beyond its own bit
//! length it is an implicit, infinitely repeating `1`. A non-negative
//! value's bits beyond its own bit length are an implicit, infinitely
//! repeating `0`. To combine two operands bitwise it is enough to widen
//! both to one bit past the wider operand's bit length: every bit beyond
//! that point is constant on both sides, so the combined result is constant
//! there too and the sign of that constant tail is exactly the sign of the
//! combined result.

use exactnum_base::Sign;

use super::limbs::{self, Limbs};
use super::radix;

fn magnitude_bit_length(mag: &[u32]) -> usize {
    if limbs::is_zero(mag) {
        0
    } else {
        radix::to_base(mag, 2).unwrap().len()
    }
}

/// Two's-complement bit width needed to represent `(sign, mag)` including
/// its sign bit.
fn needed_width(sign: Sign, mag: &[u32]) -> usize {
    if limbs::is_zero(mag) {
        return 0;
    }
    match sign {
        Sign::Positive => magnitude_bit_length(mag),
        Sign::Negative => {
            let m1 = limbs::sub_scalar(mag, 1);
            magnitude_bit_length(&m1) + 1
        }
    }
}

fn binary_string_to_limbs(s: &str) -> Limbs {
    if s.bytes().all(|b| b == b'0') {
        limbs::zero()
    } else {
        radix::from_base(s, 2).unwrap()
    }
}

/// Least-significant-bit-first two's-complement bits of `(sign, mag)`,
/// padded (sign-extended) to exactly `width` bits.
fn twos_complement_bits(sign: Sign, mag: &[u32], width: usize) -> Vec<u8> {
    let mut bits = match sign {
        Sign::Positive => {
            if limbs::is_zero(mag) {
                Vec::new()
            } else {
                radix::to_base(mag, 2)
                    .unwrap()
                    .bytes()
                    .rev()
                    .map(|b| b - b'0')
                    .collect()
            }
        }
        Sign::Negative => {
            let m1 = limbs::sub_scalar(mag, 1);
            let mut bits: Vec<u8> = if limbs::is_zero(&m1) {
                Vec::new()
            } else {
                radix::to_base(&m1, 2)
                    .unwrap()
                    .bytes()
                    .rev()
                    .map(|b| b - b'0')
                    .collect()
            };
            bits.resize(width, 0);
            for b in bits.iter_mut() {
                *b = 1 - *b;
            }
            return bits;
        }
    };
    bits.resize(width, 0);
    bits
}

fn decode(bits: &[u8]) -> (Sign, Limbs) {
    let width = bits.len();
    if width == 0 {
        return (Sign::Positive, limbs::zero());
    }
    if bits[width - 1] == 1 {
        let inverted: String = bits.iter().rev().map(|&b| if b == 1 { '0' } else { '1' }).collect();
        let m1 = binary_string_to_limbs(&inverted);
        let mag = limbs::add_scalar(&m1, 1);
        (Sign::Negative, mag)
    } else {
        let msb_first: String = bits.iter().rev().map(|&b| if b == 1 { '1' } else { '0' }).collect();
        (Sign::Positive, binary_string_to_limbs(&msb_first))
    }
}

enum Op {
    And,
    Or,
    Xor,
}

fn combine(sign_a: Sign, mag_a: &[u32], sign_b: Sign, mag_b: &[u32], op: Op) -> (Sign, Limbs) {
    let width = needed_width(sign_a, mag_a).max(needed_width(sign_b, mag_b)) + 1;
    let bits_a = twos_complement_bits(sign_a, mag_a, width);
    let bits_b = twos_complement_bits(sign_b, mag_b, width);
    let result: Vec<u8> = bits_a
        .iter()
        .zip(bits_b.iter())
        .map(|(&x, &y)| match op {
            Op::And => x & y,
            Op::Or => x | y,
            Op::Xor => x ^ y,
        })
        .collect();
    let (sign, mag) = decode(&result);
    if limbs::is_zero(&mag) {
        (Sign::Positive, mag)
    } else {
        (sign, mag)
    }
}

pub fn and(sign_a: Sign, mag_a: &[u32], sign_b: Sign, mag_b: &[u32]) -> (Sign, Limbs) {
    combine(sign_a, mag_a, sign_b, mag_b, Op::And)
}

pub fn or(sign_a: Sign, mag_a: &[u32], sign_b: Sign, mag_b: &[u32]) -> (Sign, Limbs) {
    combine(sign_a, mag_a, sign_b, mag_b, Op::Or)
}

pub fn xor(sign_a: Sign, mag_a: &[u32], sign_b: Sign, mag_b: &[u32]) -> (Sign, Limbs) {
    combine(sign_a, mag_a, sign_b, mag_b, Op::Xor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mag(s: &str) -> Limbs {
        limbs::from_digits(s)
    }

    #[test]
    fn and_of_positives() {
        // 12 & 10 == 8
        let (sign, m) = and(Sign::Positive, &mag("12"), Sign::Positive, &mag("10"));
        assert_eq!(sign, Sign::Positive);
        assert_eq!(limbs::to_digits(&m), "8");
    }

    #[test]
    fn or_of_positives() {
        // 12 | 10 == 14
        let (sign, m) = or(Sign::Positive, &mag("12"), Sign::Positive, &mag("10"));
        assert_eq!(sign, Sign::Positive);
        assert_eq!(limbs::to_digits(&m), "14");
    }

    #[test]
    fn xor_of_positives() {
        // 12 ^ 10 == 6
        let (sign, m) = xor(Sign::Positive, &mag("12"), Sign::Positive, &mag("10"));
        assert_eq!(sign, Sign::Positive);
        assert_eq!(limbs::to_digits(&m), "6");
    }

    #[test]
    fn and_with_negative_is_negative_only_if_both_negative() {
        // -1 & -1 == -1 (all bits set on both sides)
        let (sign, m) = and(Sign::Negative, &mag("1"), Sign::Negative, &mag("1"));
        assert_eq!(sign, Sign::Negative);
        assert_eq!(limbs::to_digits(&m), "1");

        // -1 & 5 == 5
        let (sign, m) = and(Sign::Negative, &mag("1"), Sign::Positive, &mag("5"));
        assert_eq!(sign, Sign::Positive);
        assert_eq!(limbs::to_digits(&m), "5");
    }
}
