//! A calculator that takes a fast path through the host's 128-bit integers
//! and falls back to [`PortableCalculator`] the moment an operand or an
//! intermediate result would overflow.
//!
//! This mirrors the small-value fast path that big-integer libraries
//! typically keep alongside their general multi-limb algorithms (a single
//! machine word or double word holds the vast majority of real inputs):
//! here the "native" backend is that fast path, and the portable backend is
//! the always-correct fallback it defers to once a value grows too large.

use core::cmp::Ordering;

use exactnum_base::{ArithmeticError, RoundingMode};

use crate::kernel::{Calculator, Pair};
use crate::portable::PortableCalculator;

#[derive(Default, Debug, Clone, Copy)]
pub struct NativeCalculator {
    portable: PortableCalculator,
}

fn parse_i128(s: &str) -> Option<i128> {
    s.parse::<i128>().ok()
}

impl NativeCalculator {
    pub fn new() -> Self {
        Self {
            portable: PortableCalculator,
        }
    }
}

macro_rules! fast_binop {
    ($self:ident, $a:ident, $b:ident, $checked:ident, $fallback:expr) => {
        if let (Some(x), Some(y)) = (parse_i128($a), parse_i128($b)) {
            if let Some(r) = x.$checked(y) {
                return r.to_string();
            }
        }
        return $fallback;
    };
}

impl Calculator for NativeCalculator {
    fn name(&self) -> &'static str {
        "native"
    }

    fn add(&self, a: &str, b: &str) -> String {
        fast_binop!(self, a, b, checked_add, self.portable.add(a, b));
    }

    fn sub(&self, a: &str, b: &str) -> String {
        fast_binop!(self, a, b, checked_sub, self.portable.sub(a, b));
    }

    fn mul(&self, a: &str, b: &str) -> String {
        fast_binop!(self, a, b, checked_mul, self.portable.mul(a, b));
    }

    fn div_qr(&self, a: &str, b: &str) -> Pair {
        if let (Some(x), Some(y)) = (parse_i128(a), parse_i128(b)) {
            if y != 0 && !(x == i128::MIN && y == -1) {
                return ((x / y).to_string(), (x % y).to_string());
            }
        }
        self.portable.div_qr(a, b)
    }

    fn div_round(&self, a: &str, b: &str, mode: RoundingMode) -> Result<String, ArithmeticError> {
        self.portable.div_round(a, b, mode)
    }

    fn pow(&self, a: &str, e: u64) -> String {
        if let Some(x) = parse_i128(a) {
            if let Ok(exp) = u32::try_from(e) {
                if let Some(r) = x.checked_pow(exp) {
                    return r.to_string();
                }
            }
        }
        self.portable.pow(a, e)
    }

    fn mod_pow(&self, base: &str, exp: &str, modulus: &str) -> String {
        self.portable.mod_pow(base, exp, modulus)
    }

    fn modulo(&self, a: &str, m: &str) -> String {
        if let (Some(x), Some(y)) = (parse_i128(a), parse_i128(m)) {
            if y > 0 {
                let r = x % y;
                let r = if r < 0 { r + y } else { r };
                return r.to_string();
            }
        }
        self.portable.modulo(a, m)
    }

    fn mod_inverse(&self, a: &str, m: &str) -> Result<String, ArithmeticError> {
        self.portable.mod_inverse(a, m)
    }

    fn gcd(&self, a: &str, b: &str) -> String {
        if let (Some(x), Some(y)) = (parse_i128(a), parse_i128(b)) {
            if let (Some(mut x), Some(mut y)) = (x.checked_abs(), y.checked_abs()) {
                while y != 0 {
                    let t = x % y;
                    x = y;
                    y = t;
                }
                return x.to_string();
            }
        }
        self.portable.gcd(a, b)
    }

    fn lcm(&self, a: &str, b: &str) -> String {
        self.portable.lcm(a, b)
    }

    fn sqrt(&self, n: &str) -> Pair {
        if let Some(x) = parse_i128(n) {
            if x >= 0 {
                let root = isqrt_i128(x);
                let rem = x - root * root;
                return (root.to_string(), rem.to_string());
            }
        }
        self.portable.sqrt(n)
    }

    fn cmp(&self, a: &str, b: &str) -> Ordering {
        if let (Some(x), Some(y)) = (parse_i128(a), parse_i128(b)) {
            return x.cmp(&y);
        }
        self.portable.cmp(a, b)
    }

    fn neg(&self, a: &str) -> String {
        if let Some(x) = parse_i128(a) {
            if let Some(r) = x.checked_neg() {
                return r.to_string();
            }
        }
        self.portable.neg(a)
    }

    fn and(&self, a: &str, b: &str) -> String {
        if let (Some(x), Some(y)) = (parse_i128(a), parse_i128(b)) {
            return (x & y).to_string();
        }
        self.portable.and(a, b)
    }

    fn or(&self, a: &str, b: &str) -> String {
        if let (Some(x), Some(y)) = (parse_i128(a), parse_i128(b)) {
            return (x | y).to_string();
        }
        self.portable.or(a, b)
    }

    fn xor(&self, a: &str, b: &str) -> String {
        if let (Some(x), Some(y)) = (parse_i128(a), parse_i128(b)) {
            return (x ^ y).to_string();
        }
        self.portable.xor(a, b)
    }

    fn from_base(&self, s: &str, base: u32) -> Result<String, ArithmeticError> {
        self.portable.from_base(s, base)
    }

    fn to_base(&self, n: &str, base: u32) -> Result<String, ArithmeticError> {
        self.portable.to_base(n, base)
    }

    fn from_arbitrary_base(&self, digits: &[u8], alphabet: &[u8]) -> Result<String, ArithmeticError> {
        self.portable.from_arbitrary_base(digits, alphabet)
    }

    fn to_arbitrary_base(&self, n: &str, alphabet: &[u8]) -> Result<Vec<u8>, ArithmeticError> {
        self.portable.to_arbitrary_base(n, alphabet)
    }
}

fn isqrt_i128(n: i128) -> i128 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as i128 + 1;
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_matches_portable() {
        let native = NativeCalculator::new();
        let portable = PortableCalculator;
        assert_eq!(native.add("123", "456"), portable.add("123", "456"));
        assert_eq!(native.mul("-12", "34"), portable.mul("-12", "34"));
        assert_eq!(native.sqrt("10"), portable.sqrt("10"));
    }

    #[test]
    fn overflow_falls_back_to_portable() {
        let native = NativeCalculator::new();
        let huge = "1".to_string() + &"0".repeat(40);
        assert_eq!(native.add(&huge, "1"), PortableCalculator.add(&huge, "1"));
    }

    #[test]
    fn gcd_of_i128_min_falls_back_instead_of_panicking() {
        // i128::MIN has no positive i128 representation, so `abs()` would
        // panic (debug) or wrap (release); `checked_abs()` catches this and
        // the portable calculator is used instead, same as every other
        // overflow path here.
        let native = NativeCalculator::new();
        let min = i128::MIN.to_string();
        assert_eq!(native.gcd(&min, "6"), PortableCalculator.gcd(&min, "6"));
    }
}
