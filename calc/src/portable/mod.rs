//! The portable [`Calculator`] implementation: schoolbook arithmetic on
//! base-1e9 limb vectors, operating directly on canonical signed decimal
//! digit strings at the trait boundary.

mod bitwise;
mod limbs;
mod radix;

use core::cmp::Ordering;

use exactnum_base::{self as base, ArithmeticError, RoundingMode, Sign};

use crate::kernel::{Calculator, Pair};
use limbs::Limbs;

/// A calculator that never leaves pure Rust: every operation works
/// block-by-block on the digit string itself.
#[derive(Default, Debug, Clone, Copy)]
pub struct PortableCalculator;

fn parse_signed(s: &str) -> (Sign, Limbs) {
    if let Some(rest) = s.strip_prefix('-') {
        (Sign::Negative, limbs::from_digits(rest))
    } else {
        (Sign::Positive, limbs::from_digits(s))
    }
}

fn render_signed(sign: Sign, mag: &Limbs) -> String {
    if limbs::is_zero(mag) {
        "0".to_string()
    } else if sign.is_negative() {
        format!("-{}", limbs::to_digits(mag))
    } else {
        limbs::to_digits(mag)
    }
}

impl PortableCalculator {
    fn div_qr_impl(&self, a: &str, b: &str) -> (Sign, Limbs, Sign, Limbs) {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        let (q, r) = limbs::div_rem(&ma, &mb);
        let qsign = sa * sb;
        let rsign = sa; // remainder carries the dividend's sign
        (qsign, q, rsign, r)
    }
}

impl Calculator for PortableCalculator {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn add(&self, a: &str, b: &str) -> String {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        if sa == sb {
            render_signed(sa, &limbs::add(&ma, &mb))
        } else {
            match limbs::cmp(&ma, &mb) {
                Ordering::Equal => "0".to_string(),
                Ordering::Greater => render_signed(sa, &limbs::sub(&ma, &mb)),
                Ordering::Less => render_signed(sb, &limbs::sub(&mb, &ma)),
            }
        }
    }

    fn sub(&self, a: &str, b: &str) -> String {
        self.add(a, &self.neg(b))
    }

    fn mul(&self, a: &str, b: &str) -> String {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        render_signed(sa * sb, &limbs::mul(&ma, &mb))
    }

    fn div_qr(&self, a: &str, b: &str) -> Pair {
        let (qsign, q, rsign, r) = self.div_qr_impl(a, b);
        (render_signed(qsign, &q), render_signed(rsign, &r))
    }

    fn div_round(&self, a: &str, b: &str, mode: RoundingMode) -> Result<String, ArithmeticError> {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        let (q, r) = limbs::div_rem(&ma, &mb);
        let result_sign = sa * sb;
        if limbs::is_zero(&r) {
            return Ok(render_signed(result_sign, &q));
        }
        let half_cmp = limbs::cmp(&limbs::mul_scalar(&r, 2), &mb);
        // BASE (1e9) is even, so every limb above the least significant one
        // contributes an even amount; the quotient's parity is just the
        // least significant limb's parity.
        let quotient_is_odd = q[0] % 2 == 1;
        let adjustment = base::rounding::decide(mode, result_sign, half_cmp, quotient_is_odd)?;
        let q = match adjustment {
            base::Adjustment::Truncate => q,
            base::Adjustment::AwayFromZero => limbs::add_scalar(&q, 1),
        };
        Ok(render_signed(result_sign, &q))
    }

    fn pow(&self, a: &str, e: u64) -> String {
        let (sa, ma) = parse_signed(a);
        let result_sign = if sa.is_negative() && e % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        render_signed(result_sign, &limbs::pow(&ma, e))
    }

    fn mod_pow(&self, base_: &str, exp: &str, modulus: &str) -> String {
        let (_, mbase) = parse_signed(base_);
        let (_, mmod) = parse_signed(modulus);
        let (_, exp_mag) = parse_signed(exp);
        let exp_bits = radix::to_base(&exp_mag, 2).unwrap();

        let mut result = limbs::div_rem(&limbs::one(), &mmod).1;
        let mut cur = limbs::div_rem(&mbase, &mmod).1;
        for bit in exp_bits.bytes().rev() {
            if bit == b'1' {
                result = limbs::div_rem(&limbs::mul(&result, &cur), &mmod).1;
            }
            cur = limbs::div_rem(&limbs::mul(&cur, &cur), &mmod).1;
        }
        // (-a)^e mod m == a^e mod m when e is even, and its modular negation
        // when e is odd; we computed with the magnitude of a throughout.
        let (sa, _) = parse_signed(base_);
        let exponent_is_odd = exp_bits.as_bytes().last() == Some(&b'1');
        if sa.is_negative() && exponent_is_odd && !limbs::is_zero(&result) {
            result = limbs::sub(&mmod, &result);
        }
        render_signed(Sign::Positive, &result)
    }

    fn modulo(&self, a: &str, m: &str) -> String {
        let (sa, ma) = parse_signed(a);
        let (_, mm) = parse_signed(m);
        let (_, r) = limbs::div_rem(&ma, &mm);
        if limbs::is_zero(&r) {
            return "0".to_string();
        }
        if sa.is_negative() {
            render_signed(Sign::Positive, &limbs::sub(&mm, &r))
        } else {
            render_signed(Sign::Positive, &r)
        }
    }

    fn mod_inverse(&self, a: &str, m: &str) -> Result<String, ArithmeticError> {
        let (_, mm) = parse_signed(m);
        let a_mod = self.modulo(a, m);
        let (_, ma) = parse_signed(&a_mod);
        let (g, x, _y) = extended_gcd(&ma, &mm);
        if limbs::cmp(&g, &limbs::one()) != Ordering::Equal {
            return Err(ArithmeticError::NoInverse);
        }
        let inv = self.modulo(&x, m);
        Ok(inv)
    }

    fn gcd(&self, a: &str, b: &str) -> String {
        let (_, ma) = parse_signed(a);
        let (_, mb) = parse_signed(b);
        render_signed(Sign::Positive, &limbs::gcd(&ma, &mb))
    }

    fn lcm(&self, a: &str, b: &str) -> String {
        let (_, ma) = parse_signed(a);
        let (_, mb) = parse_signed(b);
        if limbs::is_zero(&ma) || limbs::is_zero(&mb) {
            return "0".to_string();
        }
        let g = limbs::gcd(&ma, &mb);
        let (q, _) = limbs::div_rem(&ma, &g);
        render_signed(Sign::Positive, &limbs::mul(&q, &mb))
    }

    fn sqrt(&self, n: &str) -> Pair {
        let (_, mn) = parse_signed(n);
        let (root, rem) = limbs::sqrt(&mn);
        (render_signed(Sign::Positive, &root), render_signed(Sign::Positive, &rem))
    }

    fn cmp(&self, a: &str, b: &str) -> Ordering {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        let a_is_zero = limbs::is_zero(&ma);
        let b_is_zero = limbs::is_zero(&mb);
        if a_is_zero && b_is_zero {
            return Ordering::Equal;
        }
        if a_is_zero {
            return if sb.is_positive() { Ordering::Less } else { Ordering::Greater };
        }
        if b_is_zero {
            return if sa.is_positive() { Ordering::Greater } else { Ordering::Less };
        }
        match (sa, sb) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => limbs::cmp(&ma, &mb),
            (Sign::Negative, Sign::Negative) => limbs::cmp(&mb, &ma),
        }
    }

    fn neg(&self, a: &str) -> String {
        if let Some(rest) = a.strip_prefix('-') {
            rest.to_string()
        } else if a == "0" {
            "0".to_string()
        } else {
            format!("-{a}")
        }
    }

    fn and(&self, a: &str, b: &str) -> String {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        let (s, m) = bitwise::and(sa, &ma, sb, &mb);
        render_signed(s, &m)
    }

    fn or(&self, a: &str, b: &str) -> String {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        let (s, m) = bitwise::or(sa, &ma, sb, &mb);
        render_signed(s, &m)
    }

    fn xor(&self, a: &str, b: &str) -> String {
        let (sa, ma) = parse_signed(a);
        let (sb, mb) = parse_signed(b);
        let (s, m) = bitwise::xor(sa, &ma, sb, &mb);
        render_signed(s, &m)
    }

    fn from_base(&self, s: &str, base: u32) -> Result<String, ArithmeticError> {
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s.strip_prefix('+').unwrap_or(s)),
        };
        let mag = radix::from_base(rest, base)?;
        Ok(render_signed(sign, &mag))
    }

    fn to_base(&self, n: &str, base: u32) -> Result<String, ArithmeticError> {
        let (sign, mag) = parse_signed(n);
        let digits = radix::to_base(&mag, base)?;
        Ok(if sign.is_negative() && !limbs::is_zero(&mag) {
            format!("-{digits}")
        } else {
            digits
        })
    }

    fn from_arbitrary_base(&self, digits: &[u8], alphabet: &[u8]) -> Result<String, ArithmeticError> {
        let mag = radix::from_arbitrary_base(digits, alphabet)?;
        Ok(render_signed(Sign::Positive, &mag))
    }

    fn to_arbitrary_base(&self, n: &str, alphabet: &[u8]) -> Result<Vec<u8>, ArithmeticError> {
        let (sign, mag) = parse_signed(n);
        if sign.is_negative() && !limbs::is_zero(&mag) {
            return Err(ArithmeticError::NegativeNumber);
        }
        radix::to_arbitrary_base(&mag, alphabet)
    }
}

/// Extended Euclidean algorithm on non-negative magnitudes, returning
/// `(gcd, x, y)` such that `a*x + b*y == gcd`. `x` may be negative, encoded
/// as a canonical signed decimal string.
fn extended_gcd(a: &Limbs, b: &Limbs) -> (Limbs, String, String) {
    if limbs::is_zero(b) {
        return (a.clone(), "1".to_string(), "0".to_string());
    }
    let (q, r) = limbs::div_rem(a, b);
    let (g, x1, y1) = extended_gcd(b, &r);
    // x = y1, y = x1 - q*y1
    let calc = PortableCalculator;
    let qy1 = calc.mul(&limbs::to_digits(&q), &y1);
    let y = calc.sub(&x1, &qy1);
    (g, y1, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_mul_basic() {
        let c = PortableCalculator;
        assert_eq!(c.add("123", "456"), "579");
        assert_eq!(c.add("-5", "3"), "-2");
        assert_eq!(c.sub("10", "20"), "-10");
        assert_eq!(c.mul("-6", "7"), "-42");
        assert_eq!(c.mul("0", "99999999999999999999"), "0");
    }

    #[test]
    fn div_qr_sign_rules() {
        let c = PortableCalculator;
        assert_eq!(c.div_qr("7", "2"), ("3".into(), "1".into()));
        assert_eq!(c.div_qr("-7", "2"), ("-3".into(), "-1".into()));
        assert_eq!(c.div_qr("7", "-2"), ("-3".into(), "1".into()));
        assert_eq!(c.div_qr("-7", "-2"), ("3".into(), "-1".into()));
    }

    #[test]
    fn modulo_is_euclidean() {
        let c = PortableCalculator;
        assert_eq!(c.modulo("-7", "3"), "2");
        assert_eq!(c.modulo("7", "3"), "1");
    }

    #[test]
    fn gcd_lcm() {
        let c = PortableCalculator;
        assert_eq!(c.gcd("48", "18"), "6");
        assert_eq!(c.gcd("0", "0"), "0");
        assert_eq!(c.lcm("4", "6"), "12");
        assert_eq!(c.lcm("0", "5"), "0");
    }

    #[test]
    fn sqrt_floor() {
        let c = PortableCalculator;
        assert_eq!(c.sqrt("10"), ("3".into(), "1".into()));
        assert_eq!(c.sqrt("9"), ("3".into(), "0".into()));
        assert_eq!(c.sqrt("0"), ("0".into(), "0".into()));
    }

    #[test]
    fn mod_pow_basic() {
        let c = PortableCalculator;
        assert_eq!(c.mod_pow("4", "13", "497"), "445");
    }

    #[test]
    fn mod_inverse_basic() {
        let c = PortableCalculator;
        assert_eq!(c.mod_inverse("3", "11").unwrap(), "4");
        assert!(c.mod_inverse("2", "4").is_err());
    }

    #[test]
    fn base_conversion_roundtrip() {
        let c = PortableCalculator;
        let n = "3735928559"; // 0xDEADBEEF
        let hex = c.to_base(n, 16).unwrap();
        assert_eq!(hex, "deadbeef");
        assert_eq!(c.from_base(&hex, 16).unwrap(), n);
    }

    #[test]
    fn cmp_mixed_signs() {
        let c = PortableCalculator;
        assert_eq!(c.cmp("-5", "3"), Ordering::Less);
        assert_eq!(c.cmp("0", "0"), Ordering::Equal);
        assert_eq!(c.cmp("-5", "-3"), Ordering::Less);
    }
}
