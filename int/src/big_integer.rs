//! The arbitrary-precision signed integer type.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use exactnum_base::{ArithmeticError, ParseError, RoundingMode};
use exactnum_calc::calculator;

use crate::error::{panic_divide_by_0, panic_negative_modulus};
use crate::helper_macros::forward_binop;

/// An arbitrary-precision signed integer.
///
/// Canonical form is a sign-prefixed decimal digit string with no leading
/// zeros; `0` is unique and never carries a minus sign. Values are
/// immutable: every operation returns a fresh `BigInteger`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BigInteger {
    pub(crate) repr: String,
}

impl BigInteger {
    /// Wrap an already-canonical signed decimal string. Only used
    /// internally and by the kernel, which is itself responsible for
    /// producing canonical output.
    pub(crate) fn from_canonical(repr: String) -> Self {
        debug_assert!(is_canonical(&repr), "non-canonical BigInteger repr: {repr}");
        Self { repr }
    }

    pub fn zero() -> Self {
        Self::from_canonical("0".to_string())
    }

    pub fn one() -> Self {
        Self::from_canonical("1".to_string())
    }

    pub fn ten() -> Self {
        Self::from_canonical("10".to_string())
    }

    pub fn is_zero(&self) -> bool {
        self.repr == "0"
    }

    pub fn is_negative(&self) -> bool {
        self.repr.starts_with('-')
    }

    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    pub fn is_even(&self) -> bool {
        let last = self.repr.as_bytes()[self.repr.len() - 1];
        (last - b'0') % 2 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// The canonical digit string, e.g. `"-42"` or `"0"`.
    pub fn as_canonical_str(&self) -> &str {
        &self.repr
    }

    /// Parse a value in `base` (`2..=36`, case-insensitive digits
    /// `0-9a-z`), with an optional leading `+`/`-`.
    pub fn parse_radix(s: &str, base: u32) -> Result<Self, ParseError> {
        if !(2..=36).contains(&base) {
            return Err(ParseError::UnsupportedRadix);
        }
        let trimmed = s.strip_prefix('+').unwrap_or(s);
        let (_, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if digits.is_empty() {
            return Err(ParseError::NoDigits);
        }
        calculator()
            .from_base(trimmed, base)
            .map(Self::from_canonical)
            .map_err(|_| ParseError::InvalidDigit)
    }

    /// Render in `base` (`2..=36`), lowercase, with a leading `-` when
    /// negative.
    pub fn to_radix_string(&self, base: u32) -> Result<String, ArithmeticError> {
        calculator().to_base(&self.repr, base)
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    pub fn negated(&self) -> Self {
        -self
    }

    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    pub fn cmp_value(&self, other: &Self) -> Ordering {
        calculator().cmp(&self.repr, &other.repr)
    }

    pub fn pow(&self, exp: u64) -> Self {
        Self::from_canonical(calculator().pow(&self.repr, exp))
    }

    /// Truncated-toward-zero quotient and remainder; `None` if `divisor` is
    /// zero.
    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        let (q, r) = calculator().div_qr(&self.repr, &divisor.repr);
        Some((Self::from_canonical(q), Self::from_canonical(r)))
    }

    pub fn quotient_and_remainder(&self, divisor: &Self) -> (Self, Self) {
        self.checked_div_rem(divisor).unwrap_or_else(|| panic_divide_by_0())
    }

    pub fn quotient(&self, divisor: &Self) -> Self {
        self.quotient_and_remainder(divisor).0
    }

    pub fn remainder(&self, divisor: &Self) -> Self {
        self.quotient_and_remainder(divisor).1
    }

    /// Exact quotient when divisible, otherwise rounded per `mode`. Fails
    /// iff `mode` is `Unnecessary` and the division is inexact, or the
    /// divisor is zero.
    pub fn divided_by(&self, divisor: &Self, mode: RoundingMode) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        calculator()
            .div_round(&self.repr, &divisor.repr, mode)
            .map(Self::from_canonical)
    }

    /// Euclidean remainder in `[0, modulus)`. `modulus` must be positive.
    pub fn mod_euclid(&self, modulus: &Self) -> Self {
        if !modulus.is_positive() {
            panic_negative_modulus();
        }
        Self::from_canonical(calculator().modulo(&self.repr, &modulus.repr))
    }

    /// `self^exp mod modulus`, normalized into `[0, modulus)`. `exp` must be
    /// non-negative and `modulus` positive.
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> Self {
        if exp.is_negative() {
            panic!("exponent must not be negative");
        }
        if !modulus.is_positive() {
            panic_negative_modulus();
        }
        Self::from_canonical(calculator().mod_pow(&self.repr, &exp.repr, &modulus.repr))
    }

    /// The modular inverse of `self` modulo `modulus`, or `Err(NoInverse)`
    /// iff `gcd(self, modulus) != 1`. `modulus` must be positive.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self, ArithmeticError> {
        if !modulus.is_positive() {
            panic_negative_modulus();
        }
        calculator()
            .mod_inverse(&self.repr, &modulus.repr)
            .map(Self::from_canonical)
    }

    pub fn gcd(&self, other: &Self) -> Self {
        Self::from_canonical(calculator().gcd(&self.repr, &other.repr))
    }

    pub fn lcm(&self, other: &Self) -> Self {
        Self::from_canonical(calculator().lcm(&self.repr, &other.repr))
    }

    /// Floor square root, rounded per `mode` when inexact. `self` must be
    /// non-negative.
    pub fn sqrt(&self, mode: RoundingMode) -> Result<Self, ArithmeticError> {
        if self.is_negative() {
            return Err(ArithmeticError::NegativeNumber);
        }
        let (root, rem) = calculator().sqrt(&self.repr);
        let root = BigInteger::from_canonical(root);
        if rem == "0" {
            return Ok(root);
        }
        // Compare 2*remainder to 2*root + 1, as specified: Half* modes
        // never see an exact tie because no integer square root is a
        // half-integer away from its floor.
        let two_rem = calculator().mul(&rem, "2");
        let two_root_plus_one = calculator().add(&calculator().mul(&root.repr, "2"), "1");
        let half_cmp = calculator().cmp(&two_rem, &two_root_plus_one);
        let quotient_is_odd = root.is_odd();
        let adjustment = exactnum_base::rounding::decide(
            mode,
            exactnum_base::Sign::Positive,
            half_cmp,
            quotient_is_odd,
        )?;
        Ok(match adjustment {
            exactnum_base::Adjustment::Truncate => root,
            exactnum_base::Adjustment::AwayFromZero => {
                Self::from_canonical(calculator().add(&root.repr, "1"))
            }
        })
    }

    pub fn get_bit_length(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        if self.is_positive() {
            bit_length_of_nonneg(&self.repr)
        } else {
            let mag_minus_one = calculator().sub(&calculator().neg(&self.repr), "1");
            bit_length_of_nonneg(&mag_minus_one)
        }
    }

    /// The position of the lowest set bit, or `-1` for zero. Coincides for
    /// `n` and `-n`.
    pub fn get_lowest_set_bit(&self) -> i64 {
        if self.is_zero() {
            return -1;
        }
        let mag = self.abs();
        let binary = calculator().to_base(&mag.repr, 2).unwrap();
        let trailing_zeros = binary.bytes().rev().take_while(|&b| b == b'0').count();
        trailing_zeros as i64
    }

    pub fn is_bit_set(&self, position: u64) -> bool {
        let mask = BigInteger::one().shifted_left(position);
        !(self & &mask).is_zero()
    }

    pub fn shifted_left(&self, bits: u64) -> Self {
        let factor = BigInteger::from_canonical(calculator().pow("2", bits));
        self * &factor
    }

    /// Arithmetic shift right: truncated toward zero for non-negative
    /// values, floored (toward -infinity) for negative values, so it always
    /// equals floor division by `2^bits`.
    pub fn shifted_right(&self, bits: u64) -> Self {
        let divisor = BigInteger::from_canonical(calculator().pow("2", bits));
        let (q, r) = self.quotient_and_remainder(&divisor);
        if self.is_negative() && !r.is_zero() {
            &q - &BigInteger::one()
        } else {
            q
        }
    }

    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        let alphabet: Vec<u8> = (0u8..=255).collect();
        let mag = self.abs();
        if self.is_negative() {
            let mag_minus_one = &mag - &BigInteger::one();
            let mut bytes = calculator()
                .to_arbitrary_base(&mag_minus_one.repr, &alphabet)
                .unwrap();
            for b in bytes.iter_mut() {
                *b = !*b;
            }
            if bytes[0] & 0x80 == 0 {
                bytes.insert(0, 0xFF);
            }
            bytes
        } else {
            let mut bytes = calculator().to_arbitrary_base(&mag.repr, &alphabet).unwrap();
            if bytes[0] & 0x80 != 0 {
                bytes.insert(0, 0x00);
            }
            bytes
        }
    }

    pub fn from_signed_bytes_be(bytes: &[u8]) -> Result<Self, ArithmeticError> {
        if bytes.is_empty() {
            return Err(ArithmeticError::InvalidArgument);
        }
        let alphabet: Vec<u8> = (0u8..=255).collect();
        if bytes[0] & 0x80 == 0 {
            let mag = calculator().from_arbitrary_base(bytes, &alphabet)?;
            Ok(Self::from_canonical(mag))
        } else {
            let inverted: Vec<u8> = bytes.iter().map(|b| !b).collect();
            let mag_minus_one = calculator().from_arbitrary_base(&inverted, &alphabet)?;
            let mag = calculator().add(&mag_minus_one, "1");
            Ok(-Self::from_canonical(mag))
        }
    }

    /// Big-endian magnitude bytes. Fails with `NegativeNumber` if `self` is
    /// negative.
    pub fn to_unsigned_bytes_be(&self) -> Result<Vec<u8>, ArithmeticError> {
        if self.is_negative() {
            return Err(ArithmeticError::NegativeNumber);
        }
        let alphabet: Vec<u8> = (0u8..=255).collect();
        calculator().to_arbitrary_base(&self.repr, &alphabet)
    }

    pub fn from_unsigned_bytes_be(bytes: &[u8]) -> Result<Self, ArithmeticError> {
        if bytes.is_empty() {
            return Err(ArithmeticError::InvalidArgument);
        }
        let alphabet: Vec<u8> = (0u8..=255).collect();
        let mag = calculator().from_arbitrary_base(bytes, &alphabet)?;
        Ok(Self::from_canonical(mag))
    }
}

fn bit_length_of_nonneg(decimal: &str) -> u64 {
    if decimal == "0" {
        return 0;
    }
    calculator().to_base(decimal, 2).unwrap().len() as u64
}

fn is_canonical(s: &str) -> bool {
    if s == "0" {
        return true;
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.as_bytes()[0] != b'0'
        && s.len() > if s.starts_with('-') { 1 } else { 0 }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self.repr)
    }
}

impl FromStr for BigInteger {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix('+').unwrap_or(s);
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit);
        }
        let digits = digits.trim_start_matches('0');
        let negative = trimmed.starts_with('-') && !digits.is_empty();
        let magnitude = if digits.is_empty() { "0" } else { digits };
        let repr = if negative {
            format!("-{magnitude}")
        } else {
            magnitude.to_string()
        };
        Ok(Self::from_canonical(repr))
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

fn add_impl(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_canonical(calculator().add(&a.repr, &b.repr))
}
fn sub_impl(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_canonical(calculator().sub(&a.repr, &b.repr))
}
fn mul_impl(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_canonical(calculator().mul(&a.repr, &b.repr))
}
fn and_impl(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_canonical(calculator().and(&a.repr, &b.repr))
}
fn or_impl(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_canonical(calculator().or(&a.repr, &b.repr))
}
fn xor_impl(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_canonical(calculator().xor(&a.repr, &b.repr))
}

forward_binop!(Add, add, add_impl);
forward_binop!(Sub, sub, sub_impl);
forward_binop!(Mul, mul, mul_impl);
forward_binop!(BitAnd, bitand, and_impl);
forward_binop!(BitOr, bitor, or_impl);
forward_binop!(BitXor, bitxor, xor_impl);

impl core::ops::Neg for &BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        BigInteger::from_canonical(calculator().neg(&self.repr))
    }
}
impl core::ops::Neg for BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        -(&self)
    }
}

impl core::ops::Not for &BigInteger {
    type Output = BigInteger;
    fn not(self) -> BigInteger {
        // !n == -n - 1, the two's-complement identity.
        -(self + &BigInteger::one())
    }
}
impl core::ops::Not for BigInteger {
    type Output = BigInteger;
    fn not(self) -> BigInteger {
        !(&self)
    }
}

impl core::ops::Div for &BigInteger {
    type Output = BigInteger;
    fn div(self, rhs: &BigInteger) -> BigInteger {
        self.checked_div_rem(rhs).unwrap_or_else(|| panic_divide_by_0()).0
    }
}
impl core::ops::Div for BigInteger {
    type Output = BigInteger;
    fn div(self, rhs: BigInteger) -> BigInteger {
        &self / &rhs
    }
}

impl core::ops::Rem for &BigInteger {
    type Output = BigInteger;
    fn rem(self, rhs: &BigInteger) -> BigInteger {
        self.checked_div_rem(rhs).unwrap_or_else(|| panic_divide_by_0()).1
    }
}
impl core::ops::Rem for BigInteger {
    type Output = BigInteger;
    fn rem(self, rhs: BigInteger) -> BigInteger {
        &self % &rhs
    }
}

impl core::ops::Shl<u64> for &BigInteger {
    type Output = BigInteger;
    fn shl(self, bits: u64) -> BigInteger {
        self.shifted_left(bits)
    }
}
impl core::ops::Shr<u64> for &BigInteger {
    type Output = BigInteger;
    fn shr(self, bits: u64) -> BigInteger {
        self.shifted_right(bits)
    }
}
