//! The calculator interface: arbitrary-precision arithmetic on canonical
//! signed decimal digit strings.
//!
//! A canonical signed decimal digit string is `0`, or an optional leading
//! `-` followed by one or more digits `1-9` or `0-9` with no leading zero.
//! Every method below accepts and returns strings in this form; the higher
//! layers ([`BigInteger`](https://example.invalid), `BigDecimal`, `BigRational`)
//! never inspect digits directly, they only compose calls to this trait.
//!
//! Two implementations are provided: [`portable`][crate::portable], which
//! works block-by-block on the digit string itself, and
//! [`native`][crate::native], which takes a fast path through the host
//! machine's 128-bit integers and falls back to the portable path once an
//! operand overflows. [`crate::registry`] selects between them.

use core::cmp::Ordering;

use exactnum_base::ArithmeticError;

/// Quotient and remainder of a truncating division, or of a square root.
pub type Pair = (String, String);

/// An arbitrary-precision calculator: the single point where all three
/// number kinds touch actual digit arithmetic.
pub trait Calculator: Send + Sync {
    /// A short name for diagnostics, e.g. `"portable"` or `"native"`.
    fn name(&self) -> &'static str;

    fn add(&self, a: &str, b: &str) -> String;
    fn sub(&self, a: &str, b: &str) -> String;
    fn mul(&self, a: &str, b: &str) -> String;

    /// Truncated (toward zero) division. `b` must not be `"0"`.
    /// `q * b + r == a` and `sign(r) == sign(a)` whenever `r != "0"`.
    fn div_qr(&self, a: &str, b: &str) -> Pair;

    /// Exact quotient when `b` divides `a`, otherwise the quotient rounded
    /// per `mode`. Fails iff `mode` is `Unnecessary` and the division is
    /// inexact. `b` must not be `"0"`.
    fn div_round(
        &self,
        a: &str,
        b: &str,
        mode: exactnum_base::RoundingMode,
    ) -> Result<String, ArithmeticError>;

    /// `a` raised to the non-negative power `e`.
    fn pow(&self, a: &str, e: u64) -> String;

    /// `base^exp mod modulus`, normalized into `[0, modulus)`. `modulus`
    /// must be positive and `exp` non-negative.
    fn mod_pow(&self, base: &str, exp: &str, modulus: &str) -> String;

    /// Euclidean remainder of `a` modulo `m`, in `[0, m)`. `m` must be
    /// positive.
    fn modulo(&self, a: &str, m: &str) -> String;

    /// The modular inverse of `a` modulo `m`, or `Err(NoInverse)` iff
    /// `gcd(a, m) != 1`. `m` must be positive.
    fn mod_inverse(&self, a: &str, m: &str) -> Result<String, ArithmeticError>;

    /// Non-negative GCD; `gcd(0, 0) == 0`.
    fn gcd(&self, a: &str, b: &str) -> String;

    /// Non-negative LCM; `0` if either operand is `0`.
    fn lcm(&self, a: &str, b: &str) -> String;

    /// Floor square root and its remainder `n - floor_sqrt^2`. `n` must be
    /// non-negative.
    fn sqrt(&self, n: &str) -> Pair;

    fn cmp(&self, a: &str, b: &str) -> Ordering;
    fn neg(&self, a: &str) -> String;

    /// Bitwise AND/OR/XOR on the infinite-precision two's-complement
    /// representation.
    fn and(&self, a: &str, b: &str) -> String;
    fn or(&self, a: &str, b: &str) -> String;
    fn xor(&self, a: &str, b: &str) -> String;

    /// Parse a (possibly signed) string in `base` (`2..=36`, case-insensitive
    /// digits `0-9a-z`) into a canonical decimal digit string.
    fn from_base(&self, s: &str, base: u32) -> Result<String, ArithmeticError>;

    /// Render `n` in `base` (`2..=36`), lowercase, with a leading `-` for
    /// negative values.
    fn to_base(&self, n: &str, base: u32) -> Result<String, ArithmeticError>;

    /// Parse a byte-oriented arbitrary-base digit sequence. `alphabet[i]`
    /// is the byte that represents digit value `i`; `alphabet` must have at
    /// least 2 and at most 256 distinct bytes. `digits` is most-significant
    /// digit first and always denotes a non-negative value.
    fn from_arbitrary_base(&self, digits: &[u8], alphabet: &[u8]) -> Result<String, ArithmeticError>;

    /// The inverse of [`from_arbitrary_base`][Calculator::from_arbitrary_base].
    /// `n` must be non-negative.
    fn to_arbitrary_base(&self, n: &str, alphabet: &[u8]) -> Result<Vec<u8>, ArithmeticError>;
}
