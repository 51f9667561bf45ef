//! Unsigned magnitude arithmetic on base-1e9 limb vectors.
//!
//! A magnitude is represented as `Vec<u32>`, least-significant limb first,
//! each limb in `0..BASE`. The representation is always trimmed: the most
//! significant limb is non-zero, except for the value zero itself, which is
//! the single limb `[0]`. `BASE` is chosen so that the product of two limbs
//! plus a carry still fits in a `u64` accumulator with headroom to spare,
//! which keeps the schoolbook multiplication and long-division loops free of
//! 128-bit arithmetic.

use core::cmp::Ordering;

pub const DIGITS_PER_LIMB: usize = 9;
pub const BASE: u64 = 1_000_000_000;

pub type Limbs = Vec<u32>;

pub fn trim(v: &mut Limbs) {
    while v.len() > 1 && *v.last().unwrap() == 0 {
        v.pop();
    }
}

pub fn is_zero(v: &[u32]) -> bool {
    v.iter().all(|&d| d == 0)
}

pub fn zero() -> Limbs {
    vec![0]
}

pub fn one() -> Limbs {
    vec![1]
}

/// Parse an unsigned run of ASCII digits (no sign, no leading-zero
/// restriction) into limbs.
pub fn from_digits(digits: &str) -> Limbs {
    let bytes = digits.as_bytes();
    if bytes.is_empty() {
        return zero();
    }
    let mut limbs = Vec::with_capacity(bytes.len() / DIGITS_PER_LIMB + 1);
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(DIGITS_PER_LIMB);
        let chunk = core::str::from_utf8(&bytes[start..end]).unwrap();
        limbs.push(chunk.parse::<u32>().unwrap());
        end = start;
    }
    trim(&mut limbs);
    limbs
}

/// Render limbs as an unsigned run of ASCII digits, no leading zeros (except
/// the single digit `"0"`).
pub fn to_digits(v: &[u32]) -> String {
    let mut out = String::with_capacity(v.len() * DIGITS_PER_LIMB);
    let mut iter = v.iter().rev();
    if let Some(first) = iter.next() {
        out.push_str(&first.to_string());
    }
    for limb in iter {
        out.push_str(&format!("{:0width$}", limb, width = DIGITS_PER_LIMB));
    }
    out
}

pub fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

pub fn add(a: &[u32], b: &[u32]) -> Limbs {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry: u64 = 0;
    for i in 0..long.len() {
        let x = long[i] as u64 + *short.get(i).unwrap_or(&0) as u64 + carry;
        out.push((x % BASE) as u32);
        carry = x / BASE;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    trim(&mut out);
    out
}

/// Add a single-limb scalar (`< BASE`).
pub fn add_scalar(a: &[u32], s: u64) -> Limbs {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = s;
    for &limb in a {
        let x = limb as u64 + carry;
        out.push((x % BASE) as u32);
        carry = x / BASE;
    }
    while carry > 0 {
        out.push((carry % BASE) as u32);
        carry /= BASE;
    }
    if out.is_empty() {
        out.push(0);
    }
    trim(&mut out);
    out
}

/// `a - b`, requires `a >= b`.
pub fn sub(a: &[u32], b: &[u32]) -> Limbs {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: i64 = 0;
    for i in 0..a.len() {
        let x = a[i] as i64 - *b.get(i).unwrap_or(&0) as i64 - borrow;
        if x < 0 {
            out.push((x + BASE as i64) as u32);
            borrow = 1;
        } else {
            out.push(x as u32);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut out);
    out
}

/// `a - s`, requires `a >= s` and `s < BASE`.
pub fn sub_scalar(a: &[u32], s: u64) -> Limbs {
    sub(a, &[s as u32])
}

pub fn mul(a: &[u32], b: &[u32]) -> Limbs {
    if is_zero(a) || is_zero(b) {
        return zero();
    }
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            let idx = i + j;
            let x = out[idx] + ai as u64 * bj as u64 + carry;
            out[idx] = x % BASE;
            carry = x / BASE;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let x = out[k] + carry;
            out[k] = x % BASE;
            carry = x / BASE;
            k += 1;
        }
    }
    let mut result: Limbs = out.into_iter().map(|d| d as u32).collect();
    trim(&mut result);
    result
}

/// `a * s` for a scalar `s` (not required to be `< BASE`).
pub fn mul_scalar(a: &[u32], s: u64) -> Limbs {
    if s == 0 || is_zero(a) {
        return zero();
    }
    mul(a, &from_u64(s))
}

pub fn from_u64(mut n: u64) -> Limbs {
    if n == 0 {
        return zero();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push((n % BASE) as u32);
        n /= BASE;
    }
    out
}

pub fn to_u64(v: &[u32]) -> Option<u64> {
    let mut acc: u128 = 0;
    for &limb in v.iter().rev() {
        acc = acc.checked_mul(BASE as u128)?.checked_add(limb as u128)?;
        if acc > u64::MAX as u128 {
            return None;
        }
    }
    Some(acc as u64)
}

/// Long division `a / b` with `b != 0` (checked by the caller), returning
/// `(quotient, remainder)`. Uses the schoolbook base-`BASE` algorithm: one
/// limb of `a` is absorbed into the running remainder at a time, and the
/// next quotient limb is found by binary search since the remainder stays
/// bounded by `b` between steps.
pub fn div_rem(a: &[u32], b: &[u32]) -> (Limbs, Limbs) {
    debug_assert!(!is_zero(b));
    if cmp(a, b) == Ordering::Less {
        return (zero(), a.to_vec());
    }
    // Fast path: single-limb divisor.
    if b.len() == 1 {
        return div_rem_small(a, b[0] as u64);
    }

    let mut quotient_rev: Vec<u32> = Vec::with_capacity(a.len());
    let mut rem: Limbs = zero();
    for &limb in a.iter().rev() {
        // rem = rem * BASE + limb
        if is_zero(&rem) {
            rem = vec![limb];
        } else {
            rem.insert(0, limb);
        }
        trim(&mut rem);

        let mut lo: u64 = 0;
        let mut hi: u64 = BASE - 1;
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if cmp(&mul_scalar(b, mid), &rem) != Ordering::Greater {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        rem = sub(&rem, &mul_scalar(b, lo));
        quotient_rev.push(lo as u32);
    }
    quotient_rev.reverse();
    trim(&mut quotient_rev);
    (quotient_rev, rem)
}

/// Division by a single limb (`< BASE`), processed digit-by-digit without
/// the inner binary search.
pub fn div_rem_small(a: &[u32], d: u64) -> (Limbs, Limbs) {
    debug_assert!(d != 0 && d < BASE);
    let mut quotient = vec![0u32; a.len()];
    let mut rem: u64 = 0;
    for i in (0..a.len()).rev() {
        let cur = rem * BASE + a[i] as u64;
        quotient[i] = (cur / d) as u32;
        rem = cur % d;
    }
    trim(&mut quotient);
    (quotient, vec![rem as u32])
}

pub fn gcd(a: &[u32], b: &[u32]) -> Limbs {
    let (mut x, mut y) = (a.to_vec(), b.to_vec());
    while !is_zero(&y) {
        let (_, r) = div_rem(&x, &y);
        x = y;
        y = r;
    }
    x
}

/// Floor square root and remainder `n - floor_sqrt^2`, via Newton's
/// iteration seeded at `10^ceil(len(n)/2)` as specified.
pub fn sqrt(n: &[u32]) -> (Limbs, Limbs) {
    if is_zero(n) {
        return (zero(), zero());
    }
    let digit_len = to_digits(n).len();
    let half = (digit_len + 1) / 2;
    let mut x = pow10(half);
    loop {
        // next = (x + n / x) / 2
        let (q, _) = div_rem(n, &x);
        let sum = add(&x, &q);
        let (next, _) = div_rem_small(&sum, 2);
        if cmp(&next, &x) != Ordering::Less {
            break;
        }
        x = next;
    }
    // x may overshoot by one step in rare cases; correct downward.
    loop {
        if cmp(&mul(&x, &x), n) == Ordering::Greater {
            x = sub_scalar(&x, 1);
        } else {
            break;
        }
    }
    loop {
        let next = add_scalar(&x, 1);
        if cmp(&mul(&next, &next), n) != Ordering::Greater {
            x = next;
        } else {
            break;
        }
    }
    let rem = sub(n, &mul(&x, &x));
    (x, rem)
}

pub fn pow(base: &[u32], mut exp: u64) -> Limbs {
    let mut result = one();
    let mut b = base.to_vec();
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(&result, &b);
        }
        if exp > 1 {
            b = mul(&b, &b);
        }
        exp >>= 1;
    }
    result
}

fn pow10(exp: usize) -> Limbs {
    pow(&[10], exp as u64)
}
