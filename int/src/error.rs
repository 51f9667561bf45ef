//! Panic messages for the operator overloads, which cannot return `Result`.
//!
//! Fallible inputs reached through an explicit method (`checked_div`,
//! `sqrt`, `mod_inverse`, ...) return `Result<_, ArithmeticError>` instead;
//! these panics only fire from `/ % & << >>` and the like.

pub(crate) fn panic_divide_by_0() -> ! {
    panic!("divisor must not be 0")
}

pub(crate) fn panic_negative_modulus() -> ! {
    panic!("modulus must be positive")
}
