//! Panic messages for the operator overloads, which cannot return `Result`.
//!
//! Fallible inputs reached through an explicit method (`checked_div`,
//! `to_scale`, `sqrt`, ...) return `Result<_, ArithmeticError>` instead;
//! these panics only fire from `+ - * /`.

pub(crate) fn panic_divide_by_0() -> ! {
    panic!("divisor must not be 0")
}
