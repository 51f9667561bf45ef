//! Conversions between `BigInteger` and Rust's native integer types.

use core::convert::TryFrom;

use exactnum_base::ArithmeticError;

use crate::big_integer::BigInteger;

macro_rules! impl_from_prim {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(v: $t) -> Self {
                BigInteger::from_canonical(v.to_string())
            }
        }
    )*};
}

impl_from_prim!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_try_into {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInteger> for $t {
            type Error = ArithmeticError;
            fn try_from(v: &BigInteger) -> Result<Self, Self::Error> {
                v.repr.parse::<$t>().map_err(|_| ArithmeticError::IntegerOverflow)
            }
        }
        impl TryFrom<BigInteger> for $t {
            type Error = ArithmeticError;
            fn try_from(v: BigInteger) -> Result<Self, Self::Error> {
                <$t>::try_from(&v)
            }
        }
    )*};
}

impl_try_into!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
