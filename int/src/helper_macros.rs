//! Boilerplate for forwarding an operator trait to a free function that
//! implements it once for `&BigInteger` operands.

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $free_fn:path) => {
        impl core::ops::$trait<&BigInteger> for &BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $free_fn(self, rhs)
            }
        }
        impl core::ops::$trait<BigInteger> for BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $free_fn(&self, &rhs)
            }
        }
        impl core::ops::$trait<&BigInteger> for BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $free_fn(&self, rhs)
            }
        }
        impl core::ops::$trait<BigInteger> for &BigInteger {
            type Output = BigInteger;
            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $free_fn(self, &rhs)
            }
        }
    };
}

pub(crate) use forward_binop;
