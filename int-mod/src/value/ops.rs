//! Operator implementations for [`IntMod<N>`].
//!
//! Each binary operator copies its left operand, applies the compound form and
//! returns the copy, so the two can never disagree. A raw `i64` on either side is
//! first brought into standard form.
//!
//! Division and remainder can fail, so their compound forms live in
//! [`TryDivAssign`] / [`TryRemAssign`] and their binary forms return `Result`.

use crate::errors::IntModError;
use crate::kernel::{add_mod, inverse_of, mul_mod, standard_modulo, sub_mod};

use super::IntMod;

use num_traits::{One, Pow, Zero};

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Fallible `/=`.
pub trait TryDivAssign<Rhs = Self> {
    /// Multiplies by the modular inverse of `rhs`. On error `self` is left unchanged.
    fn try_div_assign(&mut self, rhs: Rhs) -> Result<(), IntModError>;
}

/// Fallible `%=`.
pub trait TryRemAssign<Rhs = Self> {
    /// Replaces `self` with the integer remainder of the two standard forms.
    /// On error `self` is left unchanged.
    fn try_rem_assign(&mut self, rhs: Rhs) -> Result<(), IntModError>;
}

macro_rules! impl_ring_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $kernel:ident) => {
        impl<const N: i64> $OpAssign for IntMod<N> {
            fn $op_assign(&mut self, rhs: Self) {
                self.element = $kernel(self.element, rhs.element, N);
            }
        }

        impl<const N: i64> $OpAssign<i64> for IntMod<N> {
            fn $op_assign(&mut self, rhs: i64) {
                self.element = $kernel(self.element, standard_modulo::<N>(rhs), N);
            }
        }

        impl<const N: i64> $Op for IntMod<N> {
            type Output = Self;

            fn $op(mut self, rhs: Self) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<const N: i64> $Op<i64> for IntMod<N> {
            type Output = Self;

            fn $op(mut self, rhs: i64) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<const N: i64> $Op<IntMod<N>> for i64 {
            type Output = IntMod<N>;

            fn $op(self, rhs: IntMod<N>) -> IntMod<N> {
                let mut lhs = IntMod::<N>::new(self);
                $OpAssign::$op_assign(&mut lhs, rhs);
                lhs
            }
        }
    };
}

impl_ring_op!(Add, add, AddAssign, add_assign, add_mod);
impl_ring_op!(Sub, sub, SubAssign, sub_assign, sub_mod);
impl_ring_op!(Mul, mul, MulAssign, mul_assign, mul_mod);

impl<const N: i64> Neg for IntMod<N> {
    type Output = Self;

    /// The additive inverse: `N - element`, or `0` for `0`.
    fn neg(self) -> Self {
        if self.element == 0 {
            self
        } else {
            Self::from_canonical(N - self.element)
        }
    }
}

impl<const N: i64> TryDivAssign for IntMod<N> {
    fn try_div_assign(&mut self, rhs: Self) -> Result<(), IntModError> {
        let inverse = inverse_of::<N>(rhs.element)?;
        self.element = mul_mod(self.element, inverse, N);
        Ok(())
    }
}

impl<const N: i64> TryDivAssign<i64> for IntMod<N> {
    fn try_div_assign(&mut self, rhs: i64) -> Result<(), IntModError> {
        self.try_div_assign(IntMod::<N>::new(rhs))
    }
}

impl<const N: i64> TryRemAssign for IntMod<N> {
    fn try_rem_assign(&mut self, rhs: Self) -> Result<(), IntModError> {
        if rhs.element == 0 {
            return Err(IntModError::ZeroModulus);
        }

        // Both sides are in [0, N), so the remainder is too.
        self.element %= rhs.element;
        Ok(())
    }
}

impl<const N: i64> TryRemAssign<i64> for IntMod<N> {
    fn try_rem_assign(&mut self, rhs: i64) -> Result<(), IntModError> {
        self.try_rem_assign(IntMod::<N>::new(rhs))
    }
}

macro_rules! impl_fallible_op {
    ($Op:ident, $op:ident, $TryAssign:ident, $try_assign:ident) => {
        impl<const N: i64> $Op for IntMod<N> {
            type Output = Result<Self, IntModError>;

            fn $op(mut self, rhs: Self) -> Self::Output {
                $TryAssign::$try_assign(&mut self, rhs)?;
                Ok(self)
            }
        }

        impl<const N: i64> $Op<i64> for IntMod<N> {
            type Output = Result<Self, IntModError>;

            fn $op(mut self, rhs: i64) -> Self::Output {
                $TryAssign::$try_assign(&mut self, rhs)?;
                Ok(self)
            }
        }

        impl<const N: i64> $Op<IntMod<N>> for i64 {
            type Output = Result<IntMod<N>, IntModError>;

            fn $op(self, rhs: IntMod<N>) -> Self::Output {
                let mut lhs = IntMod::<N>::new(self);
                $TryAssign::$try_assign(&mut lhs, rhs)?;
                Ok(lhs)
            }
        }
    };
}

impl_fallible_op!(Div, div, TryDivAssign, try_div_assign);
impl_fallible_op!(Rem, rem, TryRemAssign, try_rem_assign);

impl<const N: i64> PartialEq<i64> for IntMod<N> {
    fn eq(&self, other: &i64) -> bool {
        self.element == standard_modulo::<N>(*other)
    }
}

impl<const N: i64> PartialEq<IntMod<N>> for i64 {
    fn eq(&self, other: &IntMod<N>) -> bool {
        other == self
    }
}

impl<const N: i64> Sum for IntMod<N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, const N: i64> Sum<&'a IntMod<N>> for IntMod<N> {
    fn sum<I: Iterator<Item = &'a IntMod<N>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<const N: i64> Product for IntMod<N> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a, const N: i64> Product<&'a IntMod<N>> for IntMod<N> {
    fn product<I: Iterator<Item = &'a IntMod<N>>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl<const N: i64> Zero for IntMod<N> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn is_zero(&self) -> bool {
        self.element == 0
    }
}

impl<const N: i64> One for IntMod<N> {
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const N: i64> Pow<u64> for IntMod<N> {
    type Output = Self;

    fn pow(self, exponent: u64) -> Self {
        IntMod::pow(self, exponent)
    }
}

impl<const N: i64> Pow<u32> for IntMod<N> {
    type Output = Self;

    fn pow(self, exponent: u32) -> Self {
        IntMod::pow(self, exponent as u64)
    }
}
