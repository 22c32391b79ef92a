//! # Modular Integer Value Type
//!
//! Provides [`IntMod<N>`], an integer held in standard form modulo the compile-time modulus `N`.
//!
//! Every constructor and every mutating operation routes raw integers through
//! [`standard_modulo`], so the stored element always satisfies `0 <= element < N`.
//! Values with different moduli are different types and cannot be mixed.

pub mod io;
pub mod ops;

pub use ops::{TryDivAssign, TryRemAssign};

use crate::errors::IntModError;
use crate::kernel::math::pow_reduced;
use crate::kernel::{inverse_of, standard_modulo};

/// An integer modulo `N`, where `2 <= N <= i64::MAX`.
///
/// Multiplications widen to `i128` before reducing, so no modulus in that range
/// can overflow an intermediate.
///
/// # Example
///
/// ```
/// # use int_mod::IntMod;
/// let a = IntMod::<17>::new(12);
/// assert_eq!(a + 7, 2);
/// assert_eq!(IntMod::<15>::new(-1).value(), 14);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct IntMod<const N: i64> {
    element: i64,
}

impl<const N: i64> IntMod<N> {
    /// The modulus of this type.
    pub const MODULUS: i64 = N;

    /// Creates the value congruent to `raw` modulo `N`.
    pub fn new(raw: i64) -> Self {
        Self {
            element: standard_modulo::<N>(raw),
        }
    }

    /// `element` must already be in `[0, N)`.
    pub(crate) fn from_canonical(element: i64) -> Self {
        debug_assert!((0..N).contains(&element));

        Self { element }
    }

    /// Returns the modulus `N`.
    pub const fn modulus(&self) -> i64 {
        N
    }

    /// Returns the stored value, always in `[0, N - 1]`.
    pub const fn value(&self) -> i64 {
        self.element
    }

    /// Returns the inverse modulo `N` of the stored value.
    ///
    /// # Errors
    ///
    /// Returns `IntModError::NotInvertible` if `gcd(value, N) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_mod::IntMod;
    /// assert_eq!(IntMod::<14>::new(11).inverse().unwrap(), 9);
    /// assert!(IntMod::<12>::new(22).inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<i64, IntModError> {
        inverse_of::<N>(self.element)
    }

    /// Replaces the stored value with the standard form of `raw`.
    pub fn assign(&mut self, raw: i64) -> &mut Self {
        *self = Self::new(raw);
        self
    }

    /// Pre-increment: `N - 1` wraps to `0`.
    pub fn increment(&mut self) -> &mut Self {
        if self.element == N - 1 {
            self.element = 0;
        } else {
            self.element += 1;
        }
        self
    }

    /// Post-increment: returns the value held before incrementing.
    pub fn post_increment(&mut self) -> Self {
        let prior = *self;
        self.increment();
        prior
    }

    /// Pre-decrement: `0` wraps to `N - 1`.
    pub fn decrement(&mut self) -> &mut Self {
        if self.element == 0 {
            self.element = N - 1;
        } else {
            self.element -= 1;
        }
        self
    }

    /// Post-decrement: returns the value held before decrementing.
    pub fn post_decrement(&mut self) -> Self {
        let prior = *self;
        self.decrement();
        prior
    }

    /// Unary plus.
    pub fn pos(self) -> Self {
        self
    }

    /// Raises the value to a non-negative power.
    ///
    /// ```
    /// # use int_mod::IntMod;
    /// assert_eq!(IntMod::<1337>::new(420).pow(69), 567);
    /// assert_eq!(IntMod::<7>::new(0).pow(0), 1);
    /// ```
    pub fn pow(self, exponent: u64) -> Self {
        Self::from_canonical(pow_reduced(self.element, exponent, N))
    }

    /// Raises the value to any power; a negative exponent raises the inverse.
    ///
    /// # Errors
    ///
    /// Returns `IntModError::NotInvertible` for a negative exponent on a value
    /// that shares a factor with `N`.
    pub fn pow_signed(self, exponent: i64) -> Result<Self, IntModError> {
        if exponent >= 0 {
            return Ok(self.pow(exponent as u64));
        }

        let inverse = Self::from_canonical(self.inverse()?);
        Ok(inverse.pow(exponent.unsigned_abs()))
    }
}

impl<const N: i64> Default for IntMod<N> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const N: i64> From<i64> for IntMod<N> {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl<const N: i64> From<IntMod<N>> for i64 {
    fn from(value: IntMod<N>) -> Self {
        value.element
    }
}
