//! Implementation of ring ops using modular arithmetic.

use crate::errors::IntModError;
use crate::kernel::{add_mod, inverse_mod, mod_pow, mul_mod, standard_form, sub_mod, totient};
use crate::value::IntMod;

use log::trace;

use serde::{Deserialize, Serialize};

/// Represents the ring Z_m for a modulus only known at run time.
///
/// Raw `i64` arguments are normalized before every operation, and every result
/// is in `[0, modulus - 1]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Ring {
    modulus: i64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: i64) -> Result<Self, IntModError> {
        if modulus <= 1 {
            return Err(IntModError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        trace!("ring Z_{modulus} created");
        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_mod::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_mod::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        standard_form(value, self.modulus)
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        add_mod(self.normalize(a), self.normalize(b), self.modulus)
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_mod::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        sub_mod(self.normalize(a), self.normalize(b), self.modulus)
    }

    /// Computes `(a * b) mod modulus`.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        mul_mod(self.normalize(a), self.normalize(b), self.modulus)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `IntModError::NotInvertible` if `gcd(a, modulus) != 1`, including `a = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_mod::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7); // 3 * 7 = 21 = 1 mod 10
    /// assert_eq!(ring.inv(9).unwrap(), 9);
    /// assert!(ring.inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, IntModError> {
        inverse_mod(a, self.modulus)
    }

    /// Computes `a * b^-1 mod modulus`.
    pub fn div(&self, a: i64, b: i64) -> Result<i64, IntModError> {
        let inverse = self.inv(b)?;
        Ok(mul_mod(self.normalize(a), inverse, self.modulus))
    }

    /// Integer remainder of the normalized operands.
    ///
    /// # Errors
    ///
    /// Returns `IntModError::ZeroModulus` if `b` normalizes to 0.
    pub fn rem(&self, a: i64, b: i64) -> Result<i64, IntModError> {
        let b_norm = self.normalize(b);
        if b_norm == 0 {
            return Err(IntModError::ZeroModulus);
        }

        Ok(self.normalize(a) % b_norm)
    }

    /// Computes `base^exponent mod modulus`.
    pub fn pow(&self, base: i64, exponent: i64) -> Result<i64, IntModError> {
        mod_pow(base, exponent, self.modulus)
    }

    /// Euler's totient of the modulus, memoized per modulus.
    pub fn euler_phi(&self) -> i64 {
        totient(self.modulus)
    }

    /// Parses a signed decimal integer and normalizes it.
    ///
    /// ```
    /// # use int_mod::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.from_text("-1").unwrap(), 12);
    /// ```
    pub fn from_text(&self, text: &str) -> Result<i64, IntModError> {
        let raw: i64 = text.trim().parse()?;
        Ok(self.normalize(raw))
    }

    /// Lifts `value` into the typed [`IntMod<N>`].
    ///
    /// # Errors
    ///
    /// Returns `IntModError::ModulusMismatch` if this ring's modulus is not `N`.
    pub fn element<const N: i64>(&self, value: i64) -> Result<IntMod<N>, IntModError> {
        if self.modulus != N {
            return Err(IntModError::ModulusMismatch {
                expected: N,
                found: self.modulus,
            });
        }

        Ok(IntMod::new(value))
    }
}

impl TryFrom<i64> for Ring {
    type Error = IntModError;

    fn try_from(modulus: i64) -> Result<Self, Self::Error> {
        Ring::try_with(modulus)
    }
}

impl From<Ring> for i64 {
    fn from(ring: Ring) -> Self {
        ring.modulus
    }
}

impl<const N: i64> IntMod<N> {
    /// The runtime ring with the same modulus.
    pub fn ring(&self) -> Ring {
        Ring { modulus: N }
    }
}
