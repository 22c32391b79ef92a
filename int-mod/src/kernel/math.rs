//! Reduction, totient, exponentiation and inversion modulo a fixed modulus.

use crate::errors::IntModError;

use super::cache::totient;
use super::helper::{gcd, mul_mod};

/// Counts the integers in `[1, n]` that are coprime to `n`.
///
/// Trial-divides `n` by every `p` with `p * p <= n`; each prime factor found is
/// divided out completely and applied as `res -= res / p`. A residual factor
/// greater than 1 left after the loop is prime and gets the same correction.
///
/// `euler_phi(1) == 1`. Non-positive inputs return 0.
///
/// # Example
///
/// ```
/// # use int_mod::kernel::euler_phi;
/// assert_eq!(euler_phi(12), 4);
/// assert_eq!(euler_phi(13), 12);
/// ```
pub fn euler_phi(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }

    let mut rest = n;
    let mut res = n;

    let mut p = 2;
    // `p <= rest / p` is `p * p <= rest` without the overflow.
    while p <= rest / p {
        if rest % p == 0 {
            while rest % p == 0 {
                rest /= p;
            }
            res -= res / p;
        }
        p += 1;
    }

    if rest > 1 {
        res -= res / rest;
    }

    res
}

/// Returns the unique `r` in `[0, modulus - 1]` with `r ≡ x (mod modulus)`.
///
/// Negative inputs are lifted by the smallest multiple of `modulus` that makes
/// them non-negative, inputs past the modulus are reduced by remainder. The
/// function is total for every `i64`, including `i64::MIN`.
///
/// # Panics
///
/// Panics if `modulus < 2`.
///
/// # Example
///
/// ```
/// # use int_mod::kernel::standard_form;
/// assert_eq!(standard_form(-1, 15), 14);
/// assert_eq!(standard_form(183, 12), 3);
/// assert_eq!(standard_form(-77, 11), 0);
/// ```
pub fn standard_form(x: i64, modulus: i64) -> i64 {
    assert!(modulus > 1, "modulus must be at least 2, got {modulus}");

    x.rem_euclid(modulus)
}

/// [`standard_form`] with the modulus fixed at compile time.
pub fn standard_modulo<const N: i64>(x: i64) -> i64 {
    const { assert!(N > 1, "Modulus N of IntMod<N> must be at least 2.") };

    standard_form(x, N)
}

/// Computes `base^exponent mod modulus` by recursive halving of the exponent.
///
/// Every product is formed from operands already reduced modulo `modulus`,
/// the base included, so no intermediate leaves `i128`.
///
/// `x^0 == 1` for every `x`, including `0`.
///
/// # Errors
///
/// Returns `IntModError::NegativeExponent` if `exponent < 0`.
///
/// # Panics
///
/// Panics if `modulus < 2`.
///
/// # Example
///
/// ```
/// # use int_mod::kernel::mod_pow;
/// assert_eq!(mod_pow(3, 8, 5).unwrap(), 1);
/// assert_eq!(mod_pow(420, 69, 1337).unwrap(), 567);
/// assert_eq!(mod_pow(0, 0, 7).unwrap(), 1);
/// assert!(mod_pow(2, -1, 7).is_err());
/// ```
pub fn mod_pow(base: i64, exponent: i64, modulus: i64) -> Result<i64, IntModError> {
    if exponent < 0 {
        return Err(IntModError::NegativeExponent(exponent));
    }

    Ok(pow_reduced(standard_form(base, modulus), exponent as u64, modulus))
}

/// `base` must already be in standard form.
pub(crate) fn pow_reduced(base: i64, exponent: u64, modulus: i64) -> i64 {
    if exponent == 0 {
        return 1 % modulus;
    }

    let half = pow_reduced(base, exponent / 2, modulus);
    let square = mul_mod(half, half, modulus);

    if exponent % 2 == 0 {
        square
    } else {
        mul_mod(base, square, modulus)
    }
}

/// Computes `n^-1 mod modulus` by Euler's theorem: `n^(φ(modulus) - 1)`.
///
/// `φ(modulus)` comes from the process-wide totient cache.
///
/// # Errors
///
/// Returns `IntModError::NotInvertible` carrying the reduced `n`, the modulus
/// and their gcd when that gcd is not 1.
///
/// # Panics
///
/// Panics if `modulus < 2`. [`crate::Ring::try_with`] validates a runtime modulus first.
///
/// # Example
///
/// ```
/// # use int_mod::kernel::inverse_mod;
/// assert_eq!(inverse_mod(11, 14).unwrap(), 9);
/// assert_eq!(inverse_mod(-1, 13).unwrap(), 12);
/// assert!(inverse_mod(22, 12).is_err());
/// ```
pub fn inverse_mod(n: i64, modulus: i64) -> Result<i64, IntModError> {
    let value = standard_form(n, modulus);

    // The gcd divides `modulus`, so it fits into an i64.
    let d = gcd(value, modulus) as i64;
    if d != 1 {
        return Err(IntModError::NotInvertible {
            value,
            modulus,
            gcd: d,
        });
    }

    let phi = totient(modulus);

    Ok(pow_reduced(value, (phi - 1) as u64, modulus))
}

/// [`inverse_mod`] with the modulus fixed at compile time.
pub fn inverse_of<const N: i64>(n: i64) -> Result<i64, IntModError> {
    const { assert!(N > 1, "Modulus N of IntMod<N> must be at least 2.") };

    inverse_mod(n, N)
}
