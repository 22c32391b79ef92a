//! # int-mod
//!
//! Integers held in standard form modulo a fixed modulus `N`.
//!
//! * [`kernel`]: gcd, Euler's totient, modular exponentiation, standard-form
//!   reduction and modular inversion.
//! * [`IntMod<N>`]: the value type built on the kernel, with the modulus fixed
//!   at compile time.
//! * [`Ring`]: the same operations on raw `i64` values for a modulus chosen at run time.

pub mod errors;
pub mod kernel;
pub mod ring;
pub mod value;

pub use errors::IntModError;
pub use ring::Ring;
pub use value::{IntMod, TryDivAssign, TryRemAssign};
