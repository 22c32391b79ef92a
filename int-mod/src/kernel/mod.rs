//! # Reduction & Number-Theory Kernel
//!
//! Stateless functions over `(value, modulus)` pairs. The only shared state is the
//! per-modulus totient cache in [`cache`], which is a memo of [`euler_phi`].

pub mod cache;
pub mod helper;
pub mod math;

pub use cache::totient;
pub use helper::{add_mod, gcd, mul_mod, sub_mod};
pub use math::{euler_phi, inverse_mod, inverse_of, mod_pow, standard_form, standard_modulo};
