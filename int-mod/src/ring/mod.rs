//! # Ring Module
//!
//! Provides the [`Ring`] struct for modular arithmetic when the modulus is only known at run time.

pub mod math;

pub use math::Ring;
