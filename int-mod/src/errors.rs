#[derive(thiserror::Error, Debug)]
pub enum IntModError {
    /// The value shares a non-trivial factor with the modulus, so no inverse exists.
    ///
    /// `value` is the reduced value, `gcd` is `gcd(value, modulus)`.
    #[error(
        "{value} is not invertible modulo {modulus} because gcd({value}, {modulus}) = {gcd}, which is not 1.\n"
    )]
    NotInvertible { value: i64, modulus: i64, gcd: i64 },
    /// Remainder by a right-hand side that reduces to 0.
    #[error("Cannot mod by zero.")]
    ZeroModulus,
    #[error("Exponent must be non-negative.")]
    NegativeExponent(i64),

    /// Error when creating a ring with an invalid modulus (modulus <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// A runtime ring was used where a different compile-time modulus was expected.
    #[error("ModulusMismatch: expected modulus {expected}, found {found}")]
    ModulusMismatch { expected: i64, found: i64 },

    #[error("ParseError: {0}")]
    ParseError(#[from] std::num::ParseIntError),
    #[error("Io: {0}")]
    Io(#[from] std::io::Error),
}
