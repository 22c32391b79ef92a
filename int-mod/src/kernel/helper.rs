/// Computes the greatest common divisor of two numbers.
///
/// The result is always non-negative: `gcd(-7, 14) == 7` and `gcd(0, x) == |x|`.
/// Works on absolute values in `u64`, so `i64::MIN` is a valid input.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }

    a
}

/// Computes `(a + b) mod modulus` for canonical `a`, `b` in `[0, modulus)`.
///
/// The sum is taken in `i128`, so any modulus up to `i64::MAX` is safe.
pub fn add_mod(a: i64, b: i64, modulus: i64) -> i64 {
    debug_assert!((0..modulus).contains(&a) && (0..modulus).contains(&b));

    ((a as i128 + b as i128) % modulus as i128) as i64
}

/// Computes `(a - b) mod modulus` for canonical `a`, `b` in `[0, modulus)`.
///
/// When `b > a` the result is `modulus - (b - a)`, where `0 < b - a < modulus`;
/// otherwise `0 <= a - b < modulus`. Neither branch can leave the canonical range.
pub fn sub_mod(a: i64, b: i64, modulus: i64) -> i64 {
    debug_assert!((0..modulus).contains(&a) && (0..modulus).contains(&b));

    if b > a { modulus - (b - a) } else { a - b }
}

/// Computes `(a * b) mod modulus` for canonical `a`, `b` in `[0, modulus)`.
///
/// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
pub fn mul_mod(a: i64, b: i64, modulus: i64) -> i64 {
    debug_assert!((0..modulus).contains(&a) && (0..modulus).contains(&b));

    ((a as i128 * b as i128) % modulus as i128) as i64
}
