use int_mod::errors::IntModError;
use int_mod::kernel::{euler_phi, inverse_of, standard_modulo};
use int_mod::{IntMod, Ring, TryDivAssign};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

type Z13 = IntMod<13>;
type Z1337 = IntMod<1337>;

#[test]
fn scenario_addition_wraps() {
    let a = IntMod::<17>::new(12);
    assert_eq!(a + 7, 2);
}

#[test]
fn scenario_inverse_mod_14() -> Result<(), IntModError> {
    assert_eq!(inverse_of::<14>(11)?, 9);
    Ok(())
}

#[test]
fn scenario_division_mod_1337() -> Result<(), IntModError> {
    assert_eq!((Z1337::new(420) / Z1337::new(69))?, 413);
    assert_eq!((Z1337::new(420) / 69)?, 413);
    assert_eq!((420 / Z1337::new(69))?, 413);
    Ok(())
}

#[test]
fn scenario_non_invertible_divisor() {
    let expected = "12 is not invertible modulo 15 because gcd(12, 15) = 3, which is not 1.\n";

    let err = inverse_of::<15>(-3).unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = (IntMod::<15>::new(-1) / IntMod::new(-3)).unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = (IntMod::<15>::new(-1) / -3).unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = (-1 / IntMod::<15>::new(-3)).unwrap_err();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn scenario_cancellation_mod_2() {
    assert_eq!(-123456 + IntMod::<2>::new(123456), 0);
    assert_eq!(IntMod::<2>::new(-123456) + IntMod::new(123456), 0);

    let err = (IntMod::<2>::new(-123456) / 123456).unwrap_err();
    assert_eq!(
        err.to_string(),
        "0 is not invertible modulo 2 because gcd(0, 2) = 2, which is not 1.\n"
    );
}

#[test]
fn scenario_wraparound_mod_13() {
    let mut top = Z13::new(12);
    top.increment();
    assert_eq!(top, 0);

    let mut bottom = Z13::new(0);
    bottom.decrement();
    assert_eq!(bottom, 12);
}

#[test]
fn test_addition_table() {
    assert_eq!(IntMod::<13>::new(12) + IntMod::new(20), 6);
    assert_eq!(IntMod::<14>::new(7) + IntMod::new(-17), 4);
    assert_eq!(IntMod::<15>::new(-1) + IntMod::new(-3), 11);
    assert_eq!(IntMod::<1337>::new(420) + IntMod::new(69), 489);

    assert_eq!(IntMod::<13>::new(12) + 20, 6);
    assert_eq!(IntMod::<14>::new(7) + (-17), 4);
    assert_eq!(12 + IntMod::<13>::new(20), 6);
    assert_eq!(-1 + IntMod::<15>::new(-3), 11);
}

#[test]
fn test_subtraction_table() {
    assert_eq!(IntMod::<13>::new(12) - IntMod::new(20), 5);
    assert_eq!(IntMod::<14>::new(7) - IntMod::new(-17), 10);
    assert_eq!(IntMod::<15>::new(-1) - IntMod::new(-3), 2);
    assert_eq!(IntMod::<2>::new(-123456) - IntMod::new(123456), 0);
    assert_eq!(IntMod::<1337>::new(420) - IntMod::new(69), 351);

    assert_eq!(IntMod::<13>::new(12) - 20, 5);
    assert_eq!(IntMod::<14>::new(7) - (-17), 10);
    assert_eq!(12 - IntMod::<13>::new(20), 5);
    assert_eq!(7 - IntMod::<14>::new(-17), 10);
    assert_eq!(-1 - IntMod::<15>::new(-3), 2);
    assert_eq!(420 - IntMod::<1337>::new(69), 351);
}

#[test]
fn test_multiplication_table() {
    assert_eq!(IntMod::<13>::new(12) * IntMod::new(20), 6);
    assert_eq!(IntMod::<14>::new(7) * IntMod::new(-17), 7);
    assert_eq!(IntMod::<15>::new(-1) * IntMod::new(-3), 3);
    assert_eq!(IntMod::<1337>::new(420) * IntMod::new(69), 903);

    assert_eq!(IntMod::<15>::new(-1) * (-3), 3);
    assert_eq!(-123456 * IntMod::<2>::new(123456), 0);
    assert_eq!(420 * IntMod::<1337>::new(69), 903);
}

#[test]
fn test_division_table() -> Result<(), IntModError> {
    assert_eq!((IntMod::<13>::new(12) / IntMod::new(20))?, 11);
    assert_eq!((IntMod::<14>::new(7) / IntMod::new(-17))?, 7);
    assert_eq!((IntMod::<13>::new(12) / 20)?, 11);
    assert_eq!((IntMod::<14>::new(7) / -17)?, 7);
    assert_eq!((12 / IntMod::<13>::new(20))?, 11);
    assert_eq!((7 / IntMod::<14>::new(-17))?, 7);
    Ok(())
}

#[test]
fn test_large_modulus_products() {
    const P: i64 = (1 << 61) - 1;
    let a = IntMod::<P>::new(P - 2);
    let b = IntMod::<P>::new(P - 3);

    // (-2) * (-3) = 6
    assert_eq!(a * b, 6);
    assert_eq!(a + b, P - 5);
    assert_eq!(a - b, 1);
    assert_eq!(b - a, -1);
}

#[test]
fn test_ring_agrees_with_int_mod() -> Result<(), IntModError> {
    let ring = Ring::try_with(1337)?;
    for (x, y) in [(420, 69), (-5, 1336), (i64::MIN, i64::MAX), (0, 1)] {
        let (a, b) = (Z1337::new(x), Z1337::new(y));
        assert_eq!(a + b, ring.add(x, y));
        assert_eq!(a - b, ring.sub(x, y));
        assert_eq!(a * b, ring.mul(x, y));
        assert_eq!(-a, ring.neg(x));
    }
    Ok(())
}

#[test]
fn test_compound_division_by_typed_and_raw() -> Result<(), IntModError> {
    let mut a = IntMod::<145>::new(1337);
    a.try_div_assign(IntMod::new(999))?;
    assert_eq!(a, 143);

    let mut b = IntMod::<145>::new(1337);
    b.try_div_assign(999)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_euler_phi_small_values() {
    assert_eq!(euler_phi(12), 4);
    assert_eq!(euler_phi(1), 1);
}

#[quickcheck]
fn prop_construction_is_standard_form(raw: i64) -> bool {
    let a = Z1337::new(raw);
    a.value() == standard_modulo::<1337>(raw) && (0..1337).contains(&a.value())
}

#[quickcheck]
fn prop_addition_commutes(x: i64, y: i64) -> bool {
    Z1337::new(x) + y == y + Z1337::new(x) && Z1337::new(x) + Z1337::new(y) == x + Z1337::new(y)
}

#[quickcheck]
fn prop_multiplication_commutes(x: i64, y: i64) -> bool {
    Z1337::new(x) * y == y * Z1337::new(x)
}

#[quickcheck]
fn prop_raw_left_subtraction_is_negated(x: i64, y: i64) -> bool {
    let b = Z1337::new(y);
    x - b == -(b - x)
}

#[quickcheck]
fn prop_subtraction_undoes_addition(x: i64, y: i64) -> bool {
    let a = Z13::new(x);
    (a + y) - y == a && (a - y) + y == a
}

#[quickcheck]
fn prop_binary_matches_compound(x: i64, y: i64) -> bool {
    let (a, b) = (Z1337::new(x), Z1337::new(y));

    let mut sum = a;
    sum += b;
    let mut difference = a;
    difference -= b;
    let mut product = a;
    product *= b;

    sum == a + b && difference == a - b && product == a * b
}

#[quickcheck]
fn prop_division_inverts_multiplication(x: i64, y: i64) -> TestResult {
    let (a, b) = (Z1337::new(x), Z1337::new(y));
    match a / b {
        Ok(quotient) => TestResult::from_bool(quotient * b == a),
        Err(IntModError::NotInvertible { value, gcd, .. }) => {
            TestResult::from_bool(value == b.value() && gcd > 1 && 1337 % gcd == 0)
        }
        Err(e) => TestResult::error(format!("unexpected error: {e}")),
    }
}

#[quickcheck]
fn prop_text_round_trip(raw: i64) -> bool {
    let a = Z1337::new(raw);
    a.to_string().parse::<Z1337>().map(|b| b == a).unwrap_or(false)
}
