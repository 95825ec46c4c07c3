use digit_bigint::{factorial, nth_fibonacci, BigInt, Error};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

/// Decimal strings up to 40 digits, leading zeros allowed.
fn decimal() -> impl Strategy<Value = BigInt> {
    "[0-9]{1,40}".prop_map(|s| big(&s))
}

fn nonzero_decimal() -> impl Strategy<Value = BigInt> {
    "[1-9][0-9]{0,24}".prop_map(|s| big(&s))
}

proptest! {
    #[test]
    fn round_trip_keeps_digits(a in decimal()) {
        let again = big(&a.to_string());
        prop_assert_eq!(again.digits().collect::<Vec<_>>(), a.digits().collect::<Vec<_>>());
    }

    #[test]
    fn leading_zeros_are_dropped(zeros in 0_usize..5, s in "[1-9][0-9]{0,10}") {
        let padded = format!("{}{}", "0".repeat(zeros), s);
        prop_assert_eq!(big(&padded).to_string(), s);
    }

    #[test]
    fn comparison_is_total(a in decimal(), b in decimal()) {
        let holds = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
        prop_assert_eq!(holds, 1);
    }

    #[test]
    fn addition_identity_and_order(a in decimal(), b in decimal(), c in decimal()) {
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        if a < b {
            prop_assert!(&a + &c < &b + &c);
        }
        prop_assert_eq!((&a + &b).try_sub(&b).unwrap(), a);
    }

    #[test]
    fn subtracting_larger_underflows(a in decimal(), b in decimal()) {
        if a < b {
            prop_assert_eq!(a.try_sub(&b), Err(Error::Underflow));
        } else {
            prop_assert_eq!(&a.try_sub(&b).unwrap() + &b, a);
        }
    }

    #[test]
    fn multiplication_identity_zero_commutes(a in decimal(), b in decimal()) {
        prop_assert_eq!(&a * &BigInt::one(), a.clone());
        prop_assert!((&a * &BigInt::zero()).is_zero());
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn division_and_remainder_agree(a in decimal(), b in nonzero_decimal()) {
        let q = a.try_div(&b).unwrap();
        let r = a.try_rem(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert_eq!(a.div_rem(&b).unwrap(), (q, r));
    }

    #[test]
    fn dividing_by_zero_fails(a in decimal()) {
        prop_assert_eq!(a.try_div(&BigInt::zero()), Err(Error::DivisionByZero));
        prop_assert_eq!(a.try_rem(&BigInt::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn pow_small_exponents(a in decimal()) {
        prop_assert_eq!(a.pow(&BigInt::zero()), BigInt::one());
        prop_assert_eq!(a.pow(&BigInt::one()), a.clone());
        prop_assert_eq!(a.pow(&BigInt::from(2_u8)), &a * &a);
    }

    #[test]
    fn pow_matches_u128(base in 0_u8.., exp in 0_u32..=15) {
        let expected = (base as u128).pow(exp);
        prop_assert_eq!(BigInt::from(base).pow(&BigInt::from(exp)), BigInt::from(expected));
    }

    #[test]
    fn sqrt_is_floor(n in nonzero_decimal()) {
        let root = n.sqrt();
        let next = &root + &BigInt::one();
        prop_assert!(&root * &root <= n);
        prop_assert!(n < &next * &next);
    }

    #[test]
    fn halving_matches_division(a in decimal()) {
        let mut halved = a.clone();
        halved.divide_by_2();
        prop_assert_eq!(halved, a.try_div(&BigInt::from(2_u8)).unwrap());
    }

    #[test]
    fn increment_then_decrement(a in decimal()) {
        let mut b = a.clone();
        b.increment();
        prop_assert_eq!(&b, &(&a + &BigInt::one()));
        b.decrement().unwrap();
        prop_assert_eq!(b, a);
    }
}

#[test]
fn random_operands_match_native_arithmetic() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let x: u64 = rng.gen();
        let shift: u32 = rng.gen_range(0..64);
        let y: u64 = rng.gen_range(1..=u64::MAX >> shift);
        let (a, b) = (BigInt::from(x), BigInt::from(y));

        assert_eq!(&a + &b, BigInt::from(x as u128 + y as u128));
        assert_eq!(&a * &b, BigInt::from(x as u128 * y as u128));
        assert_eq!(a.try_div(&b).unwrap().to_u64(), Some(x / y));
        assert_eq!(a.try_rem(&b).unwrap().to_u64(), Some(x % y));
        if x >= y {
            assert_eq!(a.try_sub(&b).unwrap().to_u64(), Some(x - y));
        } else {
            assert_eq!(a.try_sub(&b), Err(Error::Underflow));
        }
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(big("123") + big("877"), big("1000"));
    assert_eq!(big("1000") - big("1"), big("999"));
    assert_eq!(big("99") * big("99"), big("9801"));
    assert_eq!(big("100") / big("7"), big("14"));
    assert_eq!(big("100") % big("7"), big("2"));
    assert_eq!(factorial(5), big("120"));
    assert_eq!(nth_fibonacci(10), big("55"));
    assert_eq!(BigInt::zero().sqrt(), BigInt::zero());
    assert_eq!(BigInt::zero().pow(&BigInt::zero()), BigInt::one());

    let mut zero = BigInt::zero();
    assert_eq!(zero.decrement(), Err(Error::Underflow));
}
