use crate::BigInt;

/// `n!`, as the product `1 * 2 * ... * n`. Both `0!` and `1!` are one.
pub fn factorial(n: u64) -> BigInt {
    tracing::debug!(n, "factorial");
    let mut f = BigInt::one();
    for i in 2..=n {
        f *= BigInt::from(i);
    }
    f
}

/// The `n`-th Fibonacci number, with `F(0) = 0` and `F(1) = 1`, computed by addition only.
pub fn nth_fibonacci(n: u64) -> BigInt {
    tracing::debug!(n, "fibonacci");
    if n == 0 {
        return BigInt::zero();
    }
    let mut current = BigInt::one();
    let mut previous = BigInt::one();
    for _ in 1..n {
        let next = &current + &previous;
        previous = std::mem::replace(&mut current, next);
    }
    previous
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), BigInt::one());
    assert_eq!(factorial(1), BigInt::one());
    assert_eq!(factorial(5), BigInt::from(120_u32));
    assert_eq!(factorial(20), BigInt::from(2432902008176640000_u64));
    assert_eq!(
        factorial(30).to_string(),
        "265252859812191058636308480000000"
    );
}

#[test]
fn test_nth_fibonacci() {
    let expected = [0_u32, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    for (n, &f) in expected.iter().enumerate() {
        assert_eq!(nth_fibonacci(n as u64), BigInt::from(f), "F({})", n);
    }
    assert_eq!(nth_fibonacci(100).to_string(), "354224848179261915075");
}
