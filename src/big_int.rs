//! # BigInt
//! Unsigned arbitrary-precision integers stored as decimal digits, least-significant digit first.
//! Operations that could produce a negative value or divide by zero report an [`Error`]
//! through their `try_*` form.
//! # Example
//! ```
//! use digit_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!(a.try_sub(&b).unwrap().to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!(a.try_div(&b).unwrap().to_string(), "11");
//! assert_eq!(a.try_rem(&b).unwrap().to_string(), "100000000000");
//! assert!(b.try_sub(&a).is_err());
//! ```

use std::fmt::Display;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
};
use std::cmp::{Ord, PartialOrd, Ordering};
use std::str::FromStr;

use crate::big_num_constants::*;
use crate::big_num_cache::*;
use crate::error::{Error, Result};

macro_rules! trim_leading_zero {
    ($vec: expr) => {
        while $vec.len() > 1 && $vec.last() == Some(&0) {
            $vec.pop();
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
}

// 实现构造
impl BigInt {
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        debug_assert!(BigInt::is_normalized(&digits), "unnormalized digits {:?}", digits);
        BigInt { digits }
    }
    fn is_normalized(digits: &[u8]) -> bool {
        !digits.is_empty()
            && digits.iter().all(|&d| d < RADIX)
            && (digits.len() == 1 || digits[digits.len() - 1] != 0)
    }
    pub fn zero() -> Self {
        SMALL_VALUES[0].clone()
    }
    pub fn one() -> Self {
        SMALL_VALUES[1].clone()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.digits.iter().rev().map(|&d| DIGITS[d as usize]).collect();
        f.pad_integral(true, "", &s)
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self> {
        BigInt::from_decimal_str(val)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self> {
        BigInt::from_decimal_str(val)
    }
}

impl TryFrom<String> for BigInt {
    type Error = Error;

    fn try_from(val: String) -> Result<Self> {
        BigInt::from_decimal_str(&val)
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, u64, u128, usize);

impl BigInt {
    fn value_of(mut val: u128) -> BigInt {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_VALUES[val as usize].clone();
        }
        let mut digits = Vec::with_capacity(39);
        loop {
            digits.push((val % RADIX as u128) as u8);
            val /= RADIX as u128;
            if val == 0 {
                break;
            }
        }
        BigInt::from_raw(digits)
    }
    /// Parses a non-empty string of ASCII decimal digits. Leading zeros are accepted and dropped.
    pub fn from_decimal_str(val: &str) -> Result<BigInt> {
        let invalid = || Error::InvalidNumber { input: val.to_owned() };
        if val.is_empty() {
            return Err(invalid());
        }
        let mut digits = Vec::with_capacity(val.len());
        for c in val.bytes().rev() {
            if !c.is_ascii_digit() {
                return Err(invalid());
            }
            digits.push(c - b'0');
        }
        trim_leading_zero!(digits);
        Ok(BigInt::from_raw(digits))
    }
    /// Returns the value as a `u64`, or `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0_u64, |acc, &d| acc.checked_mul(RADIX as u64)?.checked_add(d as u64))
    }
}

// 杂项辅助函数
impl BigInt {
    /// Number of decimal digits; zero has one digit.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
    /// Returns the `index`-th least-significant digit.
    pub fn digit_at(&self, index: usize) -> Result<u8> {
        self.digits.get(index).copied().ok_or(Error::IndexOutOfBounds {
            index,
            len: self.digits.len(),
        })
    }
    /// Digits from least to most significant.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.digits.iter().copied()
    }
    /// Computes `self * 10 + digit` in place.
    fn push_low_digit(&mut self, digit: u8) {
        if self.is_zero() {
            self.digits[0] = digit;
        } else {
            self.digits.insert(0, digit);
        }
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_mag(other)
    }
}

// 实现自增自减
impl BigInt {
    /// Adds one in place.
    pub fn increment(&mut self) {
        for d in self.digits.iter_mut() {
            if *d == RADIX - 1 {
                *d = 0;
            } else {
                *d += 1;
                return;
            }
        }
        self.digits.push(1);
    }
    /// Adds one in place and returns the previous value.
    pub fn post_increment(&mut self) -> BigInt {
        let before = self.clone();
        self.increment();
        before
    }
    /// Subtracts one in place. Fails with [`Error::Underflow`] on zero and leaves `self` unchanged.
    pub fn decrement(&mut self) -> Result<()> {
        if self.is_zero() {
            return Err(Error::Underflow);
        }
        self.borrow_one();
        Ok(())
    }
    /// Subtracts one in place and returns the previous value.
    pub fn post_decrement(&mut self) -> Result<BigInt> {
        let before = self.clone();
        self.decrement()?;
        Ok(before)
    }
    // caller guarantees self != 0
    fn borrow_one(&mut self) {
        debug_assert!(!self.is_zero());
        for d in self.digits.iter_mut() {
            if *d == 0 {
                *d = RADIX - 1;
            } else {
                *d -= 1;
                break;
            }
        }
        trim_leading_zero!(self.digits);
    }
}

/// Derives the owned and borrowed operator forms from the `&BigInt` compound assignment.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $assign_imp for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                $assign_imp::$assign_method(self, &rhs);
            }
        }

        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: BigInt) -> Self::Output {
                $assign_imp::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: &BigInt) -> Self::Output {
                $assign_imp::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                let mut result = self.clone();
                $assign_imp::$assign_method(&mut result, &rhs);
                result
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                let mut result = self.clone();
                $assign_imp::$assign_method(&mut result, rhs);
                result
            }
        }
    };
}

// 实现加法
impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if self.digits.len() < rhs.digits.len() {
            self.digits.resize(rhs.digits.len(), 0);
        }
        let mut carry = 0;
        for (i, x) in self.digits.iter_mut().enumerate() {
            let sum = *x + rhs.digits.get(i).copied().unwrap_or(0) + carry;
            *x = sum % RADIX;
            carry = sum / RADIX;
        }
        if carry != 0 {
            self.digits.push(carry);
        }
    }
}
forward_binop!(Add, add, AddAssign, add_assign);

// 实现减法
impl BigInt {
    /// Subtracts `rhs` in place. Fails with [`Error::Underflow`] when `self < rhs`,
    /// leaving `self` unchanged.
    pub fn try_sub_assign(&mut self, rhs: &BigInt) -> Result<()> {
        if *self < *rhs {
            return Err(Error::Underflow);
        }
        self.sub_digits(rhs);
        Ok(())
    }
    pub fn try_sub(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut result = self.clone();
        result.try_sub_assign(rhs)?;
        Ok(result)
    }
    // caller guarantees self >= little
    fn sub_digits(&mut self, little: &BigInt) {
        let mut borrow: i8 = 0;
        for (i, x) in self.digits.iter_mut().enumerate() {
            let mut difference = *x as i8 - little.digits.get(i).copied().unwrap_or(0) as i8 + borrow;
            if difference < 0 {
                difference += RADIX as i8;
                borrow = -1;
            } else {
                borrow = 0;
            }
            *x = difference as u8;
        }
        debug_assert_eq!(borrow, 0);
        trim_leading_zero!(self.digits);
    }
}

/// # Panics
/// Panics with [`Error::Underflow`] when `rhs > self`. Use [`BigInt::try_sub_assign`] to handle it.
impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if let Err(e) = self.try_sub_assign(rhs) {
            panic!("{}", e);
        }
    }
}
forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::zero();
            return;
        }
        let n = self.digits.len();
        let m = rhs.digits.len();
        let mut products = vec![0_u64; n + m];
        for (i, &x) in self.digits.iter().enumerate() {
            for (j, &y) in rhs.digits.iter().enumerate() {
                products[i + j] += x as u64 * y as u64;
            }
        }

        self.digits.clear();
        let mut carry = 0_u64;
        for v in products {
            let sum = v + carry;
            self.digits.push((sum % RADIX as u64) as u8);
            carry = sum / RADIX as u64;
        }
        debug_assert_eq!(carry, 0);
        trim_leading_zero!(self.digits);
    }
}
forward_binop!(Mul, mul, MulAssign, mul_assign);

// 实现除法和求余
impl BigInt {
    /// Quotient and remainder of `self / divisor` from one long-division scan.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        match self.compare_mag(divisor) {
            Ordering::Less => return Ok((BigInt::zero(), self.clone())),
            Ordering::Equal => return Ok((BigInt::one(), BigInt::zero())),
            Ordering::Greater => {}
        }
        tracing::trace!(dividend_len = self.len(), divisor_len = divisor.len(), "long division");

        let n = self.digits.len();
        let mut quotient = vec![0_u8; n];
        let mut rest = BigInt::zero();

        // self > divisor, so this stops before running out of digits
        let mut pos = n;
        while rest < *divisor {
            pos -= 1;
            rest.push_low_digit(self.digits[pos]);
        }
        quotient[pos] = rest.subtract_while_ge(divisor);

        for i in (0..pos).rev() {
            rest.push_low_digit(self.digits[i]);
            quotient[i] = rest.subtract_while_ge(divisor);
        }

        trim_leading_zero!(quotient);
        Ok((BigInt::from_raw(quotient), rest))
    }
    pub fn try_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(q, _)| q)
    }
    pub fn try_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
    /// Divides in place. Fails with [`Error::DivisionByZero`], leaving `self` unchanged.
    pub fn try_div_assign(&mut self, divisor: &BigInt) -> Result<()> {
        *self = self.try_div(divisor)?;
        Ok(())
    }
    /// Reduces in place. Fails with [`Error::DivisionByZero`], leaving `self` unchanged.
    pub fn try_rem_assign(&mut self, divisor: &BigInt) -> Result<()> {
        *self = self.try_rem(divisor)?;
        Ok(())
    }
    /// Repeatedly subtracts `divisor` while `self >= divisor` and returns the count.
    fn subtract_while_ge(&mut self, divisor: &BigInt) -> u8 {
        let mut count = 0;
        while *self >= *divisor {
            self.sub_digits(divisor);
            count += 1;
        }
        debug_assert!(count < RADIX);
        count
    }
}

/// # Panics
/// Panics with [`Error::DivisionByZero`] when `rhs` is zero. Use [`BigInt::try_div_assign`] to handle it.
impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        if let Err(e) = self.try_div_assign(rhs) {
            panic!("{}", e);
        }
    }
}
forward_binop!(Div, div, DivAssign, div_assign);

/// # Panics
/// Panics with [`Error::DivisionByZero`] when `rhs` is zero. Use [`BigInt::try_rem_assign`] to handle it.
impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        if let Err(e) = self.try_rem_assign(rhs) {
            panic!("{}", e);
        }
    }
}
forward_binop!(Rem, rem, RemAssign, rem_assign);

// 实现乘方
impl BigInt {
    /// Halves the value in place, rounding down, one decimal digit at a time.
    pub fn divide_by_2(&mut self) {
        let mut add = 0;
        for d in self.digits.iter_mut().rev() {
            let half = (*d >> 1) + add;
            add = if *d & 1 == 1 { RADIX / 2 } else { 0 };
            *d = half;
        }
        trim_leading_zero!(self.digits);
    }
    /// `self ^ exponent` by binary exponentiation. Any value to the power zero is one.
    pub fn pow(&self, exponent: &BigInt) -> BigInt {
        let mut result = self.clone();
        result.pow_assign(exponent);
        result
    }
    pub fn pow_assign(&mut self, exponent: &BigInt) {
        tracing::debug!(base_len = self.len(), exponent_len = exponent.len(), "binary exponentiation");
        let mut exponent = exponent.clone();
        let mut base = std::mem::replace(self, BigInt::one());
        while !exponent.is_zero() {
            if exponent.digits[0] % 2 == 1 {
                *self *= &base;
            }
            base = &base * &base;
            exponent.divide_by_2();
        }
    }
}

// 实现开方
impl BigInt {
    /// Floor of the square root, found by binary search. `sqrt(0)` is zero.
    pub fn sqrt(&self) -> BigInt {
        if self.is_zero() {
            return BigInt::zero();
        }
        let mut left = BigInt::one();
        let mut right = self.clone();
        right.divide_by_2();
        let mut best = BigInt::one();
        let mut steps = 0_usize;

        while left <= right {
            let mut mid = &left + &right;
            mid.divide_by_2();
            if &mid * &mid <= *self {
                best = mid.clone();
                mid.increment();
                left = mid;
            } else {
                // left >= 1, so mid >= 1
                mid.borrow_one();
                right = mid;
            }
            steps += 1;
        }
        tracing::trace!(len = self.len(), steps, "square root search finished");
        best
    }
}

// 实现累加累乘
impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |mut acc, x| {
            acc += &x;
            acc
        })
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |mut acc, x| {
            acc *= &x;
            acc
        })
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |mut acc, x| {
            acc *= x;
            acc
        })
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let big_u8: BigInt = 0_u8.into();
    assert_eq!(big_u8.digits, vec![0]);

    let big_u16: BigInt = 16_u16.into();
    assert_eq!(big_u16.digits, vec![6, 1]);

    let big_u32: BigInt = 1001_u32.into();
    assert_eq!(big_u32.digits, vec![1, 0, 0, 1]);

    let big_u64: BigInt = u64::MAX.into();
    assert_eq!(big_u64.to_string(), u64::MAX.to_string());

    let big_u128: BigInt = u128::MAX.into();
    assert_eq!(big_u128.to_string(), u128::MAX.to_string());
}

#[test]
fn test_parse() {
    assert_eq!(big("123").digits, vec![3, 2, 1]);
    assert_eq!(big("000").digits, vec![0]);
    assert_eq!(big("007").digits, vec![7]);
    assert_eq!(big("1001").digits, vec![1, 0, 0, 1]);

    for bad in ["", "12a", "-1", "+1", " 1", "1.0", "٣"] {
        assert_eq!(
            bad.parse::<BigInt>(),
            Err(Error::InvalidNumber { input: bad.to_owned() }),
            "input {:?}",
            bad
        );
    }
    assert!(BigInt::try_from(String::from("42")).is_ok());
}

#[test]
fn test_to_string() {
    for s in ["0", "7", "10", "1001", "12345678909876523784950683472613487560983287654321"] {
        assert_eq!(big(s).to_string(), s);
    }
    assert_eq!(format!("{:>5}", big("42")), "   42");
    assert_eq!(format!("{:05}", big("42")), "00042");
}

#[test]
fn test_to_u64() {
    let a: BigInt = "123456789110".parse().unwrap();
    assert_eq!(a.to_u64(), Some(123456789110));
    assert_eq!(big("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(big("18446744073709551616").to_u64(), None);
}

#[test]
fn test_digit_access() {
    let a = big("9021");
    assert_eq!(a.len(), 4);
    assert_eq!(a.digit_at(0), Ok(1));
    assert_eq!(a.digit_at(3), Ok(9));
    assert_eq!(a.digit_at(4), Err(Error::IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(a.digits().collect::<Vec<_>>(), vec![1, 2, 0, 9]);

    assert!(BigInt::zero().is_zero());
    assert_eq!(BigInt::zero().len(), 1);
    assert!(!big("10").is_zero());
}

#[test]
fn test_cmp() {
    assert!(big("99") < big("100"));
    assert!(big("100") > big("99"));
    assert!(big("123") < big("124"));
    assert!(big("523") > big("424"));
    assert!(big("77") <= big("77"));
    assert!(big("77") >= big("77"));
    assert_eq!(big("0077"), big("77"));
    assert_eq!(big("0").cmp(&BigInt::zero()), Ordering::Equal);
}

#[test]
fn test_increment() {
    let mut a = big("199");
    a.increment();
    assert_eq!(a, big("200"));

    let mut a = big("999");
    let before = a.post_increment();
    assert_eq!(before, big("999"));
    assert_eq!(a, big("1000"));
}

#[test]
fn test_decrement() {
    let mut a = big("1000");
    a.decrement().unwrap();
    assert_eq!(a.digits, vec![9, 9, 9]);

    let mut a = big("10");
    let before = a.post_decrement().unwrap();
    assert_eq!(before, big("10"));
    assert_eq!(a.digits, vec![9]);

    let mut a = big("1");
    a.decrement().unwrap();
    assert!(a.is_zero());
    assert_eq!(a.decrement(), Err(Error::Underflow));
    assert_eq!(a.post_decrement(), Err(Error::Underflow));
    assert!(a.is_zero());
}

#[test]
fn test_add() {
    assert_eq!(big("123") + big("877"), big("1000"));
    assert_eq!(&big("5") + &big("99999"), big("100004"));
    assert_eq!(big("0") + &big("0"), BigInt::zero());

    let mut a = big("1");
    a += big("9999999999999999999999");
    assert_eq!(a, big("10000000000000000000000"));
}

#[test]
fn test_sub() {
    assert_eq!(big("1000") - big("1"), big("999"));
    assert_eq!(big("1000").try_sub(&big("1000")).unwrap().digits, vec![0]);
    assert_eq!(big("10001").try_sub(&big("9992")).unwrap(), big("9"));
    assert_eq!(big("1").try_sub(&big("2")), Err(Error::Underflow));

    let mut a = big("5");
    assert_eq!(a.try_sub_assign(&big("50")), Err(Error::Underflow));
    assert_eq!(a, big("5"));
}

#[test]
#[should_panic(expected = "underflow")]
fn test_sub_operator_underflow_panics() {
    let _ = big("3") - big("4");
}

#[test]
fn test_mul() {
    assert_eq!(big("99") * big("99"), big("9801"));
    assert_eq!(&big("0") * &big("123456"), BigInt::zero());
    assert_eq!(&big("123456") * &big("0"), BigInt::zero());
    assert_eq!(big("100") * big("1000"), big("100000"));
    assert_eq!(
        big("12345678901234567890") * big("98765432109876543210"),
        big("1219326311370217952237463801111263526900")
    );

    let mut a = big("25");
    a *= big("4");
    assert_eq!(a.digits, vec![0, 0, 1]);
}

#[test]
fn test_div() {
    assert_eq!(big("100") / big("7"), big("14"));
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(big("6") / big("7"), BigInt::zero());
    assert_eq!(big("7") / big("7"), BigInt::one());
    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    assert_eq!(a / b, big("10000000000000000000000000000000"));
    assert_eq!(
        big("1219326311370217952237463801111263526900") / big("98765432109876543210"),
        big("12345678901234567890")
    );
    assert_eq!(big("1").try_div(&BigInt::zero()), Err(Error::DivisionByZero));
    assert_eq!(BigInt::zero().try_div(&BigInt::zero()), Err(Error::DivisionByZero));

    let mut a = big("81");
    a.try_div_assign(&big("9")).unwrap();
    assert_eq!(a, big("9"));
    assert_eq!(a.try_div_assign(&BigInt::zero()), Err(Error::DivisionByZero));
    assert_eq!(a, big("9"));
}

#[test]
fn test_mod() {
    assert_eq!(big("100") % big("7"), big("2"));
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
    assert_eq!(big("6") % big("7"), big("6"));
    assert_eq!(big("7") % big("7"), BigInt::zero());
    assert_eq!(big("1").try_rem(&BigInt::zero()), Err(Error::DivisionByZero));

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(r, big("393707270751296419349581795408095683999332705291"));
    assert_eq!(&q * &b + &r, a);
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_rem_operator_by_zero_panics() {
    let _ = big("3") % BigInt::zero();
}

#[test]
fn test_divide_by_2() {
    let mut a = big("1000");
    a.divide_by_2();
    assert_eq!(a, big("500"));
    a = big("15");
    a.divide_by_2();
    assert_eq!(a, big("7"));
    a = big("1");
    a.divide_by_2();
    assert_eq!(a.digits, vec![0]);
    a = big("98765432109876543211");
    a.divide_by_2();
    assert_eq!(a, big("49382716054938271605"));
}

#[test]
fn test_pow() {
    assert_eq!(big("2").pow(&big("10")), big("1024"));
    assert_eq!(big("0").pow(&big("0")), BigInt::one());
    assert_eq!(big("12345").pow(&BigInt::zero()), BigInt::one());
    assert_eq!(big("12345").pow(&BigInt::one()), big("12345"));
    assert_eq!(big("0").pow(&big("5")), BigInt::zero());
    assert_eq!(big("3").pow(&big("40")), big("12157665459056928801"));
    assert_eq!(big("2").pow(&big("128")), BigInt::from(u128::MAX) + BigInt::one());

    let mut a = big("7");
    a.pow_assign(&big("3"));
    assert_eq!(a, big("343"));
}

#[test]
fn test_sqrt() {
    assert_eq!(BigInt::zero().sqrt(), BigInt::zero());
    assert_eq!(big("1").sqrt(), big("1"));
    assert_eq!(big("3").sqrt(), big("1"));
    assert_eq!(big("4").sqrt(), big("2"));
    assert_eq!(big("99").sqrt(), big("9"));
    assert_eq!(big("100").sqrt(), big("10"));
    assert_eq!(big("152415787532388367501905199875019052100").sqrt(), big("12345678901234567890"));
    assert_eq!(big("152415787532388367501905199875019052099").sqrt(), big("12345678901234567889"));
}

#[test]
fn test_sum_product() {
    let values = vec![big("1"), big("2"), big("3"), big("4")];
    assert_eq!(values.iter().sum::<BigInt>(), big("10"));
    assert_eq!(values.iter().product::<BigInt>(), big("24"));
    assert_eq!(values.into_iter().product::<BigInt>(), big("24"));
    assert_eq!(Vec::<BigInt>::new().into_iter().sum::<BigInt>(), BigInt::zero());
    assert_eq!(BigInt::default(), BigInt::zero());
}
