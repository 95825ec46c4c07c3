//! Digit BigInt \
//! This crate provides:
//! - [`BigInt`]: Unsigned arbitrary-precision integers kept as a sequence of decimal digits.
//! - [`factorial`] and [`nth_fibonacci`] built on top of it.
//!
//! Fallible operations return [`Error`]: parsing (`InvalidNumber`), digit access
//! (`IndexOutOfBounds`), subtraction and decrement (`Underflow`), division and
//! remainder (`DivisionByZero`).

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod sequences;

pub use big_int::BigInt;
pub use error::{Error, Result};
pub use sequences::{factorial, nth_fibonacci};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a ^ 3 = {}", a.pow(&BigInt::from(3_u8)));
        println!("sqrt(a) = {}", a.sqrt());
    }
}
