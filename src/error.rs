/// Failures reported by [`BigInt`](crate::BigInt) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid number {input:?}: expected one or more decimal digits")]
    InvalidNumber { input: String },
    #[error("digit index {index} is out of bounds for a number with {len} digits")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("underflow: the result would be negative")]
    Underflow,
    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
