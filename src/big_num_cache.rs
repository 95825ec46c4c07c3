use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref SMALL_VALUES: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![0]),
        BigInt::from_raw(vec![1]),
        BigInt::from_raw(vec![2]),
        BigInt::from_raw(vec![3]),
        BigInt::from_raw(vec![4]),
        BigInt::from_raw(vec![5]),
        BigInt::from_raw(vec![6]),
        BigInt::from_raw(vec![7]),
        BigInt::from_raw(vec![8]),
        BigInt::from_raw(vec![9]),
        BigInt::from_raw(vec![0, 1]),
        BigInt::from_raw(vec![1, 1]),
        BigInt::from_raw(vec![2, 1]),
        BigInt::from_raw(vec![3, 1]),
        BigInt::from_raw(vec![4, 1]),
        BigInt::from_raw(vec![5, 1]),
        BigInt::from_raw(vec![6, 1]),
    ];
}

#[test]
fn test_small_values_are_normalized() {
    for (value, big) in SMALL_VALUES.iter().enumerate() {
        assert_eq!(big.to_u64(), Some(value as u64));
        assert_eq!(big.to_string(), value.to_string());
    }
}
