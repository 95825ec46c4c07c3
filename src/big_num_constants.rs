/// Every element of a digit sequence is below this value.
pub const RADIX: u8 = 10;

pub const DIGITS: [char; RADIX as usize] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Largest value kept in [`SMALL_VALUES`](crate::big_num_cache::SMALL_VALUES).
pub const MAX_CONSTANT: usize = 16;
