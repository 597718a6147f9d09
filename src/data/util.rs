use crate::error::{Axis, Error, Result};

/// Validate a signed index against `[0, count)` and return it as `usize`.
pub fn checked_index(index: isize, count: usize, axis: Axis) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < count)
        .ok_or(Error::IndexOutOfRange { axis, index, count })
}

/// Sum a sequence of optional values, treating `None` as zero.
///
/// The sum starts at `+0.0`, so an empty or all-absent sequence is `+0.0`.
pub fn sum_present<I: IntoIterator<Item = Option<f64>>>(values: I) -> f64 {
    values.into_iter().flatten().fold(0.0, |acc, v| acc + v)
}
