//! Aggregation functions over [`Values2D`] and [`KeyedValues`].
//!
//! Every function takes its input as an `Option`; `None` stands for a missing
//! reference and is rejected with [`Error::InvalidArgument`]. Row and column
//! indices are signed so that a negative index can be reported as
//! [`Error::IndexOutOfRange`] rather than wrapping.
//!
//! # Examples
//!
//! ```rust
//! use spenn::data::{DefaultKeyedValues, KeyedValues, utilities};
//!
//! let values: DefaultKeyedValues<&str> =
//!     [("A", 5.0), ("B", 9.0), ("C", 2.0)].into_iter().collect();
//!
//! let cumulative = utilities::get_cumulative_percentages(Some(&values)).unwrap();
//! assert_eq!(cumulative.value_for_key(&"A"), Some(0.3125));
//! assert_eq!(cumulative.value_for_key(&"B"), Some(0.875));
//! assert_eq!(cumulative.value_for_key(&"C"), Some(1.0));
//! ```

use std::hash::Hash;

use super::util::{checked_index, sum_present};
use super::{DefaultKeyedValues, KeyedValues, Values2D};
use crate::error::{Axis, Error, Result};

/// Sums the values in one column, treating absent cells as zero.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `data` is `None`
/// - [`Error::IndexOutOfRange`] if `column` is negative or not less than
///   `column_count()`
///
/// # Examples
///
/// ```rust
/// use spenn::data::{DefaultKeyedValues2D, utilities::calculate_column_total};
///
/// let mut grid = DefaultKeyedValues2D::new();
/// grid.add_value(0, 0, 1.0);
/// grid.add_value(1, 0, 4.0);
///
/// assert_eq!(calculate_column_total(Some(&grid), 0), Ok(5.0));
/// assert!(calculate_column_total(Some(&grid), 1).is_err());
/// ```
pub fn calculate_column_total<D>(data: Option<&D>, column: isize) -> Result<f64>
where
    D: Values2D + ?Sized,
{
    let data = data.ok_or_else(|| Error::null_argument("data"))?;
    let column = checked_index(column, data.column_count(), Axis::Column)?;
    tracing::trace!(column, rows = data.row_count(), "column total");

    Ok(sum_present(
        (0..data.row_count()).map(|row| data.value(row, column)),
    ))
}

/// Sums the values in one row, treating absent cells as zero.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `data` is `None`
/// - [`Error::IndexOutOfRange`] if `row` is negative or not less than
///   `row_count()`
pub fn calculate_row_total<D>(data: Option<&D>, row: isize) -> Result<f64>
where
    D: Values2D + ?Sized,
{
    let data = data.ok_or_else(|| Error::null_argument("data"))?;
    let row = checked_index(row, data.row_count(), Axis::Row)?;
    tracing::trace!(row, columns = data.column_count(), "row total");

    Ok(sum_present(
        (0..data.column_count()).map(|column| data.value(row, column)),
    ))
}

/// Sums one column over the listed rows only.
///
/// Rows at or past `row_count()` are skipped; the column index is checked
/// the same way as in [`calculate_column_total`].
pub fn calculate_column_total_for_rows<D>(
    data: Option<&D>,
    column: isize,
    valid_rows: &[usize],
) -> Result<f64>
where
    D: Values2D + ?Sized,
{
    let data = data.ok_or_else(|| Error::null_argument("data"))?;
    let column = checked_index(column, data.column_count(), Axis::Column)?;
    let row_count = data.row_count();

    Ok(sum_present(
        valid_rows
            .iter()
            .filter(|&&row| row < row_count)
            .map(|&row| data.value(row, column)),
    ))
}

/// Sums one row over the listed columns only.
///
/// Columns at or past `column_count()` are skipped.
pub fn calculate_row_total_for_columns<D>(
    data: Option<&D>,
    row: isize,
    valid_columns: &[usize],
) -> Result<f64>
where
    D: Values2D + ?Sized,
{
    let data = data.ok_or_else(|| Error::null_argument("data"))?;
    let row = checked_index(row, data.row_count(), Axis::Row)?;
    let column_count = data.column_count();

    Ok(sum_present(
        valid_columns
            .iter()
            .filter(|&&column| column < column_count)
            .map(|&column| data.value(row, column)),
    ))
}

/// Converts plain numbers into cell values of the same length and order.
///
/// # Examples
///
/// ```rust
/// use spenn::data::utilities::create_number_array;
///
/// let cells = create_number_array(Some(&[1.0, 2.5][..])).unwrap();
/// assert_eq!(cells, vec![Some(1.0), Some(2.5)]);
/// assert!(create_number_array(None).is_err());
/// ```
pub fn create_number_array(data: Option<&[f64]>) -> Result<Vec<Option<f64>>> {
    let data = data.ok_or_else(|| Error::null_argument("data"))?;
    Ok(data.iter().copied().map(Some).collect())
}

/// Converts a jagged table of numbers row by row.
///
/// Row lengths are preserved as given.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `data` is `None` or any row is `None`.
pub fn create_number_array_2d<R>(data: Option<&[Option<R>]>) -> Result<Vec<Vec<Option<f64>>>>
where
    R: AsRef<[f64]>,
{
    let data = data.ok_or_else(|| Error::null_argument("data"))?;
    data.iter()
        .enumerate()
        .map(|(i, row)| {
            let row = row
                .as_ref()
                .ok_or_else(|| Error::InvalidArgument(format!("null row {i} in 'data'")))?;
            create_number_array(Some(row.as_ref()))
        })
        .collect()
}

/// Tests two tables for equality.
///
/// Two `None` tables are equal. Elements compare bitwise, so `NaN` equals
/// `NaN` while `0.0` and `-0.0` differ.
pub fn equal<R: AsRef<[f64]>>(a: Option<&[R]>, b: Option<&[R]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(ra, rb)| {
                    let (ra, rb) = (ra.as_ref(), rb.as_ref());
                    ra.len() == rb.len() && ra.iter().zip(rb).all(|(x, y)| same_value(*x, *y))
                })
        }
        _ => false,
    }
}

fn same_value(x: f64, y: f64) -> bool {
    x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan())
}

/// Running share of the total for each key, in key order.
///
/// The value for the i-th key is the sum of the first `i + 1` values divided
/// by the sum of all values. Absent values add nothing and repeat the running
/// share of the previous key. With a non-zero total the last key is exactly
/// `1.0`; with a zero total the shares are not numbers.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `data` is `None`.
pub fn get_cumulative_percentages<V>(data: Option<&V>) -> Result<DefaultKeyedValues<V::Key>>
where
    V: KeyedValues + ?Sized,
    V::Key: Clone + Eq + Hash,
{
    let data = data.ok_or_else(|| Error::null_argument("data"))?;
    let count = data.item_count();
    let total = sum_present((0..count).map(|i| data.value(i)));
    if total == 0.0 && count > 0 {
        tracing::debug!(count, "cumulative percentages over a zero total");
    }

    let mut result = DefaultKeyedValues::new();
    let mut running = 0.0;
    for i in 0..count {
        let Some(key) = data.key(i) else {
            continue;
        };
        if let Some(v) = data.value(i) {
            running += v;
        }
        result.add_value(key.clone(), running / total);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DefaultKeyedValues2D;

    fn two_by_two() -> DefaultKeyedValues2D<u32, u32> {
        let mut grid = DefaultKeyedValues2D::new();
        grid.add_value(0, 0, 2.0);
        grid.add_value(1, 0, 3.0);
        grid.add_value(0, 1, 5.0);
        grid.add_value(1, 1, 7.0);
        grid
    }

    #[test]
    fn test_column_total() {
        let grid = two_by_two();

        assert_eq!(calculate_column_total(Some(&grid), 0), Ok(5.0));
        assert_eq!(calculate_column_total(Some(&grid), 1), Ok(12.0));
    }

    #[test]
    fn test_row_total() {
        let grid = two_by_two();

        assert_eq!(calculate_row_total(Some(&grid), 0), Ok(7.0));
        assert_eq!(calculate_row_total(Some(&grid), 1), Ok(10.0));
    }

    #[test]
    fn test_totals_through_trait_object() {
        let grid = two_by_two();
        let data: &dyn Values2D = &grid;

        assert_eq!(calculate_column_total(Some(data), 1), Ok(12.0));
        assert_eq!(calculate_row_total(Some(data), 1), Ok(10.0));
    }

    #[test]
    fn test_total_index_errors() {
        let grid = two_by_two();

        assert_eq!(
            calculate_column_total(Some(&grid), 2),
            Err(Error::IndexOutOfRange {
                axis: Axis::Column,
                index: 2,
                count: 2
            })
        );
        assert_eq!(
            calculate_row_total(Some(&grid), -1),
            Err(Error::IndexOutOfRange {
                axis: Axis::Row,
                index: -1,
                count: 2
            })
        );
    }

    #[test]
    fn test_totals_with_valid_lists() {
        let grid = two_by_two();

        assert_eq!(calculate_column_total_for_rows(Some(&grid), 1, &[1]), Ok(7.0));
        assert_eq!(calculate_column_total_for_rows(Some(&grid), 1, &[0, 1, 9]), Ok(12.0));
        assert_eq!(calculate_row_total_for_columns(Some(&grid), 0, &[1, 5]), Ok(5.0));
        assert_eq!(calculate_row_total_for_columns(Some(&grid), 0, &[]), Ok(0.0));
        assert!(calculate_column_total_for_rows(Some(&grid), 2, &[0]).is_err());
    }

    #[test]
    fn test_number_array_2d_rejects_null_row() {
        let rows = [Some(vec![1.0]), None];

        assert_eq!(
            create_number_array_2d(Some(&rows[..])),
            Err(Error::InvalidArgument("null row 1 in 'data'".to_string()))
        );
    }

    #[test]
    fn test_equal_tables() {
        let a = [vec![1.0, f64::NAN], vec![3.0]];
        let b = [vec![1.0, f64::NAN], vec![3.0]];
        let c = [vec![1.0, f64::NAN], vec![3.0, 4.0]];
        let zero = [vec![0.0]];
        let neg_zero = [vec![-0.0]];

        assert!(equal::<Vec<f64>>(None, None));
        assert!(!equal(Some(&a[..]), None));
        assert!(equal(Some(&a[..]), Some(&b[..])));
        assert!(!equal(Some(&a[..]), Some(&c[..])));
        assert!(!equal(Some(&zero[..]), Some(&neg_zero[..])));
    }

    #[test]
    fn test_cumulative_with_absent_value() {
        let mut values = DefaultKeyedValues::new();
        values.add_value("A", 1.0);
        values.set_value("B", None);
        values.add_value("C", 3.0);

        let result = get_cumulative_percentages(Some(&values)).unwrap();
        assert_eq!(result.value_for_key(&"A"), Some(0.25));
        assert_eq!(result.value_for_key(&"B"), Some(0.25));
        assert_eq!(result.value_for_key(&"C"), Some(1.0));
    }

    #[test]
    fn test_cumulative_zero_total_is_nan() {
        let values: DefaultKeyedValues<&str> = [("A", 2.0), ("B", -2.0)].into_iter().collect();

        let result = get_cumulative_percentages(Some(&values)).unwrap();
        assert_eq!(result.item_count(), 2);
        assert!(result.value(1).is_some_and(f64::is_nan));
    }
}
