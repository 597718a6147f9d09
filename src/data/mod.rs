//! Keyed tabular data and the aggregation functions that consume it.
//!
//! Two read-only views describe the data a chart is built from:
//!
//! - [`Values2D`] - a grid of optional numbers addressed by `(row, column)`
//! - [`KeyedValues`] - an ordered list of `(key, optional number)` pairs
//!
//! [`DefaultKeyedValues`] and [`DefaultKeyedValues2D`] are the in-memory
//! implementations. The functions in [`utilities`] only ever borrow a view
//! for the duration of one call.
//!
//! # Examples
//!
//! ```rust
//! use spenn::data::{DefaultKeyedValues2D, Values2D, utilities};
//!
//! let mut grid = DefaultKeyedValues2D::new();
//! grid.add_value("2023", "apples", 1.0);
//! grid.add_value("2024", "apples", 4.0);
//!
//! assert_eq!(grid.row_count(), 2);
//! assert_eq!(utilities::calculate_column_total(Some(&grid), 0), Ok(5.0));
//! ```

pub mod keyed_values;
pub mod keyed_values_2d;
pub mod utilities;
pub(crate) mod util;

pub use keyed_values::DefaultKeyedValues;
pub use keyed_values_2d::DefaultKeyedValues2D;

/// A grid of optional numeric values addressed by zero-based indices.
pub trait Values2D {
    /// Number of rows in the grid.
    fn row_count(&self) -> usize;

    /// Number of columns in the grid.
    fn column_count(&self) -> usize;

    /// Value stored at `(row, column)`.
    ///
    /// Returns `None` when the cell holds no value or the indices are outside
    /// the grid.
    fn value(&self, row: usize, column: usize) -> Option<f64>;
}

/// An ordered sequence of unique keys, each with an optional numeric value.
pub trait KeyedValues {
    type Key;

    /// Number of entries.
    fn item_count(&self) -> usize;

    /// Key at `index`, or `None` past the end.
    fn key(&self, index: usize) -> Option<&Self::Key>;

    /// Value at `index`; `None` for an absent value or an index past the end.
    fn value(&self, index: usize) -> Option<f64>;

    /// Position of `key`, if present.
    fn index_of(&self, key: &Self::Key) -> Option<usize>;

    /// Value stored for `key`.
    fn value_for_key(&self, key: &Self::Key) -> Option<f64> {
        self.index_of(key).and_then(|index| self.value(index))
    }

    fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}
