use std::collections::HashMap;
use std::hash::Hash;

use super::{DefaultKeyedValues, KeyedValues, Values2D};

/// Grid of optional values addressed by row and column keys.
///
/// Rows and columns appear in the order their keys were first used. A cell
/// that was never set reads as absent, so a grid filled unevenly still
/// reports a full `row_count() x column_count()` shape.
///
/// # Examples
///
/// ```rust
/// use spenn::data::{DefaultKeyedValues2D, Values2D};
///
/// let mut grid = DefaultKeyedValues2D::new();
/// grid.add_value(0, 0, 2.0);
/// grid.add_value(1, 0, 3.0);
/// grid.add_value(0, 1, 5.0);
///
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.column_count(), 2);
/// assert_eq!(grid.value(1, 1), None);
/// assert_eq!(grid.value_for_keys(&0, &1), Some(5.0));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultKeyedValues2D<R, C> {
    row_keys: Vec<R>,
    row_index: HashMap<R, usize>,
    column_keys: Vec<C>,
    column_index: HashMap<C, usize>,
    rows: Vec<DefaultKeyedValues<C>>,
}

impl<R, C> Default for DefaultKeyedValues2D<R, C> {
    fn default() -> Self {
        Self {
            row_keys: Vec::new(),
            row_index: HashMap::new(),
            column_keys: Vec::new(),
            column_index: HashMap::new(),
            rows: Vec::new(),
        }
    }
}

impl<R, C> DefaultKeyedValues2D<R, C>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` at `(row_key, column_key)`, creating the row and column
    /// if needed.
    pub fn add_value(&mut self, row_key: R, column_key: C, value: f64) {
        self.set_value(row_key, column_key, Some(value));
    }

    /// Stores an optional value at `(row_key, column_key)`.
    pub fn set_value(&mut self, row_key: R, column_key: C, value: Option<f64>) {
        let row = match self.row_index.get(&row_key) {
            Some(&row) => row,
            None => {
                let row = self.rows.len();
                self.row_index.insert(row_key.clone(), row);
                self.row_keys.push(row_key);
                self.rows.push(DefaultKeyedValues::new());
                row
            }
        };

        if !self.column_index.contains_key(&column_key) {
            self.column_index.insert(column_key.clone(), self.column_keys.len());
            self.column_keys.push(column_key.clone());
        }
        self.rows[row].set_value(column_key, value);
    }

    pub fn row_keys(&self) -> &[R] {
        &self.row_keys
    }

    pub fn column_keys(&self) -> &[C] {
        &self.column_keys
    }

    pub fn row_index(&self, key: &R) -> Option<usize> {
        self.row_index.get(key).copied()
    }

    pub fn column_index(&self, key: &C) -> Option<usize> {
        self.column_index.get(key).copied()
    }

    /// Value stored for the given row and column keys.
    pub fn value_for_keys(&self, row_key: &R, column_key: &C) -> Option<f64> {
        let row = self.row_index(row_key)?;
        self.rows[row].value_for_key(column_key)
    }
}

impl<R, C> Values2D for DefaultKeyedValues2D<R, C>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.column_keys.len()
    }

    fn value(&self, row: usize, column: usize) -> Option<f64> {
        let column_key = self.column_keys.get(column)?;
        self.rows.get(row)?.value_for_key(column_key)
    }
}
