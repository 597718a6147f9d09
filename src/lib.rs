//! Numeric primitives for charting
//!
//! `spenn` provides the small pieces of arithmetic a charting library leans
//! on before anything is drawn: totals and running shares over keyed tabular
//! data, and an immutable interval type for axis ranges.
//!
//! # Core Concepts
//!
//! ## Keyed Data
//!
//! Chart data is read through two traits:
//! - [`Values2D`] - a grid of optional values addressed by `(row, column)`
//! - [`KeyedValues`] - an ordered list of `(key, optional value)` pairs
//!
//! [`DefaultKeyedValues`] and [`DefaultKeyedValues2D`] are in-memory
//! implementations. The aggregation functions live in
//! [`data::utilities`] and borrow their input for a single call.
//!
//! ## Ranges
//!
//! [`Range`] is a closed interval `[lower, upper]` with containment and
//! intersection tests, and associated functions that derive new ranges:
//! [`Range::expand`], [`Range::shift`], [`Range::combine`] and friends.
//!
//! ## Missing Inputs
//!
//! Operations that need a value to be present take it as an `Option` and
//! report `None` as [`Error::InvalidArgument`]. Out-of-range row and column
//! indices are reported as [`Error::IndexOutOfRange`].
//!
//! # Examples
//!
//! ## Column Totals
//!
//! ```rust
//! use spenn::{DefaultKeyedValues2D, data::utilities};
//!
//! let mut grid = DefaultKeyedValues2D::new();
//! grid.add_value("north", "q1", 2.0);
//! grid.add_value("south", "q1", 3.0);
//! grid.add_value("north", "q2", 5.0);
//!
//! assert_eq!(utilities::calculate_column_total(Some(&grid), 0), Ok(5.0));
//! // The missing south/q2 cell counts as zero
//! assert_eq!(utilities::calculate_column_total(Some(&grid), 1), Ok(5.0));
//! assert_eq!(utilities::calculate_row_total(Some(&grid), 0), Ok(7.0));
//! ```
//!
//! ## Axis Ranges
//!
//! ```rust
//! use spenn::Range;
//!
//! let data = Range::new(2.0, 8.0);
//! let axis = Range::expand(Some(&data), 0.5, 0.25).unwrap();
//!
//! assert_eq!(axis.lower_bound(), -1.0);
//! assert_eq!(axis.upper_bound(), 9.5);
//! assert!(axis.contains(0.0));
//! ```
//!

pub mod data;
pub mod error;
pub mod range;

pub use data::{DefaultKeyedValues, DefaultKeyedValues2D, KeyedValues, Values2D};
pub use error::{Axis, Error, Result};
pub use num_traits::Float;
pub use range::Range;
