//! Error types for spenn.

use std::fmt;

use thiserror::Error;

/// Axis of a two-dimensional data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Main error type for spenn operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required argument was absent or otherwise unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A row or column index fell outside `[0, count)`.
    #[error("{axis} index {index} out of range (count: {count})")]
    IndexOutOfRange {
        axis: Axis,
        index: isize,
        count: usize,
    },
}

impl Error {
    pub(crate) fn null_argument(name: &str) -> Self {
        Error::InvalidArgument(format!("null '{name}' argument"))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
