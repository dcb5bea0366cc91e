//! Error types for tagframe-core

use thiserror::Error;

use crate::coordinate::Axis;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tagframe-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Construction input whose rows (or columns) are not all the same length
    #[error("{axis}s have inconsistent lengths (min: {min}, max: {max})")]
    InconsistentLengths { axis: Axis, min: usize, max: usize },

    /// Inserted or pushed row/column has the wrong number of elements
    #[error("{axis} length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// Row or column index outside the table
    #[error("{axis} index {index} out of bounds (len: {len})")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },

    /// A tag with the same name and coordinate already exists
    #[error("Tag already exists: {0}")]
    DuplicateTag(String),

    /// No tag matches the given name and coordinate
    #[error("No tag found for {0}")]
    TagNotFound(String),

    /// More than one tag matches the given name and coordinate
    #[error("Expected a unique tag for {key}, found {count}")]
    AmbiguousTag { key: String, count: usize },

    /// No tag carries the given id
    #[error("Unknown tag id: {0}")]
    UnknownTagId(String),
}

impl Error {
    /// Create an out-of-bounds error for a row index
    pub fn row_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds {
            axis: Axis::Row,
            index,
            len,
        }
    }

    /// Create an out-of-bounds error for a column index
    pub fn column_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds {
            axis: Axis::Column,
            index,
            len,
        }
    }

    /// The axis an error refers to, if it is positional
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Error::InconsistentLengths { axis, .. }
            | Error::DimensionMismatch { axis, .. }
            | Error::IndexOutOfBounds { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}
