//! Coordinate types
//!
//! This module contains:
//! - [`Coordinate`] - What a tag is bound to: a whole row, a whole column or a single cell
//! - [`Axis`] - Row or column, used in errors and remap rules
//! - [`Position`] and [`Region`] - Cell corners and inclusive rectangles, used for sub-framing

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two table axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
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

/// The position a tag is attached to
///
/// A `Row` coordinate binds only the row axis and applies to every cell of that row,
/// a `Column` coordinate binds only the column axis, and a `Cell` binds both.
/// Two coordinates are equal only if they are the same variant with equal indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coordinate {
    /// A whole row
    Row(usize),
    /// A whole column
    Column(usize),
    /// A single cell
    Cell { row: usize, column: usize },
}

impl Coordinate {
    /// Create a cell coordinate
    pub fn cell(row: usize, column: usize) -> Self {
        Coordinate::Cell { row, column }
    }

    /// Project onto `(row, column)`; an axis the coordinate does not bind is `None`
    ///
    /// # Examples
    /// ```
    /// use tagframe_core::Coordinate;
    ///
    /// assert_eq!(Coordinate::Row(3).axes(), (Some(3), None));
    /// assert_eq!(Coordinate::Column(1).axes(), (None, Some(1)));
    /// assert_eq!(Coordinate::cell(3, 1).axes(), (Some(3), Some(1)));
    /// ```
    pub fn axes(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            Coordinate::Row(row) => (Some(row), None),
            Coordinate::Column(column) => (None, Some(column)),
            Coordinate::Cell { row, column } => (Some(row), Some(column)),
        }
    }

    /// The bound row index, if any
    pub fn row(&self) -> Option<usize> {
        self.axes().0
    }

    /// The bound column index, if any
    pub fn column(&self) -> Option<usize> {
        self.axes().1
    }

    /// Whether this coordinate applies to the cell at `(row, column)`
    ///
    /// Unbound axes match any index, so a row coordinate covers its whole row.
    pub fn covers(&self, row: usize, column: usize) -> bool {
        match *self {
            Coordinate::Row(r) => r == row,
            Coordinate::Column(c) => c == column,
            Coordinate::Cell { row: r, column: c } => r == row && c == column,
        }
    }

    pub fn is_row(&self) -> bool {
        matches!(self, Coordinate::Row(_))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Coordinate::Column(_))
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Coordinate::Cell { .. })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Row(row) => write!(f, "({},*)", row),
            Coordinate::Column(column) => write!(f, "(*,{})", column),
            Coordinate::Cell { row, column } => write!(f, "({},{})", row, column),
        }
    }
}

impl From<Position> for Coordinate {
    fn from(pos: Position) -> Self {
        Coordinate::cell(pos.row, pos.column)
    }
}

/// A cell position (0-based row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Create a region from this position to another
    pub fn to(&self, other: Position) -> Region {
        Region::new(*self, other)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// An inclusive rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Top-left corner
    pub start: Position,
    /// Bottom-right corner
    pub end: Position,
}

impl Region {
    /// Create a new region
    pub fn new(start: Position, end: Position) -> Self {
        // Normalize so start is top-left and end is bottom-right
        Self {
            start: Position::new(start.row.min(end.row), start.column.min(end.column)),
            end: Position::new(start.row.max(end.row), start.column.max(end.column)),
        }
    }

    /// Create a region from row/column indices
    pub fn from_indices(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self::new(
            Position::new(start_row, start_col),
            Position::new(end_row, end_col),
        )
    }

    /// Create a single-cell region
    pub fn single(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if a cell is within this region
    pub fn contains(&self, pos: &Position) -> bool {
        self.contains_row(pos.row) && self.contains_column(pos.column)
    }

    /// Check if a row index lies between the region's first and last rows
    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.start.row && row <= self.end.row
    }

    /// Check if a column index lies between the region's first and last columns
    pub fn contains_column(&self, column: usize) -> bool {
        column >= self.start.column && column <= self.end.column
    }

    /// Get the number of rows in the region
    pub fn row_count(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the region
    pub fn column_count(&self) -> usize {
        self.end.column - self.start.column + 1
    }

    /// Get the total number of cells in the region
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Iterate over all positions in the region (row by row)
    pub fn positions(&self) -> RegionIterator {
        RegionIterator {
            region: *self,
            current_row: self.start.row,
            current_col: self.start.column,
            remaining: self.cell_count(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Iterator over positions in a region
pub struct RegionIterator {
    region: Region,
    current_row: usize,
    current_col: usize,
    remaining: usize,
}

impl Iterator for RegionIterator {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let pos = Position::new(self.current_row, self.current_col);

        // Move to next cell
        self.remaining -= 1;
        self.current_col += 1;
        if self.current_col > self.region.end.column {
            self.current_col = self.region.start.column;
            self.current_row += 1;
        }

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RegionIterator {}
