//! Coordinate remapping rules for structural edits

use crate::coordinate::{Axis, Coordinate, Region};

/// A structural table edit that tags must follow
///
/// Applying an edit to a coordinate yields where that coordinate lives after the edit, or
/// `None` when the row, column or cell it was bound to no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralEdit {
    /// Rows become columns and columns become rows
    Transpose,
    /// A row was inserted before the given index
    InsertRow(usize),
    /// The row at the given index was deleted
    RemoveRow(usize),
    /// A column was inserted before the given index
    InsertColumn(usize),
    /// The column at the given index was deleted
    RemoveColumn(usize),
    /// Everything outside the region was cut away; the region's top-left becomes (0,0)
    Subset(Region),
}

impl StructuralEdit {
    /// Where `coordinate` lives after this edit
    ///
    /// # Examples
    /// ```
    /// use tagframe_core::{Coordinate, StructuralEdit};
    ///
    /// assert_eq!(StructuralEdit::Transpose.apply(Coordinate::Row(2)), Some(Coordinate::Column(2)));
    /// assert_eq!(StructuralEdit::InsertRow(1).apply(Coordinate::cell(1, 5)), Some(Coordinate::cell(2, 5)));
    /// assert_eq!(StructuralEdit::RemoveRow(1).apply(Coordinate::Row(1)), None);
    /// assert_eq!(StructuralEdit::RemoveRow(1).apply(Coordinate::Column(1)), Some(Coordinate::Column(1)));
    /// ```
    pub fn apply(&self, coordinate: Coordinate) -> Option<Coordinate> {
        match *self {
            StructuralEdit::Transpose => Some(transpose(coordinate)),
            StructuralEdit::InsertRow(at) => map_axis(coordinate, Axis::Row, |i| Some(shift_up(i, at))),
            StructuralEdit::RemoveRow(at) => map_axis(coordinate, Axis::Row, |i| shift_down(i, at)),
            StructuralEdit::InsertColumn(at) => {
                map_axis(coordinate, Axis::Column, |j| Some(shift_up(j, at)))
            }
            StructuralEdit::RemoveColumn(at) => {
                map_axis(coordinate, Axis::Column, |j| shift_down(j, at))
            }
            StructuralEdit::Subset(region) => {
                let rows = |i: usize| region.contains_row(i).then(|| i - region.start.row);
                let columns =
                    |j: usize| region.contains_column(j).then(|| j - region.start.column);
                map_axis(coordinate, Axis::Row, rows)
                    .and_then(|c| map_axis(c, Axis::Column, columns))
            }
        }
    }

    /// Whether the edit can drop tags (as opposed to only moving them)
    pub fn is_lossy(&self) -> bool {
        matches!(
            self,
            StructuralEdit::RemoveRow(_)
                | StructuralEdit::RemoveColumn(_)
                | StructuralEdit::Subset(_)
        )
    }
}

fn transpose(coordinate: Coordinate) -> Coordinate {
    match coordinate {
        Coordinate::Row(i) => Coordinate::Column(i),
        Coordinate::Column(j) => Coordinate::Row(j),
        Coordinate::Cell { row, column } => Coordinate::Cell {
            row: column,
            column: row,
        },
    }
}

/// Index after inserting before `at`
fn shift_up(index: usize, at: usize) -> usize {
    if index >= at {
        index + 1
    } else {
        index
    }
}

/// Index after removing `at`; `None` for the removed index itself
fn shift_down(index: usize, at: usize) -> Option<usize> {
    match index.cmp(&at) {
        std::cmp::Ordering::Less => Some(index),
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Greater => Some(index - 1),
    }
}

/// Apply `f` to the index `coordinate` binds on `axis`; coordinates unbound on `axis` pass through
fn map_axis(
    coordinate: Coordinate,
    axis: Axis,
    f: impl Fn(usize) -> Option<usize>,
) -> Option<Coordinate> {
    match (coordinate, axis) {
        (Coordinate::Row(row), Axis::Row) => f(row).map(Coordinate::Row),
        (Coordinate::Column(column), Axis::Column) => f(column).map(Coordinate::Column),
        (Coordinate::Cell { row, column }, Axis::Row) => {
            f(row).map(|row| Coordinate::Cell { row, column })
        }
        (Coordinate::Cell { row, column }, Axis::Column) => {
            f(column).map(|column| Coordinate::Cell { row, column })
        }
        (unbound, _) => Some(unbound),
    }
}
