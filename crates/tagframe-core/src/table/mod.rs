//! Table type
//!
//! A [`Table`] stores its elements in one row-major vector: the element at `(row, column)`
//! lives at `row * column_count + column`. Every table owns a [`TagCollection`] whose tags
//! follow their rows, columns and cells through structural edits.
//!
//! Data edits come in two forms. The plain form (`insert_row_before`, `transpose`, ...)
//! leaves the receiver untouched and returns a new table. The `_in_place` form mutates the
//! receiver and returns it. Tagging always happens in place.

mod edit;
mod iter;
mod tagging;

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::coordinate::Axis;
use crate::error::{Error, Result};
use crate::options::CompareOptions;
use crate::tag::TagCollection;

pub use iter::{CellRef, Cells};

/// A two-dimensional table of `V` values tagged with `T` values
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Table<V, T = String> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    columns: usize,
    /// Row-major elements, `rows * columns` long
    data: Vec<V>,
    /// Tags bound to rows, columns and cells of this table
    tags: TagCollection<T>,
}

impl<V, T> Table<V, T> {
    /// Create a table with no rows, no columns and no tags
    pub fn empty() -> Self {
        Self {
            rows: 0,
            columns: 0,
            data: Vec::new(),
            tags: TagCollection::new(),
        }
    }

    /// Build a table from a list of rows
    ///
    /// Fails with [`Error::InconsistentLengths`] unless every row has the same length.
    ///
    /// # Examples
    /// ```
    /// use tagframe_core::Table;
    ///
    /// let table: Table<i32> = Table::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(table.row_count(), 2);
    /// assert_eq!(table.column_count(), 3);
    /// assert_eq!(*table.element_at(1, 0).unwrap(), 4);
    /// ```
    pub fn from_rows(rows: Vec<Vec<V>>) -> Result<Self> {
        let (count, len) = uniform_shape(&rows, Axis::Row)?;
        Ok(Self {
            rows: count,
            columns: len,
            data: rows.into_iter().flatten().collect(),
            tags: TagCollection::new(),
        })
    }

    /// Build a table from a list of columns
    ///
    /// Fails with [`Error::InconsistentLengths`] unless every column has the same length.
    pub fn from_columns(columns: Vec<Vec<V>>) -> Result<Self> {
        let (count, len) = uniform_shape(&columns, Axis::Column)?;
        // Column-major input is the row-major layout of the transposed table
        let mut table = Self {
            rows: count,
            columns: len,
            data: columns.into_iter().flatten().collect(),
            tags: TagCollection::new(),
        };
        table.transpose_in_place();
        Ok(table)
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Get `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Check if the table holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the element at `(row, column)`
    pub fn element_at(&self, row: usize, column: usize) -> Result<&V> {
        self.check_cell(row, column)?;
        Ok(&self.data[self.offset(row, column)])
    }

    /// Borrow a row as a slice
    pub fn row(&self, row: usize) -> Result<&[V]> {
        self.check_row(row)?;
        let start = row * self.columns;
        Ok(&self.data[start..start + self.columns])
    }

    /// Iterate over every element in row-major order
    pub fn cells(&self) -> Cells<'_, V> {
        Cells::new(&self.data, self.columns)
    }

    /// Get the table's tags
    pub fn tags(&self) -> &TagCollection<T> {
        &self.tags
    }

    /// Compare two tables
    ///
    /// Tables are equal when they have the same shape and equal elements; with
    /// [`CompareOptions::include_tags`] their tag collections must also be equal.
    pub fn equals(&self, other: &Self, options: &CompareOptions) -> bool
    where
        V: PartialEq,
        T: fmt::Display,
    {
        self == other && (!options.include_tags || self.tags == other.tags)
    }

    /// Offset of `(row, column)` in the row-major data
    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(Error::row_out_of_bounds(row, self.rows));
        }
        Ok(())
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if column >= self.columns {
            return Err(Error::column_out_of_bounds(column, self.columns));
        }
        Ok(())
    }

    fn check_cell(&self, row: usize, column: usize) -> Result<()> {
        self.check_row(row)?;
        self.check_column(column)
    }

    fn contains_cell(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }
}

impl<V: Clone, T: Clone> Table<V, T> {
    /// A fully independent copy of the table, elements and tags included
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copy of one row
    pub fn row_slice(&self, row: usize) -> Result<Vec<V>> {
        self.row(row).map(<[V]>::to_vec)
    }

    /// Copy of one column
    pub fn column_slice(&self, column: usize) -> Result<Vec<V>> {
        self.check_column(column)?;
        Ok((0..self.rows)
            .map(|row| self.data[self.offset(row, column)].clone())
            .collect())
    }

    /// Every row, copied
    pub fn row_slices(&self) -> Vec<Vec<V>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.columns).map(<[V]>::to_vec).collect()
    }

    /// Every column, copied
    pub fn column_slices(&self) -> Vec<Vec<V>> {
        (0..self.columns)
            .map(|column| {
                (0..self.rows)
                    .map(|row| self.data[self.offset(row, column)].clone())
                    .collect()
            })
            .collect()
    }
}

impl<V, T> Default for Table<V, T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Data-only equality; see [`Table::equals`] to include tags
impl<V: PartialEq, T> PartialEq for Table<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.data == other.data
    }
}

impl<V: fmt::Display, T> fmt::Display for Table<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let start = row * self.columns;
            for (i, value) in self.data[start..start + self.columns].iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Number of lines and their common length, or the min/max lengths when they differ
fn uniform_shape<V>(lines: &[Vec<V>], axis: Axis) -> Result<(usize, usize)> {
    let min = lines.iter().map(Vec::len).min().unwrap_or(0);
    let max = lines.iter().map(Vec::len).max().unwrap_or(0);
    if min != max {
        return Err(Error::InconsistentLengths { axis, min, max });
    }
    Ok((lines.len(), min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid() -> Table<i32> {
        Table::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
            vec![10, 11, 12],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows() {
        let table = grid();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 3);
        assert_eq!(*table.element_at(2, 2).unwrap(), 9);
        assert_eq!(table.data.len(), 12);
    }

    #[test]
    fn test_from_rows_inconsistent() {
        let err = Table::<i32>::from_rows(vec![vec![1, 2], vec![3], vec![4, 5, 6]]).unwrap_err();
        assert_eq!(
            err,
            Error::InconsistentLengths {
                axis: Axis::Row,
                min: 1,
                max: 3
            }
        );
    }

    #[test]
    fn test_from_columns() {
        let table: Table<i32> =
            Table::from_columns(vec![vec![1, 4, 7, 10], vec![2, 5, 8, 11], vec![3, 6, 9, 12]])
                .unwrap();
        assert_eq!(table, grid());
    }

    #[test]
    fn test_from_columns_inconsistent() {
        let err = Table::<i32>::from_columns(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
            vec![10, 11, 12, 13],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            Error::InconsistentLengths {
                axis: Axis::Column,
                min: 3,
                max: 4
            }
        );
        assert_eq!(
            err.to_string(),
            "columns have inconsistent lengths (min: 3, max: 4)"
        );
    }

    #[test]
    fn test_empty() {
        let table: Table<i32> = Table::empty();
        assert!(table.is_empty());
        assert_eq!(table.dimensions(), (0, 0));
        assert!(table.tags().is_empty());
        assert_eq!(Table::<i32>::from_rows(Vec::new()).unwrap(), table);
        assert!(table.element_at(0, 0).is_err());
    }

    #[test]
    fn test_element_at_bounds() {
        let table = grid();
        assert_eq!(
            table.element_at(4, 0).unwrap_err(),
            Error::row_out_of_bounds(4, 4)
        );
        assert_eq!(
            table.element_at(0, 3).unwrap_err(),
            Error::column_out_of_bounds(3, 3)
        );
    }

    #[test]
    fn test_slices() {
        let table = grid();
        assert_eq!(table.row_slice(1).unwrap(), vec![4, 5, 6]);
        assert_eq!(table.column_slice(2).unwrap(), vec![3, 6, 9, 12]);
        assert_eq!(table.row(3).unwrap(), &[10, 11, 12]);
        assert!(table.row_slice(4).is_err());
        assert!(table.column_slice(3).is_err());

        let mut row = table.row_slice(0).unwrap();
        row[0] = 100;
        assert_eq!(*table.element_at(0, 0).unwrap(), 1);

        assert_eq!(table.row_slices()[2], vec![7, 8, 9]);
        assert_eq!(table.column_slices()[0], vec![1, 4, 7, 10]);
        assert_eq!(table.column_slices().len(), 3);
    }

    #[test]
    fn test_row_slices_without_columns() {
        let table: Table<i32> = Table::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(table.dimensions(), (2, 0));
        assert_eq!(table.row_slices(), vec![Vec::<i32>::new(), Vec::new()]);
        assert!(table.column_slices().is_empty());
    }

    #[test]
    fn test_equals() {
        let mut a = grid();
        let b = grid();
        assert!(a.equals(&b, &CompareOptions::default()));

        a.tag_row(0, "row-tag", "x".to_string()).unwrap();
        assert_eq!(a, b);
        assert!(!a.equals(&b, &CompareOptions::with_tags()));
        assert!(a.equals(&a.copy(), &CompareOptions::data_only().include_tags(true)));

        let reshaped: Table<i32> =
            Table::from_rows(vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9, 10, 11, 12]]).unwrap();
        assert_ne!(reshaped, b);
    }

    #[test]
    fn test_display() {
        let table: Table<i32> = Table::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(table.to_string(), "1\t2\n3\t4\n");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::tag::Tag;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_table_with_tags() {
        let mut table: Table<i32> = Table::from_rows(vec![vec![1, 2]]).unwrap();
        table.tag_cell(0, 1, "unit", "kg".to_string()).unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rows": 1,
                "columns": 2,
                "data": [1, 2],
                "tags": [
                    { "name": "unit", "value": "kg", "coordinate": { "Cell": { "row": 0, "column": 1 } } }
                ]
            })
        );
    }

    #[test]
    fn test_tag_round_trip() {
        let tag = Tag::row(3, "status", "open".to_string());
        let json = serde_json::to_string(&tag).unwrap();
        let back: Tag<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
        assert_eq!(back.coordinate(), Coordinate::Row(3));
    }
}
