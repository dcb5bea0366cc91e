//! Structural edits and element mapping
//!
//! Every edit is implemented once, in place, on `&mut Table`. The persistent variants
//! clone the table and run the in-place edit on the clone.

use super::Table;
use crate::coordinate::{Axis, Position, Region};
use crate::error::{Error, Result};
use crate::tag::StructuralEdit;

impl<V, T> Table<V, T> {
    /// Set the element at `(row, column)` in place
    pub fn set_element_in_place_at(
        &mut self,
        row: usize,
        column: usize,
        value: V,
    ) -> Result<&mut Self> {
        self.check_cell(row, column)?;
        let offset = self.offset(row, column);
        self.data[offset] = value;
        Ok(self)
    }

    /// Insert a row before index `at` in place
    ///
    /// `at` may equal the row count, which appends. Tags on rows at or after `at` move down.
    pub fn insert_row_in_place_before(&mut self, at: usize, row: Vec<V>) -> Result<&mut Self> {
        if at > self.rows {
            return Err(Error::row_out_of_bounds(at, self.rows));
        }
        self.fit_line(Axis::Row, row.len())?;

        let offset = at * self.columns;
        self.data.splice(offset..offset, row);
        self.rows += 1;
        self.tags.remap_in_place(&StructuralEdit::InsertRow(at));

        tracing::debug!(
            "Inserted row before {at}, table is now {}x{}",
            self.rows,
            self.columns
        );
        Ok(self)
    }

    /// Append a row in place
    pub fn push_row_in_place(&mut self, row: Vec<V>) -> Result<&mut Self> {
        self.fit_line(Axis::Row, row.len())?;
        self.data.extend(row);
        self.rows += 1;

        tracing::debug!("Pushed row, table is now {}x{}", self.rows, self.columns);
        Ok(self)
    }

    /// Insert a column before index `at` in place
    ///
    /// `at` may equal the column count, which appends. Tags on columns at or after `at`
    /// move right.
    pub fn insert_column_in_place_before(
        &mut self,
        at: usize,
        column: Vec<V>,
    ) -> Result<&mut Self> {
        if at > self.columns {
            return Err(Error::column_out_of_bounds(at, self.columns));
        }
        self.fit_line(Axis::Column, column.len())?;
        self.splice_column(at, column);
        self.tags.remap_in_place(&StructuralEdit::InsertColumn(at));

        tracing::debug!(
            "Inserted column before {at}, table is now {}x{}",
            self.rows,
            self.columns
        );
        Ok(self)
    }

    /// Append a column in place
    pub fn push_column_in_place(&mut self, column: Vec<V>) -> Result<&mut Self> {
        self.fit_line(Axis::Column, column.len())?;
        self.splice_column(self.columns, column);

        tracing::debug!("Pushed column, table is now {}x{}", self.rows, self.columns);
        Ok(self)
    }

    /// Delete the row at index `at` in place, dropping the tags bound to it
    pub fn delete_row_in_place_at(&mut self, at: usize) -> Result<&mut Self> {
        self.check_row(at)?;

        let offset = at * self.columns;
        self.data.drain(offset..offset + self.columns);
        self.rows -= 1;
        self.tags.remap_in_place(&StructuralEdit::RemoveRow(at));

        tracing::debug!(
            "Deleted row {at}, table is now {}x{}",
            self.rows,
            self.columns
        );
        Ok(self)
    }

    /// Delete the column at index `at` in place, dropping the tags bound to it
    pub fn delete_column_in_place_at(&mut self, at: usize) -> Result<&mut Self> {
        self.check_column(at)?;

        let columns = self.columns;
        let mut i = 0;
        self.data.retain(|_| {
            let keep = i % columns != at;
            i += 1;
            keep
        });
        self.columns -= 1;
        self.tags.remap_in_place(&StructuralEdit::RemoveColumn(at));

        tracing::debug!(
            "Deleted column {at}, table is now {}x{}",
            self.rows,
            self.columns
        );
        Ok(self)
    }

    /// Swap rows and columns in place
    pub fn transpose_in_place(&mut self) -> &mut Self {
        let (rows, columns) = (self.rows, self.columns);
        // Element (r, c) moves to (c, r) of the transposed table
        let mut indexed: Vec<(usize, V)> = std::mem::take(&mut self.data)
            .into_iter()
            .enumerate()
            .map(|(i, value)| ((i % columns) * rows + i / columns, value))
            .collect();
        indexed.sort_unstable_by_key(|(target, _)| *target);

        self.data = indexed.into_iter().map(|(_, value)| value).collect();
        self.rows = columns;
        self.columns = rows;
        self.tags.remap_in_place(&StructuralEdit::Transpose);

        tracing::debug!("Transposed table to {}x{}", self.rows, self.columns);
        self
    }

    /// Replace every element with `f(value, row, column)` in place
    pub fn map_elements_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&V, usize, usize) -> V,
    {
        let columns = self.columns;
        for (i, value) in self.data.iter_mut().enumerate() {
            *value = f(value, i / columns, i % columns);
        }
        self
    }

    /// Replace every element of row `at` with `f(value, column)` in place
    pub fn map_row_in_place<F>(&mut self, at: usize, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&V, usize) -> V,
    {
        self.check_row(at)?;
        let offset = at * self.columns;
        for (column, value) in self.data[offset..offset + self.columns]
            .iter_mut()
            .enumerate()
        {
            *value = f(value, column);
        }
        Ok(self)
    }

    /// Replace every element of column `at` with `f(value, row)` in place
    pub fn map_column_in_place<F>(&mut self, at: usize, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&V, usize) -> V,
    {
        self.check_column(at)?;
        for row in 0..self.rows {
            let offset = self.offset(row, at);
            self.data[offset] = f(&self.data[offset], row);
        }
        Ok(self)
    }

    /// A table of `f(value, row, column)` for every element, carrying the tags over
    ///
    /// The element type may change; the shape and tags do not.
    pub fn map_elements<U, F>(&self, mut f: F) -> Table<U, T>
    where
        F: FnMut(&V, usize, usize) -> U,
        T: Clone,
    {
        Table {
            rows: self.rows,
            columns: self.columns,
            data: self
                .cells()
                .map(|cell| f(cell.value, cell.row, cell.column))
                .collect(),
            tags: self.tags.clone(),
        }
    }

    /// Check an incoming row or column length; a table with no rows and no columns takes
    /// its other dimension from the first line it receives
    fn fit_line(&mut self, axis: Axis, len: usize) -> Result<()> {
        if self.rows == 0 && self.columns == 0 {
            match axis {
                Axis::Row => self.columns = len,
                Axis::Column => self.rows = len,
            }
            return Ok(());
        }

        let expected = match axis {
            Axis::Row => self.columns,
            Axis::Column => self.rows,
        };
        if len != expected {
            return Err(Error::DimensionMismatch {
                axis,
                expected,
                actual: len,
            });
        }
        Ok(())
    }

    /// Weave `column` into the data at column index `at`; `column.len()` must equal the row count
    fn splice_column(&mut self, at: usize, column: Vec<V>) {
        let tail = self.columns - at;
        let mut old = std::mem::take(&mut self.data).into_iter();
        let mut data = Vec::with_capacity(self.rows * (self.columns + 1));

        for value in column {
            data.extend(old.by_ref().take(at));
            data.push(value);
            data.extend(old.by_ref().take(tail));
        }

        self.data = data;
        self.columns += 1;
    }
}

impl<V: Clone, T: Clone> Table<V, T> {
    /// A copy with the element at `(row, column)` replaced
    pub fn set_element_at(&self, row: usize, column: usize, value: V) -> Result<Self> {
        self.edited(|t| t.set_element_in_place_at(row, column, value))
    }

    /// A copy with `row` inserted before index `at`
    pub fn insert_row_before(&self, at: usize, row: Vec<V>) -> Result<Self> {
        self.edited(|t| t.insert_row_in_place_before(at, row))
    }

    /// A copy with `row` appended
    pub fn push_row(&self, row: Vec<V>) -> Result<Self> {
        self.edited(|t| t.push_row_in_place(row))
    }

    /// A copy with `column` inserted before index `at`
    pub fn insert_column_before(&self, at: usize, column: Vec<V>) -> Result<Self> {
        self.edited(|t| t.insert_column_in_place_before(at, column))
    }

    /// A copy with `column` appended
    pub fn push_column(&self, column: Vec<V>) -> Result<Self> {
        self.edited(|t| t.push_column_in_place(column))
    }

    /// A copy without the row at index `at`
    pub fn delete_row_at(&self, at: usize) -> Result<Self> {
        self.edited(|t| t.delete_row_in_place_at(at))
    }

    /// A copy without the column at index `at`
    pub fn delete_column_at(&self, at: usize) -> Result<Self> {
        self.edited(|t| t.delete_column_in_place_at(at))
    }

    /// A transposed copy: row `i` becomes column `i`, and tags follow
    pub fn transpose(&self) -> Self {
        let (rows, columns) = (self.rows, self.columns);
        Self {
            rows: columns,
            columns: rows,
            // Element k of the result is (k / rows, k % rows), i.e. source (k % rows, k / rows)
            data: (0..self.data.len())
                .map(|k| self.data[(k % rows) * columns + k / rows].clone())
                .collect(),
            tags: self.tags.transposed(),
        }
    }

    /// A copy of the inclusive rectangle between two corners
    ///
    /// Both corners must lie inside the table. They need not be given as top-left and
    /// bottom-right: the rectangle is normalized, so swapped corners select the same cells.
    /// Tags outside the rectangle are dropped and
    /// the rest are translated so the rectangle's top-left is `(0, 0)`.
    ///
    /// # Examples
    /// ```
    /// use tagframe_core::Table;
    ///
    /// let table: Table<i32> =
    ///     Table::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    /// let sub = table.sub_frame((1, 1), (2, 2)).unwrap();
    /// assert_eq!(sub.row_slices(), vec![vec![5, 6], vec![8, 9]]);
    /// ```
    pub fn sub_frame(&self, start: impl Into<Position>, end: impl Into<Position>) -> Result<Self> {
        let (start, end) = (start.into(), end.into());
        self.check_cell(start.row, start.column)?;
        self.check_cell(end.row, end.column)?;

        let region = Region::new(start, end);
        let data = region
            .positions()
            .map(|pos| self.data[self.offset(pos.row, pos.column)].clone())
            .collect();

        tracing::debug!("Sub-framed {region} out of {}x{}", self.rows, self.columns);
        Ok(Self {
            rows: region.row_count(),
            columns: region.column_count(),
            data,
            tags: self.tags.subset(region),
        })
    }

    /// A copy with row `at` replaced by `f(value, column)`
    pub fn map_row<F>(&self, at: usize, f: F) -> Result<Self>
    where
        F: FnMut(&V, usize) -> V,
    {
        self.edited(|t| t.map_row_in_place(at, f))
    }

    /// A copy with column `at` replaced by `f(value, row)`
    pub fn map_column<F>(&self, at: usize, f: F) -> Result<Self>
    where
        F: FnMut(&V, usize) -> V,
    {
        self.edited(|t| t.map_column_in_place(at, f))
    }

    /// Run an in-place edit on a copy of the table
    fn edited<F>(&self, edit: F) -> Result<Self>
    where
        F: FnOnce(&mut Self) -> Result<&mut Self>,
    {
        let mut next = self.clone();
        edit(&mut next)?;
        Ok(next)
    }
}
