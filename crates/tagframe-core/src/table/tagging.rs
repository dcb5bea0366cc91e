//! Tagging rows, columns and cells
//!
//! Tagging changes metadata only, so these operations always work in place on the table
//! they are called on. Queries with indices outside the table report no tags instead of
//! failing.

use std::fmt;

use super::{CellRef, Table};
use crate::coordinate::{Coordinate, Position, Region};
use crate::error::Result;
use crate::tag::{Tag, TagCollection, TagId};

impl<V, T> Table<V, T> {
    /// Tag a whole row, replacing any tag with the same name on that row
    pub fn tag_row(&mut self, row: usize, name: impl Into<String>, value: T) -> Result<&mut Self> {
        self.check_row(row)?;
        self.tags.upsert(Tag::row(row, name, value));
        Ok(self)
    }

    /// Tag a whole column, replacing any tag with the same name on that column
    pub fn tag_column(
        &mut self,
        column: usize,
        name: impl Into<String>,
        value: T,
    ) -> Result<&mut Self> {
        self.check_column(column)?;
        self.tags.upsert(Tag::column(column, name, value));
        Ok(self)
    }

    /// Tag a single cell, replacing any tag with the same name on that cell
    pub fn tag_cell(
        &mut self,
        row: usize,
        column: usize,
        name: impl Into<String>,
        value: T,
    ) -> Result<&mut Self> {
        self.check_cell(row, column)?;
        self.tags.upsert(Tag::cell(row, column, name, value));
        Ok(self)
    }

    /// Remove the tag with the given id
    pub fn remove_tag(&mut self, id: &TagId) -> Result<&mut Self> {
        self.tags.take(id)?;
        Ok(self)
    }

    /// Tags bound to the whole row
    pub fn row_tags_for(&self, row: usize) -> Vec<&Tag<T>> {
        self.tags.tags_for_coordinate(Coordinate::Row(row))
    }

    /// Tags bound to the whole column
    pub fn column_tags_for(&self, column: usize) -> Vec<&Tag<T>> {
        self.tags.tags_for_coordinate(Coordinate::Column(column))
    }

    /// Tags bound to exactly this cell
    pub fn cell_tags_for(&self, row: usize, column: usize) -> Vec<&Tag<T>> {
        self.tags.tags_for_coordinate(Coordinate::cell(row, column))
    }

    /// Every tag that applies to the cell: its row's, its column's and its own
    pub fn tags_for(&self, row: usize, column: usize) -> Vec<&Tag<T>> {
        if !self.contains_cell(row, column) {
            return Vec::new();
        }
        self.tags.tags_for(row, column)
    }

    pub fn has_row_tag_for(&self, row: usize) -> bool {
        !self.row_tags_for(row).is_empty()
    }

    pub fn has_column_tag_for(&self, column: usize) -> bool {
        !self.column_tags_for(column).is_empty()
    }

    pub fn has_cell_tag_for(&self, row: usize, column: usize) -> bool {
        !self.cell_tags_for(row, column).is_empty()
    }

    /// Check if any row, column or cell tag applies to the cell
    pub fn has_tag_for(&self, row: usize, column: usize) -> bool {
        !self.tags_for(row, column).is_empty()
    }

    /// Every cell carrying a tag equal to `tag`
    ///
    /// A row tag selects the cells of its row, a column tag the cells of its column and a
    /// cell tag its own cell; only cells where an equal tag actually applies are returned.
    /// Fails if the tag's coordinate lies outside the table.
    pub fn cells_tagged_with(&self, tag: &Tag<T>) -> Result<Vec<CellRef<'_, V>>>
    where
        T: fmt::Display,
    {
        let candidates = match tag.coordinate() {
            Coordinate::Row(row) => {
                self.check_row(row)?;
                self.columns
                    .checked_sub(1)
                    .map(|last| Region::from_indices(row, 0, row, last))
            }
            Coordinate::Column(column) => {
                self.check_column(column)?;
                self.rows
                    .checked_sub(1)
                    .map(|last| Region::from_indices(0, column, last, column))
            }
            Coordinate::Cell { row, column } => {
                self.check_cell(row, column)?;
                Some(Region::single(Position::new(row, column)))
            }
        };

        let Some(region) = candidates else {
            return Ok(Vec::new());
        };

        Ok(region
            .positions()
            .filter(|pos| {
                self.tags
                    .tags_for(pos.row, pos.column)
                    .into_iter()
                    .any(|t| t == tag)
            })
            .map(|pos| CellRef {
                value: &self.data[self.offset(pos.row, pos.column)],
                row: pos.row,
                column: pos.column,
            })
            .collect())
    }
}

impl<V, T: Clone> Table<V, T> {
    /// Tags matching the predicate
    pub fn filter_tags<P>(&self, predicate: P) -> TagCollection<T>
    where
        P: FnMut(&Tag<T>) -> bool,
    {
        self.tags.filter(predicate)
    }
}
