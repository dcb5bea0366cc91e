//! # tagframe-core
//!
//! Core data structures for the tagframe library.
//!
//! This crate provides the fundamental types used throughout tagframe:
//! - [`Coordinate`], [`Position`] and [`Region`] - Row, column and cell addressing
//! - [`Tag`] and [`TagCollection`] - Named metadata bound to coordinates
//! - [`Table`] - The row-major table with structural edits that keep its tags anchored
//!
//! ## Example
//!
//! ```rust
//! use tagframe_core::{Coordinate, Table};
//!
//! let mut table: Table<i32> = Table::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! table.tag_row(1, "status", "pending".to_string()).unwrap();
//!
//! // Inserting a row above shifts the tag along with its row
//! let table = table.insert_row_before(0, vec![7, 8, 9]).unwrap();
//! assert!(table.has_row_tag_for(2));
//! assert!(!table.has_row_tag_for(1));
//!
//! // Transposing turns row tags into column tags
//! let table = table.transpose();
//! assert_eq!(table.column_tags_for(2)[0].coordinate(), Coordinate::Column(2));
//! ```

pub mod coordinate;
pub mod error;
pub mod options;
pub mod tag;
pub mod table;

// Re-exports for convenience
pub use coordinate::{Axis, Coordinate, Position, Region};
pub use error::{Error, Result};
pub use options::CompareOptions;
pub use tag::{StructuralEdit, Tag, TagCollection, TagId};
pub use table::{CellRef, Cells, Table};
