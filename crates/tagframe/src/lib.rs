//! # tagframe
//!
//! A Rust library for two-dimensional tables whose rows, columns and cells carry named tags.
//!
//! Tables are persistent by default: inserting, deleting, transposing or sub-framing returns
//! a new table and leaves the original alone. Each edit also has an `_in_place` twin that
//! mutates the table it is called on. Whichever form is used, tags stay attached to the same
//! logical row, column or cell, and tags whose position is deleted are dropped.
//!
//! ## Features
//!
//! - Row-major storage with validated construction from rows or columns
//! - Row and column insertion, deletion and appending
//! - Transpose and rectangular sub-frames
//! - Element, row and column mapping
//! - Row, column and cell tags with uniqueness by name and position
//! - Optional `serde` support
//!
//! ## Example
//!
//! ```rust
//! use tagframe::prelude::*;
//!
//! let mut table: Table<f64> = Table::from_rows(vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//! ])
//! .unwrap();
//!
//! table.tag_column(2, "unit", "kg".to_string()).unwrap();
//! table.tag_cell(1, 0, "note", "estimated".to_string()).unwrap();
//!
//! // Insert a column at the front: the "unit" tag moves with its column
//! let widened = table.insert_column_before(0, vec![0.0, 0.0]).unwrap();
//! assert!(widened.has_column_tag_for(3));
//! assert!(widened.has_cell_tag_for(1, 1));
//!
//! // The original table is untouched
//! assert!(table.has_column_tag_for(2));
//! ```

pub mod prelude;

// Re-export core types
pub use tagframe_core::{
    // Coordinate types
    Axis,
    CellRef,
    Cells,
    // Options
    CompareOptions,
    Coordinate,
    // Error types
    Error,
    Position,
    Region,
    Result,

    StructuralEdit,
    // Main types
    Table,
    Tag,
    TagCollection,
    TagId,
};
