//! Prelude module - common imports for tagframe users
//!
//! ```rust
//! use tagframe::prelude::*;
//! ```

pub use crate::{
    CompareOptions,
    Coordinate,
    // Error types
    Error,
    Position,
    Result,

    // Main types
    Table,
    Tag,
    TagCollection,
    TagId,
};
