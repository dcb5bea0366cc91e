//! Tag-related types
//!
//! This module contains:
//! - [`Tag`] - A named value bound to a [`Coordinate`](crate::Coordinate)
//! - [`TagId`] - The deterministic identity of a tag
//! - [`TagCollection`] - A set of tags, unique by name and coordinate
//! - [`StructuralEdit`] - The table edits tags are remapped across

mod collection;
mod entry;
mod remap;

pub use collection::TagCollection;
pub use entry::{Tag, TagId};
pub use remap::StructuralEdit;
