//! Tag and tag identity

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Identity of a tag, derived from its name and coordinate
///
/// The same name and coordinate always produce the same id. Ids are formatted as
/// `name@coordinate`, e.g. `status@(2,*)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagId(String);

impl TagId {
    /// Build the id for a name/coordinate pair
    pub fn for_key(name: &str, coordinate: Coordinate) -> Self {
        TagId(format!("{}@{}", name, coordinate))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named value attached to a row, column or cell
///
/// Tags compare equal when their names, coordinates and the string forms of their
/// values are equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag<T> {
    name: String,
    value: T,
    coordinate: Coordinate,
}

impl<T> Tag<T> {
    /// Create a new tag
    pub fn new(name: impl Into<String>, value: T, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            value,
            coordinate,
        }
    }

    /// Create a tag bound to a whole row
    pub fn row(row: usize, name: impl Into<String>, value: T) -> Self {
        Self::new(name, value, Coordinate::Row(row))
    }

    /// Create a tag bound to a whole column
    pub fn column(column: usize, name: impl Into<String>, value: T) -> Self {
        Self::new(name, value, Coordinate::Column(column))
    }

    /// Create a tag bound to a single cell
    pub fn cell(row: usize, column: usize, name: impl Into<String>, value: T) -> Self {
        Self::new(name, value, Coordinate::cell(row, column))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Get the tag's id
    pub fn id(&self) -> TagId {
        TagId::for_key(&self.name, self.coordinate)
    }

    /// Check whether this tag has the given name and coordinate
    pub fn is_keyed(&self, name: &str, coordinate: Coordinate) -> bool {
        self.name == name && self.coordinate == coordinate
    }

    /// The same tag moved to another coordinate
    pub(crate) fn relocated(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = coordinate;
        self
    }
}

impl<T: fmt::Display> PartialEq for Tag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.coordinate == other.coordinate
            && self.value.to_string() == other.value.to_string()
    }
}

impl<T: fmt::Display> Eq for Tag<T> {}

impl<T: fmt::Display> fmt::Display for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}@{}", self.name, self.value, self.coordinate)
    }
}
