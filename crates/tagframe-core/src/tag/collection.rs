//! Tag collection
//!
//! A [`TagCollection`] is an ordered set of tags in which no two tags share the same
//! name and coordinate. Operations that change the collection return a new collection
//! and leave the receiver untouched.

use std::fmt;

use ahash::AHashMap;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::entry::{Tag, TagId};
use super::remap::StructuralEdit;
use crate::coordinate::{Coordinate, Region};
use crate::error::{Error, Result};

/// An ordered set of tags, unique by `(name, coordinate)`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagCollection<T> {
    tags: Vec<Tag<T>>,
}

impl<T> TagCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Build a collection from tags, keeping the last tag supplied for any duplicate key
    ///
    /// A replaced duplicate keeps the position of the first tag with that key.
    ///
    /// # Examples
    /// ```
    /// use tagframe_core::{Tag, TagCollection};
    ///
    /// let tags = TagCollection::with(vec![
    ///     Tag::row(0, "status", "draft"),
    ///     Tag::column(1, "unit", "kg"),
    ///     Tag::row(0, "status", "final"),
    /// ]);
    /// assert_eq!(tags.len(), 2);
    /// assert_eq!(*tags.iter().next().unwrap().value(), "final");
    /// ```
    pub fn with(tags: impl IntoIterator<Item = Tag<T>>) -> Self {
        let mut index: AHashMap<(String, Coordinate), usize> = AHashMap::new();
        let mut unique: Vec<Tag<T>> = Vec::new();

        for tag in tags {
            let key = (tag.name().to_string(), tag.coordinate());
            match index.get(&key) {
                Some(&i) => unique[i] = tag,
                None => {
                    index.insert(key, unique.len());
                    unique.push(tag);
                }
            }
        }

        Self { tags: unique }
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if the collection holds no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over the tags in collection order
    pub fn iter(&self) -> std::slice::Iter<'_, Tag<T>> {
        self.tags.iter()
    }

    /// Get a tag by id
    pub fn get(&self, id: &TagId) -> Option<&Tag<T>> {
        self.tags.iter().find(|t| &t.id() == id)
    }

    /// Check if any tag has the given name and coordinate
    pub fn has_tag_for(&self, name: &str, coordinate: Coordinate) -> bool {
        self.keyed(name, coordinate).next().is_some()
    }

    /// Check if exactly one tag has the given name and coordinate
    pub fn has_unique_tag_for(&self, name: &str, coordinate: Coordinate) -> bool {
        self.keyed(name, coordinate).count() == 1
    }

    /// Check if any tag has the given name, whatever its coordinate
    pub fn has_tag_with_name(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name() == name)
    }

    /// All tags bound to exactly this coordinate
    pub fn tags_for_coordinate(&self, coordinate: Coordinate) -> Vec<&Tag<T>> {
        self.tags
            .iter()
            .filter(|t| t.coordinate() == coordinate)
            .collect()
    }

    /// The single tag with the given name and coordinate
    pub fn unique_tag_for(&self, name: &str, coordinate: Coordinate) -> Result<&Tag<T>> {
        let position = self.unique_position(name, coordinate)?;
        Ok(&self.tags[position])
    }

    /// All tags that apply to the cell at `(row, column)`
    ///
    /// Row tags apply to every cell of their row, column tags to every cell of their column
    /// and cell tags to their own cell only.
    pub fn tags_for(&self, row: usize, column: usize) -> Vec<&Tag<T>> {
        self.tags
            .iter()
            .filter(|t| t.coordinate().covers(row, column))
            .collect()
    }

    /// Insert a tag, replacing the existing tag with the same key in place
    pub(crate) fn upsert(&mut self, tag: Tag<T>) {
        match self
            .tags
            .iter()
            .position(|t| t.is_keyed(tag.name(), tag.coordinate()))
        {
            Some(i) => self.tags[i] = tag,
            None => self.tags.push(tag),
        }
    }

    /// Remove and return the tag with the given id
    pub(crate) fn take(&mut self, id: &TagId) -> Result<Tag<T>> {
        let position = self
            .tags
            .iter()
            .position(|t| &t.id() == id)
            .ok_or_else(|| Error::UnknownTagId(id.to_string()))?;
        Ok(self.tags.remove(position))
    }

    /// Move every tag across a structural edit, dropping tags whose position disappeared
    pub(crate) fn remap_in_place(&mut self, edit: &StructuralEdit) {
        let before = self.tags.len();
        let tags = std::mem::take(&mut self.tags);
        self.tags = tags
            .into_iter()
            .filter_map(|tag| {
                let coordinate = edit.apply(tag.coordinate())?;
                Some(tag.relocated(coordinate))
            })
            .collect();

        if edit.is_lossy() {
            tracing::trace!(
                "Remapped {} tags across {:?}, dropped {}",
                self.tags.len(),
                edit,
                before - self.tags.len()
            );
        }
    }

    fn keyed<'a>(
        &'a self,
        name: &'a str,
        coordinate: Coordinate,
    ) -> impl Iterator<Item = &'a Tag<T>> + 'a {
        self.tags.iter().filter(move |t| t.is_keyed(name, coordinate))
    }

    fn unique_position(&self, name: &str, coordinate: Coordinate) -> Result<usize> {
        let mut matches = self
            .tags
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_keyed(name, coordinate))
            .map(|(i, _)| i);

        let key = || TagId::for_key(name, coordinate).to_string();
        match (matches.next(), matches.count()) {
            (None, _) => Err(Error::TagNotFound(key())),
            (Some(i), 0) => Ok(i),
            (Some(_), rest) => Err(Error::AmbiguousTag {
                key: key(),
                count: rest + 1,
            }),
        }
    }
}

impl<T: Clone> TagCollection<T> {
    /// Add a tag
    ///
    /// Fails with [`Error::DuplicateTag`] if a tag with the same name and coordinate exists.
    pub fn add(&self, tag: Tag<T>) -> Result<Self> {
        if self.has_tag_for(tag.name(), tag.coordinate()) {
            return Err(Error::DuplicateTag(tag.id().to_string()));
        }
        let mut next = self.clone();
        next.tags.push(tag);
        Ok(next)
    }

    /// Replace the tag with the same name and coordinate, keeping its position
    ///
    /// Fails unless exactly one tag matches.
    pub fn replace(&self, tag: Tag<T>) -> Result<Self> {
        let position = self.unique_position(tag.name(), tag.coordinate())?;
        let mut next = self.clone();
        next.tags[position] = tag;
        Ok(next)
    }

    /// Add the tag, or replace the existing tag with the same name and coordinate
    pub fn add_or_replace(&self, tag: Tag<T>) -> Self {
        let mut next = self.clone();
        next.upsert(tag);
        next
    }

    /// Remove the tag with the given id
    pub fn remove(&self, id: &TagId) -> Result<Self> {
        let mut next = self.clone();
        next.take(id)?;
        Ok(next)
    }

    /// Keep only the tags matching the predicate
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Tag<T>) -> bool,
    {
        Self {
            tags: self.tags.iter().filter(|t| predicate(*t)).cloned().collect(),
        }
    }

    /// The collection as it reads after a structural edit
    pub fn remap(&self, edit: &StructuralEdit) -> Self {
        let mut next = self.clone();
        next.remap_in_place(edit);
        next
    }

    /// Row tags become column tags and vice versa; cell tags swap their indices
    pub fn transposed(&self) -> Self {
        self.remap(&StructuralEdit::Transpose)
    }

    /// Shift tags at or below row `at` down by one
    pub fn with_row_inserted(&self, at: usize) -> Self {
        self.remap(&StructuralEdit::InsertRow(at))
    }

    /// Drop tags bound to row `at` and shift later rows up by one
    pub fn with_row_removed(&self, at: usize) -> Self {
        self.remap(&StructuralEdit::RemoveRow(at))
    }

    /// Shift tags at or right of column `at` by one
    pub fn with_column_inserted(&self, at: usize) -> Self {
        self.remap(&StructuralEdit::InsertColumn(at))
    }

    /// Drop tags bound to column `at` and shift later columns left by one
    pub fn with_column_removed(&self, at: usize) -> Self {
        self.remap(&StructuralEdit::RemoveColumn(at))
    }

    /// Keep tags inside the region, translated so the region's top-left is `(0,0)`
    pub fn subset(&self, region: Region) -> Self {
        self.remap(&StructuralEdit::Subset(region))
    }
}

impl<T> Default for TagCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Tag<T>> for TagCollection<T> {
    fn from_iter<I: IntoIterator<Item = Tag<T>>>(iter: I) -> Self {
        Self::with(iter)
    }
}

impl<T> IntoIterator for TagCollection<T> {
    type Item = Tag<T>;
    type IntoIter = std::vec::IntoIter<Tag<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TagCollection<T> {
    type Item = &'a Tag<T>;
    type IntoIter = std::slice::Iter<'a, Tag<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Set equality: same tags, in any order
impl<T: fmt::Display> PartialEq for TagCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.tags.iter().all(|t| other.tags.contains(t))
    }
}

impl<T: fmt::Display> Eq for TagCollection<T> {}
