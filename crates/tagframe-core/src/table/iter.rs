//! Cell iteration

/// An element together with its position
#[derive(Debug, PartialEq)]
pub struct CellRef<'a, V> {
    /// The element
    pub value: &'a V,
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl<V> Clone for CellRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for CellRef<'_, V> {}

/// Row-major iterator over a table's elements
pub struct Cells<'a, V> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, V>>,
    columns: usize,
}

impl<'a, V> Cells<'a, V> {
    pub(super) fn new(data: &'a [V], columns: usize) -> Self {
        Self {
            inner: data.iter().enumerate(),
            columns,
        }
    }
}

impl<'a, V> Iterator for Cells<'a, V> {
    type Item = CellRef<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        // Non-empty data implies at least one column
        let (i, value) = self.inner.next()?;
        Some(CellRef {
            value,
            row: i / self.columns,
            column: i % self.columns,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Cells<'_, V> {}
