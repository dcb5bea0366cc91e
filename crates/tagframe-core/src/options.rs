//! Comparison options for tables

/// Options controlling [`Table::equals`](crate::Table::equals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    /// Also require equal tag collections (default: false, data only)
    pub include_tags: bool,
}

impl CompareOptions {
    /// Compare stored data only
    pub fn data_only() -> Self {
        Self::default()
    }

    /// Compare stored data and tags
    pub fn with_tags() -> Self {
        Self { include_tags: true }
    }

    /// Set whether tags take part in the comparison
    pub fn include_tags(mut self, include_tags: bool) -> Self {
        self.include_tags = include_tags;
        self
    }
}
