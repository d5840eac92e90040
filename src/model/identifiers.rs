//! Index newtype for positions in the host's item collection.

use std::fmt;

use serde::Serialize;

/// Position of an item in the logical collection. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the next item index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the previous item index, saturating at 0.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
