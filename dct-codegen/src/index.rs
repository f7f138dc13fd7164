//! The index of test headers recorded by the last generation.

use std::path::Path;

use deadcode_core::{Result, read_lines};

use crate::TestFileSet;

/// File names as recorded in the index, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: Vec<String>,
}

impl Index {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Load the index at `path`.
    ///
    /// Returns `None` when there is no regular file at `path`, which forces
    /// a regeneration.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let index = read_lines(path)?.map(Self::new);
        match &index {
            Some(index) => tracing::debug!(path = %path.display(), entries = index.len(), "read index"),
            None => tracing::debug!(path = %path.display(), "no index"),
        }
        Ok(index)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the index records exactly `set`, element by element.
    pub fn matches(&self, set: &TestFileSet) -> bool {
        self.entries == set.names()
    }
}
