//! Collecting test headers from the selftests directory.

use std::path::Path;

use deadcode_core::{Error, Result};

/// Test header file names, sorted ascending by ordinal comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestFileSet {
    names: Vec<String>,
}

impl TestFileSet {
    /// Build a set from arbitrary names; they are sorted on the way in.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        Self { names }
    }

    /// The sorted file names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// List regular files directly inside `dir` whose names end with `suffix`.
///
/// Directories are skipped even when their name matches. Names that are
/// not valid UTF-8 cannot be written to the index and are skipped too.
pub fn collect(dir: &Path, suffix: &str) -> Result<TestFileSet> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::read(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::read(dir, e))?;
        let path = entry.path();

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!(name = ?raw, "skipping non UTF-8 file name");
                continue;
            }
        };

        if name.ends_with(suffix) && path.is_file() {
            names.push(name);
        }
    }

    let set = TestFileSet::new(names);
    tracing::debug!(dir = %dir.display(), count = set.len(), "collected test headers");
    Ok(set)
}
