use std::path::{Path, PathBuf};

use deadcode_core::GeneratedFile;

use crate::TestFileSet;

/// The index file: one test header name per line, each newline-terminated.
pub struct IndexFile<'a> {
    path: PathBuf,
    test_files: &'a TestFileSet,
}

impl<'a> IndexFile<'a> {
    /// `path` is relative to the base directory.
    pub fn new(path: impl Into<PathBuf>, test_files: &'a TestFileSet) -> Self {
        Self {
            path: path.into(),
            test_files,
        }
    }
}

impl GeneratedFile for IndexFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.test_files
            .iter()
            .map(|name| format!("{}\n", name))
            .collect()
    }
}
