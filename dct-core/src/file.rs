use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, always overwriting, and return where it went
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        tracing::info!(path = %path.display(), "wrote generated file");
        Ok(path)
    }

    /// Render the file without touching the disk
    fn preview(&self, base: &Path) -> PreviewFile {
        PreviewFile {
            path: self.path(base),
            content: self.render(),
        }
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Where the file would be written
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Write `content` to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| Error::write(path, e))
}

/// Read a line-oriented file if `path` is a regular file.
///
/// Returns `None` when nothing usable sits at `path` (missing, or a
/// directory). Trailing `\n` / `\r\n` terminators are stripped.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    Ok(Some(content.lines().map(str::to_string).collect()))
}
