//! Generate command report data structures.

use std::path::PathBuf;

use deadcode_codegen::{Changes, Reason};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory scanned for test headers.
    pub selftests_dir: PathBuf,

    /// Number of test headers found.
    pub test_count: usize,

    /// Headers added or removed since the last index.
    pub changes: Changes,

    /// What happened on disk.
    pub result: GenerationResult,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// The index matched; nothing was written.
    UpToDate,
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Why regeneration happened.
    pub reason: Reason,
    /// Written files, in write order.
    pub written: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Why regeneration would happen.
    pub reason: Reason,
    /// Files that would be written.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::UpToDate => out.preformatted(&format!(
                "Up to date: {} selftests in {}",
                self.test_count,
                self.selftests_dir.display()
            )),
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "Regenerated ({}): {} selftests",
            written.reason, self.test_count
        ));

        render_changes(out, &self.changes);

        out.newline();
        out.section("Written");
        for path in &written.written {
            out.list_item(&path.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be written ({})",
            preview.files.len(),
            preview.reason
        ));
    }
}

/// Render added and removed test headers, if any.
pub(super) fn render_changes(out: &mut dyn Output, changes: &Changes) {
    if !changes.added.is_empty() {
        out.newline();
        out.section("Added");
        for name in &changes.added {
            out.added_item(name);
        }
    }

    if !changes.removed.is_empty() {
        out.newline();
        out.section("Removed");
        for name in &changes.removed {
            out.removed_item(name);
        }
    }
}
