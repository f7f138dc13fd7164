//! Check command report data structures.

use std::path::PathBuf;

use deadcode_codegen::{Changes, Reason};

use super::{
    generate::render_changes,
    output::{Output, Report},
};

/// Report data from comparing the selftests with the index.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the index file.
    pub index_path: PathBuf,
    /// Number of test headers found.
    pub test_count: usize,
    /// Headers added or removed since the last index.
    pub changes: Changes,
    /// Why a regeneration is needed, if it is.
    pub reason: Option<Reason>,
}

impl CheckReport {
    /// Whether a generate run would write files.
    pub fn is_stale(&self) -> bool {
        self.reason.is_some()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        match self.reason {
            None => out.preformatted(&format!(
                "✓ {} is up to date ({} selftests)",
                self.index_path.display(),
                self.test_count
            )),
            Some(reason) => {
                out.warning(&format!(
                    "{} is stale: {}",
                    self.index_path.display(),
                    reason
                ));
                render_changes(out, &self.changes);
            }
        }
    }
}
