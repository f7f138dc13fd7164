//! Check operation - compare the selftests with the index.

use deadcode_codegen::{Generator, Plan};
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation. Never writes.
pub fn check(generator: &Generator<'_>) -> Result<CheckReport> {
    let scan = generator.scan().wrap_err("Failed to scan selftests")?;

    let reason = match scan.plan() {
        Plan::UpToDate => None,
        Plan::Regenerate(reason) => Some(reason),
    };

    Ok(CheckReport {
        index_path: generator.index_path(),
        test_count: scan.test_files.len(),
        changes: scan.changes(),
        reason,
    })
}
