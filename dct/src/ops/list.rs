//! List operation - show the collected selftests.

use deadcode_codegen::Generator;
use deadcode_core::include_path;
use eyre::{Context, Result};

use crate::reports::{ListEntry, ListReport};

/// Execute the list operation.
///
/// A selftests directory outside the marker is reported as a warning, so
/// the headers can still be inspected.
pub fn list(generator: &Generator<'_>) -> Result<ListReport> {
    let scan = generator.scan().wrap_err("Failed to scan selftests")?;

    let (include_base, warning) = match generator.include_base() {
        Ok(base) => (Some(base), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let entries = scan
        .test_files
        .iter()
        .map(|name| ListEntry {
            name: name.to_string(),
            include: include_base.as_deref().map(|base| include_path(base, name)),
        })
        .collect();

    Ok(ListReport {
        selftests_dir: generator.selftests_dir(),
        warning,
        entries,
    })
}
