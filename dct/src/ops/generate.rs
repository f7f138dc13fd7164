//! Generate operation - rewrite the index and source when stale.

use deadcode_codegen::{GenerateOptions, Generator, Plan};
use eyre::{Context, Result};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Execute the generate operation.
pub fn generate(generator: &Generator<'_>, opts: GenerateOptions) -> Result<GenerateReport> {
    let outcome = generator
        .generate(opts)
        .wrap_err("Failed to generate selftest includes")?;

    let result = match outcome.plan {
        Plan::UpToDate => GenerationResult::UpToDate,
        Plan::Regenerate(reason) if opts.dry_run => GenerationResult::Preview(PreviewResult {
            reason,
            files: outcome
                .preview
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect(),
        }),
        Plan::Regenerate(reason) => GenerationResult::Written(WrittenResult {
            reason,
            written: outcome.written,
        }),
    };

    Ok(GenerateReport {
        selftests_dir: generator.selftests_dir(),
        test_count: outcome.test_files.len(),
        changes: outcome.changes,
        result,
    })
}
