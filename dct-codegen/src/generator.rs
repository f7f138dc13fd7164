use std::path::{Path, PathBuf};

use deadcode_core::{GeneratedFile, PreviewFile, Result, include_base};
use deadcode_manifest::Config;

use crate::{
    Changes, Index, Plan, TestFileSet, collect,
    files::{DeadCodeTrickCpp, IndexFile},
    plan,
};

/// Generates the self-test include unit for one base directory.
pub struct Generator<'a> {
    base_dir: PathBuf,
    config: &'a Config,
}

/// Options for [`Generator::generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Regenerate even when the index is current.
    pub force: bool,
    /// Render the files without writing them.
    pub dry_run: bool,
}

/// The state of the selftests directory against its index.
#[derive(Debug, Clone)]
pub struct Scan {
    /// Test headers currently on disk.
    pub test_files: TestFileSet,
    /// The index left by the previous generation, if any.
    pub index: Option<Index>,
}

impl Scan {
    pub fn plan(&self) -> Plan {
        plan(&self.test_files, self.index.as_ref())
    }

    pub fn changes(&self) -> Changes {
        Changes::between(&self.test_files, self.index.as_ref())
    }
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// What the run decided to do.
    pub plan: Plan,
    /// Headers added or removed relative to the previous index.
    pub changes: Changes,
    /// Test headers the generated source now includes.
    pub test_files: TestFileSet,
    /// Files written, in write order. Empty when up to date or dry-run.
    pub written: Vec<PathBuf>,
    /// Rendered files when running dry.
    pub preview: Vec<PreviewFile>,
}

impl<'a> Generator<'a> {
    pub fn new(base_dir: impl Into<PathBuf>, config: &'a Config) -> Self {
        Self {
            base_dir: base_dir.into(),
            config,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The directory scanned for test headers.
    pub fn selftests_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.layout.selftests)
    }

    fn index_rel(&self) -> PathBuf {
        Path::new(&self.config.layout.selftests).join(&self.config.layout.index)
    }

    pub fn index_path(&self) -> PathBuf {
        self.base_dir.join(self.index_rel())
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.layout.output)
    }

    /// The include base derived from the selftests directory path.
    pub fn include_base(&self) -> Result<String> {
        include_base(&self.selftests_dir(), &self.config.source.marker)
    }

    /// Collect the test headers and read the index.
    pub fn scan(&self) -> Result<Scan> {
        let test_files = collect(&self.selftests_dir(), &self.config.layout.suffix)?;
        let index = Index::read(&self.index_path())?;
        Ok(Scan { test_files, index })
    }

    /// The generated files for `test_files`.
    ///
    /// Fails when the include base cannot be derived.
    fn files<'b>(
        &'b self,
        test_files: &'b TestFileSet,
    ) -> Result<(IndexFile<'b>, DeadCodeTrickCpp<'b>)> {
        let include_base = self.include_base()?;
        let index = IndexFile::new(self.index_rel(), test_files);
        let source = DeadCodeTrickCpp::new(
            &self.config.layout.output,
            include_base,
            test_files,
            &self.config.source,
        );
        Ok((index, source))
    }

    /// Render both generated files for `test_files` without writing.
    pub fn preview(&self, test_files: &TestFileSet) -> Result<Vec<PreviewFile>> {
        let (index, source) = self.files(test_files)?;
        Ok(vec![
            index.preview(&self.base_dir),
            source.preview(&self.base_dir),
        ])
    }

    /// Regenerate the index and source when the headers changed.
    ///
    /// Nothing is written when the index already matches (unless forced).
    /// The include base is derived before the first write, so a misplaced
    /// selftests directory leaves both files untouched.
    pub fn generate(&self, opts: GenerateOptions) -> Result<GenerateResult> {
        let scan = self.scan()?;
        let plan = scan.plan().forced(opts.force);
        let changes = scan.changes();

        let mut result = GenerateResult {
            plan,
            changes,
            test_files: scan.test_files,
            written: Vec::new(),
            preview: Vec::new(),
        };

        if plan.is_up_to_date() {
            tracing::info!("selftests index is up to date");
            return Ok(result);
        }

        tracing::debug!(?plan, "regenerating");

        if opts.dry_run {
            result.preview = self.preview(&result.test_files)?;
            return Ok(result);
        }

        let (index, source) = self.files(&result.test_files)?;
        let index_path = index.write(&self.base_dir)?;
        let source_path = source.write(&self.base_dir)?;
        result.written = vec![index_path, source_path];

        Ok(result)
    }
}
