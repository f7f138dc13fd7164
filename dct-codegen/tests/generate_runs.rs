//! End-to-end runs of the generator against a temporary project tree.

use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use deadcode_codegen::{Error, GenerateOptions, Generator, Plan, Reason};
use deadcode_manifest::Config;
use tempfile::TempDir;

/// A project laid out as `<tmp>/Module/Sources/TArc/Testing/Private/Selftests`.
struct Project {
    _temp: TempDir,
    base: PathBuf,
}

impl Project {
    fn new(headers: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        let base = temp
            .path()
            .join("Module/Sources/TArc/Testing/Private");
        Self::with_base(temp, base, headers)
    }

    fn without_marker(headers: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("Module/Private");
        Self::with_base(temp, base, headers)
    }

    fn with_base(temp: TempDir, base: PathBuf, headers: &[&str]) -> Self {
        fs::create_dir_all(base.join("Selftests")).unwrap();
        let project = Self { _temp: temp, base };
        for name in headers {
            project.add(name);
        }
        project
    }

    fn add(&self, name: &str) {
        fs::write(self.base.join("Selftests").join(name), "#pragma once\n").unwrap();
    }

    fn remove(&self, name: &str) {
        fs::remove_file(self.base.join("Selftests").join(name)).unwrap();
    }

    fn index(&self) -> PathBuf {
        self.base.join("Selftests/index")
    }

    fn output(&self) -> PathBuf {
        self.base.join("DeadCodeTrick.cpp")
    }
}

fn run(base: &Path) -> deadcode_codegen::Result<deadcode_codegen::GenerateResult> {
    let config = Config::default();
    Generator::new(base, &config).generate(GenerateOptions::default())
}

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

#[test]
fn test_first_run_generates_both_files() {
    let project = Project::new(&["b.h", "a.h", "c.txt", "a.h.bak"]);

    let result = run(&project.base).unwrap();

    assert_eq!(result.plan, Plan::Regenerate(Reason::MissingIndex));
    assert_eq!(result.test_files.names(), ["a.h", "b.h"]);
    assert_eq!(fs::read_to_string(project.index()).unwrap(), "a.h\nb.h\n");

    let source = fs::read_to_string(project.output()).unwrap();
    assert_eq!(
        source.lines().take(3).collect::<Vec<_>>(),
        [
            "#include \"DeadCodeTrick.h\"",
            "#include \"TArc/Testing/Private/Selftests/a.h\"",
            "#include \"TArc/Testing/Private/Selftests/b.h\"",
        ]
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let project = Project::new(&["a.h", "b.h"]);
    run(&project.base).unwrap();
    let index_time = modified(&project.index());
    let output_time = modified(&project.output());
    let output = fs::read_to_string(project.output()).unwrap();

    let result = run(&project.base).unwrap();

    assert_eq!(result.plan, Plan::UpToDate);
    assert!(result.written.is_empty());
    assert_eq!(modified(&project.index()), index_time);
    assert_eq!(modified(&project.output()), output_time);
    assert_eq!(fs::read_to_string(project.output()).unwrap(), output);
}

#[test]
fn test_matching_index_leaves_missing_output_alone() {
    let project = Project::new(&["a.h", "b.h"]);
    fs::write(project.index(), "a.h\nb.h\n").unwrap();

    let result = run(&project.base).unwrap();

    assert!(result.plan.is_up_to_date());
    assert!(!project.output().exists());
}

#[test]
fn test_stale_index_is_rewritten() {
    let project = Project::new(&["a.h", "b.h"]);
    fs::write(project.index(), "a.h\n").unwrap();

    let result = run(&project.base).unwrap();

    assert_eq!(result.plan, Plan::Regenerate(Reason::Changed));
    assert_eq!(result.changes.added, ["b.h"]);
    assert!(result.changes.removed.is_empty());
    assert_eq!(fs::read_to_string(project.index()).unwrap(), "a.h\nb.h\n");

    let source = fs::read_to_string(project.output()).unwrap();
    let a = source.find("Selftests/a.h").unwrap();
    let b = source.find("Selftests/b.h").unwrap();
    assert!(a < b);
    assert!(source.ends_with("} // namespace DAVA"));
}

#[test]
fn test_removed_header_drops_include() {
    let project = Project::new(&["a.h", "b.h"]);
    run(&project.base).unwrap();
    project.remove("a.h");

    let result = run(&project.base).unwrap();

    assert_eq!(result.changes.removed, ["a.h"]);
    assert_eq!(fs::read_to_string(project.index()).unwrap(), "b.h\n");
    assert!(!fs::read_to_string(project.output()).unwrap().contains("a.h"));
}

#[test]
fn test_added_header_after_no_op() {
    let project = Project::new(&["a.h"]);
    run(&project.base).unwrap();
    assert!(run(&project.base).unwrap().plan.is_up_to_date());
    project.add("b.h");

    let result = run(&project.base).unwrap();

    assert_eq!(result.written, [project.index(), project.output()]);
    assert_eq!(fs::read_to_string(project.index()).unwrap(), "a.h\nb.h\n");
}

#[test]
fn test_index_directory_forces_regeneration_then_fails_to_write() {
    let project = Project::new(&["a.h"]);
    fs::create_dir(project.index()).unwrap();

    let err = run(&project.base).unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
    assert!(!project.output().exists());
}

#[test]
fn test_missing_marker_fails_before_writing() {
    let project = Project::without_marker(&["a.h"]);

    let err = run(&project.base).unwrap_err();

    assert!(matches!(err, Error::MissingMarker { .. }));
    assert!(!project.index().exists());
    assert!(!project.output().exists());
}

#[test]
fn test_missing_marker_with_stale_index_keeps_index() {
    let project = Project::without_marker(&["a.h", "b.h"]);
    fs::write(project.index(), "a.h\n").unwrap();

    assert!(run(&project.base).is_err());
    assert_eq!(fs::read_to_string(project.index()).unwrap(), "a.h\n");
}

#[test]
fn test_missing_selftests_dir_is_an_error() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("Sources/TArc");
    fs::create_dir_all(&base).unwrap();

    let err = run(&base).unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn test_empty_selftests_dir() {
    let project = Project::new(&[]);

    run(&project.base).unwrap();

    assert_eq!(fs::read_to_string(project.index()).unwrap(), "");
    let source = fs::read_to_string(project.output()).unwrap();
    assert_eq!(source.matches("#include").count(), 1);
    assert!(run(&project.base).unwrap().plan.is_up_to_date());
}

#[test]
fn test_custom_layout() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("Sources/Game");
    fs::create_dir_all(base.join("Tests")).unwrap();
    fs::write(base.join("Tests/one.hpp"), "").unwrap();
    fs::write(base.join("Tests/two.h"), "").unwrap();

    let config: Config = r#"
        [layout]
        selftests = "Tests"
        suffix = ".hpp"
        index = "tests.idx"
        output = "Anchor.cpp"

        [source]
        header = "Anchor.h"
        namespace = "Game"
        function = "KeepTests"
    "#
    .parse()
    .unwrap();

    Generator::new(&base, &config)
        .generate(GenerateOptions::default())
        .unwrap();

    assert_eq!(
        fs::read_to_string(base.join("Tests/tests.idx")).unwrap(),
        "one.hpp\n"
    );
    let source = fs::read_to_string(base.join("Anchor.cpp")).unwrap();
    assert!(source.starts_with("#include \"Anchor.h\"\n#include \"Game/Tests/one.hpp\"\n"));
    assert!(source.contains("bool KeepTests()"));
}
