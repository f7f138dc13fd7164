mod check;
mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use deadcode_codegen::Generator;
use deadcode_manifest::{Config, DctToml};
use eyre::{Context, Result};
use generate::GenerateCommand;
use list::ListCommand;

use crate::logging;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for deadcode_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dct")]
#[command(version)]
#[command(about = "Generate the DeadCodeTrick translation unit for selftests")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.global.verbose);

        match &self.command {
            None => GenerateCommand::default().run(&self.global),
            Some(Commands::Generate(cmd)) => cmd.run(&self.global),
            Some(Commands::Check(cmd)) => cmd.run(&self.global),
            Some(Commands::List(cmd)) => cmd.run(&self.global),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the index and DeadCodeTrick.cpp if the selftests changed (default)
    Generate(GenerateCommand),

    /// Report whether regeneration is needed without writing anything
    Check(CheckCommand),

    /// List the selftest headers and their include paths
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Directory holding the Selftests directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub base_dir: PathBuf,

    /// Path to dct.toml (defaults to <base-dir>/dct.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Resolve the base directory and load its configuration.
    pub fn project(&self) -> Result<Project> {
        let base_dir = std::fs::canonicalize(&self.base_dir).wrap_err_with(|| {
            format!("Failed to resolve base directory '{}'", self.base_dir.display())
        })?;

        let dct_toml = match &self.config {
            Some(path) => DctToml::open(path),
            None => DctToml::discover(&base_dir),
        }
        .unwrap_or_exit();

        tracing::debug!(base_dir = %base_dir.display(), "resolved project");
        Ok(Project { base_dir, dct_toml })
    }
}

/// A resolved base directory with its configuration.
pub(crate) struct Project {
    base_dir: PathBuf,
    dct_toml: DctToml,
}

impl Project {
    pub fn config(&self) -> &Config {
        self.dct_toml.config()
    }

    pub fn generator(&self) -> Generator<'_> {
        Generator::new(&self.base_dir, self.config())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["dct"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.global.base_dir, PathBuf::from("."));
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::try_parse_from(["dct", "check", "-C", "Sources/TArc", "-vv"]).unwrap();

        assert!(matches!(cli.command, Some(Commands::Check(_))));
        assert_eq!(cli.global.base_dir, PathBuf::from("Sources/TArc"));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_project_resolves_base_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let args = GlobalArgs {
            base_dir: temp.path().to_path_buf(),
            config: None,
            verbose: 0,
        };

        let project = args.project().unwrap();

        assert!(project.base_dir.is_absolute());
        assert_eq!(project.config(), &Config::default());
    }

    #[test]
    fn test_project_missing_base_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let args = GlobalArgs {
            base_dir: temp.path().join("missing"),
            config: None,
            verbose: 0,
        };

        assert!(args.project().is_err());
    }
}
