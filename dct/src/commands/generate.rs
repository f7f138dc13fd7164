use clap::Args;
use deadcode_codegen::GenerateOptions;
use eyre::Result;

use super::GlobalArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args, Default)]
pub struct GenerateCommand {
    /// Regenerate even if the index is up to date
    #[arg(short, long)]
    pub force: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let project = global.project()?;

        let report = ops::generate(
            &project.generator(),
            GenerateOptions {
                force: self.force,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
