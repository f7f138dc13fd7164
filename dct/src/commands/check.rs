use clap::Args;
use eyre::Result;

use super::GlobalArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command, exiting with status 1 when stale
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let project = global.project()?;
        let report = ops::check(&project.generator())?;

        report.render(&mut TerminalOutput::new());

        if report.is_stale() {
            std::process::exit(1);
        }
        Ok(())
    }
}
