use clap::Args;
use eyre::Result;

use super::GlobalArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let project = global.project()?;
        let report = ops::list(&project.generator())?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
