use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::InputArgs;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (overrides output.dir, defaults to ./src/api)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let inputs = self.input.load()?;
        let output_dir = self
            .output
            .clone()
            .or_else(|| inputs.config.output_dir())
            .unwrap_or_else(|| PathBuf::from(ops::DEFAULT_OUTPUT_DIR));

        let report = ops::generate(
            inputs,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
