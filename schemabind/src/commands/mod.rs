mod check;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use eyre::{Result, eyre};
use generate::GenerateCommand;
use schemabind_manifest::{SchemabindToml, load_document};
use tracing::debug;

use crate::ops::Inputs;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for schemabind_manifest::Result<T> {
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
#[command(name = "schemabind")]
#[command(version)]
#[command(about = "Compile a Bot API description into typed Rust client bindings")]
pub(crate) struct Cli {
    /// Log pipeline phases and per-file decisions
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate types.rs, methods.rs and mod.rs from an API description
    Generate(GenerateCommand),

    /// Validate an API description without generating code
    Check(CheckCommand),
}

/// Where the manifest and the API description come from.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Path to schemabind.toml (defaults to ./schemabind.toml, optional)
    #[arg(short, long, default_value = "schemabind.toml")]
    pub config: PathBuf,

    /// API description JSON (overrides input.schema)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl InputArgs {
    /// Read the manifest and the API description, exiting with a rendered
    /// report when either fails to parse.
    pub fn load(&self) -> Result<Inputs> {
        let config = SchemabindToml::open_or_default(&self.config).unwrap_or_exit();
        let schema = self
            .schema
            .clone()
            .or_else(|| config.schema_path())
            .ok_or_else(|| {
                eyre!(
                    "no API description given: pass --schema or set input.schema in {}",
                    self.config.display()
                )
            })?;
        debug!(config = %config.path().display(), schema = %schema.display(), "loading inputs");
        let api = load_document(&schema).unwrap_or_exit();

        Ok(Inputs {
            config,
            schema,
            api,
        })
    }
}
