//! Core operations.
//!
//! This module contains the business logic for schemabind commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::PathBuf;

pub use check::check;
pub use generate::{GenerateOptions, generate};
use schemabind_ir::ApiDescription;
use schemabind_manifest::SchemabindToml;

/// Output directory when neither `--output` nor `output.dir` is given.
pub const DEFAULT_OUTPUT_DIR: &str = "src/api";

/// A loaded manifest and the API description it points at.
pub struct Inputs {
    pub config: SchemabindToml,
    /// Path the API description was read from.
    pub schema: PathBuf,
    pub api: ApiDescription,
}
