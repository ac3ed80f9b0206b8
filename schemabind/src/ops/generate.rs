//! Generate operation - bindings from an API description.

use std::path::Path;

use eyre::{Context, Result};
use schemabind_codegen::pipeline::{Pipeline, Severity};
use schemabind_codegen_rust::{Generator, LanguageCodegen};

use super::Inputs;
use crate::reports::{
    ApiSummary, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving `mod.rs`, `types.rs` and `methods.rs`.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the API description and emits the Rust bindings.
pub fn generate(inputs: Inputs, opts: GenerateOptions) -> Result<GenerateReport> {
    let Inputs {
        config,
        schema,
        api,
    } = inputs;

    let ctx = Pipeline::new()
        .run(api, config.manifest().clone())
        .wrap_err_with(|| format!("Failed to compile {}", schema.display()))?;

    let warnings: Vec<String> = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect();

    let generator = Generator::from_context(&ctx)?;
    let summary = ApiSummary::new(&ctx.api, ctx.index()?);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to generate code")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.written,
            unchanged: written.unchanged,
        })
    };

    Ok(GenerateReport {
        client: ctx.manifest.client.name.clone(),
        summary,
        warnings,
        result,
    })
}
