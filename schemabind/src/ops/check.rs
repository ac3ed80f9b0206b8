//! Check operation - API description validation.

use eyre::{Context, Result};
use schemabind_codegen::pipeline::{
    CompilationContext, Phase, Severity,
    phases::{AnalyzePhase, ValidatePhase},
};

use super::Inputs;
use crate::reports::{ApiSummary, CheckReport};

/// Execute the check operation.
///
/// Runs the phases one at a time instead of through `Pipeline::run`, which
/// drops the context when validation fails; the report needs its diagnostics.
pub fn check(inputs: Inputs) -> Result<CheckReport> {
    let Inputs {
        config,
        schema,
        api,
    } = inputs;
    let mut ctx = CompilationContext::new(api, config.manifest().clone());

    let valid = ValidatePhase::new().run(&mut ctx).is_ok();
    if valid {
        AnalyzePhase.run(&mut ctx).wrap_err("Analysis failed")?;
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let summary = ctx
        .index
        .as_ref()
        .map(|index| ApiSummary::new(&ctx.api, index));

    Ok(CheckReport {
        schema_path: schema,
        errors,
        warnings,
        infos,
        summary,
    })
}
