//! Pipeline orchestrator.

use eyre::Result;
use schemabind_ir::ApiDescription;
use schemabind_manifest::Manifest;
use tracing::{debug, error, warn};

use super::{
    CompilationContext, Phase, Severity,
    phases::{AnalyzePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the validate phase and then the analyze phase, logging every
/// diagnostic a phase records at its severity.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(api, manifest)?;
/// let index = ctx.index()?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
        }
    }

    /// Run the pipeline on an API description.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on any error diagnostic
    /// 2. AnalyzePhase - derives the schema index
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, api: ApiDescription, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(api, manifest);

        run_phase(&self.validate, &mut ctx)?;
        run_phase(&AnalyzePhase, &mut ctx)?;

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a single phase, logging the diagnostics it adds.
fn run_phase(phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
    let phase_name = phase.name();
    debug!(phase = phase_name, "{}", phase.description());

    let seen = ctx.diagnostics.len();
    let result = phase.run(ctx);
    for diagnostic in &ctx.diagnostics[seen..] {
        match diagnostic.severity {
            Severity::Error => error!(phase = phase_name, "{}", diagnostic),
            Severity::Warning => warn!(phase = phase_name, "{}", diagnostic),
            Severity::Info => debug!(phase = phase_name, "{}", diagnostic),
        }
    }
    result
}
