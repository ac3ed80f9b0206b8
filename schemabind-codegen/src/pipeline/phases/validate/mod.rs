//! Validate phase - runs lints on the API description.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    DuplicateFieldLint, EmptyDescriptionLint, FieldTypeLint, OverrideTargetLint, ReturnShapeLint,
    SubtypeLint, UnresolvedTypeLint,
};
use tracing::trace;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the API description with the built-in lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase running every built-in lint.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(FieldTypeLint),
                Box::new(UnresolvedTypeLint),
                Box::new(ReturnShapeLint),
                Box::new(SubtypeLint),
                Box::new(DuplicateFieldLint),
                Box::new(OverrideTargetLint),
                Box::new(EmptyDescriptionLint),
            ],
        }
    }

}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check schema integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            trace!(lint = lint.name(), "{}", lint.description());
            lint.check(&ctx.api, &ctx.manifest, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
