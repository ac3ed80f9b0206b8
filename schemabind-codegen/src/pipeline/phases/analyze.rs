//! Analyze phase - derives the schema index.

use eyre::Result;
use tracing::debug;

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    schema::{SchemaIndex, TypeClass},
};

/// Phase that builds the [`SchemaIndex`] shared by every emitter.
///
/// Must run after `ValidatePhase`: it assumes every reference resolves.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Derive families, discriminators and type classes"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let index = SchemaIndex::build(&ctx.api, &ctx.manifest);

        let media = index.media_family();
        if index.classify(media) != Some(TypeClass::Family) {
            ctx.add_diagnostic(
                Diagnostic::warning(
                    self.name(),
                    format!("media family `{}` has no implementers", media),
                )
                .at("families.media"),
            );
        }

        for family in index.registry().families() {
            if family.discriminator.is_none() {
                ctx.add_info(
                    self.name(),
                    format!("family `{}` dispatches by shape", family.name),
                );
            }
        }

        debug!(
            families = index.registry().len(),
            types = ctx.api.types.len(),
            methods = ctx.api.methods.len(),
            "schema analyzed"
        );
        ctx.index = Some(index);
        Ok(())
    }
}
