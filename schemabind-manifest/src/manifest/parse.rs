//! Manifest parsing from files and strings.

use std::{collections::HashSet, str::FromStr};

use super::Manifest;
use crate::{Error, ParseContext, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "schemabind.toml")
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &ParseContext::new(content, filename))?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    ctx.validate_type_name(&manifest.client.name, "client name")?;

    let families = &manifest.families;
    ctx.validate_type_name(&families.media, "media family")?;
    ctx.validate_type_name(&families.file, "file type")?;

    let mut seen = HashSet::new();
    for nullable in &manifest.overrides.nullable {
        ctx.validate_wire_name(&nullable.method, "override method")?;
        ctx.validate_wire_name(&nullable.field, "override field")?;
        if !seen.insert((nullable.method.as_str(), nullable.field.as_str())) {
            return Err(ctx.validation_error(
                format!(
                    "duplicate nullable override for {}.{}",
                    nullable.method, nullable.field
                ),
                &nullable.field,
            ));
        }
    }

    let mut seen = HashSet::new();
    for conditional in &manifest.overrides.conditional_zero {
        ctx.validate_wire_name(&conditional.method, "override method")?;
        ctx.validate_wire_name(&conditional.field, "override field")?;
        ctx.validate_wire_name(&conditional.sibling, "override sibling")?;
        if conditional.sibling == conditional.field {
            return Err(ctx.validation_error(
                format!(
                    "{}.{} cannot depend on itself",
                    conditional.method, conditional.field
                ),
                &conditional.sibling,
            ));
        }
        if !seen.insert((conditional.method.as_str(), conditional.field.as_str())) {
            return Err(ctx.validation_error(
                format!(
                    "duplicate conditional override for {}.{}",
                    conditional.method, conditional.field
                ),
                &conditional.field,
            ));
        }
    }

    Ok(())
}
