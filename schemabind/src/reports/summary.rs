//! Counts describing a compiled API description.

use schemabind_codegen::schema::{SchemaIndex, TypeClass};
use schemabind_ir::ApiDescription;

use super::output::Output;

/// What a compilation emits, per kind.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApiSummary {
    /// Upstream version label, if the description carries one.
    pub version: Option<String>,
    pub records: usize,
    pub families: usize,
    pub placeholders: usize,
    pub methods: usize,
}

impl ApiSummary {
    pub fn new(api: &ApiDescription, index: &SchemaIndex) -> Self {
        let mut summary = Self {
            version: api.version.clone(),
            methods: api.methods.len(),
            ..Self::default()
        };
        for (_, class) in index.classes() {
            match class {
                TypeClass::Aggregate => summary.records += 1,
                TypeClass::Family => summary.families += 1,
                TypeClass::Placeholder => summary.placeholders += 1,
                TypeClass::File => {}
            }
        }
        summary
    }

    pub fn types(&self) -> usize {
        self.records + self.families + self.placeholders
    }

    pub(super) fn render(&self, out: &mut dyn Output) {
        if let Some(version) = &self.version {
            out.preformatted(&format!("  {}", version));
        }
        out.preformatted(&format!(
            "  {} ({} record{}, {} famil{}, {} placeholder{})",
            plural(self.types(), "type", "types"),
            self.records,
            if self.records == 1 { "" } else { "s" },
            self.families,
            if self.families == 1 { "y" } else { "ies" },
            self.placeholders,
            if self.placeholders == 1 { "" } else { "s" },
        ));
        out.preformatted(&format!("  {}", plural(self.methods, "method", "methods")));
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
