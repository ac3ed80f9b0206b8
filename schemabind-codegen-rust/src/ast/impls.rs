//! Rust impl block builder.

use schemabind_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Option<String>,
    trait_name: Option<String>,
    items: Vec<Vec<CodeFragment>>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: None,
            trait_name: None,
            items: Vec::new(),
        }
    }

    /// Generic parameters of the block, e.g. `T: Transport` or `'de`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.items.push(method.to_fragments());
        self
    }

    /// Add an associated item such as a constant.
    pub fn item(mut self, item: &impl Renderable) -> Self {
        self.items.push(item.to_fragments());
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn format_header(&self) -> String {
        let generics = self
            .generics
            .as_deref()
            .map(|g| format!("<{}>", g))
            .unwrap_or_default();
        match &self.trait_name {
            Some(trait_name) => format!(
                "impl{} {} for {} {{",
                generics, trait_name, self.type_name
            ),
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }

    fn items_to_fragments(&self) -> Vec<CodeFragment> {
        self.items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(item.iter().cloned());
                fragments
            })
            .collect()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.format_header(),
            self.items_to_fragments(),
        )]
    }
}
