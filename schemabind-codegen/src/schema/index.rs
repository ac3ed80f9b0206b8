//! Classification of every type name in an API description.

use indexmap::IndexMap;
use schemabind_ir::ApiDescription;
use schemabind_manifest::Manifest;

use super::{EncodingOverrides, Family, FamilyRegistry};

/// What a type name denotes in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    /// The upload abstraction; provided by the runtime, never generated.
    File,
    /// A polymorphic family; generated as a closed sum.
    Family,
    /// A type with fields; generated as a record.
    Aggregate,
    /// A zero-field type nobody implements; generated as an empty record.
    Placeholder,
}

/// Everything the emitters need to know about the schema beyond the raw
/// descriptors. Built once after validation.
#[derive(Debug, Clone)]
pub struct SchemaIndex {
    registry: FamilyRegistry,
    classes: IndexMap<String, TypeClass>,
    media_family: String,
    file_type: String,
    overrides: EncodingOverrides,
}

impl SchemaIndex {
    pub fn build(api: &ApiDescription, manifest: &Manifest) -> Self {
        let registry = FamilyRegistry::from_api(api);
        let file_type = manifest.families.file.clone();

        let classes = api
            .types
            .values()
            .map(|ty| {
                let class = if ty.name == file_type {
                    TypeClass::File
                } else if registry.is_family(&ty.name) {
                    TypeClass::Family
                } else if ty.is_marker() {
                    TypeClass::Placeholder
                } else {
                    TypeClass::Aggregate
                };
                (ty.name.clone(), class)
            })
            .collect();

        Self {
            registry,
            classes,
            media_family: manifest.families.media.clone(),
            file_type,
            overrides: EncodingOverrides::from_config(&manifest.overrides),
        }
    }

    pub fn registry(&self) -> &FamilyRegistry {
        &self.registry
    }

    pub fn overrides(&self) -> &EncodingOverrides {
        &self.overrides
    }

    pub fn classify(&self, name: &str) -> Option<TypeClass> {
        if name == self.file_type {
            return Some(TypeClass::File);
        }
        self.classes.get(name).copied()
    }

    /// Type names with their class, in document order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, TypeClass)> {
        self.classes.iter().map(|(name, class)| (name.as_str(), *class))
    }

    pub fn family(&self, name: &str) -> Option<&Family> {
        self.registry.get(name)
    }

    pub fn is_file(&self, name: &str) -> bool {
        name == self.file_type
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn media_family(&self) -> &str {
        &self.media_family
    }

    /// The media family itself or one of its implementers.
    pub fn is_media(&self, name: &str) -> bool {
        name == self.media_family || self.is_media_implementer(name)
    }

    pub fn is_media_implementer(&self, name: &str) -> bool {
        self.registry
            .implementers(&self.media_family)
            .iter()
            .any(|imp| imp == name)
    }
}
