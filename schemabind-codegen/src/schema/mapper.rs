//! Mapping of schema fields to language-agnostic type references.

use eyre::{Result, bail, eyre};
use schemabind_ir::{FieldDescriptor, WireType};

use super::{SchemaIndex, TypeClass};
use crate::builder::TypeRef;

/// Name of the runtime upload type that file references map to.
pub const RUNTIME_FILE_TYPE: &str = "InputFile";

/// Who declares a field. Sentinel overrides only apply to method parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner<'a> {
    Type(&'a str),
    Method(&'a str),
}

/// Maps schema fields to [`TypeRef`]s.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapper<'a> {
    index: &'a SchemaIndex,
}

impl<'a> FieldMapper<'a> {
    pub fn new(index: &'a SchemaIndex) -> Self {
        Self { index }
    }

    /// The descriptor a field is generated from: the common family of its
    /// candidates when there is one, otherwise its first candidate.
    pub fn resolve(&self, field: &FieldDescriptor) -> Result<WireType> {
        if field.types.len() >= 2 {
            let candidates: Option<Vec<WireType>> =
                field.types.iter().map(|t| WireType::parse(t)).collect();
            if let Some(family) = candidates.and_then(|c| self.common_family(&c)) {
                return Ok(WireType::Named(family));
            }
        }

        let preferred = field
            .preferred_type()
            .ok_or_else(|| eyre!("field `{}` has no usable type descriptor", field.name))?;
        Ok(self.collapse(preferred))
    }

    /// Required form of a resolved descriptor.
    pub fn map_type(&self, wire: &WireType) -> Result<TypeRef> {
        Ok(match wire {
            WireType::String => TypeRef::string(),
            WireType::Integer => TypeRef::int(),
            WireType::Float => TypeRef::float(),
            WireType::Boolean => TypeRef::bool(),
            WireType::Array(inner) => TypeRef::array(self.map_type(inner)?),
            WireType::Named(name) => match self.index.classify(name) {
                Some(TypeClass::File) => TypeRef::named(RUNTIME_FILE_TYPE),
                Some(_) => TypeRef::named(name.as_str()),
                None => bail!("unresolved type `{}`", name),
            },
            WireType::OneOf(_) => bail!("unresolved alternative list `{}`", wire),
        })
    }

    /// Resolve and map a field, wrapping optional non-scalars so absence is
    /// representable.
    pub fn map_field(&self, owner: Owner<'_>, field: &FieldDescriptor) -> Result<TypeRef> {
        let wire = self.resolve(field)?;
        let ty = self.map_type(&wire)?;
        if field.required {
            return Ok(ty);
        }

        Ok(match &wire {
            w if w.is_primitive() => match owner {
                Owner::Method(method)
                    if self.index.overrides().is_nullable(method, &field.name) =>
                {
                    TypeRef::optional(ty)
                }
                _ => ty,
            },
            WireType::Array(_) => TypeRef::optional(ty),
            WireType::Named(name) if self.index.is_file(name) => TypeRef::optional(ty),
            _ => TypeRef::optional(TypeRef::boxed(ty)),
        })
    }

    fn collapse(&self, wire: WireType) -> WireType {
        match wire {
            WireType::Array(inner) => WireType::Array(Box::new(self.collapse(*inner))),
            WireType::OneOf(alternatives) => {
                if let Some(family) = self.common_family(&alternatives) {
                    return WireType::Named(family);
                }
                match alternatives.into_iter().next() {
                    Some(first) => self.collapse(first),
                    None => WireType::OneOf(Vec::new()),
                }
            }
            other => other,
        }
    }

    fn common_family(&self, candidates: &[WireType]) -> Option<String> {
        if candidates.len() < 2 {
            return None;
        }
        let names: Vec<&str> = candidates
            .iter()
            .map(WireType::as_named)
            .collect::<Option<_>>()?;
        self.index
            .registry()
            .common_family(&names)
            .map(|family| family.name.clone())
    }
}
