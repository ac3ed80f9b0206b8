//! Polymorphic family registry.
//!
//! A family is a zero-field type that at least one other type names in its
//! `subtype_of` list. The registry is derived once and never mutated.

use std::collections::HashSet;

use indexmap::IndexMap;
use schemabind_ir::ApiDescription;

/// A polymorphic family and its concrete implementers, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub name: String,
    pub implementers: Vec<String>,
    pub discriminator: Option<Discriminator>,
}

impl Family {
    /// Name of the variant standing for `implementer` in this family.
    ///
    /// The family prefix is stripped when the remainder is still a type-like
    /// identifier and no other implementer would end up with the same name.
    pub fn variant_name(&self, implementer: &str) -> String {
        let stripped = |name: &str| -> Option<String> {
            let rest = name.strip_prefix(self.name.as_str())?;
            rest.starts_with(|c: char| c.is_ascii_uppercase())
                .then(|| rest.to_string())
        };

        let Some(short) = stripped(implementer) else {
            return implementer.to_string();
        };
        let collides = self
            .implementers
            .iter()
            .filter(|other| other.as_str() != implementer)
            .any(|other| stripped(other).as_deref().unwrap_or(other) == short);
        if collides {
            implementer.to_string()
        } else {
            short
        }
    }
}

/// A field shared by every implementer whose constant value identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discriminator {
    /// Wire name of the field.
    pub field: String,
    /// Implementer name to constant value.
    pub tags: IndexMap<String, String>,
}

impl Discriminator {
    pub fn tag(&self, implementer: &str) -> Option<&str> {
        self.tags.get(implementer).map(String::as_str)
    }
}

/// Registry of every polymorphic family of an API description.
#[derive(Debug, Clone, Default)]
pub struct FamilyRegistry {
    families: IndexMap<String, Family>,
}

impl FamilyRegistry {
    pub fn from_api(api: &ApiDescription) -> Self {
        let mut implementers: IndexMap<&str, Vec<String>> = IndexMap::new();
        for ty in api.types.values() {
            for parent in &ty.subtype_of {
                implementers
                    .entry(parent.as_str())
                    .or_default()
                    .push(ty.name.clone());
            }
        }

        let mut families = IndexMap::new();
        for ty in api.types.values().filter(|ty| ty.is_marker()) {
            let Some(members) = implementers.swap_remove(ty.name.as_str()) else {
                continue;
            };
            let discriminator = detect_discriminator(api, &members);
            families.insert(
                ty.name.clone(),
                Family {
                    name: ty.name.clone(),
                    implementers: members,
                    discriminator,
                },
            );
        }

        Self { families }
    }

    pub fn get(&self, name: &str) -> Option<&Family> {
        self.families.get(name)
    }

    pub fn is_family(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Implementers of `family`, empty when it is not a family.
    pub fn implementers(&self, family: &str) -> &[String] {
        self.families
            .get(family)
            .map(|f| f.implementers.as_slice())
            .unwrap_or_default()
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Required fields of `implementer` whose description fixes their value,
    /// excluding the family discriminator. Shape dispatch uses them to tell
    /// apart implementers with identical required fields.
    pub fn constants(
        &self,
        api: &ApiDescription,
        family: &str,
        implementer: &str,
    ) -> Vec<(String, String)> {
        let discriminator = self
            .get(family)
            .and_then(|f| f.discriminator.as_ref())
            .map(|d| d.field.as_str());
        let Some(ty) = api.type_named(implementer) else {
            return Vec::new();
        };
        ty.fields
            .iter()
            .filter(|f| f.required && Some(f.name.as_str()) != discriminator)
            .filter_map(|f| Some((f.name.clone(), extract_constant(&f.description)?)))
            .collect()
    }

    /// The first family (in document order) that every name implements.
    pub fn common_family(&self, names: &[&str]) -> Option<&Family> {
        if names.is_empty() {
            return None;
        }
        self.families.values().find(|family| {
            names
                .iter()
                .all(|name| family.implementers.iter().any(|imp| imp == name))
        })
    }
}

fn detect_discriminator(api: &ApiDescription, implementers: &[String]) -> Option<Discriminator> {
    let first = api.type_named(implementers.first()?)?;

    first.fields.iter().find_map(|candidate| {
        let mut tags = IndexMap::new();
        for implementer in implementers {
            let field = api.type_named(implementer)?.field(&candidate.name)?;
            tags.insert(implementer.clone(), extract_constant(&field.description)?);
        }
        let distinct: HashSet<&String> = tags.values().collect();
        (distinct.len() == tags.len()).then(|| Discriminator {
            field: candidate.name.clone(),
            tags,
        })
    })
}

/// Extract the constant a field description promises, e.g. `always “creator”`,
/// `Always 0.` or `must be photo`.
///
/// An unquoted `always` value only counts when it ends the clause, so prose
/// such as "always a positive number" is not taken for a constant.
pub fn extract_constant(description: &str) -> Option<String> {
    let is_quote = |c: char| matches!(c, '"' | '“' | '”');

    let always = description
        .find("always ")
        .or_else(|| description.find("Always "));
    if let Some(pos) = always {
        let rest = &description[pos + "always ".len()..];
        if let Some(quoted) = rest.strip_prefix(is_quote) {
            let end = quoted.find(is_quote)?;
            let value = &quoted[..end];
            return (!value.is_empty()).then(|| value.to_string());
        }

        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
            .unwrap_or(rest.len());
        let value = &rest[..end];
        let closes_clause = rest[end..]
            .chars()
            .next()
            .is_none_or(|c| matches!(c, '.' | ',' | ';'));
        if !value.is_empty() && closes_clause {
            return Some(value.to_string());
        }
    }

    if let Some(pos) = description.find("must be ") {
        let rest = description[pos + "must be ".len()..]
            .trim_start_matches(|c: char| is_quote(c) || c == '*');
        let value: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if !value.is_empty() {
            return Some(value);
        }
    }

    None
}
