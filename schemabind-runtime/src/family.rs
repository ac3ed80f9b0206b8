//! Static dispatch tables for polymorphic families.
//!
//! Generated family enums carry one [`Family`] describing their implementers.
//! Decoding selects an implementer by the discriminator field when the family
//! has one, and by payload shape otherwise. Shape matching also checks the
//! fields an implementer pins to a constant, such as `date` being `0` on an
//! inaccessible message.

use serde_json::{Map, Value};

use crate::DispatchError;

/// One concrete implementer of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Implementer {
    /// Schema name of the implementer.
    pub name: &'static str,
    /// Discriminator value identifying this implementer, if the family has one.
    pub tag: Option<&'static str>,
    /// Wire names of the implementer's required fields.
    pub required: &'static [&'static str],
    /// Required fields pinned to a constant, as `(wire name, value)`. Values
    /// compare against strings verbatim and against other JSON by their text.
    pub constants: &'static [(&'static str, &'static str)],
}

impl Implementer {
    /// Required fields present and every constant matched.
    fn accepts(&self, object: &Map<String, Value>) -> bool {
        self.required.iter().all(|key| object.contains_key(*key))
            && self
                .constants
                .iter()
                .all(|(key, constant)| object.get(*key).is_some_and(|value| is_constant(value, constant)))
    }

    fn specificity(&self) -> usize {
        self.required.len() + self.constants.len()
    }
}

fn is_constant(value: &Value, constant: &str) -> bool {
    match value {
        Value::String(text) => text == constant,
        other => other.to_string() == constant,
    }
}

/// A polymorphic family and its implementers in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    pub name: &'static str,
    pub discriminator: Option<&'static str>,
    pub implementers: &'static [Implementer],
}

impl Family {
    /// Pick the implementer a payload belongs to.
    pub fn select(&self, payload: &Value) -> Result<&'static str, DispatchError> {
        let object = payload
            .as_object()
            .ok_or(DispatchError::NotAnObject { family: self.name })?;

        if let Some(field) = self.discriminator {
            if let Some(value) = object.get(field) {
                return self
                    .implementers
                    .iter()
                    .find(|imp| imp.tag.is_some_and(|tag| is_constant(value, tag)))
                    .map(|imp| imp.name)
                    .ok_or_else(|| DispatchError::UnknownTag {
                        family: self.name,
                        field,
                        tag: match value {
                            Value::String(text) => text.clone(),
                            other => other.to_string(),
                        },
                    });
            }
        }

        self.select_by_shape(object)
    }

    /// The accepting implementer with the most required and pinned fields.
    /// Ties resolve to the first declared.
    fn select_by_shape(&self, object: &Map<String, Value>) -> Result<&'static str, DispatchError> {
        let mut best: Option<&Implementer> = None;
        for imp in self.implementers.iter().filter(|imp| imp.accepts(object)) {
            if best.is_none_or(|b| imp.specificity() > b.specificity()) {
                best = Some(imp);
            }
        }
        best.map(|imp| imp.name)
            .ok_or(DispatchError::NoMatch { family: self.name })
    }
}
