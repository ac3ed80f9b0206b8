//! Parsing of wire type descriptors (`"Array of Integer"`, `"Message"`, ...).

use std::fmt;

const ARRAY_PREFIX: &str = "Array of ";

/// A parsed type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireType {
    String,
    Integer,
    Float,
    Boolean,
    /// A sequence of the inner type.
    Array(Box<WireType>),
    /// A reference to a named type of the API.
    Named(String),
    /// An element list such as `InputMediaPhoto and InputMediaVideo`.
    /// Only produced as the element of an array.
    OneOf(Vec<WireType>),
}

impl WireType {
    /// Parse a descriptor. Returns `None` for empty or malformed descriptors.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let descriptor = descriptor.trim();
        if let Some(inner) = descriptor.strip_prefix(ARRAY_PREFIX) {
            return Self::parse_element(inner).map(|t| Self::Array(Box::new(t)));
        }
        Self::parse_single(descriptor)
    }

    /// An array element: a single descriptor or a list of alternatives.
    fn parse_element(descriptor: &str) -> Option<Self> {
        if descriptor.starts_with(ARRAY_PREFIX) {
            return Self::parse(descriptor);
        }
        let alternatives: Vec<&str> = descriptor
            .split(", ")
            .flat_map(|part| part.split(" and "))
            .flat_map(|part| part.split(" or "))
            .map(str::trim)
            .collect();
        if alternatives.len() == 1 {
            return Self::parse_single(descriptor);
        }
        alternatives
            .into_iter()
            .map(Self::parse_single)
            .collect::<Option<Vec<_>>>()
            .map(Self::OneOf)
    }

    fn parse_single(descriptor: &str) -> Option<Self> {
        match descriptor.trim() {
            "String" => Some(Self::String),
            "Integer" | "Int" => Some(Self::Integer),
            "Float" | "Float number" => Some(Self::Float),
            "Boolean" | "True" => Some(Self::Boolean),
            name if is_type_name(name) => Some(Self::Named(name.to_string())),
            _ => None,
        }
    }

    /// Returns true for string, integer, float and boolean.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Integer | Self::Float | Self::Boolean
        )
    }

    /// Returns true for `Array of ...`.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// The innermost element type (`Array of Array of T` → `T`).
    pub fn element(&self) -> &WireType {
        match self {
            Self::Array(inner) => inner.element(),
            other => other,
        }
    }

    /// Every named type referenced anywhere in this descriptor.
    pub fn references(&self) -> Vec<&str> {
        match self {
            Self::Named(name) => vec![name.as_str()],
            Self::Array(inner) => inner.references(),
            Self::OneOf(alternatives) => alternatives.iter().flat_map(Self::references).collect(),
            _ => Vec::new(),
        }
    }

    /// The referenced type name, if this is a named type.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Array(inner) => write!(f, "{}{}", ARRAY_PREFIX, inner),
            Self::Named(name) => write!(f, "{}", name),
            Self::OneOf(alternatives) => {
                let names: Vec<String> = alternatives.iter().map(ToString::to_string).collect();
                match names.split_last() {
                    Some((last, rest)) if !rest.is_empty() => {
                        write!(f, "{} and {}", rest.join(", "), last)
                    }
                    _ => write!(f, "{}", names.join("")),
                }
            }
        }
    }
}
