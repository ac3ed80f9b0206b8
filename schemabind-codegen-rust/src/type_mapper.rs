//! Rust type mapper implementation.

use schemabind_codegen::builder::{PrimitiveType, TypeMapper, TypeRef};

/// Maps language-agnostic TypeRef types to Rust type syntax.
///
/// Borrowed views render in their idiomatic forms (`&str`, `&[T]`), carrying
/// an explicit lifetime when one is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCodeTypeMapper {
    lifetime: Option<&'static str>,
}

impl RustCodeTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows render as `&'a T`.
    pub fn with_lifetime(lifetime: &'static str) -> Self {
        Self {
            lifetime: Some(lifetime),
        }
    }

    fn reference(&self) -> String {
        match self.lifetime {
            Some(lifetime) => format!("&{} ", lifetime),
            None => "&".to_string(),
        }
    }
}

impl TypeMapper for RustCodeTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => "String".to_string(),
            PrimitiveType::Int => "i64".to_string(),
            PrimitiveType::Float => "f64".to_string(),
            PrimitiveType::Bool => "bool".to_string(),
        }
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("Option<{}>", inner)
    }

    fn map_array(&self, inner: &str) -> String {
        format!("Vec<{}>", inner)
    }

    fn map_boxed(&self, inner: &str) -> String {
        format!("Box<{}>", inner)
    }

    fn map_borrowed(&self, inner: &TypeRef) -> String {
        let reference = self.reference();
        match inner {
            TypeRef::Primitive(PrimitiveType::String) => format!("{}str", reference),
            TypeRef::Array(elem) => format!("{}[{}]", reference, self.render_type(elem)),
            other => format!("{}{}", reference, self.render_type(other)),
        }
    }

    fn map_result(&self, ok: &str, err: &str) -> String {
        format!("Result<{}, {}>", ok, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        let mapper = RustCodeTypeMapper::new();

        assert_eq!(mapper.map_primitive(PrimitiveType::String), "String");
        assert_eq!(mapper.map_primitive(PrimitiveType::Int), "i64");
        assert_eq!(mapper.map_primitive(PrimitiveType::Float), "f64");
        assert_eq!(mapper.map_primitive(PrimitiveType::Bool), "bool");
    }

    #[test]
    fn test_wrappers() {
        let mapper = RustCodeTypeMapper::new();

        let boxed = TypeRef::optional(TypeRef::boxed(TypeRef::named("User")));
        assert_eq!(mapper.render_type(&boxed), "Option<Box<User>>");

        let rows = TypeRef::array(TypeRef::array(TypeRef::named("InlineKeyboardButton")));
        assert_eq!(mapper.render_type(&rows), "Vec<Vec<InlineKeyboardButton>>");

        let dual = TypeRef::tuple(vec![TypeRef::optional(TypeRef::named("Message")), TypeRef::bool()]);
        assert_eq!(mapper.render_type(&dual), "(Option<Message>, bool)");

        let result = TypeRef::result(TypeRef::named("User"), TypeRef::named("Error"));
        assert_eq!(mapper.render_type(&result), "Result<User, Error>");
    }

    #[test]
    fn test_borrowed_parameters() {
        let mapper = RustCodeTypeMapper::new();

        assert_eq!(mapper.render_type(&TypeRef::ref_(TypeRef::string())), "&str");
        assert_eq!(
            mapper.render_type(&TypeRef::ref_(TypeRef::array(TypeRef::string()))),
            "&[String]"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::ref_(TypeRef::named("InputFile"))),
            "&InputFile"
        );
    }

    #[test]
    fn test_borrowed_with_lifetime() {
        let mapper = RustCodeTypeMapper::with_lifetime("'a");

        assert_eq!(
            mapper.render_type(&TypeRef::ref_(TypeRef::array(TypeRef::named("MessageEntity")))),
            "&'a [MessageEntity]"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::ref_(TypeRef::optional(TypeRef::boxed(
                TypeRef::named("User")
            )))),
            "&'a Option<Box<User>>"
        );
    }
}
