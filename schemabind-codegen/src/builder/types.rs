//! Language-agnostic type system for code generation.
//!
//! Schema fields are mapped to [`TypeRef`]s once; each target language renders
//! them through its own [`TypeMapper`].

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive type (string, int, bool, etc.).
    Primitive(PrimitiveType),
    /// A nullable type: absent is distinguishable from the default value.
    Optional(Box<TypeRef>),
    /// A sequence type.
    Array(Box<TypeRef>),
    /// A named type (generated aggregate, family, or runtime type).
    Named(String),
    /// A heap indirection, needed for recursive aggregates (Rust: `Box<T>`).
    Boxed(Box<TypeRef>),
    /// A borrowed view of a value (Rust: `&T`, `&str`, `&[T]`).
    Ref(Box<TypeRef>),
    /// A fixed-size product of types.
    Tuple(Vec<TypeRef>),
    /// Result type with Ok and Err types.
    Result { ok: Box<TypeRef>, err: Box<TypeRef> },
}

impl TypeRef {
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn boxed(inner: TypeRef) -> Self {
        Self::Boxed(Box::new(inner))
    }

    pub fn ref_(inner: TypeRef) -> Self {
        Self::Ref(Box::new(inner))
    }

    pub fn tuple(items: Vec<TypeRef>) -> Self {
        Self::Tuple(items)
    }

    pub fn result(ok: TypeRef, err: TypeRef) -> Self {
        Self::Result {
            ok: Box::new(ok),
            err: Box::new(err),
        }
    }

    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    pub fn float() -> Self {
        Self::Primitive(PrimitiveType::Float)
    }

    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// The primitive this type is, if any.
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            Self::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Strip nullable and heap wrappers (`Option<Box<T>>` → `T`).
    pub fn unwrapped(&self) -> &TypeRef {
        match self {
            Self::Optional(inner) | Self::Boxed(inner) => inner.unwrapped(),
            other => other,
        }
    }
}

/// Primitive types of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Int,
    Float,
    Bool,
}

impl PrimitiveType {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

/// Trait for mapping types to language-specific representations.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    fn map_optional(&self, inner: &str) -> String;

    fn map_array(&self, inner: &str) -> String;

    /// Map a heap indirection (most languages need none).
    fn map_boxed(&self, inner: &str) -> String {
        inner.to_string()
    }

    /// Map a borrowed view. Receives the unrendered inner type so languages
    /// can pick specialized borrowed forms.
    fn map_borrowed(&self, inner: &TypeRef) -> String {
        self.render_type(inner)
    }

    fn map_tuple(&self, items: &[String]) -> String {
        format!("({})", items.join(", "))
    }

    fn map_result(&self, ok: &str, err: &str) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Optional(inner) => self.map_optional(&self.render_type(inner)),
            TypeRef::Array(inner) => self.map_array(&self.render_type(inner)),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Boxed(inner) => self.map_boxed(&self.render_type(inner)),
            TypeRef::Ref(inner) => self.map_borrowed(inner),
            TypeRef::Tuple(items) => {
                let items: Vec<_> = items.iter().map(|t| self.render_type(t)).collect();
                self.map_tuple(&items)
            }
            TypeRef::Result { ok, err } => {
                self.map_result(&self.render_type(ok), &self.render_type(err))
            }
        }
    }
}
