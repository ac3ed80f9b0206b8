//! Validation utilities for names appearing in schemabind.toml

use miette::SourceSpan;

use crate::{Error, Result, SourceContext};

/// Validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "schemabind.toml");
/// ctx.validate_type_name("Bot", "client name")?;
/// ctx.validate_wire_name("sendPoll", "override method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Find the span of a string value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src, value)
    }

    fn source(&self) -> SourceContext {
        SourceContext::new(self.src, self.filename)
    }

    /// Create a validation error pointing at `value` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, value: &str) -> Box<Error> {
        self.source()
            .validation_error(message, self.find_span(value))
    }

    /// Validate a name that becomes a generated type identifier.
    pub fn validate_type_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_rust_keyword(name) {
            return Err(Box::new(Error::ReservedKeyword {
                src: self.source().named_source(),
                span: self.find_span(name),
                name: name.to_string(),
                context: kind.to_string(),
            }));
        }

        if let Some(reason) = validate_type_identifier(name) {
            return Err(self.invalid_identifier(name, kind, reason));
        }

        Ok(())
    }

    /// Validate a method or field name as it appears on the wire.
    pub fn validate_wire_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_wire_identifier(name) {
            return Err(self.invalid_identifier(name, kind, reason));
        }
        Ok(())
    }

    fn invalid_identifier(&self, name: &str, kind: &str, reason: &str) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.source().named_source(),
            span: self.find_span(name),
            name: name.to_string(),
            context: kind.to_string(),
            reason: reason.to_string(),
        })
    }
}

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
];

pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Find the span of a quoted string value in the TOML source.
/// The span covers the value without its quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return src
            .find("\"\"")
            .map(|pos| SourceSpan::from((pos + 1, 0)));
    }
    let quoted = format!("\"{value}\"");
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Returns None if `name` can name a generated type, Some(reason) otherwise.
pub(crate) fn validate_type_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_uppercase() => {}
        Some(_) => return Some("type names must start with an uppercase letter"),
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("type names may contain only letters, numbers, and underscores")
    }
}

/// Returns None if `name` is a plausible wire name, Some(reason) otherwise.
pub(crate) fn validate_wire_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("wire names must start with a letter"),
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("wire names may contain only letters, numbers, and underscores")
    }
}
