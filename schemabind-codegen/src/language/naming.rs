//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how wire names become identifiers and how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a schema name into a type name (e.g., "input_media" -> "InputMedia")
    pub to_type: fn(&str) -> String,
    /// Transform a wire field name into a member or parameter name
    pub to_member: fn(&str) -> String,
    /// Transform a wire method name into a function name (e.g., "sendMessage" -> "send_message")
    pub to_function: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    /// Name of a struct member for a wire field.
    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_member)(name))
    }

    /// Name of a function parameter for a wire field.
    pub fn param_name(&self, name: &str) -> String {
        self.member_name(name)
    }

    pub fn function_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_function)(name))
    }
}
