//! Rust-specific naming conventions.

use schemabind_codegen::language::NamingConvention;
use schemabind_core::{to_pascal_case, to_snake_case};

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_member: to_snake_case,
    to_function: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe",
        "use", "where", "while", "abstract", "become", "box", "do", "final", "macro", "override",
        "priv", "try", "typeof", "unsized", "virtual", "yield", "gen",
    ],
    escape_reserved: escape_rust_reserved,
};

/// Name of the options struct generated for a method.
pub fn opts_name(method: &str) -> String {
    format!("{}Opts", to_pascal_case(method))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_type() {
        assert_eq!(RUST_NAMING.type_name("ChatMember"), "ChatMember");
        assert_eq!(RUST_NAMING.type_name("input_media"), "InputMedia");
    }

    #[test]
    fn test_rust_naming_function() {
        assert_eq!(RUST_NAMING.function_name("sendMessage"), "send_message");
        assert_eq!(RUST_NAMING.function_name("getMe"), "get_me");
    }

    #[test]
    fn test_rust_naming_member() {
        assert_eq!(RUST_NAMING.member_name("chat_id"), "chat_id");
        assert_eq!(RUST_NAMING.member_name("type"), "r#type");
        assert_eq!(RUST_NAMING.member_name("from"), "from");
    }

    #[test]
    fn test_rust_reserved_words() {
        assert!(RUST_NAMING.is_reserved("type"));
        assert!(RUST_NAMING.is_reserved("async"));
        assert!(!RUST_NAMING.is_reserved("hello"));
    }

    #[test]
    fn test_opts_name() {
        assert_eq!(opts_name("sendMessage"), "SendMessageOpts");
        assert_eq!(opts_name("getMe"), "GetMeOpts");
    }
}
