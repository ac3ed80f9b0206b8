//! The generated files.

mod methods_rs;
mod mod_rs;
mod types_rs;

pub use methods_rs::MethodsRs;
pub use mod_rs::ModRs;
pub use types_rs::TypesRs;

/// First lines of every generated file.
pub const GENERATED_HEADER: &str = "// THIS FILE IS AUTOGENERATED. DO NOT EDIT.\n// Regenerate with `schemabind generate`.";
