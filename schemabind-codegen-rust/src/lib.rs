//! Rust target for the schemabind compiler.
//!
//! [`Generator`] turns an analyzed API description into three files: the type
//! universe (`types.rs`), the client with one method per operation
//! (`methods.rs`) and a `mod.rs` re-exporting both. The generated code depends
//! on `schemabind-runtime`, `serde` and `serde_json`.

mod docs;
mod generator;
mod method_compiler;
mod naming;
mod rust_file;
mod type_compiler;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Arm, Enum, Field, Fn, Impl, Match, Param, SerdeAttr, Struct, Variant};
pub use generator::Generator;
pub use method_compiler::MethodCompiler;
pub use naming::{RUST_NAMING, opts_name};
pub use rust_file::{Imports, RawCode, RustFile, Use};
pub use schemabind_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_compiler::TypeCompiler;
pub use type_mapper::RustCodeTypeMapper;
