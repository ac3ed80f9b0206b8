//! Language-agnostic code generation for the schemabind compiler.
//!
//! This crate provides the schema analysis and building blocks shared by
//! language-specific generators (e.g. `schemabind-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, TypeRef)
//! - [`language`] - Per-language abstractions (LanguageCodegen, NamingConvention)
//! - [`pipeline`] - Validate and analyze phases with diagnostics
//! - [`schema`] - Families, field mapping, encoding strategies and return shapes
//! - [`testing`] - Test utilities and schema fixtures (feature-gated)

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod schema;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
