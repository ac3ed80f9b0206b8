// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration and input loading for schemabind.
//!
//! Two documents feed a compilation: the optional `schemabind.toml`
//! ([`Manifest`]) and the API description JSON ([`load_document`]). Both
//! report failures as [`Error`], a miette diagnostic pointing into the
//! offending source.

mod document;
mod error;
mod manifest;
mod validate;

pub use document::{load_document, parse_document};
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ClientConfig, ConditionalZeroOverride, FamilyConfig, InputConfig, Manifest,
    NullableOverride, OutputConfig, OverrideConfig, SchemabindToml, parse_manifest,
};
pub use validate::ParseContext;
