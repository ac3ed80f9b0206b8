//! Core utilities and types for the schemabind compiler.
//!
//! This crate provides fundamental helpers used across the schemabind
//! crates: identifier case conversion and generated file writing.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{to_pascal_case, to_snake_case};
