//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the compilation
//! phases over an API description before any code is emitted:
//!
//! - Explicit phase boundaries (validate → analyze)
//! - Unified diagnostics collection
//! - Shared analysis via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use schemabind_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(api, manifest)?;
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
