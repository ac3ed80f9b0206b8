//! Schema model types for the schemabind compiler.
//!
//! This crate defines the normalized, immutable description of a remote API
//! that every compiler pass reads from. It is produced by an ingestion step
//! (the scraper output, loaded by `schemabind-manifest`) and never mutated.
//!
//! # Architecture
//!
//! ```text
//! api.json → schemabind-manifest (loading) → ApiDescription → pipeline → codegen
//! ```
//!
//! The model types are designed to be:
//! - Order preserving (document order drives member and argument order)
//! - Language-agnostic (no Rust-specific concerns)
//! - Self-contained (serde and indexmap only)

mod api;
mod wire;

pub use api::{ApiDescription, FieldDescriptor, MethodDescriptor, TypeDescriptor};
pub use wire::WireType;
