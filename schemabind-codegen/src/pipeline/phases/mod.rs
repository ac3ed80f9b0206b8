//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - checks the API description and configuration
//! - [`AnalyzePhase`] - derives the schema index

mod analyze;
mod validate;

pub use analyze::AnalyzePhase;
pub use validate::{
    DuplicateFieldLint, EmptyDescriptionLint, FieldTypeLint, Lint, OverrideTargetLint,
    ReturnShapeLint, SubtypeLint, UnresolvedTypeLint, ValidatePhase,
};
