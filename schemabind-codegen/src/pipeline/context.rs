//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use schemabind_ir::ApiDescription;
use schemabind_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};
use crate::schema::SchemaIndex;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The API description being compiled.
    pub api: ApiDescription,
    /// Compiler configuration.
    pub manifest: Manifest,
    /// Schema analysis (populated by AnalyzePhase).
    pub index: Option<SchemaIndex>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(api: ApiDescription, manifest: Manifest) -> Self {
        Self {
            api,
            manifest,
            index: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The schema analysis.
    ///
    /// # Errors
    ///
    /// Fails if AnalyzePhase has not run.
    pub fn index(&self) -> Result<&SchemaIndex> {
        self.index
            .as_ref()
            .ok_or_else(|| eyre!("schema index not set - did AnalyzePhase run?"))
    }
}
