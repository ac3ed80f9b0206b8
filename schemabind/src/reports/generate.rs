//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    ApiSummary,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Name of the generated client struct.
    pub client: String,
    /// What was compiled.
    pub summary: ApiSummary,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<PathBuf>,
    /// Files left as they were.
    pub unchanged: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&format!("{} client", self.client));
        self.summary.render(out);
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        if !written.unchanged.is_empty() {
            out.list_item(&format!("{} unchanged", written.unchanged.len()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::tests::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            client: "Bot".into(),
            summary: ApiSummary {
                version: Some("Bot API 7.0".into()),
                records: 1,
                families: 0,
                placeholders: 0,
                methods: 2,
            },
            warnings: Vec::new(),
            result,
        }
    }

    #[test]
    fn test_written_report() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("src/api"),
            written: vec![PathBuf::from("src/api/types.rs")],
            unchanged: vec![PathBuf::from("src/api/mod.rs"), PathBuf::from("src/api/methods.rs")],
        }))
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Bot client",
                "  Bot API 7.0",
                "  1 type (1 record, 0 families, 0 placeholders)",
                "  2 methods",
                "",
                "Generated: src/api",
                "  + src/api/types.rs",
                "  - 2 unchanged",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "mod.rs".into(),
                content: "mod types;".into(),
            }],
        }))
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── mod.rs ──",
                "mod types;",
                "── Summary ──",
                "1 files would be generated"
            ]
        );
    }
}
