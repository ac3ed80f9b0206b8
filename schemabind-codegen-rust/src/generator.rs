use std::path::Path;

use eyre::Result;
use schemabind_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
    schema::SchemaIndex,
};
use schemabind_core::{File, GeneratedFile, WriteResult};
use schemabind_ir::ApiDescription;
use tracing::{debug, info};

use crate::{
    files::{MethodsRs, ModRs, TypesRs},
    method_compiler::MethodCompiler,
    type_compiler::TypeCompiler,
};

/// Rust code generator producing `types.rs`, `methods.rs` and `mod.rs`.
pub struct Generator<'a> {
    api: &'a ApiDescription,
    index: &'a SchemaIndex,
    client: &'a str,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .render(Path::new(""))?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        // Render everything first so a compile error leaves the output untouched.
        let files = self.render(output_dir)?;

        let mut result = GenerateResult::default();
        for file in &files {
            match file.write()? {
                WriteResult::Written => {
                    info!(path = %file.path().display(), "wrote");
                    result.written.push(file.path().to_path_buf());
                }
                WriteResult::Unchanged => {
                    debug!(path = %file.path().display(), "unchanged");
                    result.unchanged.push(file.path().to_path_buf());
                }
            }
        }
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    /// `client` names the generated client struct.
    pub fn new(api: &'a ApiDescription, index: &'a SchemaIndex, client: &'a str) -> Self {
        Self { api, index, client }
    }

    /// Generator for an analyzed compilation.
    pub fn from_context(ctx: &'a CompilationContext) -> Result<Self> {
        Ok(Self::new(&ctx.api, ctx.index()?, &ctx.manifest.client.name))
    }

    fn render(&self, base: &Path) -> Result<Vec<File>> {
        let types = TypeCompiler::new(self.api, self.index).compile()?;
        let methods = MethodCompiler::new(self.api, self.index, self.client).compile()?;

        Ok(vec![
            ModRs.to_file(base),
            TypesRs::new(types).to_file(base),
            MethodsRs::new(methods).to_file(base),
        ])
    }
}

#[cfg(test)]
mod tests {
    use schemabind_codegen::testing::{parse_api, sample_api};
    use schemabind_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_preview_paths() {
        let api = sample_api();
        let index = SchemaIndex::build(&api, &Manifest::default());
        let files = Generator::new(&api, &index, "Bot").preview().unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["mod.rs", "types.rs", "methods.rs"]);
        assert!(files.iter().all(|f| f.content.starts_with("// THIS FILE IS AUTOGENERATED. DO NOT EDIT.\n")));
    }

    #[test]
    fn test_regeneration_leaves_files_unchanged() {
        let api = sample_api();
        let index = SchemaIndex::build(&api, &Manifest::default());
        let generator = Generator::new(&api, &index, "Bot");
        let temp = TempDir::new().unwrap();

        let first = generator.generate(temp.path()).unwrap();
        assert_eq!(first.written.len(), 3);
        assert!(first.unchanged.is_empty());

        let second = generator.generate(temp.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 3);
    }

    #[test]
    fn test_failed_compile_writes_nothing() {
        let api = parse_api(
            r#"{
              "methods": {
                "getMe": {"name": "getMe", "returns": ["Missing"]}
              }
            }"#,
        );
        let index = SchemaIndex::build(&api, &Manifest::default());
        let temp = TempDir::new().unwrap();

        let err = Generator::new(&api, &index, "Bot")
            .generate(temp.path())
            .unwrap_err();
        assert!(format!("{err:?}").contains("getMe"));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_from_context_requires_analysis() {
        let ctx = CompilationContext::new(sample_api(), Manifest::default());
        assert!(Generator::from_context(&ctx).is_err());
    }
}
