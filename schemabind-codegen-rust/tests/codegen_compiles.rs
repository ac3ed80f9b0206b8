//! End-to-end checks on the bindings generated from the sample API.
//!
//! Each test writes a scratch crate depending on the runtime, generates the
//! bindings into `src/api` and runs cargo on it.

use std::{fs, path::Path};

use eyre::Result;
use schemabind_codegen::{
    schema::SchemaIndex,
    testing::{CompileChecker, RustChecker, RustTestRunner, assert_generates_valid_code, sample_api},
};
use schemabind_codegen_rust::{Generator, LanguageCodegen};
use schemabind_manifest::Manifest;

/// Tests run inside the scratch crate against the generated module.
const SAMPLE_BINDINGS_TESTS: &str = include_str!("fixtures/sample_bindings.rs");

fn write_scratch_crate(dir: &Path) -> Result<()> {
    let runtime = Path::new(env!("CARGO_MANIFEST_DIR")).join("../schemabind-runtime");
    fs::write(
        dir.join("Cargo.toml"),
        format!(
            r#"[package]
name = "generated-bindings"
version = "0.0.0"
edition = "2024"

[workspace]

[dependencies]
schemabind-runtime = {{ path = {:?} }}
serde = {{ version = "1", features = ["derive"] }}
serde_json = "1"
"#,
            runtime.display().to_string()
        ),
    )?;
    fs::create_dir_all(dir.join("src"))?;
    fs::write(dir.join("src/lib.rs"), "mod api;\npub use api::*;\n")?;
    Ok(())
}

fn assert_sample_bindings(checker: &impl CompileChecker, tests: Option<&str>) {
    let api = sample_api();
    let manifest = Manifest::default();
    let index = SchemaIndex::build(&api, &manifest);
    let generator = Generator::new(&api, &index, &manifest.client.name);

    assert_generates_valid_code(
        |dir| {
            write_scratch_crate(dir)?;
            generator.generate(&dir.join("src/api"))?;
            if let Some(tests) = tests {
                fs::create_dir_all(dir.join("tests"))?;
                fs::write(dir.join("tests/sample_bindings.rs"), tests)?;
            }
            Ok(())
        },
        checker,
    )
    .unwrap();
}

#[test]
fn test_sample_api_compiles() {
    assert_sample_bindings(&RustChecker, None);
}

#[test]
fn test_sample_bindings_behave() {
    assert_sample_bindings(&RustTestRunner, Some(SAMPLE_BINDINGS_TESTS));
}
