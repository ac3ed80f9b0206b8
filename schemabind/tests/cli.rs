use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const API: &str = r#"{
  "version": "Bot API 7.0",
  "types": {
    "User": {
      "name": "User",
      "description": ["This object represents a Telegram user or bot."],
      "fields": [
        {"name": "id", "types": ["Integer"], "required": true, "description": "Unique identifier."}
      ]
    }
  },
  "methods": {
    "getMe": {
      "name": "getMe",
      "description": ["Returns basic information about the bot."],
      "returns": ["User"]
    }
  }
}"#;

fn schemabind() -> Command {
    Command::cargo_bin("schemabind").unwrap()
}

/// A scratch project holding `api.json`.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("api.json"), API).unwrap();
    dir
}

mod generate {
    use super::*;

    #[test]
    fn writes_bindings() {
        let dir = project();

        schemabind()
            .current_dir(dir.path())
            .args(["generate", "-s", "api.json", "-o", "out"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Bot client"))
            .stdout(predicate::str::contains("1 method"))
            .stdout(predicate::str::contains("+ out/types.rs"));

        let types = fs::read_to_string(dir.path().join("out/types.rs")).unwrap();
        assert!(types.contains("pub struct User {"));
        let methods = fs::read_to_string(dir.path().join("out/methods.rs")).unwrap();
        assert!(methods.contains("pub fn get_me(&self, opts: Option<&GetMeOpts>) -> Result<User, Error> {"));
        assert!(dir.path().join("out/mod.rs").exists());
    }

    #[test]
    fn second_run_reports_unchanged_files() {
        let dir = project();
        let run = || {
            schemabind()
                .current_dir(dir.path())
                .args(["generate", "-s", "api.json", "-o", "out"])
                .assert()
                .success()
        };

        run();
        run()
            .stdout(predicate::str::contains("3 unchanged"))
            .stdout(predicate::str::contains("+ out/").not());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = project();

        schemabind()
            .current_dir(dir.path())
            .args(["generate", "-s", "api.json", "-o", "out", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("── methods.rs ──"))
            .stdout(predicate::str::contains("3 files would be generated"));

        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn reads_paths_and_client_name_from_manifest() {
        let dir = project();
        fs::write(
            dir.path().join("schemabind.toml"),
            "[input]\nschema = \"api.json\"\n\n[output]\ndir = \"gen\"\n\n[client]\nname = \"Telegram\"\n",
        )
        .unwrap();

        schemabind()
            .current_dir(dir.path())
            .arg("generate")
            .assert()
            .success()
            .stdout(predicate::str::contains("Telegram client"));

        let methods = fs::read_to_string(dir.path().join("gen/methods.rs")).unwrap();
        assert!(methods.contains("pub struct Telegram<T> {"));
    }

    #[test]
    fn fails_without_api_description() {
        let dir = TempDir::new().unwrap();

        schemabind()
            .current_dir(dir.path())
            .arg("generate")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no API description given"));
    }

    #[test]
    fn reports_malformed_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("api.json"), "{\"types\": [}").unwrap();

        schemabind()
            .current_dir(dir.path())
            .args(["generate", "-s", "api.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("failed to parse API description"));
    }

    #[test]
    fn reports_invalid_manifest() {
        let dir = project();
        fs::write(dir.path().join("schemabind.toml"), "[client]\nname = \"not a type\"\n").unwrap();

        schemabind()
            .current_dir(dir.path())
            .args(["generate", "-s", "api.json"])
            .assert()
            .code(1);
        assert!(!dir.path().join("src/api").exists());
    }
}

mod check {
    use super::*;

    #[test]
    fn valid_description_prints_summary() {
        let dir = project();

        schemabind()
            .current_dir(dir.path())
            .args(["check", "-s", "api.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ api.json is valid"))
            .stdout(predicate::str::contains("Bot API 7.0"))
            .stdout(predicate::str::contains("1 type (1 record, 0 families, 0 placeholders)"));
    }

    #[test]
    fn unresolved_reference_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("api.json"),
            r#"{"methods": {"getMe": {"name": "getMe", "returns": ["Missing"]}}}"#,
        )
        .unwrap();

        schemabind()
            .current_dir(dir.path())
            .args(["check", "-s", "api.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("error: unresolved type `Missing`"))
            .stdout(predicate::str::contains("is valid").not());
    }
}
