//! Integration tests for py2toml

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

fn py2toml_cmd() -> Command {
    cargo_bin_cmd!("py2toml")
}

struct ConvertHarness {
    _dir: TempDir,
    setup_py: PathBuf,
    pyproject_toml: PathBuf,
}

impl ConvertHarness {
    fn new(setup_source: &str) -> io::Result<Self> {
        let dir = TempDir::new()?;
        let setup_py = dir.path().join("setup.py");
        let pyproject_toml = dir.path().join("pyproject.toml");
        fs::write(&setup_py, setup_source)?;
        Ok(ConvertHarness {
            _dir: dir,
            setup_py,
            pyproject_toml,
        })
    }

    fn manifest(&self) -> String {
        fs::read_to_string(&self.pyproject_toml).unwrap_or_default()
    }
}

const SAMPLE_SETUP_PY: &str = r#"
from setuptools import setup

setup(
    name="spam",
    version="1.0",
    description="Lovely spam, wonderful spam",
    license="MIT",
    url="https://example.com/spam",
    author="Alice, Bob",
    author_email="a@x.com, b@y.com",
    keywords="food, parody",
    classifiers=[
        "Environment :: Console",
        "Topic :: Utilities",
    ],
    install_requires=["requests", "click"],
    scripts=["bin/mytool"],
)
"#;

#[test]
fn test_version() {
    py2toml_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("py2toml"));
}

#[test]
fn test_help() {
    py2toml_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup.py"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    py2toml_cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_single_argument_is_usage_error() {
    py2toml_cmd()
        .arg("setup.py")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument_is_usage_error_and_writes_nothing() {
    let Ok(env) = ConvertHarness::new(SAMPLE_SETUP_PY) else {
        return;
    };

    py2toml_cmd()
        .arg(&env.setup_py)
        .arg(&env.pyproject_toml)
        .arg("unexpected")
        .assert()
        .failure()
        .code(1);

    assert!(!env.pyproject_toml.exists());
}

#[test]
fn test_convert_writes_manifest() {
    let Ok(env) = ConvertHarness::new(SAMPLE_SETUP_PY) else {
        return;
    };

    py2toml_cmd()
        .arg(&env.setup_py)
        .arg(&env.pyproject_toml)
        .assert()
        .success()
        .stderr(predicate::str::contains("Conversion complete"));

    let manifest = env.manifest();
    assert!(manifest.contains("name = \"spam\""));
    assert!(manifest.contains("version = \"1.0\""));
    assert!(manifest.contains("authors = [\"Alice <a@x.com>\", \"Bob <b@y.com>\"]"));
    assert!(manifest.contains("keywords = [\"food\", \"parody\"]"));
    assert!(manifest.contains("requests = \"*\""));
    assert!(manifest.contains("click = \"*\""));
    assert!(manifest.contains("mytool = \"bin/mytool.__main__:main\""));
    assert!(manifest.contains("requires = [\"poetry-core\"]"));
}

#[test]
fn test_convert_reports_author_email_mismatch() {
    let source = "setup(author=\"Alice, Bob\", author_email=\"a@x.com\")\n";
    let Ok(env) = ConvertHarness::new(source) else {
        return;
    };

    py2toml_cmd()
        .arg(&env.setup_py)
        .arg(&env.pyproject_toml)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "number of authors does not match",
        ));

    let manifest = env.manifest();
    assert!(manifest.contains("authors = [\"Alice\", \"Bob\"]"));
}

#[test]
fn test_convert_without_setup_call_writes_defaults() {
    let Ok(env) = ConvertHarness::new("print(\"no packaging here\")\n") else {
        return;
    };

    py2toml_cmd()
        .arg(&env.setup_py)
        .arg(&env.pyproject_toml)
        .assert()
        .success()
        .stderr(predicate::str::contains("could not find a setup() call"));

    let manifest = env.manifest();
    assert!(manifest.contains("name = \"\""));
    assert!(manifest.contains("python = \">=3.5\""));
}

#[test]
fn test_missing_source_file_is_fatal() {
    let Ok(dir) = TempDir::new() else {
        return;
    };
    let destination = dir.path().join("pyproject.toml");

    py2toml_cmd()
        .arg(dir.path().join("does-not-exist.py"))
        .arg(&destination)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));

    assert!(!destination.exists());
}

#[test]
fn test_convert_overwrites_existing_manifest() {
    let Ok(env) = ConvertHarness::new(SAMPLE_SETUP_PY) else {
        return;
    };
    assert!(fs::write(&env.pyproject_toml, "stale content").is_ok());

    py2toml_cmd()
        .arg(&env.setup_py)
        .arg(&env.pyproject_toml)
        .assert()
        .success();

    let manifest = env.manifest();
    assert!(!manifest.contains("stale content"));
    assert!(manifest.contains("name = \"spam\""));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let Ok(env) = ConvertHarness::new(SAMPLE_SETUP_PY) else {
        return;
    };

    py2toml_cmd()
        .arg(&env.setup_py)
        .arg(&env.pyproject_toml)
        .assert()
        .success();
    let first = env.manifest();

    py2toml_cmd()
        .arg(&env.setup_py)
        .arg(&env.pyproject_toml)
        .assert()
        .success();
    let second = env.manifest();

    assert_eq!(first, second);
}
