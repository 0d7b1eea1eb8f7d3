//! pyproject.toml renderer
//!
//! Substitutes a `SetupMetadata` record into a fixed Poetry-style template:
//! a `[tool.poetry]` block, a dependency block pinning every requirement to
//! `"*"`, a scripts block, and a constant `[build-system]` declaration.
//! Runs of two blank lines are collapsed before the text is returned, so
//! empty generated sections do not leave holes in the document.

use crate::errors::ManifestError;
use crate::types::{SetupMetadata, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Readme filename emitted into every manifest.
const README: &str = "README.md";

/// Python constraint used when the script does not pin one.
const DEFAULT_PYTHON_REQUIRES: &str = ">=3.5";

/// Render the full pyproject.toml document for `metadata`.
///
/// Absent scalar fields render as empty strings, absent sequences as `[]`;
/// the renderer never fails.
pub fn render(metadata: &SetupMetadata) -> String {
    debug!("rendering manifest for {:?}", metadata.name);

    let document = format!(
        r#"[tool.poetry]
name = "{name}"
version = "{version}"
description = "{description}"
license = "{license}"
authors = {authors}
readme = "{readme}"
repository = "{repository}"
keywords = {keywords}
classifiers = {classifiers}

[tool.poetry.dependencies]
python = "{python}"
{dependencies}

[tool.poetry.scripts]
{scripts}

[build-system]
requires = ["poetry-core"]
build-backend = "poetry.core.masonry.api"
"#,
        name = text_or_empty(&metadata.name),
        version = text_or_empty(&metadata.version),
        description = text_or_empty(&metadata.description),
        license = text_or_empty(&metadata.license),
        authors = string_array(metadata.author.as_deref().unwrap_or_default()),
        readme = README,
        repository = text_or_empty(&metadata.url),
        keywords = string_array(metadata.keywords.as_deref().unwrap_or_default()),
        classifiers = classifiers_block(metadata.classifiers.as_deref().unwrap_or_default()),
        python = metadata
            .python_requires
            .as_ref()
            .map_or_else(|| DEFAULT_PYTHON_REQUIRES.to_string(), ToString::to_string),
        dependencies = dependency_section(metadata.install_requires.as_deref().unwrap_or_default()),
        scripts = scripts_section(metadata.scripts.as_deref().unwrap_or_default()),
    );

    collapse_blank_lines(&document)
}

/// Render `metadata` and write the document to `output_path`, overwriting any
/// existing file.
pub fn write_to_path(metadata: &SetupMetadata, output_path: &Path) -> Result<(), ManifestError> {
    debug!("writing manifest to: {:?}", output_path);

    let document = render(metadata);
    fs::write(output_path, &document)?;

    info!("manifest written to: {:?}", output_path);
    Ok(())
}

fn text_or_empty(value: &Option<Value>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Single-line double-quoted TOML array: `["a", "b"]`.
fn string_array(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Multi-line classifiers list, one quoted entry per line; `[]` when empty.
fn classifiers_block(classifiers: &[String]) -> String {
    if classifiers.is_empty() {
        return "[]".to_string();
    }

    let entries: Vec<String> = classifiers
        .iter()
        .map(|entry| format!("    \"{entry}\","))
        .collect();
    format!("[\n{}\n]", entries.join("\n"))
}

/// One `name = "*"` line per requirement, unconstrained.
fn dependency_section(install_requires: &[String]) -> String {
    install_requires
        .iter()
        .map(|requirement| format!("{requirement} = \"*\""))
        .collect::<Vec<String>>()
        .join("\n")
}

/// One entry-point line per script: the file's base name without extension,
/// pointing at that entry's `__main__:main`.
fn scripts_section(scripts: &[String]) -> String {
    scripts
        .iter()
        .map(|script| {
            let stem = Path::new(script)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(script);
            format!("{stem} = \"{script}.__main__:main\"")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Collapse runs of two blank lines into one. Single textual pass, not
/// recursive.
fn collapse_blank_lines(document: &str) -> String {
    document.replace("\n\n\n", "\n\n")
}
