use crate::logger;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ConvertCommand {
    /// Path to the setup.py file to convert
    pub setup_py: PathBuf,

    /// Destination path for the generated pyproject.toml
    pub pyproject_toml: PathBuf,
}

/// Run the full pipeline: read the script, extract metadata, surface every
/// warning, write the manifest.
pub fn handle_convert(cmd: &ConvertCommand) -> Result<()> {
    logger::debug(&format!(
        "Reading setup script from {}",
        cmd.setup_py.display()
    ));
    let source = fs::read_to_string(&cmd.setup_py)
        .with_context(|| format!("failed to read {}", cmd.setup_py.display()))?;

    let extraction = py2toml_ast::scan_source(&source);
    for warning in &extraction.warnings {
        logger::warn(&warning.message);
    }

    py2toml_manifest::write_to_path(&extraction.metadata, &cmd.pyproject_toml)
        .with_context(|| format!("failed to write {}", cmd.pyproject_toml.display()))?;

    logger::success(&format!(
        "Conversion complete. Manifest saved to {}",
        cmd.pyproject_toml.display()
    ));
    Ok(())
}
