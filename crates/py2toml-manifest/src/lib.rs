//! py2toml metadata model and manifest renderer
//!
//! Shared types for the py2toml pipeline plus the pyproject.toml renderer.
//! The extractor in `py2toml-ast` produces a `SetupMetadata` record together
//! with a list of structured warnings; this crate turns the record into the
//! final manifest text and writes it to disk.

pub mod errors;
pub mod renderer;
pub mod types;

pub use errors::ManifestError;
pub use renderer::{render, write_to_path};
pub use types::{Extraction, SetupMetadata, Value, Warning, WarningKind};
