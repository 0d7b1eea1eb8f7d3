use std::io;
use thiserror::Error;

/// Errors that can occur while writing a rendered manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
