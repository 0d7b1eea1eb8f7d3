//! py2toml library - expose modules for testing
//!
//! The binary lives in `main.rs`; the command handler and CLI options are
//! exported here so integration tests can reach them.

pub mod commands;
pub mod common;

pub use common::GlobalOpts;
pub use py2toml_logger as logger;
