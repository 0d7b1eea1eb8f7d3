//! Static setup.py analysis using ast-grep
//!
//! This crate extracts packaging metadata from a setup.py script by:
//! 1. Parsing the Python source with ast-grep, no interpreter involved
//! 2. Finding the first call whose callee is `setup`, plain or
//!    attribute-qualified (`setuptools.setup`)
//! 3. Classifying each keyword-argument value into a closed set of shapes
//!    and normalizing it into a `SetupMetadata` record
//! 4. Merging parallel author/email lists into combined "Name <email>"
//!    entries
//!
//! Extraction is best-effort: a missing setup call or an argument the
//! extractor does not understand produces a `Warning` in the result, never an
//! error.

pub mod call_finder;
pub mod extractor;

use ast_grep_core::AstGrep;
use ast_grep_language::Python;
use py2toml_manifest::{Extraction, Warning};
use tracing::{debug, info};

pub(crate) type PyNode<'r> = ast_grep_core::Node<'r, ast_grep_core::source::StrDoc<Python>>;

/// Extract packaging metadata from Python source text.
pub fn scan_source(source: &str) -> Extraction {
    let sg = AstGrep::new(source, Python);
    let root = sg.root();

    let Some(call) = call_finder::find_setup_call(&root) else {
        debug!("no setup() call in source");
        return Extraction {
            warnings: vec![Warning::setup_call_not_found()],
            ..Extraction::default()
        };
    };

    let extraction = extractor::MetadataExtractor::new().extract(&call);
    info!(
        "extraction finished with {} warning(s)",
        extraction.warnings.len()
    );
    extraction
}
