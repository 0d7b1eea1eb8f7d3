//! Data model for extracted packaging metadata
//!
//! This module provides:
//! - `Value`: the normalized shape of a single keyword-argument value
//! - `SetupMetadata`: one optional field per recognized `setup()` argument,
//!   plus a catch-all map for everything else
//! - `Warning`: structured non-fatal diagnostics with a machine-matchable kind
//! - `Extraction`: the metadata/warnings pair returned by the extractor

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A normalized keyword-argument value.
///
/// One level deep by construction: a string, an ordered sequence of strings,
/// or an opaque scalar constant (number, boolean, `None`) carried as its
/// source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Str(String),
    Seq(Vec<String>),
    Constant(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(text) | Value::Constant(text) => f.write_str(text),
            Value::Seq(items) => {
                let quoted: Vec<String> =
                    items.iter().map(|item| format!("\"{item}\"")).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}

/// Metadata harvested from a single `setup(...)` call.
///
/// Built in one pass over the keyword arguments in source order; assigning a
/// field twice overwrites it, so the last occurrence wins. Unrecognized
/// keywords land in `extra`, keyed by argument name, and are ignored by the
/// renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupMetadata {
    pub name: Option<Value>,
    pub version: Option<Value>,
    pub description: Option<Value>,
    pub license: Option<Value>,
    pub url: Option<Value>,
    pub python_requires: Option<Value>,
    pub author: Option<Vec<String>>,
    pub author_email: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub classifiers: Option<Vec<String>>,
    pub install_requires: Option<Vec<String>>,
    pub scripts: Option<Vec<String>>,
    #[serde(default)]
    pub extra: BTreeMap<String, Value>,
}

/// Machine-matchable category of a non-fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// No `setup(...)` call was found; the pipeline continues with an empty
    /// record.
    SetupCallNotFound,
    /// A `*args`/`**kwargs` expansion that cannot be unpacked statically.
    SplatArgument,
    /// A value expression the extractor does not understand; the field is
    /// omitted.
    UnsupportedValue,
    /// `author` and `author_email` have different lengths; `author` is left
    /// as parsed.
    AuthorEmailMismatch,
}

/// A non-fatal condition reported during extraction.
///
/// Warnings never abort the pipeline; the CLI surfaces them and continues
/// with whatever metadata was recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub field: Option<String>,
    pub message: String,
}

impl Warning {
    pub fn setup_call_not_found() -> Self {
        Warning {
            kind: WarningKind::SetupCallNotFound,
            field: None,
            message: "could not find a setup() call in the source".to_string(),
        }
    }

    pub fn splat_argument(text: &str) -> Self {
        Warning {
            kind: WarningKind::SplatArgument,
            field: None,
            message: format!("cannot expand splat argument '{text}'"),
        }
    }

    pub fn unsupported_value(field: &str, detail: &str) -> Self {
        Warning {
            kind: WarningKind::UnsupportedValue,
            field: Some(field.to_string()),
            message: format!("skipping '{field}': {detail}"),
        }
    }

    pub fn author_email_mismatch() -> Self {
        Warning {
            kind: WarningKind::AuthorEmailMismatch,
            field: Some("author".to_string()),
            message: "the number of authors does not match the number of author emails"
                .to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Everything the extractor hands back: the recovered metadata plus the
/// warnings collected along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub metadata: SetupMetadata,
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display_string() {
        assert_eq!(Value::Str("spam".to_string()).to_string(), "spam");
        assert_eq!(Value::Constant("False".to_string()).to_string(), "False");
    }

    #[test]
    fn test_value_display_sequence() {
        let value = Value::Seq(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(value.to_string(), "[\"a\", \"b\"]");
        assert_eq!(Value::Seq(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_warning_display_uses_message() {
        let warning = Warning::unsupported_value("version", "call expression");
        assert_eq!(warning.to_string(), "skipping 'version': call expression");
        assert_eq!(warning.kind, WarningKind::UnsupportedValue);
        assert_eq!(warning.field.as_deref(), Some("version"));
    }
}
