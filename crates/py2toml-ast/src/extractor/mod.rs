//! Keyword-argument extraction and normalization
//!
//! The extractor walks the argument list of the matched setup() call,
//! classifies every keyword value into a `ValueShape`, applies the per-field
//! normalization rules, and routes the result into the typed
//! `SetupMetadata` record. Nothing here fails: shapes the extractor cannot
//! represent become warnings and the field is skipped.

use py2toml_manifest::{Extraction, SetupMetadata, Value, Warning};
use tracing::debug;

use crate::PyNode;

mod authors;
mod value;


pub use value::{classify, ValueShape};

/// Walks a setup() call and builds the metadata record, accumulating
/// warnings as it goes.
#[derive(Debug, Default)]
pub struct MetadataExtractor {
    warnings: Vec<Warning>,
}

impl MetadataExtractor {
    pub fn new() -> Self {
        MetadataExtractor::default()
    }

    /// Consume the extractor and produce the metadata for `call`.
    pub fn extract(mut self, call: &PyNode<'_>) -> Extraction {
        let mut metadata = SetupMetadata::default();

        let Some(arguments) = call.field("arguments") else {
            return Extraction {
                metadata,
                warnings: self.warnings,
            };
        };

        for argument in arguments.children().filter(|node| node.is_named()) {
            match argument.kind().as_ref() {
                "keyword_argument" => self.extract_keyword(&argument, &mut metadata),
                "dictionary_splat" | "list_splat" => {
                    let text = argument.text().to_string();
                    debug!("skipping splat argument '{}'", text);
                    self.warnings.push(Warning::splat_argument(&text));
                }
                // Positional arguments carry no field name; only keywords
                // are harvested.
                other => debug!("ignoring argument of kind '{}'", other),
            }
        }

        authors::merge_author_emails(&mut metadata, &mut self.warnings);

        debug!("metadata: {:?}", metadata);
        Extraction {
            metadata,
            warnings: self.warnings,
        }
    }

    fn extract_keyword(&mut self, argument: &PyNode<'_>, metadata: &mut SetupMetadata) {
        let Some(name_node) = argument.field("name") else {
            debug!("keyword argument without a name: '{}'", argument.text());
            return;
        };
        let field = name_node.text().to_string();

        let Some(value_node) = argument.field("value") else {
            debug!("keyword argument '{}' has no value", field);
            return;
        };

        let shape = value::classify(&value_node);
        self.apply_field_rules(&field, shape, metadata);
    }

    /// Per-field normalization, evaluated in precedence order: the author and
    /// keywords rules fire on the field name before any shape-driven rule.
    fn apply_field_rules(&mut self, field: &str, shape: ValueShape, metadata: &mut SetupMetadata) {
        match field {
            // Comma-separated people lists, one entry per person.
            "author" | "author_email" => match shape {
                ValueShape::StringLiteral(raw) => {
                    self.store(metadata, field, Value::Seq(split_comma_list(&raw)));
                }
                other => self.skip_unsupported(field, &other),
            },
            "keywords" => match shape {
                ValueShape::StringLiteral(raw) => {
                    self.store(metadata, field, Value::Seq(split_keywords(&raw)));
                }
                ValueShape::SequenceLiteral(items) => {
                    self.store(metadata, field, Value::Seq(items));
                }
                other => self.skip_unsupported(field, &other),
            },
            _ => match shape {
                ValueShape::StringLiteral(raw) => {
                    self.store(metadata, field, Value::Str(collapse_whitespace(&raw)));
                }
                ValueShape::OtherConstant(text) => {
                    self.store(metadata, field, Value::Constant(text));
                }
                ValueShape::SequenceLiteral(items) => {
                    self.store(metadata, field, Value::Seq(items));
                }
                // A variable reference stores the identifier itself. No
                // evaluation happens, so this is a placeholder, not the
                // runtime value.
                ValueShape::NameReference(identifier) => {
                    self.store(metadata, field, Value::Str(identifier));
                }
                other @ ValueShape::Unsupported(_) => self.skip_unsupported(field, &other),
            },
        }
    }

    /// Route a normalized value into its typed field. Sequence-typed fields
    /// reject other shapes; unrecognized keywords go to the catch-all map.
    fn store(&mut self, metadata: &mut SetupMetadata, field: &str, value: Value) {
        debug!("adding to '{}' the value {:?}", field, value);

        if let Some(slot) = seq_slot(metadata, field) {
            match value {
                Value::Seq(items) => *slot = Some(items),
                other => self.warnings.push(Warning::unsupported_value(
                    field,
                    &format!("expected a sequence of strings, found '{other}'"),
                )),
            }
            return;
        }

        let slot = match field {
            "name" => &mut metadata.name,
            "version" => &mut metadata.version,
            "description" => &mut metadata.description,
            "license" => &mut metadata.license,
            "url" => &mut metadata.url,
            "python_requires" => &mut metadata.python_requires,
            _ => {
                metadata.extra.insert(field.to_string(), value);
                return;
            }
        };
        *slot = Some(value);
    }

    fn skip_unsupported(&mut self, field: &str, shape: &ValueShape) {
        debug!("skipping '{}' ({})", field, shape.describe());
        self.warnings
            .push(Warning::unsupported_value(field, &shape.describe()));
    }
}

fn seq_slot<'m>(
    metadata: &'m mut SetupMetadata,
    field: &str,
) -> Option<&'m mut Option<Vec<String>>> {
    match field {
        "author" => Some(&mut metadata.author),
        "author_email" => Some(&mut metadata.author_email),
        "keywords" => Some(&mut metadata.keywords),
        "classifiers" => Some(&mut metadata.classifiers),
        "install_requires" => Some(&mut metadata.install_requires),
        "scripts" => Some(&mut metadata.scripts),
        _ => None,
    }
}

/// Split a comma-separated value, trimming each segment.
fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|segment| segment.trim().to_string())
        .collect()
}

/// Keywords are usually comma-separated; fall back to whitespace splitting
/// when the comma split yields a single segment.
fn split_keywords(raw: &str) -> Vec<String> {
    let segments: Vec<&str> = raw.split(',').collect();
    if segments.len() == 1 {
        return raw.split_whitespace().map(str::to_string).collect();
    }
    segments
        .iter()
        .map(|segment| segment.trim().to_string())
        .collect()
}

/// Collapse internal whitespace runs to single spaces, joining multi-line
/// strings onto one line.
fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<&str>>().join(" ")
}
