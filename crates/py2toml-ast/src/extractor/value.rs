//! Closed classification of keyword-argument value expressions
//!
//! Every value node falls into exactly one `ValueShape` variant, so the
//! extractor can pattern-match exhaustively and "expression we do not
//! understand" is an explicit case rather than a silent fallthrough.

use crate::PyNode;
use tracing::debug;

/// Shape of a keyword-argument value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueShape {
    /// A (possibly implicitly concatenated) string literal, escapes
    /// interpreted.
    StringLiteral(String),
    /// A list or tuple literal, elements flattened to strings.
    SequenceLiteral(Vec<String>),
    /// A bare identifier; never evaluated.
    NameReference(String),
    /// A non-string constant (number, boolean, `None`) as source text.
    OtherConstant(String),
    /// Anything else: calls, comprehensions, f-strings, arithmetic, ...
    Unsupported(String),
}

impl ValueShape {
    /// Short label for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            ValueShape::StringLiteral(_) => "string literal".to_string(),
            ValueShape::SequenceLiteral(_) => "sequence literal".to_string(),
            ValueShape::NameReference(_) => "name reference".to_string(),
            ValueShape::OtherConstant(_) => "constant".to_string(),
            ValueShape::Unsupported(kind) => format!("unsupported expression ({kind})"),
        }
    }
}

/// Classify a value node by its grammar kind.
pub fn classify(node: &PyNode<'_>) -> ValueShape {
    match node.kind().as_ref() {
        "string" => string_literal(node),
        "concatenated_string" => concatenated_string(node),
        "integer" | "float" | "true" | "false" | "none" => {
            ValueShape::OtherConstant(node.text().trim().to_string())
        }
        "list" | "tuple" => ValueShape::SequenceLiteral(sequence_elements(node)),
        "identifier" => ValueShape::NameReference(node.text().to_string()),
        // Parentheses around a literal change nothing; classify the inner
        // expression instead.
        "parenthesized_expression" => match node.children().find(|child| child.is_named()) {
            Some(inner) => classify(&inner),
            None => ValueShape::Unsupported("parenthesized_expression".to_string()),
        },
        other => ValueShape::Unsupported(other.to_string()),
    }
}

/// Rebuild a string literal's value from its content and escape nodes.
/// Interpolated (f-) strings have no static value.
fn string_literal(node: &PyNode<'_>) -> ValueShape {
    let mut content = String::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "string_content" => content.push_str(child.text().as_ref()),
            "escape_sequence" => content.push_str(&unescape(child.text().as_ref())),
            "interpolation" => return ValueShape::Unsupported("interpolated string".to_string()),
            _ => {}
        }
    }
    ValueShape::StringLiteral(content)
}

/// Adjacent string literals concatenate implicitly.
fn concatenated_string(node: &PyNode<'_>) -> ValueShape {
    let mut content = String::new();
    for child in node.children().filter(|child| child.kind() == "string") {
        match string_literal(&child) {
            ValueShape::StringLiteral(part) => content.push_str(&part),
            other => return other,
        }
    }
    ValueShape::StringLiteral(content)
}

/// Flatten sequence elements to strings: string contents for string
/// literals, source text for other constants and names. Elements with no
/// static string form are dropped.
fn sequence_elements(node: &PyNode<'_>) -> Vec<String> {
    let mut elements = Vec::new();
    for child in node.children().filter(|child| child.is_named()) {
        match classify(&child) {
            ValueShape::StringLiteral(text) => elements.push(text.trim().to_string()),
            ValueShape::OtherConstant(text) | ValueShape::NameReference(text) => {
                elements.push(text.trim().to_string());
            }
            ValueShape::SequenceLiteral(_) | ValueShape::Unsupported(_) => {
                debug!("dropping sequence element '{}'", child.text());
            }
        }
    }
    elements
}

/// Interpret the common escape sequences; anything exotic keeps its raw
/// spelling.
fn unescape(escape: &str) -> String {
    match escape {
        "\\n" => "\n".to_string(),
        "\\t" => "\t".to_string(),
        "\\r" => "\r".to_string(),
        "\\\\" => "\\".to_string(),
        "\\'" => "'".to_string(),
        "\\\"" => "\"".to_string(),
        "\\0" => "\0".to_string(),
        other => other.to_string(),
    }
}
