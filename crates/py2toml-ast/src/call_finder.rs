//! Locates the setup() call inside a parsed source tree.

use crate::PyNode;
use tracing::debug;

/// Find the first call expression whose callee is `setup`, either a plain
/// identifier or the final attribute of a dotted path such as
/// `setuptools.setup`. Matches are visited in document order; at most one
/// relevant call is expected per script.
pub fn find_setup_call<'r>(root: &PyNode<'r>) -> Option<PyNode<'r>> {
    for call in root.find_all("$FUNC($$$ARGS)") {
        let Some(callee) = call.get_node().field("function") else {
            continue;
        };
        let callee_text = callee.text();
        if is_setup_callee(callee_text.as_ref()) {
            debug!("found setup call via callee '{}'", callee_text);
            return Some(call.get_node().clone());
        }
    }
    None
}

fn is_setup_callee(callee: &str) -> bool {
    callee
        .rsplit('.')
        .next()
        .map(|segment| segment.trim() == "setup")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast_grep_core::AstGrep;
    use ast_grep_language::Python;

    #[test]
    fn test_finds_plain_setup_call() {
        let sg = AstGrep::new("setup(name=\"spam\")\n", Python);
        let root = sg.root();
        assert!(find_setup_call(&root).is_some());
    }

    #[test]
    fn test_finds_attribute_qualified_setup_call() {
        let source = "import setuptools\n\nsetuptools.setup(name=\"spam\")\n";
        let sg = AstGrep::new(source, Python);
        let root = sg.root();
        assert!(find_setup_call(&root).is_some());
    }

    #[test]
    fn test_ignores_other_calls() {
        let source = "print(\"hello\")\nsetup_logging()\nconfigure(setup=True)\n";
        let sg = AstGrep::new(source, Python);
        let root = sg.root();
        assert!(find_setup_call(&root).is_none());
    }

    #[test]
    fn test_first_setup_call_wins() {
        let source = "setup(name=\"first\")\nsetup(name=\"second\")\n";
        let sg = AstGrep::new(source, Python);
        let root = sg.root();
        let call = find_setup_call(&root);
        assert!(call.is_some_and(|node| node.text().contains("first")));
    }

    #[test]
    fn test_callee_matching() {
        assert!(is_setup_callee("setup"));
        assert!(is_setup_callee("setuptools.setup"));
        assert!(!is_setup_callee("setup_logging"));
        assert!(!is_setup_callee("setups"));
    }
}
