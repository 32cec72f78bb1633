//! KDL parsing and validation
//!
//! Checks generated or hand-written layouts with the kdl-rs parser. The
//! compiler never calls this; it is used by `layout --check` and tests.

use std::str::FromStr;

use kdl::{KdlDocument, KdlError};

use crate::{Error, Result};

/// Validate KDL syntax and the presence of a root `layout` node.
///
/// # Errors
///
/// Returns a validation error with the line and column of the first syntax
/// error, or when no `layout` node is found at the root.
///
/// # Examples
///
/// ```
/// use zellijinator_core::kdl_validation::validate_kdl_syntax;
///
/// let layout = "layout {\n    pane {\n        command \"bash\"\n    }\n}\n";
/// assert!(validate_kdl_syntax(layout).is_ok());
/// assert!(validate_kdl_syntax("layout {\n    pane {\n").is_err());
/// ```
pub fn validate_kdl_syntax(content: &str) -> Result<()> {
    let doc = KdlDocument::from_str(content)
        .map_err(|err| Error::validation_error(format_kdl_error(&err, content)))?;

    if doc.get("layout").is_none() {
        return Err(Error::validation_error(
            "Zellij layout must contain a 'layout' node at the root level",
        ));
    }

    Ok(())
}

/// Number of `pane` nodes anywhere in a parsed layout.
///
/// # Errors
///
/// Returns a validation error if the content is not valid KDL
pub fn count_panes(content: &str) -> Result<usize> {
    KdlDocument::from_str(content)
        .map(|doc| count_named(&doc, "pane"))
        .map_err(|err| Error::validation_error(format_kdl_error(&err, content)))
}

fn count_named(doc: &KdlDocument, name: &str) -> usize {
    doc.nodes()
        .iter()
        .map(|node| {
            usize::from(node.name().value() == name)
                + node.children().map_or(0, |children| count_named(children, name))
        })
        .sum()
}

fn format_kdl_error(err: &KdlError, content: &str) -> String {
    let offset = err.span.offset().min(content.len());
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let col = before.rfind('\n').map_or(offset, |pos| offset - pos - 1) + 1;

    format!("KDL syntax error at line {line}, column {col}: {err}")
}
