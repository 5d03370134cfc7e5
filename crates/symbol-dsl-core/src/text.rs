//! Whitespace normalization for attribute values and comments.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(" {2,}").expect("valid space-run regex"));

/// Replace every newline with a space, then collapse runs of spaces to one.
///
/// Only spaces are collapsed; tabs and other whitespace are kept as-is.
/// Never applied to text node content.
pub fn normalize_text(s: &str) -> String {
    let spaced = s.replace('\n', " ");
    SPACE_RUN.replace_all(&spaced, " ").into_owned()
}
