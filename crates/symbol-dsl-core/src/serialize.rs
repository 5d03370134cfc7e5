//! Symbol-DSL serialization
//!
//! Converts a node tree into the symbol DSL:
//!
//! ```text
//! 'div(
//!   'id /= "x",
//!   "hi"
//! )
//! ```

use crate::node::{Element, Node};
use crate::options::{Options, SiblingIndent, UnsupportedNodePolicy};
use crate::text::normalize_text;
use crate::{Result, SerializeError};

const INDENT: &str = "  ";

/// Serialize top-level nodes (the children of `<body>`), joined with `",\n"`.
///
/// Nodes that produce no output are skipped without leaving a separator.
pub fn serialize(nodes: &[Node], options: &Options) -> Result<String> {
    let mut output = String::with_capacity(256);

    for node in nodes {
        if let Some(rendered) = serialize_node(node, "", options)? {
            if !output.is_empty() {
                output.push_str(",\n");
            }
            output.push_str(&rendered);
        }
    }

    Ok(output)
}

/// Serialize a single node at the given indentation.
///
/// Returns `None` when the node contributes nothing to its parent: a text
/// node that is empty after trimming, or an unsupported node under
/// [`UnsupportedNodePolicy::Skip`].
pub fn serialize_node(node: &Node, indent: &str, options: &Options) -> Result<Option<String>> {
    match node {
        Node::Element(element) => serialize_element(element, indent, options).map(Some),
        Node::Text(text) => Ok(serialize_text(text)),
        Node::Comment(comment) => Ok(Some(format!("// {}", normalize_text(comment)))),
        Node::Other(kind) => match options.unsupported_nodes {
            UnsupportedNodePolicy::Skip => {
                tracing::warn!(kind = %kind, "skipping unsupported node");
                Ok(None)
            }
            UnsupportedNodePolicy::Error => Err(SerializeError::UnsupportedNodeKind { kind: kind.clone() }),
        },
    }
}

fn serialize_element(element: &Element, indent: &str, options: &Options) -> Result<String> {
    let mut out = String::with_capacity(64);
    out.push('\'');
    out.push_str(&element.tag_name());
    out.push_str("(\n");

    let has_children = !element.children.is_empty();
    let attr_count = element.attributes.len();

    for (i, (name, value)) in element.attributes.iter().enumerate() {
        out.push_str(indent);
        out.push_str(INDENT);
        out.push('\'');
        out.push_str(name);
        out.push_str(" /= \"");
        out.push_str(&normalize_text(value));
        out.push('"');
        if i + 1 < attr_count || has_children {
            out.push(',');
        }
        out.push('\n');
    }

    let child_indent = format!("{indent}{INDENT}");
    let separator_indent = match options.sibling_indent {
        SiblingIndent::Parent => indent,
        SiblingIndent::Child => child_indent.as_str(),
    };

    let mut emitted = false;
    for child in &element.children {
        let Some(rendered) = serialize_node(child, &child_indent, options)? else {
            continue;
        };
        if emitted {
            out.push_str(",\n");
            out.push_str(separator_indent);
        } else {
            out.push_str(&child_indent);
        }
        out.push_str(&rendered);
        emitted = true;
    }

    // Keyed to the positional last child, so a trailing absent child still ends the line.
    if has_children {
        out.push('\n');
    }

    out.push_str(indent);
    out.push(')');
    Ok(out)
}

fn serialize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.contains('\n') {
        Some(format!("\"\"\"{trimmed}\"\"\""))
    } else {
        Some(format!("\"{trimmed}\""))
    }
}
