//! HTML parsing support.
//!
//! This module parses an HTML string as a full document and converts the
//! children of its `<body>` into the [`Node`] structure the serializer reads.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::{Element, Node, Result, SymbolDslError};

/// Parse an HTML string and return the children of `<body>`.
///
/// The markup is parsed as a whole document, so html5ever's error recovery
/// applies: missing `<html>`/`<body>` tags are implied and comments placed
/// before any content attach to the document rather than the body.
///
/// # Example
///
/// ```rust
/// use symbol_dsl::{parse_html, SymbolDslService};
///
/// let nodes = parse_html("<h1>Hello <em>World</em></h1>").unwrap();
/// assert_eq!(nodes.len(), 1);
///
/// let dsl = SymbolDslService::new().convert(&nodes).unwrap();
/// assert!(dsl.starts_with("'h1("));
/// ```
pub fn parse_html(html: &str) -> Result<Vec<Node>> {
    let document = Html::parse_document(html);

    let body = document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
        .ok_or(SymbolDslError::MissingBody)?;

    Ok(convert_children(body))
}

/// Convert a scraper ElementRef to our Node structure
fn element_to_node(element: ElementRef) -> Node {
    let value = element.value();

    // Source order relies on the `deterministic` scraper feature.
    // Foreign attributes keep their prefix (`xlink:href`, `xmlns:xlink`).
    let attributes = value
        .attrs
        .iter()
        .map(|(name, attr_value)| {
            let qualified = match &name.prefix {
                Some(prefix) => format!("{}:{}", prefix, name.local),
                None => name.local.to_string(),
            };
            (qualified, attr_value.to_string())
        })
        .collect();

    Node::Element(Element {
        tag_name: value.name().to_string(),
        attributes,
        children: convert_children(element),
    })
}

fn convert_children(element: ElementRef) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in element.children() {
        let node = match child.value() {
            ScraperNode::Text(text) => Node::text(&text.text),
            ScraperNode::Comment(comment) => Node::comment(&comment.comment),
            ScraperNode::Element(_) => match ElementRef::wrap(child) {
                Some(child_element) => element_to_node(child_element),
                None => continue,
            },
            ScraperNode::Doctype(_) => Node::other("doctype"),
            ScraperNode::ProcessingInstruction(_) => Node::other("processing-instruction"),
            ScraperNode::Document => Node::other("document"),
            ScraperNode::Fragment => Node::other("document-fragment"),
        };
        nodes.push(node);
    }

    nodes
}
