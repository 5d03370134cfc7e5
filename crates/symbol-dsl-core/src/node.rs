//! DOM-like node tree consumed by the serializer.
//!
//! Any parser (html5ever, scraper, a browser DOM bridge, ...) can convert its
//! output to this structure. The serializer only ever reads it.

/// A node of the input tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element node (nodeType = 1)
    Element(Element),
    /// Text node (nodeType = 3), raw content including whitespace
    Text(String),
    /// Comment node (nodeType = 8)
    Comment(String),
    /// Any other node kind the parser surfaced (doctype, processing instruction, ...)
    Other(String),
}

/// An element with its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as reported by the parser (case is not normalized here)
    pub tag_name: String,

    /// Attributes as `(name, value)` pairs, in document order
    pub attributes: Vec<(String, String)>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag_name: tag_name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Node::Element(Element {
            tag_name: tag_name.to_string(),
            attributes: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: Vec::new(),
        })
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(content.to_string())
    }

    /// Create a node of a kind the serializer does not support
    pub fn other(kind: &str) -> Self {
        Node::Other(kind.to_string())
    }

    /// Get the element payload, if any
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Add a child node. Non-element nodes cannot have children; the call is ignored.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }
}

impl Element {
    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.tag_name.to_lowercase()
    }
}
