//! Configuration options for symbol-DSL serialization

/// Indentation of the separator line between sibling children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiblingIndent {
    /// `",\n"` followed by the parent's indent, one level shallower than the children
    #[default]
    Parent,
    /// `",\n"` followed by the children's own indent, aligned with the first child
    Child,
}

/// What to do with nodes that are not elements, text or comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedNodePolicy {
    /// Treat the node as absent and log a warning
    #[default]
    Skip,
    /// Fail the whole serialization
    Error,
}

/// Options for symbol-DSL serialization
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Separator indentation between sibling children
    pub sibling_indent: SiblingIndent,

    /// Handling of unsupported node kinds
    pub unsupported_nodes: UnsupportedNodePolicy,
}
