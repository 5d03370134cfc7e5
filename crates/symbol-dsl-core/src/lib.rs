//! symbol-dsl-core - node model and symbol-DSL serialization
//!
//! This crate provides the parser-agnostic tree model and the recursive
//! serializer that turns it into the symbol DSL. It is used by `symbol-dsl`,
//! which adds HTML parsing on top.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parser──▶ ┌───────────┐
//!                         │           │
//!                         │ Node tree │ ──▶ Symbol DSL String
//! Hand-built nodes ──────▶│           │
//!                         └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use symbol_dsl_core::{serialize, Node, Options};
//!
//! let mut div = Node::element_with_attrs("div", vec![("id", "x")]);
//! div.add_child(Node::text("hi"));
//!
//! let dsl = serialize(&[div], &Options::default()).unwrap();
//! assert_eq!(dsl, "'div(\n  'id /= \"x\",\n  \"hi\"\n)");
//! ```

mod node;
mod options;
mod serialize;
mod text;

pub use node::{Element, Node};
pub use options::{Options, SiblingIndent, UnsupportedNodePolicy};
pub use serialize::{serialize, serialize_node};
pub use text::normalize_text;

/// Error type for serialization
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("Unsupported node kind: {kind}")]
    UnsupportedNodeKind { kind: String },
}

pub type Result<T> = std::result::Result<T, SerializeError>;
