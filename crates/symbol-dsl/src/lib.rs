//! # symbol-dsl
//!
//! Convert HTML to the symbol DSL, a nested S-expression-like notation with
//! quoted tag symbols and `/=` attribute pairs.
//!
//! ## Design
//!
//! The serializer lives in `symbol-dsl-core` and works on a parser-agnostic
//! [`Node`] tree. This crate adds:
//!
//! - **HTML parsing** (feature `html`, on by default) via scraper/html5ever
//! - **[`SymbolDslService`]**: options plus the conversion entry points
//! - **[`LiveConverter`]**: recomputes the whole output on every edit
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use symbol_dsl::{Node, SymbolDslService};
//!
//! let service = SymbolDslService::new();
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! let dsl = service.convert(&[h1]).unwrap();
//! assert_eq!(dsl, "'h1(\n  \"Hello World\"\n)");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use symbol_dsl::SymbolDslService;
//!
//! let service = SymbolDslService::new();
//! let dsl = service.convert_html(r#"<div id="x">hi</div>"#).unwrap();
//! assert_eq!(dsl, "'div(\n  'id /= \"x\",\n  \"hi\"\n)");
//! ```

#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "html")]
mod live;
mod service;

#[cfg(feature = "html")]
pub use html::parse_html;
#[cfg(feature = "html")]
pub use live::LiveConverter;
pub use service::SymbolDslService;
pub use symbol_dsl_core::{
    normalize_text, Element, Node, Options, SerializeError, SiblingIndent, UnsupportedNodePolicy,
};

/// Error type for symbol-DSL conversion
#[derive(Debug, thiserror::Error)]
pub enum SymbolDslError {
    #[error("Parse error: document has no <body> element")]
    MissingBody,

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

pub type Result<T> = std::result::Result<T, SymbolDslError>;
