//! SymbolDslService - the main entry point for HTML to symbol-DSL conversion.

use symbol_dsl_core::{serialize, serialize_node, Node, Options};

use crate::Result;

/// The main service for converting HTML (or a node tree) to the symbol DSL
#[derive(Debug, Clone, Default)]
pub struct SymbolDslService {
    options: Options,
}

impl SymbolDslService {
    /// Create a new SymbolDslService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a SymbolDslService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert top-level nodes (children of `<body>`) to the symbol DSL
    pub fn convert(&self, nodes: &[Node]) -> Result<String> {
        Ok(serialize(nodes, &self.options)?)
    }

    /// Convert a single node; `None` when it produces no output
    pub fn convert_node(&self, node: &Node) -> Result<Option<String>> {
        Ok(serialize_node(node, "", &self.options)?)
    }

    /// Parse HTML and convert the children of its `<body>`
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        let _span = tracing::debug_span!("convert_html", input_bytes = html.len()).entered();

        let nodes = crate::html::parse_html(html)?;
        let output = self.convert(&nodes)?;

        tracing::debug!(nodes = nodes.len(), output_bytes = output.len(), "HTML converted to symbol DSL");
        Ok(output)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;
    use crate::{SerializeError, SiblingIndent, SymbolDslError, UnsupportedNodePolicy};

    #[test]
    fn test_end_to_end_example() {
        let service = SymbolDslService::new();
        let result = service.convert_html(r#"<div id="x">hi</div>"#).unwrap();
        assert_eq!(result, "'div(\n  'id /= \"x\",\n  \"hi\"\n)");
    }

    #[test]
    fn test_tag_case_folding() {
        let service = SymbolDslService::new();
        let result = service.convert_html("<DIV>x</DIV>").unwrap();
        assert_eq!(result, "'div(\n  \"x\"\n)");
    }

    #[test]
    fn test_attribute_order_preserved() {
        let service = SymbolDslService::new();
        let result = service.convert_html(r#"<span a="1" b="2"></span>"#).unwrap();
        assert_eq!(result, "'span(\n  'a /= \"1\",\n  'b /= \"2\"\n)");
    }

    #[test]
    fn test_attribute_value_normalized() {
        let service = SymbolDslService::new();
        let result = service
            .convert_html("<p title=\"a\n\n  b\">t</p>")
            .unwrap();
        assert_eq!(result, "'p(\n  'title /= \"a b\",\n  \"t\"\n)");
    }

    #[test]
    fn test_namespaced_attribute_names() {
        let service = SymbolDslService::new();
        let result = service
            .convert_html(r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##)
            .unwrap();
        assert_eq!(
            result,
            "'svg(\n  'xmlns:xlink /= \"http://www.w3.org/1999/xlink\",\n  'use(\n    'xlink:href /= \"#a\"\n  )\n)"
        );
    }

    #[test]
    fn test_multiline_text() {
        let service = SymbolDslService::new();
        let result = service.convert_html("<pre>line1\nline2</pre>").unwrap();
        assert_eq!(result, "'pre(\n  \"\"\"line1\nline2\"\"\"\n)");
    }

    #[test]
    fn test_top_level_whitespace_skipped() {
        let service = SymbolDslService::new();
        let result = service.convert_html("<div>a</div>\n<p>b</p>").unwrap();
        assert_eq!(result, "'div(\n  \"a\"\n),\n'p(\n  \"b\"\n)");
    }

    #[test]
    fn test_comment_in_body() {
        let service = SymbolDslService::new();
        let result = service.convert_html("<p>x</p><!--note\n  here-->").unwrap();
        assert_eq!(result, "'p(\n  \"x\"\n),\n// note here");
    }

    #[test]
    fn test_trailing_whitespace_child() {
        let service = SymbolDslService::new();
        let result = service.convert_html("<p>x<br/> </p>").unwrap();
        assert_eq!(result, "'p(\n  \"x\",\n'br(\n  )\n)");
    }

    #[test]
    fn test_whitespace_only_children_leave_blank_line() {
        let service = SymbolDslService::new();
        let result = service.convert_html("<p class=\"a\">\n  </p>").unwrap();
        assert_eq!(result, "'p(\n  'class /= \"a\",\n\n)");
    }

    #[test]
    fn test_with_child_sibling_indent() {
        let service = SymbolDslService::with_options(Options {
            sibling_indent: SiblingIndent::Child,
            ..Default::default()
        });
        let result = service.convert_html("<ul><li>a</li><li>b</li></ul>").unwrap();
        assert_eq!(
            result,
            "'ul(\n  'li(\n    \"a\"\n  ),\n  'li(\n    \"b\"\n  )\n)"
        );
    }

    #[test]
    fn test_idempotent() {
        let service = SymbolDslService::new();
        let html = "<section data-x=\"1\"><h1>T</h1><!-- c --><p>a\nb</p></section>";
        assert_eq!(
            service.convert_html(html).unwrap(),
            service.convert_html(html).unwrap()
        );
    }

    #[test]
    fn test_convert_node_and_strict_policy() {
        let mut service = SymbolDslService::new();
        assert_eq!(service.convert_node(&Node::text("  ")).unwrap(), None);
        assert_eq!(service.convert_node(&Node::other("doctype")).unwrap(), None);

        service.options_mut().unsupported_nodes = UnsupportedNodePolicy::Error;
        assert_eq!(service.options().unsupported_nodes, UnsupportedNodePolicy::Error);
        let err = service.convert_node(&Node::other("doctype")).unwrap_err();
        assert!(matches!(
            err,
            SymbolDslError::Serialize(SerializeError::UnsupportedNodeKind { .. })
        ));
    }

    #[test]
    fn test_missing_body() {
        let service = SymbolDslService::new();
        let err = service.convert_html("<frameset></frameset>").unwrap_err();
        assert!(matches!(err, SymbolDslError::MissingBody));
    }
}
