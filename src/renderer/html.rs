//! HTML5 parser implementation using html5ever
//!
//! Reads serialized markup back into the live DOM model so server output
//! can be compared against what the client-side writer produced.

use super::dom::{Document, ElementData, Node, NodeType};
use crate::utils::{RenderError, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// HTML5 parser using html5ever
pub struct HtmlParser {
    opts: ParseOpts,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self {
            opts: ParseOpts {
                tree_builder: TreeBuilderOpts {
                    drop_doctype: true,
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    /// Parse HTML content into a DOM document
    pub fn parse(&self, content: &str) -> Result<Document> {
        let mut document = Document::new();
        if content.trim().is_empty() {
            return Ok(document);
        }

        let dom = parse_document(RcDom::default(), self.opts.clone())
            .from_utf8()
            .read_from(&mut content.as_bytes())?;

        let errors = dom.errors.borrow();
        if !errors.is_empty() {
            log::debug!("html5ever reported {} parse errors", errors.len());
        }

        for child in dom.document.children.borrow().iter() {
            if let Some(node) = convert_node(child) {
                document.root.add_child(node);
            }
        }
        Ok(document)
    }

    /// Parse a markup fragment and return the first element in `<body>`
    pub fn parse_element(&self, markup: &str) -> Result<Node> {
        let document = self.parse(markup)?;
        document
            .root
            .children
            .into_iter()
            .find(|node| tag_is(node, "html"))
            .and_then(|html| html.children.into_iter().find(|node| tag_is(node, "body")))
            .and_then(|body| body.children.into_iter().find(Node::is_element))
            .ok_or_else(|| {
                RenderError::HtmlParse(format!("no element found in `{}`", markup)).into()
            })
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

fn tag_is(node: &Node, tag_name: &str) -> bool {
    node.as_element()
        .is_some_and(|element| element.tag_name == tag_name)
}

fn convert_node(handle: &Handle) -> Option<Node> {
    let mut node = match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let mut element = ElementData::new(name.local.to_string());
            for attr in attrs.borrow().iter() {
                element.set_attribute(attr.name.local.to_string(), attr.value.to_string());
            }
            Node::new(NodeType::Element(element))
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            if text.trim().is_empty() {
                return None;
            }
            Node::text(text.to_string())
        }
        NodeData::Comment { contents } => Node::new(NodeType::Comment(contents.to_string())),
        _ => return None,
    };

    for child in handle.children.borrow().iter() {
        if let Some(converted) = convert_node(child) {
            node.add_child(converted);
        }
    }
    Some(node)
}
