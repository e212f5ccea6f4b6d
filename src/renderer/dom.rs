//! DOM (Document Object Model) implementation
//!
//! The live-node render target. Elements keep content attributes, a bag of
//! live properties and a style declaration, and behave like a browser
//! element where those overlap: reflected properties update their
//! attribute, and the `style` attribute and style declaration stay in sync.

use super::serialize::{escape_text, is_void_element, push_attribute};
use crate::attributes::reflected_attribute;
use crate::props::PropValue;
use crate::style::{self, parse_style_text};
use indexmap::IndexMap;

/// Node types in the DOM
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    /// Document root
    Document,
    /// Element node (e.g., <div>)
    Element(ElementData),
    /// Text node
    Text(String),
    /// Comment node
    Comment(String),
}

/// Data for element nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    /// Tag name (e.g., "div", "span")
    pub tag_name: String,
    /// Content attributes in insertion order
    attributes: IndexMap<String, String>,
    /// Live properties
    properties: IndexMap<String, PropValue>,
    /// Style declaration, camelCase name to value
    style: IndexMap<String, String>,
}

impl ElementData {
    /// Create a new element
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            properties: IndexMap::new(),
            style: IndexMap::new(),
        }
    }

    /// Get an attribute value; names match case-insensitively
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name.to_ascii_lowercase().as_str())
    }

    /// Whether any attribute has been written
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute value
    ///
    /// Names are stored ASCII-lowercased, as on an HTML element. Setting
    /// `style` replaces the style declaration with the parsed text.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let mut name = name.into();
        name.make_ascii_lowercase();
        let value = value.into();
        if name == "style" {
            self.style.clear();
            for (style_name, style_value) in parse_style_text(&value).iter() {
                match style::normalize_value(style_name, style_value) {
                    Some(normalized) if !normalized.is_empty() => {
                        self.style.insert(style_name.to_string(), normalized);
                    }
                    _ => {}
                }
            }
            self.sync_style_attribute();
            return;
        }
        self.attributes.insert(name, value);
    }

    /// Remove an attribute; a no-op when absent
    pub fn remove_attribute(&mut self, name: &str) {
        let name = name.to_ascii_lowercase();
        if name == "style" {
            self.style.clear();
        }
        self.attributes.shift_remove(&name);
    }

    /// Add (with an empty value) or remove a presence attribute
    pub fn toggle_attribute(&mut self, name: &str, force: bool) {
        if force {
            if !self.has_attribute(name) {
                self.set_attribute(name, "");
            }
        } else {
            self.remove_attribute(name);
        }
    }

    /// Read a live property; `None` reads as `undefined`
    pub fn property(&self, name: &str) -> Option<&PropValue> {
        self.properties.get(name)
    }

    /// Assign a live property, updating its reflected attribute
    pub fn set_property(&mut self, name: &str, value: PropValue) {
        if let Some(attribute) = reflected_attribute(name) {
            self.set_attribute(attribute, value.to_attribute_string());
        }
        self.properties.insert(name.to_string(), value);
    }

    /// Unset a live property and its reflected attribute
    pub fn remove_property(&mut self, name: &str) {
        if let Some(attribute) = reflected_attribute(name) {
            self.remove_attribute(attribute);
        }
        self.properties.shift_remove(name);
    }

    /// Read one style property; unset properties read as `""`
    pub fn style(&self, name: &str) -> &str {
        self.style.get(name).map(String::as_str).unwrap_or("")
    }

    /// Assign one style property; `""` removes it
    pub fn set_style(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.style.shift_remove(name);
        } else {
            self.style.insert(name.to_string(), value.to_string());
        }
        self.sync_style_attribute();
    }

    /// The declaration as CSS text
    pub fn style_text(&self) -> String {
        let mut text = String::new();
        for (name, value) in &self.style {
            style::push_declaration(&mut text, name, value);
        }
        text
    }

    fn sync_style_attribute(&mut self) {
        if self.style.is_empty() {
            self.attributes.shift_remove("style");
        } else {
            let text = self.style_text();
            self.attributes.insert("style".to_string(), text);
        }
    }

    /// Get the ID attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// Get class names
    pub fn classes(&self) -> Vec<&str> {
        self.get_attribute("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Write `<tag attr="...">`
    pub fn write_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);
        for (name, value) in self.attributes() {
            push_attribute(out, name, value);
        }
        out.push('>');
    }

    /// Serialize the element without children
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_open_tag(&mut out);
        if !is_void_element(&self.tag_name) {
            out.push_str("</");
            out.push_str(&self.tag_name);
            out.push('>');
        }
        out
    }
}

/// A node in the DOM tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type and data
    pub node_type: NodeType,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new node
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            children: Vec::new(),
        }
    }

    /// Create an element node
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::new(NodeType::Element(ElementData::new(tag_name)))
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeType::Text(content.into()))
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self.node_type, NodeType::Element(_))
    }

    /// Get element data if this is an element
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Short node kind name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self.node_type {
            NodeType::Document => "document",
            NodeType::Element(_) => "element",
            NodeType::Text(_) => "text",
            NodeType::Comment(_) => "comment",
        }
    }

    /// Serialize this node and its subtree
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize the children only
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        match &self.node_type {
            NodeType::Document => {
                for child in &self.children {
                    child.write_html(out);
                }
            }
            NodeType::Element(data) => {
                data.write_open_tag(out);
                if is_void_element(&data.tag_name) {
                    return;
                }
                for child in &self.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&data.tag_name);
                out.push('>');
            }
            NodeType::Text(text) => out.push_str(&escape_text(text)),
            NodeType::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
        }
    }
}

/// The DOM document
#[derive(Debug, Clone)]
pub struct Document {
    /// Root node
    pub root: Node,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            root: Node::new(NodeType::Document),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_has_no_attributes() {
        let element = ElementData::new("div");
        assert!(!element.has_attributes());
        assert_eq!(element.outer_html(), "<div></div>");
    }

    #[test]
    fn test_reflected_property_updates_attribute() {
        let mut element = ElementData::new("div");
        element.set_property("className", PropValue::Str("foo bar".into()));
        assert_eq!(element.get_attribute("class"), Some("foo bar"));
        assert_eq!(element.classes(), vec!["foo", "bar"]);

        element.remove_property("className");
        assert!(element.property("className").is_none());
        assert!(!element.has_attribute("class"));
    }

    #[test]
    fn test_unreflected_property_leaves_markup_alone() {
        let mut element = ElementData::new("input");
        element.set_property("value", PropValue::Str("typed".into()));
        assert_eq!(element.property("value"), Some(&PropValue::Str("typed".into())));
        assert_eq!(element.outer_html(), "<input>");
    }

    #[test]
    fn test_style_attribute_and_declaration_stay_in_sync() {
        let mut element = ElementData::new("div");
        element.set_style("backgroundColor", "red");
        assert_eq!(element.get_attribute("style"), Some("background-color:red;"));

        element.set_attribute("style", "color: blue; width: 1px");
        assert_eq!(element.style("backgroundColor"), "");
        assert_eq!(element.style("color"), "blue");
        assert_eq!(element.get_attribute("style"), Some("color:blue;width:1px;"));

        element.remove_attribute("style");
        assert_eq!(element.style("color"), "");
    }

    #[test]
    fn test_attribute_names_are_lowercased() {
        let mut element = ElementData::new("input");
        element.set_attribute("maxLength", "5");
        element.toggle_attribute("readOnly", true);
        let attributes: Vec<(&str, &str)> = element.attributes().collect();
        assert_eq!(attributes, vec![("maxlength", "5"), ("readonly", "")]);
        assert_eq!(element.get_attribute("MAXLENGTH"), Some("5"));

        element.remove_attribute("MaxLength");
        element.toggle_attribute("READONLY", false);
        assert!(!element.has_attributes());
    }

    #[test]
    fn test_toggle_attribute() {
        let mut element = ElementData::new("input");
        element.toggle_attribute("disabled", true);
        assert_eq!(element.get_attribute("disabled"), Some(""));
        assert_eq!(element.outer_html(), "<input disabled>");
        element.toggle_attribute("disabled", false);
        assert!(!element.has_attribute("disabled"));
    }

    #[test]
    fn test_node_outer_html() {
        let mut div = Node::element("div");
        if let Some(data) = div.as_element_mut() {
            data.set_attribute("class", "foo");
        }
        let mut span = Node::element("span");
        span.add_child(Node::text("a < b"));
        div.add_child(span);
        div.add_child(Node::new(NodeType::Comment("note".into())));

        assert_eq!(
            div.outer_html(),
            r#"<div class="foo"><span>a &lt; b</span><!--note--></div>"#
        );
        assert_eq!(div.inner_html(), "<span>a &lt; b</span><!--note-->");
    }
}
